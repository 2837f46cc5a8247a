//! Source snippet extraction for the debug page

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Number of context lines captured before the target line
const LINES_BEFORE: usize = 10;

/// Maximum number of lines in a snippet
const SNIPPET_LINES: usize = 20;

/// Excerpt of source text surrounding an error location
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSnippet {
    /// 1-indexed line number of the first captured line
    pub start_line: u32,
    /// Captured lines, without trailing newlines
    pub lines: Vec<String>,
}

impl SourceSnippet {
    /// The empty snippet, used whenever source text is unavailable
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Join the captured lines back into a block of text
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Extract up to 20 lines around `line` from the file at `path`, from
/// 10 lines before the target through 9 after, clamped to the start of
/// the file.
///
/// Any failure here (missing file, unreadable file, binary content) is
/// not an error for the caller: the debug page simply renders without a
/// snippet.
pub fn extract(path: &Path, line: u32) -> SourceSnippet {
    read_window(path, line).unwrap_or_else(|_| SourceSnippet::empty())
}

fn read_window(path: &Path, line: u32) -> std::io::Result<SourceSnippet> {
    let content = std::fs::read_to_string(path)?;

    // Zero-based offset of the first captured line, clamped to file start
    let start = (line as usize).saturating_sub(LINES_BEFORE);

    let lines: Vec<String> = content
        .lines()
        .skip(start)
        .take(SNIPPET_LINES)
        .map(str::to_string)
        .collect();

    Ok(SourceSnippet {
        start_line: start as u32 + 1,
        lines,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_numbered_file(line_count: usize) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        for n in 1..=line_count {
            writeln!(file, "line {}", n).expect("write line");
        }
        file
    }

    #[test]
    fn test_window_around_middle_of_file() {
        let file = write_numbered_file(30);
        let snippet = extract(file.path(), 15);

        assert_eq!(snippet.start_line, 6);
        assert_eq!(snippet.lines.len(), 20);
        assert_eq!(snippet.lines.first().map(String::as_str), Some("line 6"));
        assert_eq!(snippet.lines.last().map(String::as_str), Some("line 25"));
    }

    #[test]
    fn test_window_clamped_to_file_start() {
        let file = write_numbered_file(30);
        let snippet = extract(file.path(), 3);

        assert_eq!(snippet.start_line, 1);
        assert_eq!(snippet.lines.first().map(String::as_str), Some("line 1"));
        assert_eq!(snippet.lines.len(), 20);
    }

    #[test]
    fn test_window_near_end_of_file() {
        let file = write_numbered_file(12);
        let snippet = extract(file.path(), 10);

        assert_eq!(snippet.start_line, 1);
        assert_eq!(snippet.lines.len(), 12);
    }

    #[test]
    fn test_missing_file_yields_empty_snippet() {
        let snippet = extract(Path::new("no/such/file.rs"), 15);
        assert!(snippet.is_empty());
        assert_eq!(snippet, SourceSnippet::empty());
    }

    #[test]
    fn test_snippet_text_joins_lines() {
        let file = write_numbered_file(2);
        let snippet = extract(file.path(), 1);
        assert_eq!(snippet.text(), "line 1\nline 2");
    }
}
