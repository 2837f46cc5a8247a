//! Developer-facing debug page
//!
//! Renders the captured error with its stack trace and a source snippet
//! around the failing line. Rendering never fails: missing locations,
//! empty traces, and unreadable source files all degrade to an emptier
//! page.

use super::html::html_escape;
use crate::snippet::{self, SourceSnippet};
use crate::types::CapturedError;

/// Renderer for the verbose debug fragment appended in debug mode
pub struct DebugPageRenderer {
    /// Whether to attempt source snippet extraction
    pub include_snippet: bool,
}

impl DebugPageRenderer {
    /// Create a new debug page renderer
    pub fn new() -> Self {
        Self {
            include_snippet: true,
        }
    }

    /// Skip source snippet extraction
    #[must_use]
    pub fn without_snippet(mut self) -> Self {
        self.include_snippet = false;
        self
    }

    /// Render the debug page for a captured error
    pub fn render(&self, error: &CapturedError) -> String {
        let mut html = String::new();

        html.push_str("<div class=\"error-debug\">\n");
        html.push_str(&format_header(error));
        html.push_str(&format_trace(error));

        if self.include_snippet {
            html.push_str(&format_snippet(&extract_snippet(error)));
        }

        html.push_str("</div>\n");
        html
    }
}

impl Default for DebugPageRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn extract_snippet(error: &CapturedError) -> SourceSnippet {
    match &error.location {
        Some(location) => snippet::extract(&location.file, location.line),
        None => SourceSnippet::empty(),
    }
}

/// Error kind, message, origin, and generation timestamp
fn format_header(error: &CapturedError) -> String {
    let mut html = format!(
        r#"<div class="error-summary">
    <h2>{}</h2>
    <p class="message">{}</p>
"#,
        html_escape(error.kind.name()),
        html_escape(&error.message)
    );

    if let Some(location) = &error.location {
        html.push_str(&format!(
            "    <p class=\"origin\">{}:{}</p>\n",
            html_escape(&location.file.display().to_string()),
            location.line
        ));
    }

    html.push_str(&format!(
        "    <p class=\"generated\">{}</p>\n</div>\n",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    ));

    html
}

fn format_trace(error: &CapturedError) -> String {
    if error.stack_trace.is_empty() {
        return String::new();
    }

    format!(
        "<div class=\"stack-trace\">\n<h3>Stack trace</h3>\n<pre>{}</pre>\n</div>\n",
        html_escape(&error.trace_string())
    )
}

/// Numbered source lines around the failing line
fn format_snippet(snippet: &SourceSnippet) -> String {
    if snippet.is_empty() {
        return String::new();
    }

    let mut html = String::from("<div class=\"source-snippet\">\n<h3>Source</h3>\n<pre>");

    for (offset, line) in snippet.lines.iter().enumerate() {
        html.push_str(&format!(
            "{:>5}  {}\n",
            snippet.start_line as usize + offset,
            html_escape(line)
        ));
    }

    html.push_str("</pre>\n</div>\n");
    html
}
