//! Logger and profiler seams
//!
//! The handler talks to logging through the `Logger` trait; the shipped
//! implementation forwards to `tracing`. The verbose dump assembled
//! here is the second, debug-level entry written when verbose logging
//! is enabled.

use crate::context::RequestContext;
use crate::types::{CapturedError, LogLevel};
use std::collections::{BTreeMap, HashMap};

/// Destination for handler log entries
pub trait Logger: Send + Sync {
    /// Write one entry at the given level
    fn log(&self, level: LogLevel, message: &str);
}

/// Optional profiling collaborator. When injected, its snapshot is
/// appended to every verbose log entry; when absent the section is
/// omitted entirely.
pub trait Profiler: Send + Sync {
    /// Label naming the snapshot section in the dump
    fn label(&self) -> &str;

    /// Current profiling snapshot, already formatted for logging
    fn snapshot(&self) -> String;
}

/// Logger backed by the `tracing` macros
pub struct TracingLogger;

impl TracingLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for TracingLogger {
    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Error => tracing::error!("{}", message),
            LogLevel::Warning => tracing::warn!("{}", message),
            // tracing has no notice level; info is the closest match
            LogLevel::Notice => tracing::info!("{}", message),
            LogLevel::Debug => tracing::debug!("{}", message),
        }
    }
}

/// Assemble the verbose dump: the stack trace followed by the request
/// context section by section, and the profiler snapshot when one is
/// present. Session contents appear only while a session is active.
pub fn verbose_message(
    error: &CapturedError,
    ctx: &RequestContext,
    profiler: Option<&dyn Profiler>,
) -> String {
    let mut full = error.trace_string();
    full.push_str("\n\n");

    push_section(&mut full, "query", &ctx.query);
    push_section(&mut full, "form", &ctx.form);

    if let Some(session) = &ctx.session {
        push_section(&mut full, "session", session);
    }

    push_section(&mut full, "cookies", &ctx.cookies);
    push_section(&mut full, "server", &ctx.server);

    if let Some(profiler) = profiler {
        full.push_str(profiler.label());
        full.push('\n');
        full.push_str(&profiler.snapshot());
        full.push('\n');
    }

    full
}

/// Append one labelled section with keys in sorted order
fn push_section(out: &mut String, label: &str, map: &HashMap<String, String>) {
    out.push_str(label);
    out.push('\n');

    let sorted: BTreeMap<&String, &String> = map.iter().collect();
    for (key, value) in sorted {
        out.push_str(&format!("  {}: {}\n", key, value));
    }

    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ErrorKind, StackFrame};

    struct FixedProfiler;

    impl Profiler for FixedProfiler {
        fn label(&self) -> &str {
            "profiler"
        }

        fn snapshot(&self) -> String {
            "req_time: 0.132".to_string()
        }
    }

    fn sample_error() -> CapturedError {
        CapturedError::new(ErrorKind::FatalRuntime, "boom")
            .with_stack_trace(vec![StackFrame::new("main")])
    }

    #[test]
    fn test_dump_contains_all_sections() {
        let ctx = RequestContext::new()
            .with_query_param("page", "2")
            .with_form_field("name", "ada")
            .with_cookie("sid", "abc")
            .with_server_var("REQUEST_URI", "/checkout");

        let dump = verbose_message(&sample_error(), &ctx, None);

        assert!(dump.contains("#0 main"));
        assert!(dump.contains("query\n  page: 2"));
        assert!(dump.contains("form\n  name: ada"));
        assert!(dump.contains("cookies\n  sid: abc"));
        assert!(dump.contains("server\n  REQUEST_URI: /checkout"));
        assert!(!dump.contains("session"));
    }

    #[test]
    fn test_dump_includes_session_only_when_active() {
        let mut session = HashMap::new();
        session.insert("user_id".to_string(), "7".to_string());
        let ctx = RequestContext::new().with_session(session);

        let dump = verbose_message(&sample_error(), &ctx, None);
        assert!(dump.contains("session\n  user_id: 7"));
    }

    #[test]
    fn test_dump_appends_profiler_snapshot() {
        let ctx = RequestContext::new();

        let with = verbose_message(&sample_error(), &ctx, Some(&FixedProfiler));
        assert!(with.contains("profiler\nreq_time: 0.132"));

        let without = verbose_message(&sample_error(), &ctx, None);
        assert!(!without.contains("req_time"));
    }

    #[test]
    fn test_dump_keys_are_sorted() {
        let ctx = RequestContext::new()
            .with_query_param("zebra", "1")
            .with_query_param("apple", "2");

        let dump = verbose_message(&sample_error(), &ctx, None);
        let apple = dump.find("apple").expect("apple present");
        let zebra = dump.find("zebra").expect("zebra present");
        assert!(apple < zebra);
    }
}
