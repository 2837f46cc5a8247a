//! Mock collaborators for tests

use crate::logging::{Logger, Profiler};
use crate::types::LogLevel;
use std::sync::{Arc, Mutex};

/// One entry recorded by the mock logger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
}

/// Mock logger that records every entry for later inspection.
///
/// Clones share the same entry list, so a test can keep a handle while
/// handing another clone to the handler.
#[derive(Clone, Default)]
pub struct MockLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl MockLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// All entries recorded so far
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().expect("mock logger lock").clone()
    }

    pub fn entry_count(&self) -> usize {
        self.entries.lock().expect("mock logger lock").len()
    }

    /// Entries recorded at the given level
    pub fn entries_at(&self, level: LogLevel) -> Vec<LogEntry> {
        self.entries()
            .into_iter()
            .filter(|entry| entry.level == level)
            .collect()
    }
}

impl Logger for MockLogger {
    fn log(&self, level: LogLevel, message: &str) {
        self.entries.lock().expect("mock logger lock").push(LogEntry {
            level,
            message: message.to_string(),
        });
    }
}

/// Mock profiler returning a fixed snapshot
pub struct MockProfiler {
    pub label: String,
    pub snapshot: String,
}

impl MockProfiler {
    pub fn new() -> Self {
        Self {
            label: "profiler".to_string(),
            snapshot: "elapsed: 0.001".to_string(),
        }
    }

    #[must_use]
    pub fn with_snapshot<S: Into<String>>(mut self, snapshot: S) -> Self {
        self.snapshot = snapshot.into();
        self
    }

    #[must_use]
    pub fn with_label<S: Into<String>>(mut self, label: S) -> Self {
        self.label = label.into();
        self
    }
}

impl Default for MockProfiler {
    fn default() -> Self {
        Self::new()
    }
}

impl Profiler for MockProfiler {
    fn label(&self) -> &str {
        &self.label
    }

    fn snapshot(&self) -> String {
        self.snapshot.clone()
    }
}
