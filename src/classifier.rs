//! Severity classification for captured errors
//!
//! Decides whether an error is fatal for the current request and which
//! log level it should be recorded at. The two tables are defined
//! independently and do not always agree: a user error is non-fatal but
//! still logs at error level.

use crate::types::{ErrorKind, LogLevel};

/// Outcome of classifying a captured error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// Whether request processing must stop after responding
    pub is_fatal: bool,
    /// Level the error should be logged at
    pub log_level: LogLevel,
}

/// Trait for severity classification
pub trait SeverityClassifier: Send + Sync {
    /// Classify an error kind into fatality and log level
    fn classify(&self, kind: ErrorKind) -> Classification;
}

/// Default classifier implementing the fixed severity tables
pub struct DefaultClassifier;

impl DefaultClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Fatality table. The non-fatal set is explicit; everything else,
    /// including codes this crate does not recognize, is fatal.
    fn is_fatal(&self, kind: ErrorKind) -> bool {
        !matches!(
            kind,
            ErrorKind::Notice
                | ErrorKind::UserError
                | ErrorKind::UserWarning
                | ErrorKind::UserNotice
                | ErrorKind::Strict
                | ErrorKind::Deprecated
                | ErrorKind::UserDeprecated
        )
    }

    /// Log level table, independent of the fatality table
    fn log_level(&self, kind: ErrorKind) -> LogLevel {
        match kind {
            ErrorKind::Parse
            | ErrorKind::Warning
            | ErrorKind::CoreWarning
            | ErrorKind::CompileWarning
            | ErrorKind::UserWarning => LogLevel::Warning,

            ErrorKind::Notice
            | ErrorKind::UserNotice
            | ErrorKind::Strict
            | ErrorKind::Deprecated
            | ErrorKind::UserDeprecated => LogLevel::Notice,

            ErrorKind::FatalRuntime
            | ErrorKind::CoreFatal
            | ErrorKind::CompileFatal
            | ErrorKind::UserError
            | ErrorKind::Unknown(_) => LogLevel::Error,
        }
    }
}

impl Default for DefaultClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl SeverityClassifier for DefaultClassifier {
    fn classify(&self, kind: ErrorKind) -> Classification {
        Classification {
            is_fatal: self.is_fatal(kind),
            log_level: self.log_level(kind),
        }
    }
}
