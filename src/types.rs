use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Severity kind of a captured runtime error.
///
/// Kinds map to the numeric codes carried by raw error signals. Codes
/// outside the known set are preserved in `Unknown` and classified
/// through the default branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    FatalRuntime,
    Warning,
    Parse,
    Notice,
    CoreFatal,
    CoreWarning,
    CompileFatal,
    CompileWarning,
    UserError,
    UserWarning,
    UserNotice,
    Strict,
    Deprecated,
    UserDeprecated,
    Unknown(i32),
}

impl ErrorKind {
    /// Resolve a numeric severity code to its kind
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => ErrorKind::FatalRuntime,
            2 => ErrorKind::Warning,
            4 => ErrorKind::Parse,
            8 => ErrorKind::Notice,
            16 => ErrorKind::CoreFatal,
            32 => ErrorKind::CoreWarning,
            64 => ErrorKind::CompileFatal,
            128 => ErrorKind::CompileWarning,
            256 => ErrorKind::UserError,
            512 => ErrorKind::UserWarning,
            1024 => ErrorKind::UserNotice,
            2048 => ErrorKind::Strict,
            8192 => ErrorKind::Deprecated,
            16384 => ErrorKind::UserDeprecated,
            other => ErrorKind::Unknown(other),
        }
    }

    /// Numeric severity code for this kind
    pub fn code(&self) -> i32 {
        match self {
            ErrorKind::FatalRuntime => 1,
            ErrorKind::Warning => 2,
            ErrorKind::Parse => 4,
            ErrorKind::Notice => 8,
            ErrorKind::CoreFatal => 16,
            ErrorKind::CoreWarning => 32,
            ErrorKind::CompileFatal => 64,
            ErrorKind::CompileWarning => 128,
            ErrorKind::UserError => 256,
            ErrorKind::UserWarning => 512,
            ErrorKind::UserNotice => 1024,
            ErrorKind::Strict => 2048,
            ErrorKind::Deprecated => 8192,
            ErrorKind::UserDeprecated => 16384,
            ErrorKind::Unknown(code) => *code,
        }
    }

    /// Short human-readable name for the kind
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::FatalRuntime => "fatal runtime error",
            ErrorKind::Warning => "warning",
            ErrorKind::Parse => "parse error",
            ErrorKind::Notice => "notice",
            ErrorKind::CoreFatal => "core fatal error",
            ErrorKind::CoreWarning => "core warning",
            ErrorKind::CompileFatal => "compile fatal error",
            ErrorKind::CompileWarning => "compile warning",
            ErrorKind::UserError => "user error",
            ErrorKind::UserWarning => "user warning",
            ErrorKind::UserNotice => "user notice",
            ErrorKind::Strict => "strict notice",
            ErrorKind::Deprecated => "deprecation notice",
            ErrorKind::UserDeprecated => "user deprecation notice",
            ErrorKind::Unknown(_) => "unknown error",
        }
    }
}

/// Log level accepted by the logger seam
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogLevel {
    Error,
    Warning,
    Notice,
    Debug,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warning => "warning",
            LogLevel::Notice => "notice",
            LogLevel::Debug => "debug",
        }
    }
}

/// Position in a source file where an error originated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    pub file: PathBuf,
    pub line: u32,
}

/// Single frame of a captured stack trace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackFrame {
    pub function: String,
    pub file: Option<String>,
    pub line: Option<u32>,
}

impl StackFrame {
    /// Create a frame with just a function name
    pub fn new<S: Into<String>>(function: S) -> Self {
        Self {
            function: function.into(),
            file: None,
            line: None,
        }
    }

    /// Attach the source position of this frame
    pub fn with_location<S: Into<String>>(mut self, file: S, line: u32) -> Self {
        self.file = Some(file.into());
        self.line = Some(line);
        self
    }

    fn format(&self, index: usize) -> String {
        match (&self.file, self.line) {
            (Some(file), Some(line)) => {
                format!("#{} {} at {}:{}", index, self.function, file, line)
            }
            (Some(file), None) => format!("#{} {} at {}", index, self.function, file),
            _ => format!("#{} {}", index, self.function),
        }
    }
}

/// A runtime error or uncaught exception captured by the web layer.
///
/// Immutable once captured; one instance flows through one handler pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapturedError {
    pub kind: ErrorKind,
    pub message: String,
    pub location: Option<SourceLocation>,
    pub stack_trace: Vec<StackFrame>,
}

impl CapturedError {
    /// Create a captured error with a kind and message
    pub fn new<S: Into<String>>(kind: ErrorKind, message: S) -> Self {
        Self {
            kind,
            message: message.into(),
            location: None,
            stack_trace: Vec::new(),
        }
    }

    /// Capture a raw error signal. An empty file name means the origin
    /// is unknown and no source location is recorded.
    pub fn from_code<S: Into<String>>(code: i32, message: S, file: &str, line: u32) -> Self {
        let mut error = Self::new(ErrorKind::from_code(code), message);
        if !file.is_empty() {
            error.location = Some(SourceLocation {
                file: PathBuf::from(file),
                line,
            });
        }
        error
    }

    /// Capture a caught error value. These carry code 0, which is not a
    /// recognized severity and therefore classifies through the default
    /// branch as fatal.
    pub fn from_error(err: &dyn std::error::Error) -> Self {
        Self::new(ErrorKind::from_code(0), err.to_string())
    }

    /// Attach the source position where the error originated
    pub fn with_location<P: Into<PathBuf>>(mut self, file: P, line: u32) -> Self {
        self.location = Some(SourceLocation {
            file: file.into(),
            line,
        });
        self
    }

    /// Attach the captured stack trace
    pub fn with_stack_trace(mut self, frames: Vec<StackFrame>) -> Self {
        self.stack_trace = frames;
        self
    }

    /// Numeric severity code of this error
    pub fn code(&self) -> i32 {
        self.kind.code()
    }

    /// Render the stack trace as numbered lines
    pub fn trace_string(&self) -> String {
        self.stack_trace
            .iter()
            .enumerate()
            .map(|(i, frame)| frame.format(i))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Body format of an error response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentType {
    Html,
    Json,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Html => "text/html",
            ContentType::Json => "application/json",
        }
    }
}

/// Final HTTP error response shaped by the handler
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponsePayload {
    pub status: u16,
    pub content_type: ContentType,
    pub body: String,
}

impl ResponsePayload {
    /// Create a new response payload
    pub fn new(status: u16, content_type: ContentType, body: String) -> Self {
        Self {
            status,
            content_type,
            body,
        }
    }
}

/// Control-flow signal returned to the request dispatcher.
///
/// The dispatcher owns actual termination; the handler only decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Disposition {
    /// Stop request processing; no further application code may run
    Terminate,
    /// Resume normal request flow
    Resume,
}

impl Disposition {
    pub fn is_terminate(&self) -> bool {
        matches!(self, Disposition::Terminate)
    }
}

/// The not-yet-sent response owned by the web layer.
///
/// Tracks buffered body output and whether the status line and headers
/// have already gone out; once they have, status changes are ignored.
#[derive(Debug, Clone, Default)]
pub struct ResponseBuffer {
    buffered: String,
    status: Option<u16>,
    content_type: Option<ContentType>,
    headers_sent: bool,
}

impl ResponseBuffer {
    /// Create an empty response buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer that already holds partial application output
    pub fn with_buffered<S: Into<String>>(content: S) -> Self {
        Self {
            buffered: content.into(),
            ..Self::default()
        }
    }

    /// Append output to the buffer
    pub fn write(&mut self, content: &str) {
        self.buffered.push_str(content);
    }

    /// Discard everything buffered so far
    pub fn clear_buffered(&mut self) {
        self.buffered.clear();
    }

    /// Set the response status line. Ignored once headers are sent.
    pub fn set_status(&mut self, status: u16) {
        if !self.headers_sent {
            self.status = Some(status);
        }
    }

    /// Set the response content type. Ignored once headers are sent.
    pub fn set_content_type(&mut self, content_type: ContentType) {
        if !self.headers_sent {
            self.content_type = Some(content_type);
        }
    }

    /// Mark the status line and headers as already sent
    pub fn mark_headers_sent(&mut self) {
        self.headers_sent = true;
    }

    pub fn headers_sent(&self) -> bool {
        self.headers_sent
    }

    pub fn body(&self) -> &str {
        &self.buffered
    }

    pub fn status(&self) -> Option<u16> {
        self.status
    }

    pub fn content_type(&self) -> Option<ContentType> {
        self.content_type
    }
}
