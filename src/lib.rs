//! Error Responder - runtime error interception and HTTP response shaping
//!
//! This crate takes errors captured during a web request lifecycle,
//! classifies their severity, optionally logs them, optionally renders a
//! developer-facing debug page, and shapes the final HTTP error response.
//! The owning web layer supplies the request context and output buffer
//! and performs the termination the handler signals.

// Core modules
pub mod classifier;
pub mod config;
pub mod context;
pub mod error;
pub mod types;

// Main functionality modules
pub mod handler;
pub mod logging;
pub mod renderers;
pub mod snippet;

// Test support
pub mod testing;

// Re-export main types for convenience
pub use classifier::{Classification, DefaultClassifier, SeverityClassifier};
pub use config::{HandlerConfig, HandlerConfigBuilder};
pub use context::RequestContext;
pub use error::{ResponderError, Result};
pub use handler::ErrorHandler;
pub use logging::{Logger, Profiler, TracingLogger};
pub use renderers::{
    render_error, DebugPageRenderer, ErrorBodyRenderer, HtmlErrorRenderer, JsonErrorRenderer,
};
pub use snippet::SourceSnippet;
pub use types::{
    CapturedError, ContentType, Disposition, ErrorKind, LogLevel, ResponseBuffer,
    ResponsePayload, SourceLocation, StackFrame,
};

/// Handle one captured error with the given configuration
pub fn handle_error(
    config: HandlerConfig,
    error: &CapturedError,
    ctx: &RequestContext,
    response: &mut ResponseBuffer,
) -> Disposition {
    ErrorHandler::new(config).handle(error, ctx, response)
}
