//! Error response renderers
//!
//! Shape the user-facing error body (HTML or JSON) and the
//! developer-facing debug page, keeping classification and orchestration
//! free of presentation concerns.

use crate::types::ResponsePayload;

/// Trait for rendering a user-facing error body
pub trait ErrorBodyRenderer {
    /// Render a 500 payload carrying the given message
    fn render(&self, message: &str) -> ResponsePayload;
}

// Sub-modules
pub mod debug;
pub mod html;
pub mod json;

// Re-exports for convenience
pub use debug::DebugPageRenderer;
pub use html::HtmlErrorRenderer;
pub use json::JsonErrorRenderer;

/// Select the body format from the request and render the error payload
pub fn render_error(message: &str, wants_json: bool) -> ResponsePayload {
    if wants_json {
        JsonErrorRenderer::new().render(message)
    } else {
        HtmlErrorRenderer::new().render(message)
    }
}
