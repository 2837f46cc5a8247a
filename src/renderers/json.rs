//! JSON error body for asynchronous requests

use super::ErrorBodyRenderer;
use crate::types::{ContentType, ResponsePayload};

/// Renderer producing a compact JSON error object
pub struct JsonErrorRenderer;

impl JsonErrorRenderer {
    /// Create a new JSON error renderer
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonErrorRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorBodyRenderer for JsonErrorRenderer {
    fn render(&self, message: &str) -> ResponsePayload {
        let body = serde_json::json!({ "error": message }).to_string();
        ResponsePayload::new(500, ContentType::Json, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_body() {
        let payload = JsonErrorRenderer::new().render("boom");

        assert_eq!(payload.status, 500);
        assert_eq!(payload.content_type, ContentType::Json);
        assert_eq!(payload.body, r#"{"error":"boom"}"#);
    }

    #[test]
    fn test_message_is_json_escaped() {
        let payload = JsonErrorRenderer::new().render(r#"said "boom""#);
        assert_eq!(payload.body, r#"{"error":"said \"boom\""}"#);
    }
}
