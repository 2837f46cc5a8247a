//! HTML error body for regular browser requests

use super::ErrorBodyRenderer;
use crate::types::{ContentType, ResponsePayload};

/// Renderer producing a minimal centered HTML error page
pub struct HtmlErrorRenderer {
    /// Heading shown above the error message
    pub heading: String,
}

impl HtmlErrorRenderer {
    /// Create a new HTML error renderer with the default heading
    pub fn new() -> Self {
        Self {
            heading: "Error!".to_string(),
        }
    }

    /// Use a custom heading
    #[must_use]
    pub fn with_heading<S: Into<String>>(mut self, heading: S) -> Self {
        self.heading = heading.into();
        self
    }
}

impl Default for HtmlErrorRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorBodyRenderer for HtmlErrorRenderer {
    fn render(&self, message: &str) -> ResponsePayload {
        let body = format!(
            r#"<html>
<body>
<div style="text-align: center">
<h3>{}</h3>
<p>{}</p>
</div>
</body>
</html>"#,
            html_escape(&self.heading),
            html_escape(message)
        );

        ResponsePayload::new(500, ContentType::Html, body)
    }
}

/// Simple HTML escaping
pub(crate) fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
