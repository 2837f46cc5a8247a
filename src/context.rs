//! Request-scoped state handed to the handler by the web layer.
//!
//! The handler never reads ambient globals; everything request-specific
//! arrives through this value.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Header used by asynchronous (XHR) requests to identify themselves
pub const ASYNC_REQUEST_HEADER: &str = "x-requested-with";

/// Marker value carried by the async request header
pub const ASYNC_REQUEST_MARKER: &str = "xmlhttprequest";

/// Request-scoped data for one handler pass
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestContext {
    /// Request headers, keyed by lowercase header name
    pub headers: HashMap<String, String>,
    /// Query string parameters
    pub query: HashMap<String, String>,
    /// Form (request body) parameters
    pub form: HashMap<String, String>,
    /// Request cookies
    pub cookies: HashMap<String, String>,
    /// Server and environment metadata
    pub server: HashMap<String, String>,
    /// Session contents, present only while a session is active
    pub session: Option<HashMap<String, String>>,
}

impl RequestContext {
    /// Create an empty request context
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a request header
    #[must_use]
    pub fn with_header<S: Into<String>>(mut self, name: S, value: S) -> Self {
        self.headers.insert(name.into().to_lowercase(), value.into());
        self
    }

    /// Add a query string parameter
    #[must_use]
    pub fn with_query_param<S: Into<String>>(mut self, name: S, value: S) -> Self {
        self.query.insert(name.into(), value.into());
        self
    }

    /// Add a form parameter
    #[must_use]
    pub fn with_form_field<S: Into<String>>(mut self, name: S, value: S) -> Self {
        self.form.insert(name.into(), value.into());
        self
    }

    /// Add a cookie
    #[must_use]
    pub fn with_cookie<S: Into<String>>(mut self, name: S, value: S) -> Self {
        self.cookies.insert(name.into(), value.into());
        self
    }

    /// Add a server metadata entry
    #[must_use]
    pub fn with_server_var<S: Into<String>>(mut self, name: S, value: S) -> Self {
        self.server.insert(name.into(), value.into());
        self
    }

    /// Attach an active session
    #[must_use]
    pub fn with_session(mut self, session: HashMap<String, String>) -> Self {
        self.session = Some(session);
        self
    }

    /// Look up a header by name, case-insensitively
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_lowercase()).map(String::as_str)
    }

    /// Whether the request identified itself as an asynchronous call,
    /// which selects a JSON error body over HTML
    pub fn wants_json(&self) -> bool {
        self.header(ASYNC_REQUEST_HEADER)
            .map(|value| value.eq_ignore_ascii_case(ASYNC_REQUEST_MARKER))
            .unwrap_or(false)
    }

    /// Whether a session is active for this request
    pub fn session_active(&self) -> bool {
        self.session.is_some()
    }
}
