//! Shared helpers for integration tests

use error_responder::{CapturedError, ErrorKind, RequestContext, StackFrame};
use std::collections::HashMap;

/// A captured error with a location and a small stack trace
pub fn sample_error(kind: ErrorKind) -> CapturedError {
    CapturedError::new(kind, "boom")
        .with_location("app/checkout.rs", 15)
        .with_stack_trace(vec![
            StackFrame::new("checkout::charge").with_location("app/checkout.rs", 15),
            StackFrame::new("main"),
        ])
}

/// A request context populated with one entry per store
pub fn populated_context() -> RequestContext {
    RequestContext::new()
        .with_query_param("page", "2")
        .with_form_field("name", "ada")
        .with_cookie("sid", "abc123")
        .with_server_var("REQUEST_URI", "/checkout")
}

/// The same context with an active session
pub fn context_with_session() -> RequestContext {
    let mut session = HashMap::new();
    session.insert("user_id".to_string(), "7".to_string());
    populated_context().with_session(session)
}

/// A context whose request identified itself as asynchronous
pub fn ajax_context() -> RequestContext {
    RequestContext::new().with_header("X-Requested-With", "XMLHttpRequest")
}
