//! Orchestrating error handler
//!
//! Single pass per captured error: log, classify, shape the response
//! for fatal errors, append the debug page when debug mode is on, and
//! return the disposition the dispatcher must act on.

use crate::classifier::{DefaultClassifier, SeverityClassifier};
use crate::config::HandlerConfig;
use crate::context::RequestContext;
use crate::logging::{self, Logger, Profiler};
use crate::renderers::{self, DebugPageRenderer};
use crate::types::{CapturedError, Disposition, LogLevel, ResponseBuffer};

/// Error handler for one web application.
///
/// Built once at startup and shared read-only across requests; every
/// collaborator is injected here rather than probed at handling time.
pub struct ErrorHandler {
    config: HandlerConfig,
    logger: Option<Box<dyn Logger>>,
    profiler: Option<Box<dyn Profiler>>,
    classifier: Box<dyn SeverityClassifier>,
}

impl ErrorHandler {
    /// Create a handler with the given configuration and no collaborators
    pub fn new(config: HandlerConfig) -> Self {
        Self {
            config,
            logger: None,
            profiler: None,
            classifier: Box::new(DefaultClassifier::new()),
        }
    }

    /// Attach a logger. Without one, the logging flags are inert.
    #[must_use]
    pub fn with_logger(mut self, logger: impl Logger + 'static) -> Self {
        self.logger = Some(Box::new(logger));
        self
    }

    /// Attach a profiling collaborator for verbose log entries
    #[must_use]
    pub fn with_profiler(mut self, profiler: impl Profiler + 'static) -> Self {
        self.profiler = Some(Box::new(profiler));
        self
    }

    /// Replace the severity classifier
    #[must_use]
    pub fn with_classifier(mut self, classifier: impl SeverityClassifier + 'static) -> Self {
        self.classifier = Box::new(classifier);
        self
    }

    pub fn config(&self) -> &HandlerConfig {
        &self.config
    }

    /// Capture and handle a raw error signal
    pub fn handle_signal(
        &self,
        code: i32,
        message: &str,
        file: &str,
        line: u32,
        ctx: &RequestContext,
        response: &mut ResponseBuffer,
    ) -> Disposition {
        let error = CapturedError::from_code(code, message, file, line);
        self.handle(&error, ctx, response)
    }

    /// Capture and handle a caught error value
    pub fn handle_error(
        &self,
        err: &dyn std::error::Error,
        ctx: &RequestContext,
        response: &mut ResponseBuffer,
    ) -> Disposition {
        let error = CapturedError::from_error(err);
        self.handle(&error, ctx, response)
    }

    /// Handle one captured error.
    ///
    /// Fatal errors replace any unsent output with a 500 error body;
    /// debug mode appends the debug page independently of fatality. The
    /// returned disposition tells the dispatcher whether any further
    /// application code may run.
    pub fn handle(
        &self,
        error: &CapturedError,
        ctx: &RequestContext,
        response: &mut ResponseBuffer,
    ) -> Disposition {
        if self.config.write_log {
            if let Some(logger) = &self.logger {
                self.log_error(logger.as_ref(), error, ctx);
            }
        }

        let classification = self.classifier.classify(error.kind);

        if classification.is_fatal {
            self.emit_error_page(error, ctx, response);
        }

        if self.config.debug {
            response.write(&DebugPageRenderer::new().render(error));
        }

        if classification.is_fatal {
            Disposition::Terminate
        } else {
            Disposition::Resume
        }
    }

    /// One entry at the classified level, plus the verbose dump when
    /// verbose logging is enabled
    fn log_error(&self, logger: &dyn Logger, error: &CapturedError, ctx: &RequestContext) {
        let level = self.classifier.classify(error.kind).log_level;
        logger.log(level, &error.message);

        if self.config.debug_log {
            let dump = logging::verbose_message(error, ctx, self.profiler.as_deref());
            logger.log(LogLevel::Debug, &dump);
        }
    }

    /// Shape the fatal 500 response. Buffered partial output is
    /// discarded unless debug mode wants to append to it, and the
    /// status line is only set while headers are still unsent.
    fn emit_error_page(
        &self,
        error: &CapturedError,
        ctx: &RequestContext,
        response: &mut ResponseBuffer,
    ) {
        if !self.config.debug {
            response.clear_buffered();
        }

        let payload = renderers::render_error(&error.message, ctx.wants_json());

        if !response.headers_sent() {
            response.set_status(payload.status);
            response.set_content_type(payload.content_type);
        }

        response.write(&payload.body);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::mocks::MockLogger;
    use crate::types::ErrorKind;

    fn handler(config: HandlerConfig) -> ErrorHandler {
        ErrorHandler::new(config)
    }

    #[test]
    fn test_fatal_error_terminates_with_500() {
        let mut response = ResponseBuffer::new();
        let ctx = RequestContext::new();
        let error = CapturedError::new(ErrorKind::FatalRuntime, "boom");

        let disposition = handler(HandlerConfig::new()).handle(&error, &ctx, &mut response);

        assert!(disposition.is_terminate());
        assert_eq!(response.status(), Some(500));
        assert!(response.body().contains("boom"));
    }

    #[test]
    fn test_non_fatal_error_resumes_without_output() {
        let mut response = ResponseBuffer::new();
        let ctx = RequestContext::new();
        let error = CapturedError::new(ErrorKind::Notice, "minor");

        let disposition = handler(HandlerConfig::new()).handle(&error, &ctx, &mut response);

        assert_eq!(disposition, Disposition::Resume);
        assert_eq!(response.status(), None);
        assert_eq!(response.body(), "");
    }

    #[test]
    fn test_logging_disabled_writes_nothing() {
        let logger = MockLogger::new();
        let handler = ErrorHandler::new(HandlerConfig::new()).with_logger(logger.clone());

        let mut response = ResponseBuffer::new();
        handler.handle(
            &CapturedError::new(ErrorKind::Warning, "boom"),
            &RequestContext::new(),
            &mut response,
        );

        assert_eq!(logger.entry_count(), 0);
    }

    #[test]
    fn test_caught_error_value_is_fatal() {
        let err = std::io::Error::new(std::io::ErrorKind::Other, "disk gone");
        let mut response = ResponseBuffer::new();

        let disposition = handler(HandlerConfig::new()).handle_error(
            &err,
            &RequestContext::new(),
            &mut response,
        );

        assert!(disposition.is_terminate());
        assert!(response.body().contains("disk gone"));
    }

    #[test]
    fn test_signal_entry_point() {
        let mut response = ResponseBuffer::new();

        let disposition = handler(HandlerConfig::new()).handle_signal(
            8,
            "undefined value",
            "app/view.rs",
            12,
            &RequestContext::new(),
            &mut response,
        );

        assert_eq!(disposition, Disposition::Resume);
    }
}
