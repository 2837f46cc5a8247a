use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for error-responder operations
pub type Result<T> = std::result::Result<T, ResponderError>;

/// Error types for handler setup and configuration
#[derive(Debug, Error)]
pub enum ResponderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("General error: {message}")]
    General { message: String },
}

impl ResponderError {
    /// Create a new invalid configuration error
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }
}
