//! Handler configuration
//!
//! Three process-wide flags, set at startup and read-only during request
//! handling. Loadable from a TOML file or assembled with the builder.

use crate::error::{ResponderError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration flags for the error handler
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize)]
pub struct HandlerConfig {
    /// Expose internal error detail (trace, source snippet) in responses
    #[serde(default)]
    pub debug: bool,
    /// Emit a log entry for every captured error
    #[serde(default)]
    pub write_log: bool,
    /// Add a second debug-level log entry with the stack trace and
    /// request context. Only takes effect together with `write_log`.
    #[serde(default)]
    pub debug_log: bool,
}

impl HandlerConfig {
    /// Create a config with all flags off
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new config builder
    pub fn builder() -> HandlerConfigBuilder {
        HandlerConfigBuilder::new()
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content =
            std::fs::read_to_string(&path).map_err(|_| ResponderError::ConfigNotFound {
                path: path.as_ref().to_path_buf(),
            })?;

        let config: HandlerConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration with enhanced error context
    pub fn load_with_validation<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();

        if !path_ref.exists() {
            return Err(ResponderError::ConfigNotFound {
                path: path_ref.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path_ref).map_err(ResponderError::Io)?;

        let config: HandlerConfig = toml::from_str(&content).map_err(|e| {
            ResponderError::invalid_config(format!(
                "Failed to parse TOML in {}: {}",
                path_ref.display(),
                e
            ))
        })?;

        Ok(config)
    }
}

/// Builder for HandlerConfig to improve API ergonomics
pub struct HandlerConfigBuilder {
    debug: bool,
    write_log: bool,
    debug_log: bool,
}

impl HandlerConfigBuilder {
    /// Create a new config builder with all flags off
    pub fn new() -> Self {
        Self {
            debug: false,
            write_log: false,
            debug_log: false,
        }
    }

    /// Enable or disable debug output in responses
    #[must_use]
    pub fn debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }

    /// Enable or disable error logging
    #[must_use]
    pub fn write_log(mut self, enabled: bool) -> Self {
        self.write_log = enabled;
        self
    }

    /// Enable or disable the verbose debug log entry
    #[must_use]
    pub fn debug_log(mut self, enabled: bool) -> Self {
        self.debug_log = enabled;
        self
    }

    /// Build the configuration
    pub fn build(self) -> HandlerConfig {
        HandlerConfig {
            debug: self.debug,
            write_log: self.write_log,
            debug_log: self.debug_log,
        }
    }
}

impl Default for HandlerConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_off() {
        let config = HandlerConfig::new();
        assert!(!config.debug);
        assert!(!config.write_log);
        assert!(!config.debug_log);
    }

    #[test]
    fn test_builder() {
        let config = HandlerConfig::builder().debug(true).write_log(true).build();

        assert!(config.debug);
        assert!(config.write_log);
        assert!(!config.debug_log);
    }

    #[test]
    fn test_load_from_toml() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "debug = true\nwrite_log = true\ndebug_log = false").expect("write config");

        let config = HandlerConfig::load_from_file(file.path()).expect("load config");
        assert!(config.debug);
        assert!(config.write_log);
        assert!(!config.debug_log);
    }

    #[test]
    fn test_missing_flags_default_to_off() {
        let config: HandlerConfig = toml::from_str("debug = true").expect("parse");
        assert!(config.debug);
        assert!(!config.write_log);
        assert!(!config.debug_log);
    }

    #[test]
    fn test_missing_file_is_config_not_found() {
        let result = HandlerConfig::load_from_file("does/not/exist.toml");
        assert!(matches!(
            result,
            Err(ResponderError::ConfigNotFound { .. })
        ));
    }
}
