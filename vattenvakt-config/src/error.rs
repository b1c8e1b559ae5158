//! Error types for configuration loading and validation.

use std::path::PathBuf;
use thiserror::Error;
use validator::ValidationErrors;

/// Unified configuration error type.
///
/// Every variant is fatal at startup: the runtime refuses to tick on a
/// configuration that failed to load or validate.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("invalid configuration:\n{}", render_field_errors(.0))]
    Validation(#[source] ValidationErrors),

    #[error("configuration parsing error: {0}")]
    Parsing(#[from] figment::Error),
}

fn render_field_errors(errors: &ValidationErrors) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    for (field, errors) in errors.field_errors() {
        for error in errors {
            let detail = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| error.code.to_string());
            let _ = writeln!(out, "  {}: {}", field, detail);
        }
    }
    out
}

impl From<ValidationErrors> for ConfigError {
    fn from(errors: ValidationErrors) -> Self {
        ConfigError::Validation(errors)
    }
}
