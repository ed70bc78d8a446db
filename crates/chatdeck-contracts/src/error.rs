// Validation error types for the config form

use thiserror::Error;

/// Errors produced while parsing or validating a config form.
///
/// `Field` variants carry the offending field name so the UI can render the
/// message inline next to the input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A single field failed a semantic check
    #[error("{field}: {message}")]
    Field { field: &'static str, message: String },

    /// The record does not structurally match any supported provider shape
    #[error("invalid provider configuration: {0}")]
    Shape(String),

    /// The form has no provider selected
    #[error("a model provider must be selected")]
    MissingProvider,
}

impl ValidationError {
    /// Create a field-level error
    pub fn field(field: &'static str, message: impl Into<String>) -> Self {
        ValidationError::Field {
            field,
            message: message.into(),
        }
    }

    /// Create a structural-mismatch error
    pub fn shape(msg: impl Into<String>) -> Self {
        ValidationError::Shape(msg.into())
    }
}
