//! Error types for the progress engine.

use thiserror::Error;

/// Error type for pipeline construction and progress queries.
#[derive(Error, Debug)]
pub enum ProgressError {
    /// The static pipeline definition is inconsistent
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// A step key that the pipeline does not define
    #[error("Step '{key}' is not defined in the pipeline")]
    UnknownStep { key: String },
    /// A phase id that the pipeline does not define
    #[error("Phase '{id}' is not defined in the pipeline")]
    UnknownPhase { id: String },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Input document could not be parsed
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> ProgressError {
        ProgressError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl ProgressError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a configuration error from any displayable message.
    pub fn configuration(message: impl Into<String>) -> Self {
        ProgressError::Configuration {
            message: message.into(),
        }
    }

    pub(crate) fn unknown_step(key: &str) -> Self {
        ProgressError::UnknownStep {
            key: key.to_string(),
        }
    }

    pub(crate) fn unknown_phase(id: &str) -> Self {
        ProgressError::UnknownPhase { id: id.to_string() }
    }
}

/// Result type alias for progress engine operations
pub type Result<T> = std::result::Result<T, ProgressError>;
