//! Error types for parsing and validating generator descriptions.

use thiserror::Error;

use crate::validation::CommonValidationError;

/// Result type for parsing and validating descriptions.
pub type SpecResult<T> = Result<T, SpecError>;

/// Top-level error type for parsing and validating descriptions.
#[derive(Debug, Error)]
pub enum SpecError {
    /// A parameter failed validation.
    #[error("invalid configuration: {0}")]
    Invalid(#[from] CommonValidationError),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}
