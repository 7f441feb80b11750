//! Schema registry error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    /// Requested schema name was not found in the registry.
    #[error("schema not found: {0}")]
    NotFound(String),

    /// JSON value did not pass schema validation.
    #[error("validation against `{schema}` failed: {}", errors.join("; "))]
    ValidationFailed {
        schema: String,
        /// Individual error messages from the validator.
        errors: Vec<String>,
    },

    /// A registered schema could not be compiled.
    #[error("schema `{schema}` does not compile: {message}")]
    Compile { schema: String, message: String },
}
