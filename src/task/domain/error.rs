//! Error types for task payload validation and parsing.

use thiserror::Error;

/// Errors returned while validating task payloads.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// A required text field is empty after trimming.
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    /// A text field exceeds its maximum length in characters.
    #[error("{field} must be at most {max} characters, got {actual}")]
    FieldTooLong {
        /// Name of the offending field.
        field: &'static str,
        /// Maximum accepted length.
        max: usize,
        /// Length supplied by the caller.
        actual: usize,
    },
}

/// Error returned when a task identifier cannot be parsed as an integer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid task id: {0}")]
pub struct ParseTaskIdError(pub String);
