//! Error types for request validation.

use thiserror::Error;

/// Errors raised while validating a fetch request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// The keyword was empty or only whitespace.
    #[error("Keyword must not be empty")]
    EmptyKeyword,

    /// The target date could not be parsed.
    #[error("Invalid date format: {input}. Use YYYY-MM-DD")]
    InvalidDate {
        /// The rejected input.
        input: String,
    },
}
