//! Error types for field normalization.
//!
//! This module provides the [`NormalizeError`] type raised inside individual
//! field rules and the [`Result`] convenience type. Rule errors never reach
//! callers of [`Normalizer::apply`](crate::Normalizer::apply): the dispatcher
//! records them as [`Diagnostic`](crate::Diagnostic)s and keeps the field as it was.

use thiserror::Error;

/// Error type for all normalization operations.
#[derive(Error, Debug)]
pub enum NormalizeError {
    /// The rule's field key is not present in the record.
    #[error("Missing field: {0}")]
    MissingField(String),

    /// The field is present but holds no fragments at all.
    #[error("Field {0} has no fragments")]
    MissingFragment(String),

    /// The field holds a value kind the rule cannot read as text.
    #[error("Unexpected value for field {field}: expected text, found {found}")]
    UnexpectedValue {
        /// Field key being normalized
        field: String,
        /// Kind of value actually stored
        found: &'static str,
    },

    /// A digit run could not be converted to an integer.
    #[error("Invalid number for field {field}: {value}")]
    InvalidNumber {
        /// Field key being normalized
        field: String,
        /// The offending digit run
        value: String,
    },

    /// A rule panicked; the dispatcher caught it.
    #[error("Rule for field {field} panicked: {message}")]
    RulePanicked {
        /// Field key being normalized
        field: String,
        /// Panic payload, when it was a string
        message: String,
    },

    /// JSON (de)serialization failure at the record boundary.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for [`std::result::Result`] with [`NormalizeError`].
pub type Result<T> = std::result::Result<T, NormalizeError>;
