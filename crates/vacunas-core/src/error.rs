//! # Error Types
//!
//! Structured errors for decoding and validating domain records, built with
//! `thiserror`. No `Box<dyn Error>`, no `.unwrap()` outside tests.

use thiserror::Error;

/// A date string that could not be read as a calendar date.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid date {input:?}: expected YYYY-MM-DD, optionally followed by a time")]
pub struct DateParseError {
    /// The rejected input, verbatim.
    pub input: String,
}

/// Validation failures for records built on the client side.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A gender code outside `M`, `F`, `Otro`.
    #[error("unknown gender code {0:?}: expected M, F or Otro")]
    UnknownGender(String),

    /// A required text field was empty or whitespace.
    #[error("{field} must not be empty")]
    EmptyField {
        /// Wire name of the offending field.
        field: &'static str,
    },

    /// A date field could not be parsed.
    #[error(transparent)]
    Date(#[from] DateParseError),
}

/// Reject empty or whitespace-only values for a required text field.
pub(crate) fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    Ok(())
}
