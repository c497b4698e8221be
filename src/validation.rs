//! Input validation primitives.
//!
//! Ergonomic guards over the common patterns: asserting a precondition,
//! unwrapping an Option with a descriptive error, and rejecting empty
//! strings.

use crate::error::{Error, Result};

/// Fail with `validation.invalid_argument` when the condition is false.
pub fn ensure(condition: bool, field: &str, message: &str) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(Error::validation_invalid_argument(field, message, None, None))
    }
}

/// Require an Option to contain a value.
pub fn require<T>(opt: Option<T>, field: &str, message: &str) -> Result<T> {
    opt.ok_or_else(|| Error::validation_invalid_argument(field, message, None, None))
}

/// Require a string to be non-empty after trimming.
///
/// Returns a reference to the trimmed string on success.
pub fn require_non_empty<'a>(value: &'a str, field: &str, message: &str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(Error::validation_invalid_argument(field, message, None, None))
    } else {
        Ok(trimmed)
    }
}
