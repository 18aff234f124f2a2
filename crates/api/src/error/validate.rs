//! Validation utilities shared by the gostec crates

use super::{Error, Result};

/// Validate an argument condition
#[inline(always)]
pub fn argument(condition: bool, context: &'static str, message: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::argument(context, message));
    }
    Ok(())
}

/// Validate that a required buffer is present and non-empty
#[inline(always)]
pub fn non_empty(context: &'static str, name: &'static str, bytes: &[u8]) -> Result<()> {
    if bytes.is_empty() {
        return Err(Error::argument(context, format!("{} must not be empty", name)));
    }
    Ok(())
}

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a maximum length
#[inline(always)]
pub fn max_length(context: &'static str, actual: usize, max: usize) -> Result<()> {
    if actual > max {
        return Err(Error::InvalidLength {
            context,
            expected: max,
            actual,
        });
    }
    Ok(())
}
