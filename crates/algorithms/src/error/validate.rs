//! Validation utilities for sampling primitives

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate that a buffer is a whole number of `unit`-byte words
#[inline(always)]
pub fn word_aligned(context: &'static str, actual: usize, unit: usize) -> Result<()> {
    if actual % unit != 0 {
        return Err(Error::Length {
            context,
            expected: (actual + unit - 1) / unit * unit,
            actual,
        });
    }
    Ok(())
}

/// Validate a minimum length
#[inline(always)]
pub fn min_length(context: &'static str, actual: usize, min: usize) -> Result<()> {
    if actual < min {
        return Err(Error::Length {
            context,
            expected: min,
            actual,
        });
    }
    Ok(())
}
