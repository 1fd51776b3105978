//! Validation utilities for sampling requests

use super::{Error, Result};

/// Validate a request parameter
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::Parameter { name, reason });
    }
    Ok(())
}

/// Validate that a buffer can hold `needed` entries
pub fn capacity(name: &'static str, available: usize, needed: usize) -> Result<()> {
    parameter(available >= needed, name, "buffer too small for the requested count")
}
