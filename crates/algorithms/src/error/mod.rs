//! Error handling for the PRF and bit-vector primitives

#[cfg(feature = "std")]
use std::fmt;

#[cfg(not(feature = "std"))]
use core::fmt;

use api::{Error as CoreError, Result as CoreResult};

/// The error type for sampling primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Processing error while producing pseudorandom output
    Processing {
        /// Operation that failed
        operation: &'static str,
        /// Additional details about the failure
        details: &'static str,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param(name: &'static str, reason: &'static str) -> Self {
        Error::Parameter { name, reason }
    }
}

/// Result type for primitive operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length { context, expected, actual } => {
                write!(f, "Invalid length for {}: expected {}, got {}",
                    context, expected, actual)
            }
            Error::Processing { operation, details } => {
                write!(f, "Processing error in {}: {}", operation, details)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

// A failing PRF surfaces as a random generation error at the API boundary
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::parameter(name, reason),
            Error::Length { context, expected, actual } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::Processing { operation, details } => {
                CoreError::random_generation(operation, details)
            }
        }
    }
}

/// Convert a primitives result to a core result with additional context
#[inline]
pub fn to_core_result<T>(r: Result<T>, ctx: &'static str) -> CoreResult<T> {
    r.map_err(|e| CoreError::from(e).with_context(ctx))
}

pub mod validate;
