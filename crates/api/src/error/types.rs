//! Error type definitions for sampling operations

#[cfg(feature = "std")]
use std::string::String;

/// Primary error type for the bikesample API surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid length error with context
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    InvalidParameter {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Random generation error (seed source or PRF failure)
    RandomGenerationError {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },
}

/// Result type for sampling operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand for a random generation error
    pub fn random_generation(context: &'static str, _message: &'static str) -> Self {
        Self::RandomGenerationError {
            context,
            #[cfg(feature = "std")]
            message: String::from(_message),
        }
    }

    /// Shorthand for an invalid parameter error
    pub fn parameter(context: &'static str, _message: &'static str) -> Self {
        Self::InvalidParameter {
            context,
            #[cfg(feature = "std")]
            message: String::from(_message),
        }
    }

    /// Replace the context of an existing error, keeping its kind and details
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidLength { expected, actual, .. } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            #[cfg(feature = "std")]
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            #[cfg(not(feature = "std"))]
            Self::InvalidParameter { .. } => Self::InvalidParameter { context },
            #[cfg(feature = "std")]
            Self::RandomGenerationError { message, .. } => {
                Self::RandomGenerationError { context, message }
            }
            #[cfg(not(feature = "std"))]
            Self::RandomGenerationError { .. } => Self::RandomGenerationError { context },
        }
    }

    /// The static context string attached to this error
    pub fn context(&self) -> &'static str {
        match self {
            Self::InvalidLength { context, .. }
            | Self::InvalidParameter { context, .. }
            | Self::RandomGenerationError { context, .. } => context,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidLength { context, expected, actual } => {
                write!(f, "{}: invalid length (expected {}, got {})",
                    context, expected, actual)
            },
            #[cfg(feature = "std")]
            Self::InvalidParameter { context, message } => {
                write!(f, "{}: {}", context, message)
            },
            #[cfg(not(feature = "std"))]
            Self::InvalidParameter { context } => {
                write!(f, "Invalid parameter: {}", context)
            },
            #[cfg(feature = "std")]
            Self::RandomGenerationError { context, message } => {
                write!(f, "Random generation error: {}: {}", context, message)
            },
            #[cfg(not(feature = "std"))]
            Self::RandomGenerationError { context } => {
                write!(f, "Random generation error: {}", context)
            },
        }
    }
}
