//! Error handling for sampling operations

#[cfg(feature = "std")]
use std::string::ToString;

use algorithms::error::Error as PrimitiveError;
use api::error::Error as CoreError;
use core::fmt;

/// Algorithm tag attached to generation failures
pub const ALGORITHM: &str = "BIKE";

/// Error type for sampling operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Primitive error (PRF set-up, bit-vector layout)
    Primitive(PrimitiveError),

    /// The randomness source or the PRF failed while producing output
    ///
    /// Fatal to the current call; no partial output is returned.
    Generation {
        algorithm: &'static str,
        source: CoreError,
    },

    /// A sampling request that can never be satisfied
    Parameter {
        name: &'static str,
        reason: &'static str,
    },
}

/// Result type for sampling operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Wrap a failure of the PRF or the seed source
    pub fn generation(source: CoreError) -> Self {
        Error::Generation {
            algorithm: ALGORITHM,
            source,
        }
    }

    /// Whether this is the generation failure kind
    pub fn is_generation(&self) -> bool {
        matches!(self, Error::Generation { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Primitive(e) => write!(f, "Primitive error: {}", e),
            Error::Generation { algorithm, source } => {
                write!(f, "Generation error for {}: {}", algorithm, source)
            }
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Primitive(e) => Some(e),
            Error::Generation { source, .. } => Some(source),
            Error::Parameter { .. } => None,
        }
    }
}

impl From<PrimitiveError> for Error {
    fn from(err: PrimitiveError) -> Self {
        Error::Primitive(err)
    }
}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::Generation { algorithm, source } => CoreError::RandomGenerationError {
                context: algorithm,
                #[cfg(feature = "std")]
                message: source.to_string(),
            },
            Error::Parameter { name, reason } => CoreError::parameter(name, reason),
        }
    }
}

pub mod validate;
