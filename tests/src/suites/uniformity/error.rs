// src/suites/uniformity/error.rs
//! Structured error types for uniformity checks

use thiserror::Error;

#[derive(Debug, Error)]
pub enum UniformityError {
    #[error("histogram needs at least two bins, got {0}")]
    TooFewBins(usize),

    #[error("expected count per bin {expected:.2} is below the minimum {min}")]
    SparseBins { expected: f64, min: f64 },

    #[error("distribution error: {0}")]
    Distribution(String),

    #[error("sampling failed: {0}")]
    Sampling(#[from] bikesample_kem::Error),

    #[error("not uniform: chi2 = {statistic:.2} with {degrees_of_freedom} dof, p = {p_value:.6}")]
    NotUniform {
        statistic: f64,
        degrees_of_freedom: f64,
        p_value: f64,
    },
}

impl From<bikesample_algorithms::Error> for UniformityError {
    fn from(e: bikesample_algorithms::Error) -> Self {
        UniformityError::Sampling(e.into())
    }
}

pub type Result<T> = std::result::Result<T, UniformityError>;
