//! Uniform sparse-support sampling for BIKE-style code-based KEMs
//!
//! This crate turns a short secret seed into fixed-weight sparse vectors
//! (private-key supports, error vectors) and uniformly random dense vectors
//! of odd or unconstrained weight.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod bike;
pub mod error;

// Re-exports
pub use bike::{
    get_seeds, sample_error_vector, sample_sparse_support, sample_uniform_bitstring,
    sample_uniform_bitstring_with_prf, Bike1, Bike3, Bike5, BikeParams, BikeSampler, ErrorVector,
    PaddedR, SamplerConfig, Seed, Seeds, SparseSupport, UniquenessEngine,
};
pub use error::{Error, Result};
