//! # bikesample
//!
//! Uniform sparse-support sampling for BIKE-style code-based KEMs.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! bikesample = "0.3"
//! ```
//!
//! ```ignore
//! use bikesample::prelude::*;
//! use rand::rngs::OsRng;
//!
//! let seeds = get_seeds(&mut OsRng)?;
//! let e = sample_error_vector::<Bike1>(seeds.second())?;
//! assert_eq!(e.weight(), Bike1::T);
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support, runtime CPU feature detection
//! - `simd` (default): AVX2 uniqueness checks when the CPU supports them
//! - `alloc`, `no_std`: for constrained targets
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`bikesample-api`]: Error type and the PRF stream trait
//! - [`bikesample-algorithms`]: ChaCha20 PRF and bit-vector primitives
//! - [`bikesample-kem`]: Seeds, index sampling and the public samplers

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use bikesample_api as api;
pub use bikesample_common as common;
pub use bikesample_internal as internal;
pub use bikesample_params as params;

pub use bikesample_algorithms as algorithms;
pub use bikesample_kem as kem;

#[cfg(feature = "rand")]
pub use rand;

/// Common imports for bikesample users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};
    pub use crate::kem::Error as SamplingError;

    // Re-export core traits
    pub use crate::api::PrfStream;
    pub use crate::kem::BikeParams;
    pub use zeroize::Zeroize;

    // Parameter sets and samplers
    pub use crate::kem::{
        get_seeds, sample_error_vector, sample_sparse_support, sample_uniform_bitstring,
        sample_uniform_bitstring_with_prf, Bike1, Bike3, Bike5, BikeSampler, ErrorVector, PaddedR,
        SamplerConfig, Seed, Seeds, SparseSupport, UniquenessEngine,
    };
    pub use crate::algorithms::ChaChaPrf;

    // Re-export security types
    pub use crate::common::{EphemeralSecret, SecretBuffer, ZeroizeGuard};
}
