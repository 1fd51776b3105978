//! Uniform sparse-support sampling for BIKE
//!
//! A 32-byte seed keys a PRF; the PRF feeds a rejection sampler whose
//! output is deduplicated into an index set, and the index set is written
//! into a dense bit-vector in constant time. A second path fills a dense
//! block directly from the PRF and can force its weight to be odd.

pub mod config;
pub mod indices;
pub mod params;
pub mod sampling;
pub mod seed;
pub mod uniqueness;

pub use config::SamplerConfig;
pub use indices::{generate_indices_mod_z, rand_mod_len};
pub use params::{Bike1, Bike3, Bike5, BikeParams, ByteStorage, IndexStorage};
pub use sampling::{
    sample_error_vector, sample_sparse_support, sample_uniform_bitstring,
    sample_uniform_bitstring_with_prf, BikeSampler, ErrorVector, IndexList, PaddedR,
    SparseSupport,
};
pub use seed::{get_seeds, Seed, Seeds};
pub use uniqueness::UniquenessEngine;
