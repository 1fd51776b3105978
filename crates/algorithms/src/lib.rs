//! Pseudorandom and bit-vector primitives for uniform sparse sampling
//!
//! This crate provides the keyed PRF stream the samplers draw from and the
//! constant-time bit-vector operations used to turn index lists into dense
//! vectors. The library is usable in both `std` and `no_std` environments.
//!
//! # Security Features
//!
//! - PRF state zeroized on drop and on explicit cleanup
//! - Bit placement whose memory access pattern is independent of the indices
//! - Keystream scratch blocks held in self-erasing wrappers

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod error;
pub use error::{validate, Error, Result};

// GF(2) vector primitives
pub mod code;
pub use code::bitvec;

// PRF stream
pub mod prf;
pub use prf::ChaChaPrf;

// Keystream generator behind the PRF
pub mod stream;
pub use stream::ChaCha20;

pub use common::security::{EphemeralSecret, SecretBuffer, ZeroizeGuard};
