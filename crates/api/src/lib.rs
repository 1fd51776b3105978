//! Public API traits and types for the bikesample library
//!
//! This crate provides the public API surface shared by every bikesample
//! crate: the error type, validation helpers and the [`PrfStream`] trait
//! through which the sampler consumes pseudorandom bytes.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use traits::PrfStream;
