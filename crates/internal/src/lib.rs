//! Internal utilities for the bikesample library
//!
//! Nothing in here is part of the public API contract. The helpers are shared
//! by the primitive and KEM crates so that every secret-dependent selection
//! goes through the same small set of constant-time building blocks.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod constant_time;
pub mod endian;
