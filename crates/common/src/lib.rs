//! Common implementations and shared functionality for the bikesample library
//!
//! This crate provides the secret containers and scoped-erasure guards used
//! wherever seeds, PRF keys or sampled supports are held in memory.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod security;

// Re-export core security types
pub use security::{EphemeralSecret, SecretBuffer, ZeroizeGuard};

// Re-export memory barrier utilities
pub use security::memory::barrier;
