//! Security primitives and memory safety utilities
//!
//! This module provides the types that guarantee secret material is erased
//! on every exit path, including early returns through `?`.

pub mod memory;
pub mod secret;

// Re-export core security types
pub use secret::{EphemeralSecret, SecretBuffer, ZeroizeGuard};

// Re-export memory barrier utilities
pub use memory::barrier;
