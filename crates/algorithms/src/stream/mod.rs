//! Keystream generators
//!
//! Only the ChaCha20 block function is provided. It is the engine behind the
//! sampling PRF and is never used here to encrypt data.

/// ChaCha family of stream cipher implementations
pub mod chacha;

pub use chacha::chacha20::ChaCha20;
pub use params::utils::symmetric::{CHACHA20_BLOCK_SIZE, CHACHA20_KEY_SIZE, CHACHA20_NONCE_SIZE};
