//! Constants for the stream cipher behind the PRF

/// ChaCha20 key size in bytes
pub const CHACHA20_KEY_SIZE: usize = 32;

/// ChaCha20 nonce size in bytes
pub const CHACHA20_NONCE_SIZE: usize = 12;

/// ChaCha20 block size in bytes
pub const CHACHA20_BLOCK_SIZE: usize = 64;

/// Nonce used by the sampling PRF: an ASCII domain tag, zero padded
pub const PRF_DOMAIN_NONCE: [u8; CHACHA20_NONCE_SIZE] = *b"BIKE-PRF\0\0\0\0";
