//! ChaCha stream cipher family

/// ChaCha20 as defined in RFC 8439
pub mod chacha20;
