//! Keyed pseudorandom byte stream used by the samplers
//!
//! [`ChaChaPrf`] is a ChaCha20 keystream keyed directly by a 32-byte seed,
//! with a fixed domain-separation nonce. After `max_invocations` blocks
//! under one key it rekeys from its own next block and continues, so a
//! caller only ever sees one uninterrupted stream.

mod chacha;

pub use chacha::ChaChaPrf;
