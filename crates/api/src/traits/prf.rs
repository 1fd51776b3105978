//! Trait definition for the keyed pseudorandom byte stream
//!
//! The sampler never talks to a cipher directly. Everything it consumes is
//! pulled through [`PrfStream::draw`], which lets the concrete engine be
//! swapped (or replaced by a failing double in tests) without touching the
//! sampling logic.

use crate::Result;
use zeroize::Zeroize;

/// A deterministic keyed byte stream derived from a secret seed.
///
/// # Security Requirements
/// - The output must be indistinguishable from random for anyone not
///   holding the seed.
/// - Key material must be erased by [`Zeroize`]; implementors should also
///   derive `ZeroizeOnDrop` so erasure happens on every exit path.
/// - After [`cleanup`](PrfStream::cleanup) every further draw must fail.
pub trait PrfStream: Zeroize {
    /// Fill `out` with the next `out.len()` bytes of the stream.
    ///
    /// Implementations rekey transparently when their invocation budget is
    /// spent. An error is fatal to the current sampling call.
    fn draw(&mut self, out: &mut [u8]) -> Result<()>;

    /// Erase key material. The state is unusable afterwards.
    fn cleanup(&mut self) {
        self.zeroize();
    }
}
