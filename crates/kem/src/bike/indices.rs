//! Uniform index sampling
//!
//! [`rand_mod_len`] draws a uniform value in `[0, len)` by masking 32-bit
//! PRF output down to the bit length of `len` and rejecting values that are
//! too large. [`generate_indices_mod_z`] repeats this until it has collected
//! the requested number of distinct indices.
//!
//! # Side channels
//!
//! Both loops run a data-dependent number of iterations. The count depends
//! on PRF output that is discarded, so it reveals how many candidates were
//! rejected or were duplicates, not the accepted values. This residual
//! timing channel is accepted; the bit placement that consumes the indices
//! ([`secure_set_bits`](algorithms::bitvec::secure_set_bits)) is constant
//! time.

use api::PrfStream;
use common::security::EphemeralSecret;
use internal::endian::u32_from_le_bytes;
use tracing::trace;
use zeroize::Zeroize;

use super::uniqueness::UniquenessEngine;
use crate::error::{validate, Error, Result};

/// Mask covering every significant bit of `len`
///
/// `len = 16` gives `0b11111`: the mask keeps `floor(log2(len)) + 1` bits.
#[inline]
pub fn sampling_mask(len: u32) -> u32 {
    u32::MAX >> len.leading_zeros()
}

/// Draw a uniform value in `[0, len)` from `prf`
///
/// `len` must be at least 1. A PRF failure is returned as a generation
/// error and ends the draw.
pub fn rand_mod_len<S: PrfStream + ?Sized>(prf: &mut S, len: u32) -> Result<u32> {
    validate::parameter(len != 0, "len", "range must not be empty")?;
    let mask = sampling_mask(len);

    let mut bytes = EphemeralSecret::new([0u8; 4]);
    loop {
        prf.draw(&mut bytes[..]).map_err(Error::generation)?;
        let value = u32_from_le_bytes(&bytes) & mask;
        if value < len {
            return Ok(value);
        }
    }
}

/// Fill `out[..num_indices]` with distinct uniform indices in `[0, z)`
///
/// Candidates are written to `out[ctr]` and kept only if `engine` reports
/// them as new. Entries of `out` past `num_indices` are only read as batch
/// padding, never written. Requests that could never complete (a buffer
/// shorter than `num_indices`, an empty or oversized range, or more indices
/// than the range holds) fail before any draw. On a PRF failure the whole
/// buffer is zeroized before the error is returned.
pub fn generate_indices_mod_z<S: PrfStream + ?Sized>(
    out: &mut [u32],
    num_indices: usize,
    z: usize,
    prf: &mut S,
    engine: UniquenessEngine,
) -> Result<()> {
    validate::capacity("out", out.len(), num_indices)?;
    validate::parameter(z != 0, "z", "range must not be empty")?;
    validate::parameter(z <= u32::MAX as usize, "z", "range must fit in 32 bits")?;
    validate::parameter(num_indices <= z, "num_indices", "exceeds the range size")?;

    let len = z as u32;
    let mut ctr = 0;
    while ctr < num_indices {
        match rand_mod_len(prf, len) {
            Ok(candidate) => out[ctr] = candidate,
            Err(e) => {
                out.zeroize();
                return Err(e);
            }
        }
        if engine.is_new(out, ctr) {
            ctr += 1;
        }
    }

    trace!(num_indices, z, ?engine, "index set generated");
    Ok(())
}
