//! Dense bit-vector helpers
//!
//! Vectors are byte slices with bit `i` at `bytes[i / 8] >> (i % 8)`. The
//! storage is usually longer than the logical length `r_bits`; everything
//! past `r_bits` is padding and must stay zero.

use internal::constant_time::{ct_eq_mask_u64, ct_mask};
use internal::endian::store_u64_le;
use params::pqc::bike::{last_r_byte_mask, r_bytes};
use subtle::Choice;

use crate::error::{validate, Result};

/// Write the bits listed in `indices` into `vector`, shifted down by `first_pos`
///
/// Every 64-bit word of `vector` is rewritten: bit `idx - first_pos` is set
/// for each index, all other bits are cleared. Indices below `first_pos` or
/// past the end of the vector wrap to positions no word matches and are
/// dropped. The memory access pattern depends only on `vector.len()` and
/// `indices.len()`, never on the index values.
pub fn secure_set_bits(vector: &mut [u8], first_pos: usize, indices: &[u32]) -> Result<()> {
    validate::word_aligned("bit vector", vector.len(), 8)?;

    let first = first_pos as u64;
    for word in 0..vector.len() / 8 {
        let mut acc = 0u64;
        for &idx in indices {
            let pos = u64::from(idx).wrapping_sub(first);
            let hit = ct_eq_mask_u64(pos >> 6, word as u64);
            acc |= hit & (1u64 << (pos & 63));
        }
        store_u64_le(vector, word, acc);
    }
    Ok(())
}

/// Number of set bits
pub fn hamming_weight(bytes: &[u8]) -> usize {
    bytes.iter().map(|b| b.count_ones() as usize).sum()
}

/// Read bit `i`
///
/// Panics if `i` is past the end of `bytes`.
#[inline]
pub fn get_bit(bytes: &[u8], i: usize) -> bool {
    (bytes[i / 8] >> (i % 8)) & 1 == 1
}

/// Clear the bits of the last meaningful byte that lie past `r_bits`
pub fn mask_last_byte(bytes: &mut [u8], r_bits: usize) -> Result<()> {
    validate::parameter(r_bits != 0, "r_bits", "must be non-zero")?;
    let len = r_bytes(r_bits);
    validate::min_length("bit vector", bytes.len(), len)?;
    bytes[len - 1] &= last_r_byte_mask(r_bits);
    Ok(())
}

/// Zero every bit at position `r_bits` or above
///
/// Idempotent: applying it to an already clean vector changes nothing.
pub fn clear_padding(bytes: &mut [u8], r_bits: usize) -> Result<()> {
    mask_last_byte(bytes, r_bits)?;
    for b in &mut bytes[r_bytes(r_bits)..] {
        *b = 0;
    }
    Ok(())
}

/// Whether every bit at position `r_bits` or above is zero
pub fn is_padding_clear(bytes: &[u8], r_bits: usize) -> bool {
    let len = r_bytes(r_bits);
    if r_bits == 0 || bytes.len() < len {
        return false;
    }
    bytes[len - 1] & !last_r_byte_mask(r_bits) == 0 && bytes[len..].iter().all(|&b| b == 0)
}

/// Flip bit 0 when `condition` is set, without branching on it
#[inline]
pub fn ct_flip_low_bit(bytes: &mut [u8], condition: Choice) {
    if let Some(first) = bytes.first_mut() {
        *first ^= ct_mask(condition) & 1;
    }
}
