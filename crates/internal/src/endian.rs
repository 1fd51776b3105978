//! Little-endian views over byte buffers
//!
//! Bit-vectors are stored as bytes with bit `i` at `bytes[i / 8] >> (i % 8)`.
//! Reading eight bytes little-endian gives the 64-bit word holding bits
//! `64 * w .. 64 * w + 63`, so word-level and byte-level views agree.

/// Read a u32 from the first four bytes of `bytes` (little-endian)
#[inline]
pub fn u32_from_le_bytes(bytes: &[u8; 4]) -> u32 {
    u32::from_le_bytes(*bytes)
}

/// Read the `word`-th little-endian u64 of `bytes`
///
/// Panics if the buffer is shorter than `8 * (word + 1)` bytes.
#[inline]
pub fn load_u64_le(bytes: &[u8], word: usize) -> u64 {
    let start = word * 8;
    let mut w = [0u8; 8];
    w.copy_from_slice(&bytes[start..start + 8]);
    u64::from_le_bytes(w)
}

/// Write `value` as the `word`-th little-endian u64 of `bytes`
#[inline]
pub fn store_u64_le(bytes: &mut [u8], word: usize, value: u64) {
    let start = word * 8;
    bytes[start..start + 8].copy_from_slice(&value.to_le_bytes());
}
