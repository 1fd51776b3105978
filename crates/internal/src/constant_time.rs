//! Constant-time operations to prevent timing attacks

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise. Slices of
/// different length compare unequal immediately; lengths are public.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return false;
    }

    a.ct_eq(b).into()
}

/// All-ones `u64` mask when `a == b`, zero otherwise
#[inline]
pub fn ct_eq_mask_u64(a: u64, b: u64) -> u64 {
    u64::conditional_select(&0, &u64::MAX, a.ct_eq(&b))
}

/// All-ones `u8` mask when `condition` is set, zero otherwise
#[inline]
pub fn ct_mask(condition: Choice) -> u8 {
    0u8.wrapping_sub(condition.unwrap_u8())
}

/// Parity of a population count as a `Choice` (1 when odd)
#[inline]
pub fn ct_is_odd(count: usize) -> Choice {
    Choice::from((count & 1) as u8)
}
