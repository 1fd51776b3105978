//! Duplicate detection for index lists under construction
//!
//! [`UniquenessEngine::is_new`] answers whether `list[ctr]` already occurs in
//! `list[..ctr]`. All strategies return the same answer for every input; they
//! differ only in how many prior entries they compare per step.
//!
//! The batch strategies broadcast the candidate into every lane, compare a
//! whole batch at once and fold the per-lane results into a bitmask. The
//! last batch is partial: lanes at or past `ctr % W` hold either the
//! candidate itself, later zero-filled capacity, or nothing at all, so the
//! mask is cut down to `(1 << (ctr % W)) - 1` before it is tested. Tail slots
//! are excluded by their position, never by their value.

use params::pqc::bike::BIKE_MAX_BATCH_LANES;

/// Strategy used to check a candidate index against the ones already drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UniquenessEngine {
    /// Compare one prior entry at a time
    Scalar,
    /// Portable compare over batches of 8 lanes
    Lanes8,
    /// Portable compare over batches of 16 lanes
    Lanes16,
    /// AVX2 compare over batches of 8 lanes
    ///
    /// Runs the portable 8-lane path where AVX2 is not available.
    Avx2,
}

impl UniquenessEngine {
    /// Every strategy, in no particular order
    pub const ALL: [UniquenessEngine; 4] = [
        UniquenessEngine::Scalar,
        UniquenessEngine::Lanes8,
        UniquenessEngine::Lanes16,
        UniquenessEngine::Avx2,
    ];

    /// Pick the fastest strategy the running CPU supports
    pub fn detect() -> Self {
        if Self::avx2_available() {
            UniquenessEngine::Avx2
        } else {
            UniquenessEngine::Lanes8
        }
    }

    /// Number of prior entries compared per step
    pub fn batch_width(self) -> usize {
        match self {
            UniquenessEngine::Scalar => 1,
            UniquenessEngine::Lanes8 | UniquenessEngine::Avx2 => 8,
            UniquenessEngine::Lanes16 => BIKE_MAX_BATCH_LANES,
        }
    }

    /// Whether this strategy runs natively rather than through a fallback
    pub fn is_native(self) -> bool {
        match self {
            UniquenessEngine::Avx2 => Self::avx2_available(),
            _ => true,
        }
    }

    /// True iff `list[ctr]` does not occur in `list[..ctr]`
    ///
    /// # Panics
    ///
    /// Panics if `ctr >= list.len()`.
    pub fn is_new(self, list: &[u32], ctr: usize) -> bool {
        match self {
            UniquenessEngine::Scalar => scalar_is_new(list, ctr),
            UniquenessEngine::Lanes8 => lanes_is_new::<8>(list, ctr),
            UniquenessEngine::Lanes16 => lanes_is_new::<BIKE_MAX_BATCH_LANES>(list, ctr),
            UniquenessEngine::Avx2 => {
                #[cfg(all(target_arch = "x86_64", feature = "simd", feature = "std"))]
                {
                    if Self::avx2_available() {
                        // SAFETY: AVX2 support was checked at runtime.
                        return unsafe { avx2::is_new(list, ctr) };
                    }
                }
                lanes_is_new::<8>(list, ctr)
            }
        }
    }

    #[cfg(all(target_arch = "x86_64", feature = "simd", feature = "std"))]
    fn avx2_available() -> bool {
        is_x86_feature_detected!("avx2")
    }

    #[cfg(not(all(target_arch = "x86_64", feature = "simd", feature = "std")))]
    fn avx2_available() -> bool {
        false
    }
}

impl Default for UniquenessEngine {
    fn default() -> Self {
        Self::detect()
    }
}

fn scalar_is_new(list: &[u32], ctr: usize) -> bool {
    let candidate = list[ctr];
    !list[..ctr].iter().any(|&v| v == candidate)
}

/// Bit `i` set iff `batch[i] == candidate`
#[inline]
fn batch_eq_mask<const W: usize>(batch: &[u32; W], candidate: u32) -> u32 {
    let lanes = [candidate; W];
    let mut mask = 0u32;
    for i in 0..W {
        mask |= ((batch[i] == lanes[i]) as u32) << i;
    }
    mask
}

/// Copy up to `W` entries starting at `base`, zero-filling past the end of `list`
#[inline]
fn load_tail<const W: usize>(list: &[u32], base: usize) -> [u32; W] {
    let mut tail = [0u32; W];
    let avail = (list.len() - base).min(W);
    tail[..avail].copy_from_slice(&list[base..base + avail]);
    tail
}

fn lanes_is_new<const W: usize>(list: &[u32], ctr: usize) -> bool {
    let candidate = list[ctr];
    let full = ctr / W;

    for chunk in list[..full * W].chunks_exact(W) {
        let mut batch = [0u32; W];
        batch.copy_from_slice(chunk);
        if batch_eq_mask(&batch, candidate) != 0 {
            return false;
        }
    }

    let rem = ctr % W;
    if rem == 0 {
        return true;
    }

    let tail = load_tail::<W>(list, full * W);
    batch_eq_mask(&tail, candidate) & ((1u32 << rem) - 1) == 0
}

#[cfg(all(target_arch = "x86_64", feature = "simd", feature = "std"))]
mod avx2 {
    use core::arch::x86_64::{
        __m256i, _mm256_castsi256_ps, _mm256_cmpeq_epi32, _mm256_loadu_si256,
        _mm256_movemask_ps, _mm256_set1_epi32,
    };

    const W: usize = 8;

    #[target_feature(enable = "avx2")]
    unsafe fn batch_eq_mask(batch: &[u32; W], candidate: __m256i) -> u32 {
        let v = _mm256_loadu_si256(batch.as_ptr() as *const __m256i);
        let eq = _mm256_cmpeq_epi32(v, candidate);
        _mm256_movemask_ps(_mm256_castsi256_ps(eq)) as u32
    }

    /// # Safety
    ///
    /// The CPU must support AVX2. Panics like the portable path when `ctr`
    /// is out of bounds.
    #[target_feature(enable = "avx2")]
    pub(super) unsafe fn is_new(list: &[u32], ctr: usize) -> bool {
        let candidate = _mm256_set1_epi32(list[ctr] as i32);
        let full = ctr / W;

        for chunk in list[..full * W].chunks_exact(W) {
            let mut batch = [0u32; W];
            batch.copy_from_slice(chunk);
            if batch_eq_mask(&batch, candidate) != 0 {
                return false;
            }
        }

        let rem = ctr % W;
        if rem == 0 {
            return true;
        }

        let tail = super::load_tail::<W>(list, full * W);
        batch_eq_mask(&tail, candidate) & ((1u32 << rem) - 1) == 0
    }
}
