//! BIKE parameter definitions.

use params::pqc::bike as global_params;
use params::pqc::bike::{max_d_t, padded_r_bytes, r_bytes};
use zeroize::Zeroize;

use crate::error::{validate, Result};

/// Fixed-size zero-initialisable storage for a dense vector
pub trait ByteStorage: AsRef<[u8]> + AsMut<[u8]> + Zeroize + Clone + Send + Sync {
    /// All-zero storage
    fn zeroed() -> Self;
}

/// Fixed-size zero-initialisable storage for an index list
pub trait IndexStorage: AsRef<[u32]> + AsMut<[u32]> + Zeroize + Clone + Send + Sync {
    /// All-zero storage
    fn zeroed() -> Self;
}

impl<const N: usize> ByteStorage for [u8; N] {
    fn zeroed() -> Self {
        [0u8; N]
    }
}

impl<const N: usize> IndexStorage for [u32; N] {
    fn zeroed() -> Self {
        [0u32; N]
    }
}

/// Trait defining a BIKE parameter set.
///
/// The storage types fix every buffer size at compile time so the sampling
/// path never allocates.
pub trait BikeParams: Send + Sync + 'static {
    /// Algorithm name string.
    const NAME: &'static str;
    /// Block length r in bits.
    const R_BITS: usize;
    /// Weight of each private-key block.
    const D: usize;
    /// Weight of the error vector.
    const T: usize;

    /// Length of the error vector (two blocks).
    const N_BITS: usize = 2 * Self::R_BITS;
    /// Bytes holding the r meaningful bits.
    const R_BYTES: usize = r_bytes(Self::R_BITS);
    /// Storage size of one block, padded to the lane alignment.
    const R_PADDED_BYTES: usize = padded_r_bytes(Self::R_BITS);
    /// Default PRF budget in blocks per key.
    const MAX_PRF_INVOCATIONS: u64 = global_params::BIKE_MAX_PRF_INVOCATIONS;

    /// Storage of one padded block; must be `R_PADDED_BYTES` long.
    type PaddedBytes: ByteStorage;
    /// Storage of an index list; must hold at least `max(D, T)` entries.
    type IndexBuffer: IndexStorage;
}

/// Check that a parameter set is internally consistent
///
/// Called by every entry point so that a hand-written set with mismatched
/// storage fails with a parameter error instead of panicking mid-sample.
pub fn check_params<P: BikeParams>() -> Result<()> {
    validate::parameter(P::R_BITS != 0, "R_BITS", "must be non-zero")?;
    validate::parameter(
        P::N_BITS <= u32::MAX as usize,
        "R_BITS",
        "error-vector positions must fit in 32 bits",
    )?;
    validate::parameter(P::D != 0 && P::D <= P::R_BITS, "D", "must lie in 1..=R_BITS")?;
    validate::parameter(P::T != 0 && P::T <= P::N_BITS, "T", "must lie in 1..=2*R_BITS")?;

    let padded = P::PaddedBytes::zeroed();
    validate::parameter(
        padded.as_ref().len() == P::R_PADDED_BYTES,
        "PaddedBytes",
        "length must equal R_PADDED_BYTES",
    )?;

    let indices = P::IndexBuffer::zeroed();
    validate::capacity("IndexBuffer", indices.as_ref().len(), max_d_t(P::D, P::T))
}

/// BIKE security level 1.
pub struct Bike1;
impl BikeParams for Bike1 {
    const NAME: &'static str = "BIKE-L1";
    const R_BITS: usize = global_params::BIKE_L1.r_bits;
    const D: usize = global_params::BIKE_L1.d;
    const T: usize = global_params::BIKE_L1.t;
    type PaddedBytes = [u8; padded_r_bytes(global_params::BIKE_L1.r_bits)];
    type IndexBuffer = [u32; max_d_t(global_params::BIKE_L1.d, global_params::BIKE_L1.t)];
}

/// BIKE security level 3.
pub struct Bike3;
impl BikeParams for Bike3 {
    const NAME: &'static str = "BIKE-L3";
    const R_BITS: usize = global_params::BIKE_L3.r_bits;
    const D: usize = global_params::BIKE_L3.d;
    const T: usize = global_params::BIKE_L3.t;
    type PaddedBytes = [u8; padded_r_bytes(global_params::BIKE_L3.r_bits)];
    type IndexBuffer = [u32; max_d_t(global_params::BIKE_L3.d, global_params::BIKE_L3.t)];
}

/// BIKE security level 5.
pub struct Bike5;
impl BikeParams for Bike5 {
    const NAME: &'static str = "BIKE-L5";
    const R_BITS: usize = global_params::BIKE_L5.r_bits;
    const D: usize = global_params::BIKE_L5.d;
    const T: usize = global_params::BIKE_L5.t;
    type PaddedBytes = [u8; padded_r_bytes(global_params::BIKE_L5.r_bits)];
    type IndexBuffer = [u32; max_d_t(global_params::BIKE_L5.d, global_params::BIKE_L5.t)];
}
