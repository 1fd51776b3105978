//! Constants for the BIKE key encapsulation mechanism

/// Size of a sampling seed in bytes
pub const BIKE_SEED_BYTES: usize = 32;

/// Number of seeds consumed by one key generation
pub const BIKE_NUM_OF_SEEDS: usize = 2;

/// Number of PRF blocks produced under one key before the PRF rekeys
///
/// The block counter of the underlying stream cipher is 32 bits wide, so
/// the budget can never exceed `2^32 - 1`.
pub const BIKE_MAX_PRF_INVOCATIONS: u64 = (1u64 << 32) - 1;

/// Dense vectors are padded to this many bytes (one 512-bit lane)
pub const BIKE_PADDING_ALIGN_BYTES: usize = 64;

/// Widest batch used by the uniqueness engine (16 x 32-bit lanes)
pub const BIKE_MAX_BATCH_LANES: usize = 16;

/// Bytes needed to hold `r_bits` bits
pub const fn r_bytes(r_bits: usize) -> usize {
    (r_bits + 7) / 8
}

/// Storage size of an `r_bits`-bit vector, padded to the lane alignment
pub const fn padded_r_bytes(r_bits: usize) -> usize {
    let bytes = r_bytes(r_bits);
    (bytes + BIKE_PADDING_ALIGN_BYTES - 1) / BIKE_PADDING_ALIGN_BYTES * BIKE_PADDING_ALIGN_BYTES
}

/// Mask keeping only the meaningful bits of the last byte of an `r_bits` vector
pub const fn last_r_byte_mask(r_bits: usize) -> u8 {
    let rem = r_bits % 8;
    if rem == 0 {
        0xFF
    } else {
        (1u8 << rem) - 1
    }
}

/// Capacity of an index list holding up to `count` entries
///
/// Rounded up to a whole number of the widest batch so that every batch
/// load stays inside the array.
pub const fn padded_index_capacity(count: usize) -> usize {
    (count + BIKE_MAX_BATCH_LANES - 1) / BIKE_MAX_BATCH_LANES * BIKE_MAX_BATCH_LANES
}

/// Index capacity shared by the private-key and error-vector samplers
pub const fn max_d_t(d: usize, t: usize) -> usize {
    padded_index_capacity(if d > t { d } else { t })
}

/// Structure containing a BIKE parameter set
pub struct BikeParamSet {
    /// Block length r (bits in each half)
    pub r_bits: usize,

    /// Column weight of each private-key block
    pub d: usize,

    /// Hamming weight of the error vector
    pub t: usize,
}

/// BIKE Level 1 parameters (NIST security category 1)
pub const BIKE_L1: BikeParamSet = BikeParamSet {
    r_bits: 12323,
    d: 71,
    t: 134,
};

/// BIKE Level 3 parameters (NIST security category 3)
pub const BIKE_L3: BikeParamSet = BikeParamSet {
    r_bits: 24659,
    d: 103,
    t: 199,
};

/// BIKE Level 5 parameters (NIST security category 5)
pub const BIKE_L5: BikeParamSet = BikeParamSet {
    r_bits: 40973,
    d: 137,
    t: 264,
};
