//! Sparse-support, error-vector and uniform bit-string sampling
//!
//! Every output buffer lives in a type that zeroizes itself on drop, and every
//! PRF keyed here is dropped (and thereby erased) before the call returns,
//! whether it succeeds or fails.

use core::fmt;
use core::marker::PhantomData;

use algorithms::bitvec::{
    clear_padding, ct_flip_low_bit, get_bit, hamming_weight, is_padding_clear, mask_last_byte,
    secure_set_bits,
};
use api::PrfStream;
use internal::constant_time::{ct_eq, ct_is_odd};
use tracing::instrument;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::config::SamplerConfig;
use super::indices::generate_indices_mod_z;
use super::params::{check_params, BikeParams, ByteStorage, IndexStorage};
use super::seed::Seed;
use super::uniqueness::UniquenessEngine;
use crate::error::{Error, Result};

/// One `R`-bit block stored in its padded buffer
///
/// Bits at position `R` and above are zero after every operation of this
/// crate.
pub struct PaddedR<P: BikeParams> {
    bytes: P::PaddedBytes,
}

impl<P: BikeParams> PaddedR<P> {
    /// An all-zero block
    pub fn zeroed() -> Self {
        Self {
            bytes: P::PaddedBytes::zeroed(),
        }
    }

    /// The whole padded buffer
    pub fn as_bytes(&self) -> &[u8] {
        self.bytes.as_ref()
    }

    /// The `R_BYTES` bytes that hold the block's bits
    pub fn logical_bytes(&self) -> &[u8] {
        &self.bytes.as_ref()[..P::R_BYTES]
    }

    pub(crate) fn as_mut_bytes(&mut self) -> &mut [u8] {
        self.bytes.as_mut()
    }

    /// Number of set bits
    pub fn weight(&self) -> usize {
        hamming_weight(self.as_bytes())
    }

    /// Bit `i`, for `i < R`
    pub fn bit(&self, i: usize) -> bool {
        i < P::R_BITS && get_bit(self.as_bytes(), i)
    }

    /// Whether every bit at or above `R` is zero
    pub fn is_padding_clear(&self) -> bool {
        is_padding_clear(self.as_bytes(), P::R_BITS)
    }

    /// Zero every bit at or above `R`
    pub fn clear_padding(&mut self) -> Result<()> {
        Ok(clear_padding(self.bytes.as_mut(), P::R_BITS)?)
    }
}

impl<P: BikeParams> Zeroize for PaddedR<P> {
    fn zeroize(&mut self) {
        self.bytes.zeroize();
    }
}

impl<P: BikeParams> Drop for PaddedR<P> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<P: BikeParams> ZeroizeOnDrop for PaddedR<P> {}

impl<P: BikeParams> Clone for PaddedR<P> {
    fn clone(&self) -> Self {
        Self {
            bytes: self.bytes.clone(),
        }
    }
}

impl<P: BikeParams> PartialEq for PaddedR<P> {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(self.as_bytes(), other.as_bytes())
    }
}

impl<P: BikeParams> Eq for PaddedR<P> {}

impl<P: BikeParams> fmt::Debug for PaddedR<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PaddedR<{}>([REDACTED])", P::NAME)
    }
}

/// Error vector of length `2R` split into two padded blocks
pub struct ErrorVector<P: BikeParams> {
    e0: PaddedR<P>,
    e1: PaddedR<P>,
}

impl<P: BikeParams> ErrorVector<P> {
    fn zeroed() -> Self {
        Self {
            e0: PaddedR::zeroed(),
            e1: PaddedR::zeroed(),
        }
    }

    /// Positions `0..R`
    pub fn e0(&self) -> &PaddedR<P> {
        &self.e0
    }

    /// Positions `R..2R`
    pub fn e1(&self) -> &PaddedR<P> {
        &self.e1
    }

    /// Combined weight of both blocks
    pub fn weight(&self) -> usize {
        self.e0.weight() + self.e1.weight()
    }

    /// Bit at position `pos` of the full `2R`-bit vector
    pub fn bit(&self, pos: usize) -> bool {
        if pos < P::R_BITS {
            self.e0.bit(pos)
        } else {
            self.e1.bit(pos - P::R_BITS)
        }
    }

    /// Whether both blocks have clean padding
    pub fn is_padding_clear(&self) -> bool {
        self.e0.is_padding_clear() && self.e1.is_padding_clear()
    }
}

impl<P: BikeParams> Zeroize for ErrorVector<P> {
    fn zeroize(&mut self) {
        self.e0.zeroize();
        self.e1.zeroize();
    }
}

impl<P: BikeParams> ZeroizeOnDrop for ErrorVector<P> {}

impl<P: BikeParams> Clone for ErrorVector<P> {
    fn clone(&self) -> Self {
        Self {
            e0: self.e0.clone(),
            e1: self.e1.clone(),
        }
    }
}

impl<P: BikeParams> PartialEq for ErrorVector<P> {
    fn eq(&self, other: &Self) -> bool {
        self.e0 == other.e0 && self.e1 == other.e1
    }
}

impl<P: BikeParams> Eq for ErrorVector<P> {}

impl<P: BikeParams> fmt::Debug for ErrorVector<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ErrorVector<{}>([REDACTED])", P::NAME)
    }
}

/// Index list in fixed-capacity storage
///
/// Only the first `len` entries are meaningful; the rest stay zero.
pub struct IndexList<P: BikeParams> {
    buffer: P::IndexBuffer,
    len: usize,
}

impl<P: BikeParams> IndexList<P> {
    fn zeroed() -> Self {
        Self {
            buffer: P::IndexBuffer::zeroed(),
            len: 0,
        }
    }

    /// The meaningful entries
    pub fn as_slice(&self) -> &[u32] {
        &self.buffer.as_ref()[..self.len]
    }

    /// Number of meaningful entries
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list holds no entries
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total capacity, a multiple of the widest batch
    pub fn capacity(&self) -> usize {
        self.buffer.as_ref().len()
    }
}

impl<P: BikeParams> Zeroize for IndexList<P> {
    fn zeroize(&mut self) {
        self.buffer.zeroize();
        self.len = 0;
    }
}

impl<P: BikeParams> Drop for IndexList<P> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<P: BikeParams> ZeroizeOnDrop for IndexList<P> {}

impl<P: BikeParams> Clone for IndexList<P> {
    fn clone(&self) -> Self {
        Self {
            buffer: self.buffer.clone(),
            len: self.len,
        }
    }
}

impl<P: BikeParams> fmt::Debug for IndexList<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IndexList<{}>(len = {}, [REDACTED])", P::NAME, self.len)
    }
}

/// Weight-`D` block together with the indices of its set bits
pub struct SparseSupport<P: BikeParams> {
    vector: PaddedR<P>,
    indices: IndexList<P>,
}

impl<P: BikeParams> SparseSupport<P> {
    /// Dense form
    pub fn vector(&self) -> &PaddedR<P> {
        &self.vector
    }

    /// Positions of the set bits, in draw order
    pub fn indices(&self) -> &[u32] {
        self.indices.as_slice()
    }

    /// Whether the dense form has exactly one set bit per index
    pub fn is_consistent(&self) -> bool {
        self.vector.weight() == self.indices.len()
            && self.indices().iter().all(|&i| self.vector.bit(i as usize))
    }
}

impl<P: BikeParams> Zeroize for SparseSupport<P> {
    fn zeroize(&mut self) {
        self.vector.zeroize();
        self.indices.zeroize();
    }
}

impl<P: BikeParams> ZeroizeOnDrop for SparseSupport<P> {}

impl<P: BikeParams> Clone for SparseSupport<P> {
    fn clone(&self) -> Self {
        Self {
            vector: self.vector.clone(),
            indices: self.indices.clone(),
        }
    }
}

impl<P: BikeParams> fmt::Debug for SparseSupport<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SparseSupport")
            .field("vector", &self.vector)
            .field("indices", &self.indices)
            .finish()
    }
}

/// Draw `D` distinct positions in `[0, R)` and set them in a fresh block
pub(crate) fn generate_sparse_rep<P, S>(
    prf: &mut S,
    engine: UniquenessEngine,
) -> Result<SparseSupport<P>>
where
    P: BikeParams,
    S: PrfStream + ?Sized,
{
    let mut indices = IndexList::<P>::zeroed();
    generate_indices_mod_z(indices.buffer.as_mut(), P::D, P::R_BITS, prf, engine)?;
    indices.len = P::D;

    let mut vector = PaddedR::<P>::zeroed();
    secure_set_bits(vector.as_mut_bytes(), 0, indices.as_slice())?;

    Ok(SparseSupport { vector, indices })
}

/// Draw `T` distinct positions in `[0, 2R)` and split them over two blocks
pub(crate) fn generate_error_vector<P: BikeParams>(
    seed: &Seed,
    config: &SamplerConfig,
) -> Result<ErrorVector<P>> {
    let mut prf = config.seeded_prf(seed)?;

    let mut indices = IndexList::<P>::zeroed();
    generate_indices_mod_z(indices.buffer.as_mut(), P::T, P::N_BITS, &mut prf, config.engine)?;
    indices.len = P::T;

    // Each block sees every index; positions belonging to the other block
    // either miss all words or land in the padding, which is cleared below.
    let mut e = ErrorVector::<P>::zeroed();
    secure_set_bits(e.e0.as_mut_bytes(), 0, indices.as_slice())?;
    secure_set_bits(e.e1.as_mut_bytes(), P::R_BITS, indices.as_slice())?;
    e.e0.clear_padding()?;
    e.e1.clear_padding()?;

    Ok(e)
}

/// Fill one block with PRF output, optionally forcing odd weight
pub(crate) fn sample_uniform_r_bits_with_prf<P, S>(prf: &mut S, must_be_odd: bool) -> Result<PaddedR<P>>
where
    P: BikeParams,
    S: PrfStream + ?Sized,
{
    let mut r = PaddedR::<P>::zeroed();
    prf.draw(&mut r.as_mut_bytes()[..P::R_BYTES])
        .map_err(Error::generation)?;
    mask_last_byte(r.as_mut_bytes(), P::R_BITS)?;

    if must_be_odd {
        let even = !ct_is_odd(r.weight());
        ct_flip_low_bit(r.as_mut_bytes(), even);
    }

    Ok(r)
}

pub(crate) fn sample_uniform_r_bits<P: BikeParams>(
    seed: &Seed,
    must_be_odd: bool,
    config: &SamplerConfig,
) -> Result<PaddedR<P>> {
    let mut prf = config.seeded_prf(seed)?;
    sample_uniform_r_bits_with_prf::<P, _>(&mut prf, must_be_odd)
}

/// Sampler for one parameter set
pub struct BikeSampler<P: BikeParams> {
    config: SamplerConfig,
    _params: PhantomData<fn() -> P>,
}

impl<P: BikeParams> BikeSampler<P> {
    /// Sampler with the detected engine and the parameter set's PRF budget
    pub fn new() -> Self {
        Self::with_config(SamplerConfig::for_params::<P>())
    }

    pub fn with_config(config: SamplerConfig) -> Self {
        Self {
            config,
            _params: PhantomData,
        }
    }

    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Error vector of weight `T` derived from `seed`
    #[instrument(level = "debug", skip_all, fields(params = P::NAME))]
    pub fn error_vector(&self, seed: &Seed) -> Result<ErrorVector<P>> {
        check_params::<P>()?;
        generate_error_vector::<P>(seed, &self.config)
    }

    /// Weight-`D` sparse support drawn from `prf`
    ///
    /// The caller owns `prf`; consecutive calls continue its stream.
    #[instrument(level = "debug", skip_all, fields(params = P::NAME))]
    pub fn sparse_support<S: PrfStream + ?Sized>(&self, prf: &mut S) -> Result<SparseSupport<P>> {
        check_params::<P>()?;
        generate_sparse_rep::<P, S>(prf, self.config.engine)
    }

    /// Uniform `R`-bit block derived from `seed`
    #[instrument(level = "debug", skip_all, fields(params = P::NAME, must_be_odd = must_be_odd))]
    pub fn uniform_bitstring(&self, seed: &Seed, must_be_odd: bool) -> Result<PaddedR<P>> {
        check_params::<P>()?;
        sample_uniform_r_bits::<P>(seed, must_be_odd, &self.config)
    }

    /// Uniform `R`-bit block drawn from a caller-owned PRF
    #[instrument(level = "debug", skip_all, fields(params = P::NAME, must_be_odd = must_be_odd))]
    pub fn uniform_bitstring_with_prf<S: PrfStream + ?Sized>(
        &self,
        prf: &mut S,
        must_be_odd: bool,
    ) -> Result<PaddedR<P>> {
        check_params::<P>()?;
        sample_uniform_r_bits_with_prf::<P, S>(prf, must_be_odd)
    }
}

impl<P: BikeParams> Default for BikeSampler<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: BikeParams> Clone for BikeSampler<P> {
    fn clone(&self) -> Self {
        Self::with_config(self.config)
    }
}

impl<P: BikeParams> fmt::Debug for BikeSampler<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BikeSampler")
            .field("params", &P::NAME)
            .field("config", &self.config)
            .finish()
    }
}

/// Error vector of weight `T` derived from `seed` with the default configuration
pub fn sample_error_vector<P: BikeParams>(seed: &Seed) -> Result<ErrorVector<P>> {
    BikeSampler::<P>::new().error_vector(seed)
}

/// Weight-`D` sparse support drawn from `prf` with the default configuration
pub fn sample_sparse_support<P, S>(prf: &mut S) -> Result<SparseSupport<P>>
where
    P: BikeParams,
    S: PrfStream + ?Sized,
{
    BikeSampler::<P>::new().sparse_support(prf)
}

/// Uniform `R`-bit block derived from `seed`; odd weight when `must_be_odd`
pub fn sample_uniform_bitstring<P: BikeParams>(seed: &Seed, must_be_odd: bool) -> Result<PaddedR<P>> {
    BikeSampler::<P>::new().uniform_bitstring(seed, must_be_odd)
}

/// Uniform `R`-bit block drawn from a caller-owned PRF
pub fn sample_uniform_bitstring_with_prf<P, S>(prf: &mut S, must_be_odd: bool) -> Result<PaddedR<P>>
where
    P: BikeParams,
    S: PrfStream + ?Sized,
{
    BikeSampler::<P>::new().uniform_bitstring_with_prf(prf, must_be_odd)
}
