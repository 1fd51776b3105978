//! Seed acquisition
//!
//! Seeds come from any `CryptoRng + RngCore` source. Production callers pass
//! `OsRng`; deterministic test and KAT runs pass a seeded `ChaChaRng`.

use core::fmt;

use common::security::SecretBuffer;
use params::pqc::bike::{BIKE_NUM_OF_SEEDS, BIKE_SEED_BYTES};
use rand::{CryptoRng, RngCore};
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Error, Result};

/// A 32-byte secret sampling seed
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Seed(SecretBuffer<BIKE_SEED_BYTES>);

impl Seed {
    /// Wrap raw seed bytes
    pub fn from_bytes(bytes: [u8; BIKE_SEED_BYTES]) -> Self {
        Seed(SecretBuffer::new(bytes))
    }

    /// Copy a seed out of a slice of exactly 32 bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        SecretBuffer::from_slice(bytes)
            .map(Seed)
            .map_err(|_| Error::Parameter {
                name: "seed",
                reason: "must be exactly 32 bytes",
            })
    }

    /// Draw a fresh seed from `rng`
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self> {
        SecretBuffer::random(rng).map(Seed).map_err(Error::generation)
    }

    /// The seed as a secret key buffer
    pub fn as_secret(&self) -> &SecretBuffer<BIKE_SEED_BYTES> {
        &self.0
    }

    /// Raw seed bytes
    pub fn as_bytes(&self) -> &[u8; BIKE_SEED_BYTES] {
        self.0.as_array()
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Seed([REDACTED])")
    }
}

/// The seeds consumed by one key generation
#[derive(Clone, Debug, Zeroize, ZeroizeOnDrop)]
pub struct Seeds {
    seeds: [Seed; BIKE_NUM_OF_SEEDS],
}

impl Seeds {
    /// Seed for the private-key sampler
    pub fn first(&self) -> &Seed {
        &self.seeds[0]
    }

    /// Seed for the message / error-vector sampler
    pub fn second(&self) -> &Seed {
        &self.seeds[1]
    }

    /// All seeds in draw order
    pub fn as_slice(&self) -> &[Seed] {
        &self.seeds
    }
}

/// Fill both seeds of a key generation from `rng`
///
/// A failing source yields a generation error and no seeds.
pub fn get_seeds<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Seeds> {
    let first = Seed::random(rng)?;
    let second = Seed::random(rng)?;
    debug!(count = BIKE_NUM_OF_SEEDS, "seeds acquired");
    Ok(Seeds {
        seeds: [first, second],
    })
}
