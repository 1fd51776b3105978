//! Runtime sampler configuration

use algorithms::ChaChaPrf;
use params::pqc::bike::BIKE_MAX_PRF_INVOCATIONS;

use super::params::BikeParams;
use super::seed::Seed;
use super::uniqueness::UniquenessEngine;
use crate::error::Result;

/// Tunables of a sampler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplerConfig {
    /// Duplicate-detection strategy for index sets
    pub engine: UniquenessEngine,
    /// PRF blocks drawn under one key before rekeying (`1..=2^32 - 1`)
    pub max_invocations: u64,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            engine: UniquenessEngine::detect(),
            max_invocations: BIKE_MAX_PRF_INVOCATIONS,
        }
    }
}

// Builder methods for easy customization
impl SamplerConfig {
    /// Detected engine with the parameter set's PRF budget
    pub fn for_params<P: BikeParams>() -> Self {
        Self {
            max_invocations: P::MAX_PRF_INVOCATIONS,
            ..Self::default()
        }
    }

    pub fn with_engine(mut self, engine: UniquenessEngine) -> Self {
        self.engine = engine;
        self
    }

    pub fn with_max_invocations(mut self, max_invocations: u64) -> Self {
        self.max_invocations = max_invocations;
        self
    }

    /// Key a PRF from `seed` with this configuration's budget
    pub fn seeded_prf(&self, seed: &Seed) -> Result<ChaChaPrf> {
        Ok(ChaChaPrf::init(self.max_invocations, seed.as_secret())?)
    }
}
