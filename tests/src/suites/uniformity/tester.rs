// src/suites/uniformity/tester.rs
use bikesample_algorithms::ChaChaPrf;
use bikesample_kem::bike::{rand_mod_len, BikeParams, BikeSampler, Seed};
use bikesample_params::pqc::bike::BIKE_MAX_PRF_INVOCATIONS;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaChaRng;
use statrs::distribution::{ChiSquared, ContinuousCDF};

use super::error::{Result, UniformityError};
use crate::uniformity::UniformityConfig;

// Result of a chi-square goodness-of-fit test against the uniform distribution
#[derive(Debug, Clone)]
pub struct ChiSquareOutcome {
    pub statistic: f64,
    pub degrees_of_freedom: f64,
    pub p_value: f64,
    pub is_uniform: bool,
}

pub struct UniformityTester {
    pub config: UniformityConfig,
}

impl UniformityTester {
    pub fn new(config: UniformityConfig) -> Self {
        Self { config }
    }

    /// Pearson's statistic of `counts` against equal expected counts
    pub fn chi_square(&self, counts: &[u64]) -> Result<ChiSquareOutcome> {
        if counts.len() < 2 {
            return Err(UniformityError::TooFewBins(counts.len()));
        }

        let total: u64 = counts.iter().sum();
        let expected = total as f64 / counts.len() as f64;
        if expected < self.config.min_expected_per_bin {
            return Err(UniformityError::SparseBins {
                expected,
                min: self.config.min_expected_per_bin,
            });
        }

        let statistic: f64 = counts
            .iter()
            .map(|&c| {
                let d = c as f64 - expected;
                d * d / expected
            })
            .sum();

        let degrees_of_freedom = (counts.len() - 1) as f64;
        let dist = ChiSquared::new(degrees_of_freedom)
            .map_err(|e| UniformityError::Distribution(e.to_string()))?;
        let p_value = 1.0 - dist.cdf(statistic);

        Ok(ChiSquareOutcome {
            statistic,
            degrees_of_freedom,
            p_value,
            is_uniform: p_value >= self.config.alpha,
        })
    }

    /// Like [`chi_square`](Self::chi_square) but fails when uniformity is rejected
    pub fn assert_uniform(&self, counts: &[u64]) -> Result<ChiSquareOutcome> {
        let outcome = self.chi_square(counts)?;
        if !outcome.is_uniform {
            return Err(UniformityError::NotUniform {
                statistic: outcome.statistic,
                degrees_of_freedom: outcome.degrees_of_freedom,
                p_value: outcome.p_value,
            });
        }
        Ok(outcome)
    }

    /// Histogram of `num_samples` draws of `rand_mod_len(len)` under `seed`
    pub fn rand_mod_len_histogram(&self, seed: &Seed, len: u32) -> Result<Vec<u64>> {
        let mut prf = ChaChaPrf::init(BIKE_MAX_PRF_INVOCATIONS, seed.as_secret())?;
        let mut counts = vec![0u64; len as usize];
        for _ in 0..self.config.num_samples {
            let v = rand_mod_len(&mut prf, len)?;
            counts[v as usize] += 1;
        }
        Ok(counts)
    }

    /// How often each of the `2R` positions is set over `vectors` error vectors
    pub fn error_vector_position_histogram<P: BikeParams>(
        &self,
        rng_seed: u64,
        vectors: usize,
    ) -> Result<Vec<u64>> {
        let sampler = BikeSampler::<P>::new();
        let mut rng = ChaChaRng::seed_from_u64(rng_seed);
        let mut counts = vec![0u64; P::N_BITS];
        let mut bytes = [0u8; 32];

        for _ in 0..vectors {
            rng.fill_bytes(&mut bytes);
            let e = sampler.error_vector(&Seed::from_bytes(bytes))?;
            for (pos, count) in counts.iter_mut().enumerate() {
                if e.bit(pos) {
                    *count += 1;
                }
            }
        }
        Ok(counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_histogram_is_uniform() {
        let tester = UniformityTester::new(UniformityConfig::default());
        let outcome = tester.chi_square(&[100; 10]).unwrap();
        assert_eq!(outcome.statistic, 0.0);
        assert!(outcome.is_uniform);
    }

    #[test]
    fn test_skewed_histogram_is_rejected() {
        let tester = UniformityTester::new(UniformityConfig::default());
        let mut counts = [100u64; 10];
        counts[0] = 300;
        assert!(matches!(
            tester.assert_uniform(&counts),
            Err(UniformityError::NotUniform { .. })
        ));
    }

    #[test]
    fn test_sparse_histogram_is_refused() {
        let tester = UniformityTester::new(UniformityConfig::default());
        assert!(matches!(
            tester.chi_square(&[1, 2, 3]),
            Err(UniformityError::SparseBins { .. })
        ));
        assert!(matches!(
            tester.chi_square(&[10]),
            Err(UniformityError::TooFewBins(1))
        ));
    }
}
