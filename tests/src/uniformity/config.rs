// src/uniformity/config.rs

// Default configuration with thresholds
#[derive(Debug, Clone)]
pub struct UniformityConfig {
    pub alpha: f64,                 // reject uniformity below this p-value
    pub min_expected_per_bin: f64,  // chi-square approximation needs ~5
    pub num_samples: usize,
}

impl Default for UniformityConfig {
    fn default() -> Self {
        Self {
            alpha: 1e-4,
            min_expected_per_bin: 5.0,
            num_samples: 100_000,
        }
    }
}

// Builder methods for easy customization
impl UniformityConfig {
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_min_expected_per_bin(mut self, min: f64) -> Self {
        self.min_expected_per_bin = min;
        self
    }

    pub fn with_samples(mut self, samples: usize) -> Self {
        self.num_samples = samples;
        self
    }
}
