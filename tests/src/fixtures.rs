// src/fixtures.rs
//! Shared parameter sets and PRF doubles

use bikesample_api::{Error as CoreError, PrfStream, Result as CoreResult};
use bikesample_kem::bike::BikeParams;
use bikesample_params::pqc::bike::{max_d_t, padded_r_bytes};
use zeroize::Zeroize;

/// Small parameter set (R = 587, D = 15, T = 10) for fast scenario runs
pub struct Toy587;

impl BikeParams for Toy587 {
    const NAME: &'static str = "toy-587";
    const R_BITS: usize = 587;
    const D: usize = 15;
    const T: usize = 10;
    type PaddedBytes = [u8; padded_r_bytes(587)];
    type IndexBuffer = [u32; max_d_t(15, 10)];
}

/// PRF that serves `budget` bytes and then fails every draw
#[derive(Zeroize)]
pub struct FailingPrf {
    budget: usize,
    drawn: usize,
}

impl FailingPrf {
    pub fn after(budget: usize) -> Self {
        Self { budget, drawn: 0 }
    }
}

impl PrfStream for FailingPrf {
    fn draw(&mut self, out: &mut [u8]) -> CoreResult<()> {
        if self.drawn + out.len() > self.budget {
            return Err(CoreError::random_generation("failing prf", "budget exhausted"));
        }
        for (i, b) in out.iter_mut().enumerate() {
            *b = (self.drawn + i) as u8;
        }
        self.drawn += out.len();
        Ok(())
    }
}
