// src/suites/uniformity/mod.rs
//! Chi-square goodness-of-fit checks for the samplers

pub mod error;
pub mod tester;

pub use error::{Result, UniformityError};
pub use tester::{ChiSquareOutcome, UniformityTester};
