//! Testing utilities for the bikesample library
pub mod fixtures;
pub mod suites;
pub mod uniformity;
