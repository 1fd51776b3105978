//! Constant values for bikesample
//!
//! Every buffer in the sampling path is a fixed-size array sized from the
//! constants in this crate, so they are all `const` and usable in array
//! lengths.

#![no_std]

// Post-quantum algorithm constants
pub mod pqc;

// Utility constants
pub mod utils;
