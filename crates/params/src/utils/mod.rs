//! Utility constants shared by the primitives

pub mod symmetric;
