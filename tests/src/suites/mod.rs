// src/suites/mod.rs
pub mod uniformity;
