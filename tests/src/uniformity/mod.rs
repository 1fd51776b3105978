// src/uniformity/mod.rs
pub mod config;

pub use config::UniformityConfig;
