//! Traits at the seams between the sampler and its collaborators

pub mod prf;

pub use prf::PrfStream;
