pub mod lighting;
pub mod rng;
pub mod starfield;
