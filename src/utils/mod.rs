//! Supporting helpers: deterministic sampling, hex dumps and batch encoding.

pub mod hex;
pub mod parallel;
pub mod randomness;
pub mod sample;

pub use randomness::DeterministicRng;
