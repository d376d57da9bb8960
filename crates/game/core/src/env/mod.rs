//! External sources the rules consult but do not own.
//!
//! Randomness is the only one: hit rolls, damage jitter, and boss choices all
//! draw from a single [`RngOracle`] so that tests and replays can swap in a
//! deterministic generator.
mod rng;

pub use rng::{RngOracle, StdRngOracle};
