#![allow(dead_code)]

use std::collections::VecDeque;

use game_core::RngOracle;

/// Replays scripted unit draws, then yields `0.0` forever.
///
/// With `0.0` every roll hits, jitter sits at its lower bound, and random
/// picks land on the first candidate.
#[derive(Default)]
pub struct Script(VecDeque<f64>);

impl Script {
    pub fn new(draws: impl IntoIterator<Item = f64>) -> Self {
        Self(draws.into_iter().collect())
    }

    pub fn zeros() -> Self {
        Self::default()
    }
}

impl RngOracle for Script {
    fn unit(&mut self) -> f64 {
        self.0.pop_front().unwrap_or(0.0)
    }
}
