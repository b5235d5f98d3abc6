//! Coin flips for the last-resort tie-break.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoinFace {
    Heads,
    Tails,
}

/// Source of coin flips. `message` says what the flip decides, `heads` and
/// `tails` what each outcome means, so an interactive implementation can ask
/// a tournament director.
pub trait CoinFlip {
    fn flip(&mut self, message: &str, heads: &str, tails: &str) -> CoinFace;
}

/// Flips a fair coin with a pseudo-random generator.
#[derive(Debug, Clone)]
pub struct RandomFlip {
    rng: StdRng,
}

impl RandomFlip {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomFlip {
    fn default() -> Self {
        Self::new()
    }
}

impl CoinFlip for RandomFlip {
    fn flip(&mut self, _message: &str, _heads: &str, _tails: &str) -> CoinFace {
        if self.rng.gen_bool(0.5) {
            CoinFace::Heads
        } else {
            CoinFace::Tails
        }
    }
}

/// Plays back a fixed sequence of faces, then heads forever.
#[derive(Debug, Clone, Default)]
pub struct ScriptedFlip {
    faces: VecDeque<CoinFace>,
    flips: usize,
}

impl ScriptedFlip {
    pub fn new(faces: impl IntoIterator<Item = CoinFace>) -> Self {
        Self {
            faces: faces.into_iter().collect(),
            flips: 0,
        }
    }

    /// Number of flips requested so far.
    pub fn flips(&self) -> usize {
        self.flips
    }
}

impl CoinFlip for ScriptedFlip {
    fn flip(&mut self, _message: &str, _heads: &str, _tails: &str) -> CoinFace {
        self.flips += 1;
        self.faces.pop_front().unwrap_or(CoinFace::Heads)
    }
}

#[cfg(test)]
#[path = "coin_flip_tests.rs"]
mod coin_flip_tests;
