use serde::{Deserialize, Serialize};
use std::fmt;

/// Absorbs rounding in fractional win and strength values when comparing.
pub const TOLERANCE: f64 = 0.01;

/// Most ballots a single match can carry.
pub const MAX_BALLOTS: usize = 2;

/// Highest number of extreme ballots dropped by the PD and points tie-breaks.
pub const MAX_DROP: usize = 3;

/// Swap count at which a round-4 pairing is reported as excessive.
pub const SWAP_ALERT_THRESHOLD: usize = 25;

/// Unique team number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TeamId(pub u32);

impl TeamId {
    pub fn number(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Side of the case a team argues in a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Prosecution / plaintiff
    Pi,
    /// Defense
    Delta,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Pi => Side::Delta,
            Side::Delta => Side::Pi,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Pi => write!(f, "P"),
            Side::Delta => write!(f, "D"),
        }
    }
}
