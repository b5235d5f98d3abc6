//! Swaps: exchanges of two cards in a stack, used to resolve impermissibles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::types::{Side, TeamId};

/// An unordered pair of teams whose stack positions are exchanged.
///
/// The pair is stored lower id first, so `Swap::new(a, b, s)` and
/// `Swap::new(b, a, s)` are the same swap. Equality and hashing look at the
/// two teams only; the side records which stack the swap happened in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Swap {
    team1: TeamId,
    team2: TeamId,
    /// Stack the swap was made in; `None` for an unconstrained stack
    side: Option<Side>,
}

impl Swap {
    pub fn new(a: TeamId, b: TeamId, side: Option<Side>) -> Self {
        let (team1, team2) = if a <= b { (a, b) } else { (b, a) };
        Self { team1, team2, side }
    }

    pub fn team1(&self) -> TeamId {
        self.team1
    }

    pub fn team2(&self) -> TeamId {
        self.team2
    }

    pub fn side(&self) -> Option<Side> {
        self.side
    }

    pub fn contains(&self, team: TeamId) -> bool {
        team == self.team1 || team == self.team2
    }

    /// The partner of `team` in this swap.
    pub fn partner_of(&self, team: TeamId) -> Option<TeamId> {
        if team == self.team1 {
            Some(self.team2)
        } else if team == self.team2 {
            Some(self.team1)
        } else {
            None
        }
    }
}

impl PartialEq for Swap {
    fn eq(&self, other: &Self) -> bool {
        self.team1 == other.team1 && self.team2 == other.team2
    }
}

impl Eq for Swap {}

impl Hash for Swap {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.team1.hash(state);
        self.team2.hash(state);
    }
}

impl fmt::Display for Swap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} with {}", self.team1, self.team2)?;
        if let Some(side) = self.side {
            write!(f, " ({side})")?;
        }
        Ok(())
    }
}

/// How disruptive a candidate swap would be, measured against the current
/// stack. Smaller differences are closer swaps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwapMetrics {
    pub win_difference: f64,
    pub cs_difference: f64,
    pub pd_difference: f64,
    /// Sum of the two teams' current stack ranks
    pub rank_sum: usize,
}

/// A swap under consideration, with its metrics taken at search time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwapCandidate {
    pub swap: Swap,
    pub metrics: SwapMetrics,
}

impl SwapCandidate {
    pub fn side(&self) -> Option<Side> {
        self.swap.side()
    }

    /// Ordering key for the final side tie-break: delta-stack swaps first,
    /// then pi-stack, then unconstrained.
    pub fn side_priority(&self) -> f64 {
        match self.swap.side() {
            Some(Side::Delta) => 0.0,
            Some(Side::Pi) => 1.0,
            None => 2.0,
        }
    }
}

#[cfg(test)]
#[path = "swap_tests.rs"]
mod swap_tests;
