//! A single summarized ballot: one judge's final score for each side.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::{Side, TeamId};

/// Immutable record of one judge's point totals for a match.
///
/// The per-team accessors panic when asked about a team that is not on the
/// ballot; that only happens if the caller's bookkeeping is broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ballot {
    pi: TeamId,
    delta: TeamId,
    pi_total: i32,
    delta_total: i32,
}

impl Ballot {
    pub fn new(pi: TeamId, delta: TeamId, pi_total: i32, delta_total: i32) -> Self {
        Self {
            pi,
            delta,
            pi_total,
            delta_total,
        }
    }

    pub fn pi(&self) -> TeamId {
        self.pi
    }

    pub fn delta(&self) -> TeamId {
        self.delta
    }

    pub fn pi_total(&self) -> i32 {
        self.pi_total
    }

    pub fn delta_total(&self) -> i32 {
        self.delta_total
    }

    pub fn pi_pd(&self) -> i32 {
        self.pi_total - self.delta_total
    }

    pub fn delta_pd(&self) -> i32 {
        self.delta_total - self.pi_total
    }

    pub fn involves(&self, team: TeamId) -> bool {
        team == self.pi || team == self.delta
    }

    /// Side the given team argued on this ballot.
    pub fn side_for(&self, team: TeamId) -> Side {
        if team == self.pi {
            Side::Pi
        } else if team == self.delta {
            Side::Delta
        } else {
            panic!("{self} does not belong to team {team}");
        }
    }

    /// Point differential from the given team's perspective.
    pub fn pd_for(&self, team: TeamId) -> i32 {
        match self.side_for(team) {
            Side::Pi => self.pi_pd(),
            Side::Delta => self.delta_pd(),
        }
    }

    pub fn total_for(&self, team: TeamId) -> i32 {
        match self.side_for(team) {
            Side::Pi => self.pi_total,
            Side::Delta => self.delta_total,
        }
    }

    pub fn opponent_for(&self, team: TeamId) -> TeamId {
        match self.side_for(team) {
            Side::Pi => self.delta,
            Side::Delta => self.pi,
        }
    }
}

impl fmt::Display for Ballot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ballot: {} ({}), {} ({})",
            self.pi, self.pi_total, self.delta, self.delta_total
        )
    }
}
