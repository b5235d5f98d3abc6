//! A single match between two teams on fixed sides.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ballot::Ballot;
use crate::error::TabError;
use crate::types::{Side, TeamId, MAX_BALLOTS};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pi: TeamId,
    delta: TeamId,
    ballots: Vec<Ballot>,
    played: bool,
}

impl Match {
    pub fn new(pi: TeamId, delta: TeamId) -> Self {
        Self {
            pi,
            delta,
            ballots: Vec::with_capacity(MAX_BALLOTS),
            played: false,
        }
    }

    pub fn pi(&self) -> TeamId {
        self.pi
    }

    pub fn delta(&self) -> TeamId {
        self.delta
    }

    pub fn team_on(&self, side: Side) -> TeamId {
        match side {
            Side::Pi => self.pi,
            Side::Delta => self.delta,
        }
    }

    pub fn contains(&self, team: TeamId) -> bool {
        team == self.pi || team == self.delta
    }

    pub fn ballots(&self) -> &[Ballot] {
        &self.ballots
    }

    pub fn is_played(&self) -> bool {
        self.played
    }

    /// Attaches a judge's ballot. The ballot must name this match's teams on
    /// the same sides, and a match never carries more than two ballots.
    pub fn add_ballot(&mut self, ballot: Ballot) -> Result<(), TabError> {
        if self.played {
            return Err(TabError::MatchAlreadyPlayed {
                pi: self.pi,
                delta: self.delta,
            });
        }
        if ballot.pi() != self.pi || ballot.delta() != self.delta {
            return Err(TabError::BallotMismatch {
                pi: self.pi,
                delta: self.delta,
                ballot_pi: ballot.pi(),
                ballot_delta: ballot.delta(),
            });
        }
        if self.ballots.len() >= MAX_BALLOTS {
            return Err(TabError::TooManyBallots {
                pi: self.pi,
                delta: self.delta,
            });
        }
        self.ballots.push(ballot);
        Ok(())
    }

    /// Records a ballot from its two point totals.
    pub fn score(&mut self, pi_total: i32, delta_total: i32) -> Result<(), TabError> {
        self.add_ballot(Ballot::new(self.pi, self.delta, pi_total, delta_total))
    }

    /// Removes the first ballot equal to `ballot`. Returns whether one was found.
    pub fn remove_ballot(&mut self, ballot: &Ballot) -> Result<bool, TabError> {
        if self.played {
            return Err(TabError::MatchAlreadyPlayed {
                pi: self.pi,
                delta: self.delta,
            });
        }
        match self.ballots.iter().position(|b| b == ballot) {
            Some(idx) => {
                self.ballots.remove(idx);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Flags the match as played and hands back the ballots that now belong
    /// in both teams' histories. Irreversible.
    pub(crate) fn mark_played(&mut self) -> Result<&[Ballot], TabError> {
        if self.played {
            return Err(TabError::MatchAlreadyPlayed {
                pi: self.pi,
                delta: self.delta,
            });
        }
        self.played = true;
        Ok(&self.ballots)
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P {} vs D {}", self.pi, self.delta)?;
        for ballot in &self.ballots {
            write!(f, " [{}-{}]", ballot.pi_total(), ballot.delta_total())?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "match_tests.rs"]
mod match_tests;
