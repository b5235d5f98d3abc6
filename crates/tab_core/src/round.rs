//! One round of a tournament: its matches, its lock, and the pairer's list.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ballot::Ballot;
use crate::error::TabError;
use crate::matches::Match;
use crate::swap::Swap;
use crate::types::TeamId;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Round {
    matches: Vec<Match>,
    /// Swaps performed while resolving impermissibles, in order
    swaps: Vec<Swap>,
    pairing_locked: bool,
    played: bool,
}

impl Round {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_matches(matches: Vec<Match>) -> Self {
        Self {
            matches,
            ..Self::default()
        }
    }

    pub(crate) fn with_swaps(mut self, swaps: Vec<Swap>) -> Self {
        self.swaps = swaps;
        self
    }

    pub fn add_match(&mut self, m: Match) {
        self.matches.push(m);
    }

    /// Removes the match between the given teams. Returns the removed match.
    pub fn remove_match(&mut self, pi: TeamId, delta: TeamId) -> Option<Match> {
        let idx = self
            .matches
            .iter()
            .position(|m| m.pi() == pi && m.delta() == delta)?;
        Some(self.matches.remove(idx))
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn matches_mut(&mut self) -> &mut [Match] {
        &mut self.matches
    }

    pub fn num_matches(&self) -> usize {
        self.matches.len()
    }

    /// The match the given team plays in this round.
    pub fn match_for(&self, team: TeamId) -> Option<&Match> {
        self.matches.iter().find(|m| m.contains(team))
    }

    pub fn match_for_mut(&mut self, team: TeamId) -> Option<&mut Match> {
        self.matches.iter_mut().find(|m| m.contains(team))
    }

    /// Every team in the round, pi before delta, in match order.
    pub fn teams(&self) -> Vec<TeamId> {
        self.matches
            .iter()
            .flat_map(|m| [m.pi(), m.delta()])
            .collect()
    }

    /// The pairer's list: swaps made to resolve impermissibles.
    pub fn swaps(&self) -> &[Swap] {
        &self.swaps
    }

    pub fn is_pairing_locked(&self) -> bool {
        self.pairing_locked
    }

    /// Locks the pairing. The lock can only be set once.
    pub fn lock_pairing(&mut self) -> Result<(), TabError> {
        if self.pairing_locked {
            return Err(TabError::RoundAlreadyLocked);
        }
        self.pairing_locked = true;
        Ok(())
    }

    pub fn is_played(&self) -> bool {
        self.played
    }

    /// Marks every match and the round itself as played, returning the
    /// ballots that must be pushed into team histories.
    pub(crate) fn play(&mut self) -> Result<Vec<Ballot>, TabError> {
        if self.played {
            return Err(TabError::RoundAlreadyPlayed);
        }
        if !self.pairing_locked {
            return Err(TabError::RoundNotLocked);
        }
        if let Some(m) = self.matches.iter().find(|m| m.is_played()) {
            return Err(TabError::MatchAlreadyPlayed {
                pi: m.pi(),
                delta: m.delta(),
            });
        }
        let mut ballots = Vec::new();
        for m in &mut self.matches {
            ballots.extend_from_slice(m.mark_played()?);
        }
        self.played = true;
        Ok(ballots)
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, m) in self.matches.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{m}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "round_tests.rs"]
mod round_tests;
