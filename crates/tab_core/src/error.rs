//! State errors raised by illegal operations on the tournament state machine.
//!
//! These are always caller-recoverable: they signal a usage mistake that has
//! to be corrected before retrying. Degraded pairing outcomes are reported
//! through [`crate::PairingEvent`] instead, and internal invariant violations
//! panic.

use thiserror::Error;

use crate::types::TeamId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TabError {
    #[error("Attempting to set lock on a previously locked round")]
    RoundAlreadyLocked,

    #[error("Attempting to discard a locked round")]
    DiscardLockedRound,

    #[error("Round must be locked before its ballots are committed")]
    RoundNotLocked,

    #[error("Round has already been played")]
    RoundAlreadyPlayed,

    #[error("Match {pi} vs {delta} has already been played")]
    MatchAlreadyPlayed { pi: TeamId, delta: TeamId },

    #[error("Round {round} has not been played yet")]
    PreviousRoundUnplayed { round: usize },

    #[error("Tournament has no rounds")]
    NoCurrentRound,

    #[error("Tournament teams and round teams don't match")]
    TeamSetMismatch,

    #[error("Unknown team {0}")]
    UnknownTeam(TeamId),

    #[error("Team {0} is already registered")]
    DuplicateTeam(TeamId),

    #[error("Cannot pair an odd number of teams ({0})")]
    OddTeamCount(usize),

    #[error("Team {0} has no side history to constrain the next round")]
    MissingSideHistory(TeamId),

    #[error("Side stacks are unbalanced: {pi} need pi, {delta} need delta")]
    UnbalancedSides { pi: usize, delta: usize },

    #[error("Match {pi} vs {delta} already holds the maximum number of ballots")]
    TooManyBallots { pi: TeamId, delta: TeamId },

    #[error("Ballot for {ballot_pi} vs {ballot_delta} does not belong to match {pi} vs {delta}")]
    BallotMismatch {
        pi: TeamId,
        delta: TeamId,
        ballot_pi: TeamId,
        ballot_delta: TeamId,
    },
}
