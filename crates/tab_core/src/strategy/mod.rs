//! Pairing strategies, one per round type.
//!
//! Every automatic strategy has the same shape: snapshot the standings,
//! build the card stack(s), sort them with the round's stack ladder, let the
//! [`Resolver`] clear impermissibles using the round's swap ladder, then turn
//! the stacks into matches.

mod manual;
mod round1;
mod round2;
mod round3;
mod round4;

pub use manual::ManualPairing;
pub use round1::Round1Pairing;
pub use round2::Round2Pairing;
pub use round3::Round3Pairing;
pub use round4::Round4NationalsPairing;

use serde::{Deserialize, Serialize};

use crate::error::TabError;
use crate::events::PairingEvents;
use crate::ladder::{Direction, Ladder};
use crate::matches::Match;
use crate::resolve::{Resolution, Resolver, SwapComparator};
use crate::round::Round;
use crate::standings::{Standings, TeamStanding};
use crate::swap::SwapCandidate;
use crate::team::Team;
use crate::types::{Side, TeamId, TOLERANCE};

/// Tabulation conventions shared by the automatic strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PairingConfig {
    /// When records are fully tied, the higher team number takes the better
    /// card position
    pub higher_number_first: bool,
    /// In round 3 the left card of each pair argues pi
    pub pi_in_left_column: bool,
}

impl Default for PairingConfig {
    fn default() -> Self {
        Self {
            higher_number_first: true,
            pi_in_left_column: true,
        }
    }
}

/// Card-stack order: record, optionally combined strength, point
/// differential, then team number.
pub fn stack_ladder(with_strength: bool, higher_number_first: bool) -> Ladder<TeamStanding> {
    let mut ladder = Ladder::new().desc("wins", |t: &TeamStanding| t.wins);
    if with_strength {
        ladder = ladder.desc("combined strength", |t: &TeamStanding| t.combined_strength);
    }
    let number_direction = if higher_number_first {
        Direction::Descending
    } else {
        Direction::Ascending
    };
    ladder
        .desc("point differential", |t: &TeamStanding| {
            f64::from(t.point_differential)
        })
        .then("team number", number_direction, TOLERANCE, |t: &TeamStanding| {
            f64::from(t.id.number())
        })
}

/// Swap closeness: smallest record gap, optionally smallest CS gap, smallest
/// PD gap, then the largest rank sum (disturb the bottom of the stack rather
/// than the top), then delta-stack swaps before pi-stack swaps.
pub fn swap_ladder(with_strength: bool) -> Ladder<SwapCandidate> {
    let mut ladder =
        Ladder::new().asc("win difference", |c: &SwapCandidate| c.metrics.win_difference);
    if with_strength {
        ladder = ladder.asc("cs difference", |c: &SwapCandidate| c.metrics.cs_difference);
    }
    ladder
        .asc("pd difference", |c: &SwapCandidate| c.metrics.pd_difference)
        .desc("rank sum", |c: &SwapCandidate| c.metrics.rank_sum as f64)
        .asc("side", |c: &SwapCandidate| c.side_priority())
}

pub(crate) fn sort_stack(
    stack: &mut [TeamId],
    standings: &Standings,
    ladder: &Ladder<TeamStanding>,
) {
    stack.sort_by(|a, b| ladder.compare(standings.get(*a), standings.get(*b)));
}

/// Splits the field by the side each team needs next: whoever argued pi
/// last round goes delta, and the reverse.
pub(crate) fn side_stacks(
    standings: &Standings,
) -> Result<(Vec<TeamId>, Vec<TeamId>), TabError> {
    let mut needs_pi = Vec::with_capacity(standings.len() / 2);
    let mut needs_delta = Vec::with_capacity(standings.len() / 2);
    for &id in standings.ids() {
        match standings.get(id).last_side {
            Some(Side::Pi) => needs_delta.push(id),
            Some(Side::Delta) => needs_pi.push(id),
            None => return Err(TabError::MissingSideHistory(id)),
        }
    }
    if needs_pi.len() != needs_delta.len() {
        return Err(TabError::UnbalancedSides {
            pi: needs_pi.len(),
            delta: needs_delta.len(),
        });
    }
    Ok((needs_pi, needs_delta))
}

/// Shared body of the side-constrained rounds.
pub(crate) fn pair_side_constrained(
    teams: &[Team],
    stack_order: &Ladder<TeamStanding>,
    desirability: SwapComparator<'_>,
    events: &PairingEvents,
) -> Result<(Round, Resolution), TabError> {
    let standings = Standings::compute(teams);
    let (mut needs_pi, mut needs_delta) = side_stacks(&standings)?;
    sort_stack(&mut needs_pi, &standings, stack_order);
    sort_stack(&mut needs_delta, &standings, stack_order);

    let resolution = Resolver::new(&standings, desirability, events)
        .side_constrained(&mut needs_pi, &mut needs_delta);

    let mut round = Round::new();
    for (&pi, &delta) in needs_pi.iter().zip(&needs_delta) {
        debug_assert!(
            !resolution.resolved || standings.permitted(pi, delta),
            "impermissibles paired after resolution"
        );
        round.add_match(Match::new(pi, delta));
    }
    Ok((round.with_swaps(resolution.swaps.clone()), resolution))
}

#[cfg(test)]
#[path = "strategy_tests.rs"]
mod strategy_tests;
