//! Round 3: one stack, no side constraint.

use std::cmp::Ordering;

use tracing::info;

use super::{sort_stack, stack_ladder, swap_ladder, PairingConfig};
use crate::error::TabError;
use crate::events::PairingEvents;
use crate::ladder::Ladder;
use crate::matches::Match;
use crate::resolve::Resolver;
use crate::round::Round;
use crate::standings::{Standings, TeamStanding};
use crate::swap::SwapCandidate;
use crate::team::Team;
use crate::types::TeamId;
use crate::PairingStrategy;

/// Sides are free in round 3: the stack is paired top down and each pair's
/// side is decided by the column it sits in.
#[derive(Debug)]
pub struct Round3Pairing {
    pi_in_left_column: bool,
    events: PairingEvents,
    stack_order: Ladder<TeamStanding>,
    closeness: Ladder<SwapCandidate>,
}

impl Round3Pairing {
    pub fn new(config: PairingConfig) -> Self {
        Self {
            pi_in_left_column: config.pi_in_left_column,
            events: PairingEvents::new(),
            stack_order: stack_ladder(true, config.higher_number_first),
            closeness: swap_ladder(true),
        }
    }
}

impl Default for Round3Pairing {
    fn default() -> Self {
        Self::new(PairingConfig::default())
    }
}

impl PairingStrategy for Round3Pairing {
    fn name(&self) -> &str {
        "Round 3"
    }

    fn pair(&mut self, teams: &[Team]) -> Result<Round, TabError> {
        if teams.len() % 2 != 0 {
            return Err(TabError::OddTeamCount(teams.len()));
        }

        let standings = Standings::compute(teams);
        let mut stack: Vec<TeamId> = standings.ids().to_vec();
        sort_stack(&mut stack, &standings, &self.stack_order);

        let desirability =
            |a: &SwapCandidate, b: &SwapCandidate| self.swap_desirability(a, b);
        let resolution = Resolver::new(&standings, &desirability, &self.events)
            .unconstrained(&mut stack);

        let mut round = Round::new();
        for pair in stack.chunks(2) {
            let (left, right) = (pair[0], pair[1]);
            debug_assert!(
                !resolution.resolved || standings.permitted(left, right),
                "impermissibles paired after resolution"
            );
            let m = if self.pi_in_left_column {
                Match::new(left, right)
            } else {
                Match::new(right, left)
            };
            round.add_match(m);
        }

        info!(
            matches = round.num_matches(),
            swaps = resolution.swaps.len(),
            resolved = resolution.resolved,
            "paired round 3"
        );
        Ok(round.with_swaps(resolution.swaps))
    }

    fn swap_desirability(&self, a: &SwapCandidate, b: &SwapCandidate) -> Ordering {
        self.closeness.compare(a, b)
    }

    fn events(&self) -> &PairingEvents {
        &self.events
    }

    fn events_mut(&mut self) -> &mut PairingEvents {
        &mut self.events
    }
}
