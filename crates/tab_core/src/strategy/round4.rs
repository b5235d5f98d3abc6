//! Round 4 as paired at nationals: side-constrained, no brackets, no
//! protection, with combined strength in both ladders.

use std::cmp::Ordering;

use tracing::info;

use super::{pair_side_constrained, stack_ladder, swap_ladder, PairingConfig};
use crate::error::TabError;
use crate::events::{PairingEvent, PairingEvents};
use crate::ladder::Ladder;
use crate::round::Round;
use crate::standings::TeamStanding;
use crate::swap::SwapCandidate;
use crate::team::Team;
use crate::types::SWAP_ALERT_THRESHOLD;
use crate::PairingStrategy;

#[derive(Debug)]
pub struct Round4NationalsPairing {
    events: PairingEvents,
    stack_order: Ladder<TeamStanding>,
    closeness: Ladder<SwapCandidate>,
}

impl Round4NationalsPairing {
    pub fn new(config: PairingConfig) -> Self {
        Self {
            events: PairingEvents::new(),
            stack_order: stack_ladder(true, config.higher_number_first),
            closeness: swap_ladder(true),
        }
    }
}

impl Default for Round4NationalsPairing {
    fn default() -> Self {
        Self::new(PairingConfig::default())
    }
}

impl PairingStrategy for Round4NationalsPairing {
    fn name(&self) -> &str {
        "Round 4 (nationals)"
    }

    fn pair(&mut self, teams: &[Team]) -> Result<Round, TabError> {
        let desirability =
            |a: &SwapCandidate, b: &SwapCandidate| self.swap_desirability(a, b);
        let (round, resolution) =
            pair_side_constrained(teams, &self.stack_order, &desirability, &self.events)?;

        if resolution.swaps.len() >= SWAP_ALERT_THRESHOLD {
            self.events.report(PairingEvent::ExcessiveSwaps {
                swaps: resolution.swaps.clone(),
            });
        }

        info!(
            matches = round.num_matches(),
            swaps = resolution.swaps.len(),
            resolved = resolution.resolved,
            "paired round 4"
        );
        Ok(round)
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
