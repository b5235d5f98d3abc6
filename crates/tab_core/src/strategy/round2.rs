//! Round 2: side-constrained, ordered by record and point differential.

use std::cmp::Ordering;

use tracing::info;

use super::{pair_side_constrained, stack_ladder, swap_ladder, PairingConfig};
use crate::error::TabError;
use crate::events::PairingEvents;
use crate::ladder::Ladder;
use crate::round::Round;
use crate::standings::TeamStanding;
use crate::swap::SwapCandidate;
use crate::team::Team;
use crate::PairingStrategy;

/// Every team switches sides from round 1. Combined strength is skipped:
/// after one round it says almost nothing.
#[derive(Debug)]
pub struct Round2Pairing {
    events: PairingEvents,
    stack_order: Ladder<TeamStanding>,
    closeness: Ladder<SwapCandidate>,
}

impl Round2Pairing {
    pub fn new(config: PairingConfig) -> Self {
        Self {
            events: PairingEvents::new(),
            stack_order: stack_ladder(false, config.higher_number_first),
            closeness: swap_ladder(false),
        }
    }
}

impl Default for Round2Pairing {
    fn default() -> Self {
        Self::new(PairingConfig::default())
    }
}

impl PairingStrategy for Round2Pairing {
    fn name(&self) -> &str {
        "Round 2"
    }

    fn pair(&mut self, teams: &[Team]) -> Result<Round, TabError> {
        let desirability =
            |a: &SwapCandidate, b: &SwapCandidate| self.swap_desirability(a, b);
        let (round, resolution) =
            pair_side_constrained(teams, &self.stack_order, &desirability, &self.events)?;
        info!(
            matches = round.num_matches(),
            swaps = resolution.swaps.len(),
            resolved = resolution.resolved,
            "paired round 2"
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
