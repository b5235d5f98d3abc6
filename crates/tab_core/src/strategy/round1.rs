//! Round 1: a shuffled stack, drawn from the end two cards at a time.

use std::cmp::Ordering;
use std::mem;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::error::TabError;
use crate::events::{PairingEvent, PairingEvents};
use crate::matches::Match;
use crate::round::Round;
use crate::standings::Standings;
use crate::swap::SwapCandidate;
use crate::team::Team;
use crate::types::TeamId;
use crate::PairingStrategy;

/// Random first-round pairing.
///
/// When the two drawn cards may not meet, the second goes back under the
/// stack and the next card is drawn, until every remaining card has been
/// tried. If that fails too, earlier matches are searched from the last one
/// backward for a delta team to trade with.
#[derive(Debug)]
pub struct Round1Pairing {
    rng: StdRng,
    events: PairingEvents,
}

impl Round1Pairing {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            events: PairingEvents::new(),
        }
    }

    /// Same shuffle for the same seed and field.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            events: PairingEvents::new(),
        }
    }
}

impl Default for Round1Pairing {
    fn default() -> Self {
        Self::new()
    }
}

impl PairingStrategy for Round1Pairing {
    fn name(&self) -> &str {
        "Round 1"
    }

    fn pair(&mut self, teams: &[Team]) -> Result<Round, TabError> {
        if teams.len() % 2 != 0 {
            return Err(TabError::OddTeamCount(teams.len()));
        }

        let standings = Standings::compute(teams);
        let mut stack: Vec<TeamId> = standings.ids().to_vec();
        stack.shuffle(&mut self.rng);

        let mut pis: Vec<TeamId> = Vec::with_capacity(stack.len() / 2);
        let mut deltas: Vec<TeamId> = Vec::with_capacity(stack.len() / 2);
        let mut unpairable = false;

        while let Some(team1) = stack.pop() {
            let Some(mut team2) = stack.pop() else {
                break;
            };

            let mut tries = 0;
            while !standings.permitted(team1, team2) && tries < stack.len() {
                stack.insert(0, team2);
                match stack.pop() {
                    Some(next) => team2 = next,
                    None => break,
                }
                tries += 1;
            }

            if !standings.permitted(team1, team2) {
                let trade = (0..pis.len()).rev().find(|&i| {
                    standings.permitted(team2, pis[i]) && standings.permitted(team1, deltas[i])
                });
                match trade {
                    Some(i) => {
                        debug!(%team1, %team2, with = %deltas[i], "traded delta with an earlier match");
                        mem::swap(&mut deltas[i], &mut team2);
                    }
                    None => unpairable = true,
                }
            }

            pis.push(team1);
            deltas.push(team2);
        }

        if unpairable {
            self.events.report(PairingEvent::Unpairable { swaps: Vec::new() });
        }

        let round = Round::from_matches(
            pis.into_iter()
                .zip(deltas)
                .map(|(pi, delta)| Match::new(pi, delta))
                .collect(),
        );
        info!(matches = round.num_matches(), unpairable, "paired round 1");
        Ok(round)
    }

    /// Round 1 never swaps, so no candidate is preferred.
    fn swap_desirability(&self, _a: &SwapCandidate, _b: &SwapCandidate) -> Ordering {
        Ordering::Equal
    }

    fn events(&self) -> &PairingEvents {
        &self.events
    }

    fn events_mut(&mut self) -> &mut PairingEvents {
        &mut self.events
    }
}
