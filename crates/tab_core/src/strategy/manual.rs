//! Matches entered by hand.

use std::cmp::Ordering;

use tracing::info;

use crate::error::TabError;
use crate::events::PairingEvents;
use crate::matches::Match;
use crate::round::Round;
use crate::swap::SwapCandidate;
use crate::team::Team;
use crate::types::TeamId;
use crate::PairingStrategy;

/// Pairs exactly the matches it was given. Permissibility is the tab
/// director's call here; the only check is that every team plays once.
#[derive(Debug, Default)]
pub struct ManualPairing {
    matches: Vec<Match>,
    events: PairingEvents,
}

impl ManualPairing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_matches(matches: impl IntoIterator<Item = Match>) -> Self {
        Self {
            matches: matches.into_iter().collect(),
            events: PairingEvents::new(),
        }
    }

    pub fn add_match(&mut self, m: Match) {
        self.matches.push(m);
    }

    /// Removes the match between `pi` and `delta`, if present.
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

    pub fn num_matches(&self) -> usize {
        self.matches.len()
    }

    /// Every team in the entered matches, duplicates included.
    pub fn teams(&self) -> Vec<TeamId> {
        self.matches
            .iter()
            .flat_map(|m| [m.pi(), m.delta()])
            .collect()
    }
}

impl PairingStrategy for ManualPairing {
    fn name(&self) -> &str {
        "Manual"
    }

    fn pair(&mut self, teams: &[Team]) -> Result<Round, TabError> {
        let mut entered = self.teams();
        let mut expected: Vec<TeamId> = teams.iter().map(Team::id).collect();
        entered.sort_unstable();
        expected.sort_unstable();
        if entered != expected {
            return Err(TabError::TeamSetMismatch);
        }

        info!(matches = self.matches.len(), "paired manual round");
        Ok(Round::from_matches(self.matches.clone()))
    }

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
