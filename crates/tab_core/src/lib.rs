pub mod ballot;
pub mod coin_flip;
pub mod error;
pub mod events;
pub mod ladder;
pub mod matches;
pub mod permit;
pub mod ranking;
pub mod resolve;
pub mod round;
pub mod standings;
pub mod strategy;
pub mod swap;
pub mod team;
pub mod tournament;
pub mod types;

// Re-export the tabulation model and the engines that run on it
pub use ballot::*;
pub use coin_flip::*;
pub use error::TabError;
pub use events::*;
pub use ladder::{Direction, Ladder};
pub use matches::Match;
pub use permit::{is_permitted, Pairable};
pub use ranking::*;
pub use resolve::{RankedStack, Resolution, Resolver, SwapComparator};
pub use round::Round;
pub use standings::{Standings, TeamStanding};
pub use strategy::*;
pub use swap::*;
pub use team::{Field, Team};
pub use tournament::Tournament;
pub use types::*;

use std::cmp::Ordering;

// =============================================================================
// PairingStrategy trait, implemented by every round type (random, side
// constrained, unconstrained, manual)
// =============================================================================

/// Produces the matches of the next round from the field's current records.
///
/// Strategies read team histories but never modify them; ballots only enter
/// a history when [`Tournament::commit_current_round`] runs.
pub trait PairingStrategy {
    /// Human-readable round type, used in logs.
    fn name(&self) -> &str;

    /// Pairs every team in `teams` exactly once.
    ///
    /// Fails only when the caller broke a precondition (odd field, missing
    /// side history, manual matches that don't cover the field). A round that
    /// cannot be fully resolved is still returned, after an
    /// [`PairingEvent::Unpairable`] has gone to the listeners.
    fn pair(&mut self, teams: &[Team]) -> Result<Round, TabError>;

    /// Orders two candidate swaps; `Less` means `a` disturbs the stack less.
    fn swap_desirability(&self, a: &SwapCandidate, b: &SwapCandidate) -> Ordering;

    fn events(&self) -> &PairingEvents;

    fn events_mut(&mut self) -> &mut PairingEvents;

    /// Registers a listener for this strategy's pairing events.
    fn add_pairing_event_listener(&mut self, listener: impl PairingEventListener + 'static)
    where
        Self: Sized,
    {
        self.events_mut().add_listener(listener);
    }
}
