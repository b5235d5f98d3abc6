//! Pairing events: non-fatal notices about degraded pairing outcomes.
//!
//! Listeners are called synchronously, in registration order. The pairing
//! still returns its best partial result; a listener decides whether the
//! event matters.

use std::fmt;

use crate::swap::Swap;

/// Name carried by [`PairingEvent::Unpairable`].
pub const UNPAIRABLE: &str = "Unpairable round!";

/// Name carried by [`PairingEvent::ExcessiveSwaps`].
pub const EXCESSIVE_SWAPS: &str = "25 swaps";

#[derive(Debug, Clone, PartialEq)]
pub enum PairingEvent {
    /// Every possible swap was tried without clearing the impermissibles.
    Unpairable {
        /// Swaps made before giving up
        swaps: Vec<Swap>,
    },
    /// The resolution needed an unusually long pairer's list.
    ExcessiveSwaps { swaps: Vec<Swap> },
}

impl PairingEvent {
    pub fn name(&self) -> &'static str {
        match self {
            PairingEvent::Unpairable { .. } => UNPAIRABLE,
            PairingEvent::ExcessiveSwaps { .. } => EXCESSIVE_SWAPS,
        }
    }

    /// The swap list attached to the event.
    pub fn swaps(&self) -> &[Swap] {
        match self {
            PairingEvent::Unpairable { swaps } | PairingEvent::ExcessiveSwaps { swaps } => swaps,
        }
    }
}

impl fmt::Display for PairingEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} swaps)", self.name(), self.swaps().len())
    }
}

/// Receives pairing events.
pub trait PairingEventListener {
    fn pairing_event_occurred(&self, event: &PairingEvent);
}

impl<F> PairingEventListener for F
where
    F: Fn(&PairingEvent),
{
    fn pairing_event_occurred(&self, event: &PairingEvent) {
        self(event)
    }
}

/// Ordered list of registered listeners.
#[derive(Default)]
pub struct PairingEvents {
    listeners: Vec<Box<dyn PairingEventListener>>,
}

impl PairingEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_listener(&mut self, listener: impl PairingEventListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn report(&self, event: PairingEvent) {
        tracing::warn!(event = event.name(), swaps = event.swaps().len(), "pairing event");
        for listener in &self.listeners {
            listener.pairing_event_occurred(&event);
        }
    }
}

impl fmt::Debug for PairingEvents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PairingEvents")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
