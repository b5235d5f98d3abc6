//! Impermissible resolution by minimal-distance swaps.
//!
//! This follows what a tabulator does by hand with a stack of tab cards:
//! walk the stack from the top, and whenever two cards that would meet are
//! not allowed to, look one rank up and one rank down from each offending
//! card for a swap partner, then two ranks, and so on. The closest partner by
//! the round's desirability ladder wins, the two cards trade places (and rank
//! numbers), and the walk starts over from the top because the fix may have
//! broken a pair above it.
//!
//! Every executed swap goes on the pairer's list and is never repeated, so
//! the walk terminates: either all pairs clear, or the reach grows past the
//! stack size and the round is reported unpairable.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::events::{PairingEvent, PairingEvents};
use crate::standings::Standings;
use crate::swap::{Swap, SwapCandidate, SwapMetrics};
use crate::types::{Side, TeamId};

/// Orders candidate swaps; `Less` means the first is more desirable.
pub type SwapComparator<'a> = &'a dyn Fn(&SwapCandidate, &SwapCandidate) -> Ordering;

/// Outcome of one resolution pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// The pairer's list, in the order the swaps were made
    pub swaps: Vec<Swap>,
    /// False when the pass gave up and reported the round unpairable
    pub resolved: bool,
}

/// A card stack with constant-time lookups by rank and by team.
///
/// Ranks are 1-based positions. They exist only for the duration of one
/// resolution pass.
#[derive(Debug, Clone)]
pub struct RankedStack {
    cards: Vec<TeamId>,
    index: HashMap<TeamId, usize>,
}

impl RankedStack {
    pub fn new(cards: &[TeamId]) -> Self {
        let index = cards.iter().enumerate().map(|(i, &t)| (t, i)).collect();
        Self {
            cards: cards.to_vec(),
            index,
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[TeamId] {
        &self.cards
    }

    pub fn contains(&self, team: TeamId) -> bool {
        self.index.contains_key(&team)
    }

    /// # Panics
    /// If the team is not in this stack.
    pub fn rank_of(&self, team: TeamId) -> usize {
        match self.index.get(&team) {
            Some(&idx) => idx + 1,
            None => panic!("no rank assigned to team {team}"),
        }
    }

    pub fn at_rank(&self, rank: usize) -> TeamId {
        self.cards[rank - 1]
    }

    /// Trades the two cards' positions; everything else stays put.
    pub fn exchange(&mut self, a: TeamId, b: TeamId) {
        let ia = self.rank_of(a) - 1;
        let ib = self.rank_of(b) - 1;
        assert_ne!(ia, ib, "cannot swap team {a} with itself");
        self.cards.swap(ia, ib);
        self.index.insert(a, ib);
        self.index.insert(b, ia);
    }
}

/// Runs resolution passes against one pairing's standings snapshot.
pub struct Resolver<'a> {
    standings: &'a Standings,
    desirability: SwapComparator<'a>,
    events: &'a PairingEvents,
}

impl<'a> Resolver<'a> {
    pub fn new(
        standings: &'a Standings,
        desirability: SwapComparator<'a>,
        events: &'a PairingEvents,
    ) -> Self {
        Self {
            standings,
            desirability,
            events,
        }
    }

    /// Resolves a single stack paired (0,1), (2,3), ... in place.
    ///
    /// A direct swap between the two offending teams is never considered: it
    /// would only flip their order and leave the same match.
    pub fn unconstrained(&self, stack: &mut [TeamId]) -> Resolution {
        let mut ranked = RankedStack::new(stack);
        let mut swaps = Vec::new();
        let mut made = HashSet::new();

        let mut i = 0;
        while i + 1 < ranked.len() {
            let t1 = ranked.cards()[i];
            let t2 = ranked.cards()[i + 1];
            if self.standings.permitted(t1, t2) {
                i += 2;
                continue;
            }

            let forbidden = Swap::new(t1, t2, None);
            let mut reach = 1;
            let candidates = loop {
                if reach > ranked.len() {
                    return self.give_up(stack, &ranked, swaps);
                }
                let mut found = self.candidates_for(t1, &ranked, &made, reach, None);
                found.extend(self.candidates_for(t2, &ranked, &made, reach, None));
                found.retain(|c| c.swap != forbidden);
                reach += 1;
                if !found.is_empty() {
                    break found;
                }
            };

            let chosen = self.most_desirable(&candidates);
            assert!(
                !(chosen.swap.contains(t1) && chosen.swap.contains(t2)),
                "swapping two impermissibly paired teams"
            );
            assert!(
                chosen.swap.contains(t1) || chosen.swap.contains(t2),
                "swap contains neither impermissibly paired team"
            );

            ranked.exchange(chosen.swap.team1(), chosen.swap.team2());
            debug!(swap = %chosen.swap, reach = reach - 1, "resolved impermissible {t1} vs {t2}");
            made.insert(chosen.swap);
            swaps.push(chosen.swap);
            i = 0;
        }

        stack.copy_from_slice(ranked.cards());
        Resolution {
            swaps,
            resolved: true,
        }
    }

    /// Resolves two index-aligned stacks in place. A pi-side offender only
    /// swaps within the pi stack, a delta-side offender only within the delta
    /// stack.
    ///
    /// # Panics
    /// If the stacks differ in length.
    pub fn side_constrained(&self, pi: &mut [TeamId], delta: &mut [TeamId]) -> Resolution {
        assert_eq!(pi.len(), delta.len(), "side stacks are not the same length");

        let mut pi_stack = RankedStack::new(pi);
        let mut delta_stack = RankedStack::new(delta);
        let mut swaps = Vec::new();
        let mut made = HashSet::new();

        let mut i = 0;
        while i < pi_stack.len() {
            let t1 = pi_stack.cards()[i];
            let t2 = delta_stack.cards()[i];
            if self.standings.permitted(t1, t2) {
                i += 1;
                continue;
            }

            let mut reach = 1;
            let candidates = loop {
                if reach > pi_stack.len() {
                    pi.copy_from_slice(pi_stack.cards());
                    return self.give_up(delta, &delta_stack, swaps);
                }
                let mut found =
                    self.candidates_for(t1, &pi_stack, &made, reach, Some(Side::Pi));
                found.extend(self.candidates_for(
                    t2,
                    &delta_stack,
                    &made,
                    reach,
                    Some(Side::Delta),
                ));
                reach += 1;
                if !found.is_empty() {
                    break found;
                }
            };

            let chosen = self.most_desirable(&candidates);
            let working = if chosen.swap.contains(t1) {
                &mut pi_stack
            } else if chosen.swap.contains(t2) {
                &mut delta_stack
            } else {
                panic!("neither impermissibly paired team is in swap {}", chosen.swap);
            };

            working.exchange(chosen.swap.team1(), chosen.swap.team2());
            debug!(swap = %chosen.swap, reach = reach - 1, "resolved impermissible {t1} vs {t2}");
            made.insert(chosen.swap);
            swaps.push(chosen.swap);
            i = 0;
        }

        pi.copy_from_slice(pi_stack.cards());
        delta.copy_from_slice(delta_stack.cards());
        Resolution {
            swaps,
            resolved: true,
        }
    }

    /// Partners at `rank - reach` and `rank + reach` that have not been
    /// swapped with `team` yet in this pass.
    fn candidates_for(
        &self,
        team: TeamId,
        stack: &RankedStack,
        made: &HashSet<Swap>,
        reach: usize,
        side: Option<Side>,
    ) -> Vec<SwapCandidate> {
        let rank = stack.rank_of(team);
        let mut candidates = Vec::with_capacity(2);

        let mut partners = Vec::with_capacity(2);
        if rank > reach {
            partners.push(stack.at_rank(rank - reach));
        }
        if rank + reach <= stack.len() {
            partners.push(stack.at_rank(rank + reach));
        }

        for partner in partners {
            let swap = Swap::new(team, partner, side);
            if made.contains(&swap) {
                continue;
            }
            candidates.push(SwapCandidate {
                swap,
                metrics: self.measure(team, partner, stack),
            });
        }
        candidates
    }

    fn measure(&self, a: TeamId, b: TeamId, stack: &RankedStack) -> SwapMetrics {
        let sa = self.standings.get(a);
        let sb = self.standings.get(b);
        SwapMetrics {
            win_difference: (sa.wins - sb.wins).abs(),
            cs_difference: (sa.combined_strength - sb.combined_strength).abs(),
            pd_difference: f64::from((sa.point_differential - sb.point_differential).abs()),
            rank_sum: stack.rank_of(a) + stack.rank_of(b),
        }
    }

    /// First candidate among the most desirable, so listing order breaks
    /// exact ties.
    fn most_desirable(&self, candidates: &[SwapCandidate]) -> SwapCandidate {
        let mut best = candidates[0];
        for candidate in &candidates[1..] {
            if (self.desirability)(candidate, &best) == Ordering::Less {
                best = *candidate;
            }
        }
        best
    }

    fn give_up(&self, out: &mut [TeamId], stack: &RankedStack, swaps: Vec<Swap>) -> Resolution {
        out.copy_from_slice(stack.cards());
        warn!(swaps = swaps.len(), "every candidate swap exhausted, round is unpairable");
        self.events.report(PairingEvent::Unpairable {
            swaps: swaps.clone(),
        });
        Resolution {
            swaps,
            resolved: false,
        }
    }
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod resolve_tests;
