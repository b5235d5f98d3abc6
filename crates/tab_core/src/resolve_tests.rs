use super::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::strategy::swap_ladder;
use crate::team::Team;

fn ids(numbers: &[u32]) -> Vec<TeamId> {
    numbers.iter().map(|&n| TeamId(n)).collect()
}

/// Teams 1..=n with no ballots; each listed pair shares a program.
fn field(n: u32, programs: &[(u32, u32)]) -> Vec<Team> {
    let mut teams: Vec<Team> = (1..=n).map(|i| Team::new(TeamId(i), format!("T{i}"))).collect();
    for &(a, b) in programs {
        teams[a as usize - 1].add_program(TeamId(b));
        teams[b as usize - 1].add_program(TeamId(a));
    }
    teams
}

fn no_preference(_: &SwapCandidate, _: &SwapCandidate) -> Ordering {
    Ordering::Equal
}

fn recording_events() -> (PairingEvents, Rc<RefCell<Vec<String>>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let mut events = PairingEvents::new();
    events.add_listener(move |e: &PairingEvent| sink.borrow_mut().push(e.name().to_string()));
    (events, seen)
}

#[test]
fn test_ranked_stack_lookups() {
    let mut stack = RankedStack::new(&ids(&[5, 3, 8]));
    assert_eq!(stack.rank_of(TeamId(3)), 2);
    assert_eq!(stack.at_rank(3), TeamId(8));

    stack.exchange(TeamId(5), TeamId(8));
    assert_eq!(stack.cards(), ids(&[8, 3, 5]).as_slice());
    assert_eq!(stack.rank_of(TeamId(5)), 3);
    assert_eq!(stack.rank_of(TeamId(8)), 1);
}

#[test]
#[should_panic(expected = "no rank assigned")]
fn test_ranked_stack_missing_team_panics() {
    RankedStack::new(&ids(&[1, 2])).rank_of(TeamId(3));
}

#[test]
fn test_permissible_stack_needs_no_swaps() {
    let teams = field(4, &[]);
    let standings = Standings::compute(&teams);
    let events = PairingEvents::new();
    let mut stack = ids(&[1, 2, 3, 4]);

    let resolution = Resolver::new(&standings, &no_preference, &events).unconstrained(&mut stack);
    assert!(resolution.resolved);
    assert!(resolution.swaps.is_empty());
    assert_eq!(stack, ids(&[1, 2, 3, 4]));
}

#[test]
fn test_unconstrained_skips_direct_swap() {
    let teams = field(4, &[(1, 2)]);
    let standings = Standings::compute(&teams);
    let events = PairingEvents::new();
    let mut stack = ids(&[1, 2, 3, 4]);

    let resolution = Resolver::new(&standings, &no_preference, &events).unconstrained(&mut stack);
    assert!(resolution.resolved);
    assert_eq!(resolution.swaps, vec![Swap::new(TeamId(2), TeamId(3), None)]);
    assert_eq!(stack, ids(&[1, 3, 2, 4]));
}

#[test]
fn test_side_constrained_prefers_delta_stack_swap() {
    let teams = field(4, &[(1, 2)]);
    let standings = Standings::compute(&teams);
    let events = PairingEvents::new();
    let ladder = swap_ladder(false);
    let closeness = |a: &SwapCandidate, b: &SwapCandidate| ladder.compare(a, b);
    let mut pi = ids(&[1, 3]);
    let mut delta = ids(&[2, 4]);

    let resolution =
        Resolver::new(&standings, &closeness, &events).side_constrained(&mut pi, &mut delta);
    assert!(resolution.resolved);
    assert_eq!(resolution.swaps.len(), 1);
    assert_eq!(resolution.swaps[0].side(), Some(Side::Delta));
    assert_eq!(pi, ids(&[1, 3]));
    assert_eq!(delta, ids(&[4, 2]));
}

#[test]
fn test_side_constrained_takes_first_candidate_on_exact_tie() {
    let teams = field(4, &[(1, 2)]);
    let standings = Standings::compute(&teams);
    let events = PairingEvents::new();
    let mut pi = ids(&[1, 3]);
    let mut delta = ids(&[2, 4]);

    let resolution =
        Resolver::new(&standings, &no_preference, &events).side_constrained(&mut pi, &mut delta);
    assert_eq!(resolution.swaps[0].side(), Some(Side::Pi));
    assert_eq!(pi, ids(&[3, 1]));
    assert_eq!(delta, ids(&[2, 4]));
}

#[test]
fn test_unconstrained_gives_up_and_reports() {
    let teams = field(2, &[(1, 2)]);
    let standings = Standings::compute(&teams);
    let (events, seen) = recording_events();
    let mut stack = ids(&[1, 2]);

    let resolution = Resolver::new(&standings, &no_preference, &events).unconstrained(&mut stack);
    assert!(!resolution.resolved);
    assert_eq!(stack, ids(&[1, 2]));
    assert_eq!(*seen.borrow(), vec![crate::events::UNPAIRABLE.to_string()]);
}

#[test]
fn test_side_constrained_gives_up_and_reports() {
    let teams = field(2, &[(1, 2)]);
    let standings = Standings::compute(&teams);
    let (events, seen) = recording_events();
    let mut pi = ids(&[1]);
    let mut delta = ids(&[2]);

    let resolution =
        Resolver::new(&standings, &no_preference, &events).side_constrained(&mut pi, &mut delta);
    assert!(!resolution.resolved);
    assert_eq!(seen.borrow().len(), 1);
}

#[test]
fn test_never_repeats_a_swap() {
    // Everyone in one program except 5 and 6: forces a long search
    let teams = field(6, &[(1, 2), (1, 3), (1, 4), (2, 3), (2, 4), (3, 4)]);
    let standings = Standings::compute(&teams);
    let events = PairingEvents::new();
    let mut stack = ids(&[1, 2, 3, 4, 5, 6]);

    let resolution = Resolver::new(&standings, &no_preference, &events).unconstrained(&mut stack);
    let distinct: HashSet<Swap> = resolution.swaps.iter().copied().collect();
    assert_eq!(distinct.len(), resolution.swaps.len());
    if resolution.resolved {
        for pair in stack.chunks(2) {
            assert!(standings.permitted(pair[0], pair[1]));
        }
    }
}
