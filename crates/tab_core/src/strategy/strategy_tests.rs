use super::*;
use std::cmp::Ordering;

use crate::swap::{Swap, SwapMetrics};

fn field(n: u32) -> Vec<Team> {
    (1..=n).map(|i| Team::new(TeamId(i), format!("T{i}"))).collect()
}

fn play(teams: &mut [Team], pi: u32, delta: u32, pi_total: i32, delta_total: i32) {
    let ballot = crate::ballot::Ballot::new(TeamId(pi), TeamId(delta), pi_total, delta_total);
    for team in teams.iter_mut().filter(|t| ballot.involves(t.id())) {
        team.add_ballot(ballot);
    }
}

#[test]
fn test_stack_ladder_breaks_ties_by_number() {
    let teams = field(4);
    let standings = Standings::compute(&teams);

    let mut stack = standings.ids().to_vec();
    sort_stack(&mut stack, &standings, &stack_ladder(true, true));
    assert_eq!(stack, vec![TeamId(4), TeamId(3), TeamId(2), TeamId(1)]);

    sort_stack(&mut stack, &standings, &stack_ladder(true, false));
    assert_eq!(stack, vec![TeamId(1), TeamId(2), TeamId(3), TeamId(4)]);
}

#[test]
fn test_stack_ladder_orders_by_record_then_pd() {
    let mut teams = field(4);
    play(&mut teams, 2, 1, 100, 130);
    play(&mut teams, 4, 3, 100, 110);
    let standings = Standings::compute(&teams);

    let mut stack = standings.ids().to_vec();
    sort_stack(&mut stack, &standings, &stack_ladder(false, true));
    assert_eq!(stack, vec![TeamId(1), TeamId(3), TeamId(4), TeamId(2)]);
}

#[test]
fn test_combined_strength_orders_stack_before_pd() {
    // Two rounds, both ballots of each match going the same way.
    let mut teams = field(8);
    for (pi, delta, margin) in [
        (2, 1, 10),
        (4, 3, 30),
        (6, 5, -1),
        (8, 7, -20),
        (1, 6, -30),
        (3, 8, -20),
        (5, 2, -10),
        (7, 4, -10),
    ] {
        for _ in 0..2 {
            play(&mut teams, pi, delta, 100 + margin, 100);
        }
    }
    let standings = Standings::compute(&teams);
    // 5 and 7 met stronger opponents than 6 and 8 but have the worse PDs
    assert_eq!(standings.get(TeamId(7)).combined_strength, 6.0);
    assert_eq!(standings.get(TeamId(6)).combined_strength, 2.0);
    assert!(standings.get(TeamId(6)).point_differential > standings.get(TeamId(7)).point_differential);

    let ids = |stack: &[TeamId]| stack.iter().map(|t| t.number()).collect::<Vec<_>>();
    let mut stack = standings.ids().to_vec();
    sort_stack(&mut stack, &standings, &stack_ladder(true, true));
    assert_eq!(ids(&stack), vec![4, 2, 7, 5, 6, 8, 1, 3]);

    sort_stack(&mut stack, &standings, &stack_ladder(false, true));
    assert_eq!(ids(&stack), vec![4, 2, 6, 7, 8, 5, 1, 3]);
}

#[test]
fn test_side_stacks_split_by_last_side() {
    let mut teams = field(4);
    play(&mut teams, 2, 1, 100, 130);
    play(&mut teams, 4, 3, 100, 110);
    let (needs_pi, needs_delta) = side_stacks(&Standings::compute(&teams)).unwrap();
    assert_eq!(needs_pi, vec![TeamId(1), TeamId(3)]);
    assert_eq!(needs_delta, vec![TeamId(2), TeamId(4)]);
}

#[test]
fn test_side_stacks_need_history() {
    let teams = field(2);
    assert_eq!(
        side_stacks(&Standings::compute(&teams)),
        Err(TabError::MissingSideHistory(TeamId(1)))
    );
}

#[test]
fn test_side_stacks_must_balance() {
    let mut teams = field(4);
    play(&mut teams, 1, 2, 100, 90);
    play(&mut teams, 3, 4, 100, 90);
    play(&mut teams, 4, 2, 100, 90);
    // 1, 3 and 4 argued pi last; only 2 argued delta
    assert_eq!(
        side_stacks(&Standings::compute(&teams)),
        Err(TabError::UnbalancedSides { pi: 1, delta: 3 })
    );
}

#[test]
fn test_swap_ladder_levels() {
    assert_eq!(
        swap_ladder(false).rule_names(),
        vec!["win difference", "pd difference", "rank sum", "side"]
    );
    assert_eq!(swap_ladder(true).len(), 5);
    assert_eq!(stack_ladder(false, true).len(), 3);
}

#[test]
fn test_swap_ladder_weighs_cs_gap_before_pd_gap() {
    let candidate = |a, b, cs_difference, pd_difference| SwapCandidate {
        swap: Swap::new(TeamId(a), TeamId(b), None),
        metrics: SwapMetrics {
            win_difference: 0.0,
            cs_difference,
            pd_difference,
            rank_sum: 5,
        },
    };
    let close_strength = candidate(1, 2, 1.0, 40.0);
    let close_pd = candidate(3, 4, 3.0, 5.0);

    assert_eq!(
        swap_ladder(true).deciding_rule(&close_strength, &close_pd),
        Some(("cs difference", Ordering::Less))
    );
    assert_eq!(
        swap_ladder(false).deciding_rule(&close_strength, &close_pd),
        Some(("pd difference", Ordering::Greater))
    );
}

#[test]
fn test_pairing_config_defaults() {
    let config = PairingConfig::default();
    assert!(config.higher_number_first);
    assert!(config.pi_in_left_column);

    let partial: PairingConfig = serde_json::from_str(r#"{"pi_in_left_column": false}"#).unwrap();
    assert!(partial.higher_number_first);
    assert!(!partial.pi_in_left_column);
}
