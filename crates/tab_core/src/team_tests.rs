use super::*;

fn team(id: u32, ballots: &[Ballot]) -> Team {
    let mut team = Team::new(TeamId(id), format!("Team {id}"));
    for &ballot in ballots {
        team.add_ballot(ballot);
    }
    team
}

fn ballot(pi: u32, delta: u32, pi_total: i32, delta_total: i32) -> Ballot {
    Ballot::new(TeamId(pi), TeamId(delta), pi_total, delta_total)
}

/// Team 1 wins and draws against 2, then loses to 3 on delta.
fn small_field() -> Vec<Team> {
    let b1 = ballot(1, 2, 120, 110);
    let b2 = ballot(1, 2, 100, 100);
    let b3 = ballot(3, 1, 130, 100);
    vec![team(1, &[b1, b2, b3]), team(2, &[b1, b2]), team(3, &[b3])]
}

#[test]
fn test_wins_count_draws_as_half() {
    let teams = small_field();
    assert_eq!(teams[0].wins(), 1.5);
    assert_eq!(teams[1].wins(), 0.5);
    assert_eq!(teams[2].wins(), 1.0);
}

#[test]
fn test_history_is_distinct_in_first_met_order() {
    let teams = small_field();
    assert_eq!(teams[0].history(), vec![TeamId(2), TeamId(3)]);
    assert_eq!(teams[2].history(), vec![TeamId(1)]);
}

#[test]
fn test_last_side_follows_latest_ballot() {
    let teams = small_field();
    assert_eq!(teams[0].last_side(), Some(Side::Delta));
    assert_eq!(teams[2].last_side(), Some(Side::Pi));
    assert_eq!(team(9, &[]).last_side(), None);
}

#[test]
fn test_point_differential_and_points() {
    let teams = small_field();
    assert_eq!(teams[0].point_differential(), 10 + 0 - 30);
    assert_eq!(teams[0].points(), 120 + 100 + 100);
    assert_eq!(
        teams[0].point_differential_dropping(0),
        teams[0].point_differential()
    );
}

#[test]
fn test_dropping_keeps_only_the_middle_of_odd_histories() {
    // Regression: drop 1 of 3 must sum exactly the middle ballot
    let teams = small_field();
    assert_eq!(teams[0].point_differential_dropping(1), 0);
    assert_eq!(teams[0].points_dropping(1), 100);
    assert_eq!(teams[0].point_differential_dropping(2), 0);
    assert_eq!(teams[0].points_dropping(3), 0);
}

#[test]
fn test_dropping_one_of_two_ballots_is_empty() {
    let teams = small_field();
    assert_eq!(teams[1].point_differential_dropping(1), 0);
    assert_eq!(teams[1].points_dropping(1), 0);
}

#[test]
fn test_strength_metrics() {
    let teams = small_field();
    let field = Field::new(&teams);
    let one = &teams[0];

    // Opponents: 2 (0.5 wins) and 3 (1 win)
    assert_eq!(one.combined_strength(&field), 1.5);
    // Won against 2, drew against 2
    assert_eq!(one.strength_of_win(&field), 0.5 + 0.25);
    // Lost to 3, drew against 2
    assert_eq!(one.strength_of_loss(&field), 1.0 + 0.25);
}

#[test]
fn test_can_hit_checks_history_and_program() {
    let mut teams = small_field();
    let one = &mut teams[0];
    assert!(!one.can_hit(TeamId(2)));
    assert!(!one.can_hit(TeamId(3)));
    assert!(one.can_hit(TeamId(4)));

    one.add_program(TeamId(4));
    assert!(!one.can_hit(TeamId(4)));
    assert_eq!(
        one.impermissibles().into_iter().collect::<Vec<_>>(),
        vec![TeamId(2), TeamId(3), TeamId(4)]
    );

    one.remove_program(TeamId(4));
    assert!(one.can_hit(TeamId(4)));
}

#[test]
fn test_program_ignores_self() {
    let mut t = team(5, &[]);
    t.add_program(TeamId(5));
    assert!(t.program().is_empty());
}

#[test]
#[should_panic(expected = "not part of the field")]
fn test_field_rejects_unknown_opponent() {
    let teams = small_field();
    let field = Field::new(&teams);
    field.wins_of(TeamId(42));
}

#[test]
#[should_panic(expected = "does not belong to team")]
fn test_ballot_rejects_foreign_team() {
    ballot(1, 2, 100, 90).pd_for(TeamId(3));
}
