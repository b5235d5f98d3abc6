use super::*;
use crate::matches::Match;
use crate::strategy::{ManualPairing, Round1Pairing};

fn tournament(n: u32) -> Tournament {
    let mut t = Tournament::new();
    for i in 1..=n {
        t.add_team(Team::new(TeamId(i), format!("T{i}"))).unwrap();
    }
    t
}

fn manual(pairs: &[(u32, u32)]) -> ManualPairing {
    ManualPairing::with_matches(
        pairs
            .iter()
            .map(|&(pi, delta)| Match::new(TeamId(pi), TeamId(delta))),
    )
}

#[test]
fn test_duplicate_team_rejected() {
    let mut t = tournament(2);
    assert_eq!(
        t.add_team(Team::new(TeamId(2), "again")),
        Err(TabError::DuplicateTeam(TeamId(2)))
    );
    assert_eq!(t.teams().len(), 2);
}

#[test]
fn test_program_links_are_symmetric() {
    let mut t = tournament(4);
    t.add_program(&[TeamId(1), TeamId(3), TeamId(4)]).unwrap();
    for (a, b) in [(1, 3), (3, 1), (1, 4), (4, 3)] {
        assert!(t.team(TeamId(a)).unwrap().program().contains(&TeamId(b)));
    }
    assert!(!t.team(TeamId(1)).unwrap().program().contains(&TeamId(1)));

    t.remove_program(TeamId(3), TeamId(1)).unwrap();
    assert!(!t.team(TeamId(1)).unwrap().program().contains(&TeamId(3)));
    assert!(!t.team(TeamId(3)).unwrap().program().contains(&TeamId(1)));
}

#[test]
fn test_program_with_unknown_team() {
    let mut t = tournament(2);
    assert_eq!(
        t.add_program(&[TeamId(1), TeamId(9)]),
        Err(TabError::UnknownTeam(TeamId(9)))
    );
    assert!(t.team(TeamId(1)).unwrap().program().is_empty());
}

#[test]
fn test_round_lifecycle() {
    let mut t = tournament(4);
    t.add_round(&mut manual(&[(1, 2), (3, 4)])).unwrap();
    assert_eq!(t.commit_current_round(), Err(TabError::RoundNotLocked));

    t.lock_current_round().unwrap();
    assert_eq!(t.lock_current_round(), Err(TabError::RoundAlreadyLocked));
    assert_eq!(t.discard_last_round().err(), Some(TabError::DiscardLockedRound));

    let round = t.current_round_mut().unwrap();
    round.matches_mut()[0].score(120, 100).unwrap();
    round.matches_mut()[1].score(90, 95).unwrap();
    t.commit_current_round().unwrap();

    assert_eq!(t.team(TeamId(1)).unwrap().wins(), 1.0);
    assert_eq!(t.team(TeamId(4)).unwrap().wins(), 1.0);
    assert_eq!(t.team(TeamId(2)).unwrap().ballots().len(), 1);
    assert!(t.current_round().unwrap().is_played());
    assert_eq!(t.commit_current_round(), Err(TabError::RoundAlreadyPlayed));
}

#[test]
fn test_next_round_waits_for_commit() {
    let mut t = tournament(4);
    t.add_round(&mut Round1Pairing::seeded(3)).unwrap();
    assert_eq!(
        t.add_round(&mut Round1Pairing::seeded(3)).err(),
        Some(TabError::PreviousRoundUnplayed { round: 1 })
    );
    assert_eq!(t.num_rounds(), 1);
}

#[test]
fn test_discard_unlocked_round() {
    let mut t = tournament(4);
    assert_eq!(t.discard_last_round().err(), Some(TabError::NoCurrentRound));
    t.add_round(&mut manual(&[(1, 2), (3, 4)])).unwrap();
    let discarded = t.discard_last_round().unwrap();
    assert_eq!(discarded.num_matches(), 2);
    assert_eq!(t.num_rounds(), 0);
}

#[test]
fn test_no_round_to_lock_or_commit() {
    let mut t = tournament(2);
    assert_eq!(t.lock_current_round(), Err(TabError::NoCurrentRound));
    assert_eq!(t.commit_current_round(), Err(TabError::NoCurrentRound));
}

#[test]
fn test_failed_pairing_adds_no_round() {
    let mut t = tournament(4);
    assert_eq!(
        t.add_round(&mut manual(&[(1, 2), (3, 3)])).err(),
        Some(TabError::TeamSetMismatch)
    );
    assert_eq!(t.num_rounds(), 0);
}
