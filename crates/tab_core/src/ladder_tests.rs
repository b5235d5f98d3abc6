use super::*;

#[derive(Debug)]
struct Row {
    score: f64,
    spread: f64,
    number: u32,
}

fn row(score: f64, spread: f64, number: u32) -> Row {
    Row {
        score,
        spread,
        number,
    }
}

fn ladder() -> Ladder<Row> {
    Ladder::new()
        .desc("score", |r: &Row| r.score)
        .asc("spread", |r: &Row| r.spread)
        .then("number", Direction::Ascending, 0.5, |r: &Row| f64::from(r.number))
}

#[test]
fn test_first_differing_rule_decides() {
    let ladder = ladder();
    assert_eq!(ladder.compare(&row(3.0, 9.0, 1), &row(2.0, 0.0, 1)), Ordering::Less);
    assert_eq!(ladder.compare(&row(2.0, 1.0, 1), &row(2.0, 0.0, 1)), Ordering::Greater);
    assert_eq!(
        ladder.deciding_rule(&row(2.0, 1.0, 1), &row(2.0, 0.0, 1)),
        Some(("spread", Ordering::Greater))
    );
}

#[test]
fn test_differences_within_tolerance_fall_through() {
    let ladder = ladder();
    let a = row(2.005, 0.0, 4);
    let b = row(2.0, 0.0, 3);
    assert_eq!(ladder.deciding_rule(&a, &b), Some(("number", Ordering::Greater)));
}

#[test]
fn test_full_tie_is_equal() {
    let ladder = ladder();
    assert_eq!(ladder.compare(&row(1.0, 1.0, 7), &row(1.0, 1.0, 7)), Ordering::Equal);
    assert_eq!(ladder.deciding_rule(&row(1.0, 1.0, 7), &row(1.0, 1.0, 7)), None);
}

#[test]
fn test_empty_ladder_never_separates() {
    let empty: Ladder<Row> = Ladder::new();
    assert!(empty.is_empty());
    assert_eq!(empty.compare(&row(1.0, 0.0, 1), &row(5.0, 0.0, 2)), Ordering::Equal);
}

#[test]
fn test_sorting_with_a_ladder() {
    let ladder = ladder();
    let mut rows = vec![row(1.0, 0.0, 2), row(2.0, 3.0, 5), row(2.0, 1.0, 9), row(1.0, 0.0, 1)];
    rows.sort_by(|a, b| ladder.compare(a, b));
    let numbers: Vec<u32> = rows.iter().map(|r| r.number).collect();
    assert_eq!(numbers, vec![9, 5, 1, 2]);
    assert_eq!(ladder.rule_names(), vec!["score", "spread", "number"]);
}
