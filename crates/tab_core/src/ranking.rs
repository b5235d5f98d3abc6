//! Final tournament rankings.
//!
//! Teams are ordered by record, then combined strength, then strength of
//! opposition, then point differential and raw points (each retried with
//! 1, 2 and 3 ballots dropped from both ends), then a coin flip.
//!
//! Strength of opposition is not the raw SOW/SOL sum. Within each group of
//! teams sharing a record and CS, SOW and SOL are turned into fractional
//! ranks (tied runs share the midpoint of their positions) and the two ranks
//! are added.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use tracing::{debug, info};

use crate::coin_flip::{CoinFace, CoinFlip};
use crate::ladder::Ladder;
use crate::team::{Field, Team};
use crate::types::{TeamId, MAX_DROP, TOLERANCE};

/// One team's line in the final standings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalStanding {
    pub id: TeamId,
    pub name: String,
    pub wins: f64,
    pub combined_strength: f64,
    pub strength_of_win: f64,
    pub strength_of_loss: f64,
    pub sow_rank: f64,
    pub sol_rank: f64,
    /// Point differential dropping 0..=3 ballots from each end
    pub point_differentials: [i32; MAX_DROP + 1],
    /// Raw points dropping 0..=3 ballots from each end
    pub points: [i32; MAX_DROP + 1],
}

impl FinalStanding {
    fn of(team: &Team, field: &Field<'_>) -> Self {
        let point_differentials = std::array::from_fn(|drop| team.point_differential_dropping(drop));
        let points = std::array::from_fn(|drop| team.points_dropping(drop));
        Self {
            id: team.id(),
            name: team.name().to_string(),
            wins: team.wins(),
            combined_strength: team.combined_strength(field),
            strength_of_win: team.strength_of_win(field),
            strength_of_loss: team.strength_of_loss(field),
            sow_rank: 0.0,
            sol_rank: 0.0,
            point_differentials,
            points,
        }
    }

    /// SOW rank plus SOL rank; lower is better.
    pub fn opposition_rank(&self) -> f64 {
        self.sow_rank + self.sol_rank
    }

    pub fn point_differential(&self) -> i32 {
        self.point_differentials[0]
    }

    pub fn total_points(&self) -> i32 {
        self.points[0]
    }
}

/// Produces the final order of a tournament's teams, first place first.
pub trait RankingStrategy {
    fn rank(&mut self, teams: &[Team]) -> Vec<FinalStanding>;
}

/// Standard ranking ladder, with an injected source for the final coin flips.
#[derive(Debug, Clone)]
pub struct DefaultRanking<F: CoinFlip> {
    flips: F,
}

impl<F: CoinFlip> DefaultRanking<F> {
    pub fn new(flips: F) -> Self {
        Self { flips }
    }

    pub fn flips(&self) -> &F {
        &self.flips
    }
}

impl<F: CoinFlip> RankingStrategy for DefaultRanking<F> {
    fn rank(&mut self, teams: &[Team]) -> Vec<FinalStanding> {
        let field = Field::new(teams);
        let mut rows: Vec<FinalStanding> =
            teams.iter().map(|t| FinalStanding::of(t, &field)).collect();

        // Tied groups for SOW/SOL only make sense once rows are ordered by
        // record and CS.
        let record = record_ladder();
        rows.sort_by(|a, b| record.compare(a, b));
        mark_tied_ranks(&mut rows, |r| r.strength_of_win, |r, rank| r.sow_rank = rank);
        mark_tied_ranks(&mut rows, |r| r.strength_of_loss, |r, rank| r.sol_rank = rank);

        let ladder = ranking_ladder();
        rows.sort_by(|a, b| ladder.compare(a, b));
        let flips = break_remaining_ties(&mut rows, &ladder, &mut self.flips);

        info!(teams = rows.len(), coin_flips = flips, "final rankings computed");
        rows
    }
}

/// Wins, then combined strength.
pub fn record_ladder() -> Ladder<FinalStanding> {
    Ladder::new()
        .desc("wins", |r: &FinalStanding| r.wins)
        .desc("combined strength", |r: &FinalStanding| r.combined_strength)
}

/// The full deterministic ladder, everything short of a coin flip.
pub fn ranking_ladder() -> Ladder<FinalStanding> {
    let mut ladder =
        record_ladder().asc("opposition rank", |r: &FinalStanding| r.opposition_rank());
    for drop in 0..=MAX_DROP {
        ladder = ladder.desc("point differential", move |r: &FinalStanding| {
            f64::from(r.point_differentials[drop])
        });
    }
    for drop in 0..=MAX_DROP {
        ladder = ladder.desc("points", move |r: &FinalStanding| f64::from(r.points[drop]));
    }
    ladder
}

fn same_record(a: &FinalStanding, b: &FinalStanding) -> bool {
    (a.wins - b.wins).abs() < TOLERANCE
        && (a.combined_strength - b.combined_strength).abs() < TOLERANCE
}

/// Assigns fractional ranks over `rows`, which must already be ordered by
/// record and CS.
///
/// A run of consecutive rows tied on record, CS and `metric` shares the mean
/// of its 1-based positions. Positions keep counting while the record and CS
/// stay the same and restart at 1 when they change.
pub fn mark_tied_ranks(
    rows: &mut [FinalStanding],
    metric: impl Fn(&FinalStanding) -> f64,
    mut assign: impl FnMut(&mut FinalStanding, f64),
) {
    if rows.is_empty() {
        return;
    }

    let mut lead = 1;
    let mut start = 0;
    for i in 1..=rows.len() {
        let (peers, tied) = match rows.get(i) {
            Some(curr) => {
                let prev = &rows[i - 1];
                let peers = same_record(prev, curr);
                (peers, peers && (metric(curr) - metric(prev)).abs() < TOLERANCE)
            }
            None => (false, false),
        };
        if tied {
            continue;
        }

        let tail = lead + (i - start) - 1;
        let shared = (lead + tail) as f64 / 2.0;
        for row in &mut rows[start..i] {
            assign(row, shared);
        }
        lead = if peers { tail + 1 } else { 1 };
        start = i;
    }
}

/// Orders every run of rows the ladder cannot separate by coin flips.
///
/// Each row of a run is inserted into the run's new order, flipping against
/// the rows already placed from the top: heads keeps the placed row ahead,
/// tails puts the newcomer in front of it. Flips happen outside the sort so
/// the sort only ever sees a consistent order. Returns the number of flips.
fn break_remaining_ties(
    rows: &mut [FinalStanding],
    ladder: &Ladder<FinalStanding>,
    flips: &mut (impl CoinFlip + ?Sized),
) -> usize {
    let mut count = 0;
    let mut start = 0;
    while start < rows.len() {
        let mut end = start + 1;
        while end < rows.len() && ladder.compare(&rows[end - 1], &rows[end]) == Ordering::Equal {
            end += 1;
        }

        if end - start > 1 {
            let run: Vec<FinalStanding> = rows[start..end].to_vec();
            let mut ordered: Vec<FinalStanding> = Vec::with_capacity(run.len());
            for challenger in run {
                let mut slot = ordered.len();
                for (j, placed) in ordered.iter().enumerate() {
                    count += 1;
                    let face = flips.flip(
                        "Coin flip to determine final ranking:",
                        &format!("{} has higher rank", placed.id),
                        &format!("{} has higher rank", challenger.id),
                    );
                    debug!(placed = %placed.id, challenger = %challenger.id, ?face, "ranking coin flip");
                    if face == CoinFace::Tails {
                        slot = j;
                        break;
                    }
                }
                ordered.insert(slot, challenger);
            }
            rows[start..end].clone_from_slice(&ordered);
        }
        start = end;
    }
    count
}

#[cfg(test)]
#[path = "ranking_tests.rs"]
mod ranking_tests;
