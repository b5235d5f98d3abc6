//! Point-in-time snapshot of every team's record, taken once per pairing pass.
//!
//! Stack sorting and swap ranking read the same few metrics many times, and
//! combined strength walks every opponent's ballots. The snapshot computes
//! them once up front and is dropped when the pass ends, so nothing derived
//! ever outlives the round it was computed for.

use std::collections::{BTreeSet, HashMap};

use crate::permit::Pairable;
use crate::team::{Field, Team};
use crate::types::{Side, TeamId};

/// One team's record as seen by the pairing pass.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamStanding {
    pub id: TeamId,
    pub wins: f64,
    pub combined_strength: f64,
    pub point_differential: i32,
    pub last_side: Option<Side>,
    impermissibles: BTreeSet<TeamId>,
}

impl TeamStanding {
    pub fn of(team: &Team, field: &Field<'_>) -> Self {
        Self {
            id: team.id(),
            wins: team.wins(),
            combined_strength: team.combined_strength(field),
            point_differential: team.point_differential(),
            last_side: team.last_side(),
            impermissibles: team.impermissibles(),
        }
    }
}

impl Pairable for TeamStanding {
    fn team_id(&self) -> TeamId {
        self.id
    }

    fn can_hit(&self, other: TeamId) -> bool {
        other != self.id && !self.impermissibles.contains(&other)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Standings {
    by_id: HashMap<TeamId, TeamStanding>,
    /// Entry order of the teams
    order: Vec<TeamId>,
}

impl Standings {
    pub fn compute(teams: &[Team]) -> Self {
        let field = Field::new(teams);
        let mut by_id = HashMap::with_capacity(teams.len());
        let mut order = Vec::with_capacity(teams.len());
        for team in teams {
            by_id.insert(team.id(), TeamStanding::of(team, &field));
            order.push(team.id());
        }
        Self { by_id, order }
    }

    /// # Panics
    /// If `id` was not part of the snapshot. Stacks are built from the same
    /// team list, so a miss is an internal bug.
    pub fn get(&self, id: TeamId) -> &TeamStanding {
        match self.by_id.get(&id) {
            Some(standing) => standing,
            None => panic!("team {id} missing from standings snapshot"),
        }
    }

    /// Team ids in entry order.
    pub fn ids(&self) -> &[TeamId] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn permitted(&self, a: TeamId, b: TeamId) -> bool {
        crate::permit::is_permitted(self.get(a), self.get(b))
    }
}
