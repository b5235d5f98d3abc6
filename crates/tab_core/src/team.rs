//! Teams and the metrics derived from their ballot histories.
//!
//! Nothing here is cached: every metric is recomputed from the ballot list,
//! so a team can never report a stale record after a round is committed.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fmt;

use crate::ballot::Ballot;
use crate::types::{Side, TeamId};

/// A competing team: its identity, its program, and every ballot it received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    id: TeamId,
    name: String,
    /// Other teams from the same school, which this team may never face
    program: BTreeSet<TeamId>,
    /// Ballots in the order they were committed
    ballots: Vec<Ballot>,
}

impl Team {
    pub fn new(id: TeamId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            program: BTreeSet::new(),
            ballots: Vec::new(),
        }
    }

    pub fn id(&self) -> TeamId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn program(&self) -> &BTreeSet<TeamId> {
        &self.program
    }

    pub fn ballots(&self) -> &[Ballot] {
        &self.ballots
    }

    /// Adds one direction of a program link. Program membership must stay
    /// symmetric, so outside the crate this goes through
    /// [`crate::Tournament::add_program`].
    pub(crate) fn add_program(&mut self, other: TeamId) {
        if other != self.id {
            self.program.insert(other);
        }
    }

    pub(crate) fn remove_program(&mut self, other: TeamId) {
        self.program.remove(&other);
    }

    pub(crate) fn add_ballot(&mut self, ballot: Ballot) {
        debug_assert!(ballot.involves(self.id));
        self.ballots.push(ballot);
    }

    /// Ballots won count 1, drawn ballots count 0.5.
    pub fn wins(&self) -> f64 {
        self.ballots
            .iter()
            .map(|b| match b.pd_for(self.id) {
                pd if pd > 0 => 1.0,
                0 => 0.5,
                _ => 0.0,
            })
            .sum()
    }

    /// Distinct opponents, in the order they were first met.
    pub fn history(&self) -> Vec<TeamId> {
        let mut history = Vec::new();
        for ballot in &self.ballots {
            let opp = ballot.opponent_for(self.id);
            if !history.contains(&opp) {
                history.push(opp);
            }
        }
        history
    }

    /// Every team this team may not face: its program plus its history.
    pub fn impermissibles(&self) -> BTreeSet<TeamId> {
        let mut imps = self.program.clone();
        imps.extend(self.history());
        imps
    }

    /// Whether a match against `other` is allowed from this team's side.
    pub fn can_hit(&self, other: TeamId) -> bool {
        !(self.program.contains(&other) || self.ballots.iter().any(|b| b.involves(other)))
    }

    /// Side of the most recent ballot.
    pub fn last_side(&self) -> Option<Side> {
        self.ballots.last().map(|b| b.side_for(self.id))
    }

    /// Sum of the wins of every past opponent.
    pub fn combined_strength(&self, field: &Field<'_>) -> f64 {
        self.history().into_iter().map(|opp| field.wins_of(opp)).sum()
    }

    /// Wins of opponents beaten, with drawn ballots counting half.
    pub fn strength_of_win(&self, field: &Field<'_>) -> f64 {
        self.opponent_strength(field, |pd| pd > 0)
    }

    /// Wins of opponents lost to, with drawn ballots counting half.
    pub fn strength_of_loss(&self, field: &Field<'_>) -> f64 {
        self.opponent_strength(field, |pd| pd < 0)
    }

    fn opponent_strength(&self, field: &Field<'_>, counts: impl Fn(i32) -> bool) -> f64 {
        let mut strength = 0.0;
        for ballot in &self.ballots {
            let pd = ballot.pd_for(self.id);
            let opp_wins = field.wins_of(ballot.opponent_for(self.id));
            if pd == 0 {
                strength += opp_wins / 2.0;
            } else if counts(pd) {
                strength += opp_wins;
            }
        }
        strength
    }

    pub fn point_differential(&self) -> i32 {
        self.point_differential_dropping(0)
    }

    pub fn points(&self) -> i32 {
        self.points_dropping(0)
    }

    /// Point differential over the ballots in `[drop, len - drop)`.
    pub fn point_differential_dropping(&self, drop: usize) -> i32 {
        self.trimmed(drop).iter().map(|b| b.pd_for(self.id)).sum()
    }

    /// Raw points over the ballots in `[drop, len - drop)`.
    pub fn points_dropping(&self, drop: usize) -> i32 {
        self.trimmed(drop).iter().map(|b| b.total_for(self.id)).sum()
    }

    fn trimmed(&self, drop: usize) -> &[Ballot] {
        let end = self.ballots.len().saturating_sub(drop);
        if drop >= end {
            return &[];
        }
        &self.ballots[drop..end]
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.id, self.name)
    }
}

/// Read-only lookup of teams by id, for metrics that read opponents' records.
#[derive(Debug, Clone)]
pub struct Field<'a> {
    teams: HashMap<TeamId, &'a Team>,
}

impl<'a> Field<'a> {
    pub fn new(teams: &'a [Team]) -> Self {
        Self {
            teams: teams.iter().map(|t| (t.id(), t)).collect(),
        }
    }

    pub fn get(&self, id: TeamId) -> Option<&'a Team> {
        self.teams.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Wins of a team in the field. Opponents always belong to the field, so
    /// a miss means the histories reference a team that was never registered.
    pub fn wins_of(&self, id: TeamId) -> f64 {
        match self.get(id) {
            Some(team) => team.wins(),
            None => panic!("opponent {id} is not part of the field"),
        }
    }
}

#[cfg(test)]
#[path = "team_tests.rs"]
mod team_tests;
