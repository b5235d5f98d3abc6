//! The tournament state machine: registered teams and the rounds played so
//! far.
//!
//! A round moves through pair -> lock -> score -> commit. Only the commit
//! touches team histories, so every pairing reads a consistent field.

use serde::Serialize;
use tracing::info;

use crate::error::TabError;
use crate::ranking::{FinalStanding, RankingStrategy};
use crate::round::Round;
use crate::team::Team;
use crate::types::TeamId;
use crate::PairingStrategy;

#[derive(Debug, Clone, Default, Serialize)]
pub struct Tournament {
    teams: Vec<Team>,
    rounds: Vec<Round>,
}

impl Tournament {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a team. Team numbers are unique.
    pub fn add_team(&mut self, team: Team) -> Result<(), TabError> {
        if self.team(team.id()).is_some() {
            return Err(TabError::DuplicateTeam(team.id()));
        }
        self.teams.push(team);
        Ok(())
    }

    /// Links every listed team to every other as members of one program.
    pub fn add_program(&mut self, members: &[TeamId]) -> Result<(), TabError> {
        if let Some(&unknown) = members.iter().find(|&&id| self.team(id).is_none()) {
            return Err(TabError::UnknownTeam(unknown));
        }
        for team in self.teams.iter_mut().filter(|t| members.contains(&t.id())) {
            for &other in members {
                team.add_program(other);
            }
        }
        Ok(())
    }

    /// Unlinks two teams in both directions.
    pub fn remove_program(&mut self, a: TeamId, b: TeamId) -> Result<(), TabError> {
        self.team_mut(a)?.remove_program(b);
        self.team_mut(b)?.remove_program(a);
        Ok(())
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id() == id)
    }

    fn team_mut(&mut self, id: TeamId) -> Result<&mut Team, TabError> {
        self.teams
            .iter_mut()
            .find(|t| t.id() == id)
            .ok_or(TabError::UnknownTeam(id))
    }

    pub fn num_rounds(&self) -> usize {
        self.rounds.len()
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// Round by 0-based index.
    pub fn round(&self, index: usize) -> Option<&Round> {
        self.rounds.get(index)
    }

    pub fn current_round(&self) -> Option<&Round> {
        self.rounds.last()
    }

    pub fn current_round_mut(&mut self) -> Option<&mut Round> {
        self.rounds.last_mut()
    }

    /// Pairs the next round with `strategy` and makes it current.
    ///
    /// The previous round must have been committed first, otherwise the
    /// pairing would read stale records.
    pub fn add_round(&mut self, strategy: &mut dyn PairingStrategy) -> Result<&Round, TabError> {
        if let Some(last) = self.rounds.last() {
            if !last.is_played() {
                return Err(TabError::PreviousRoundUnplayed {
                    round: self.rounds.len(),
                });
            }
        }

        let round = strategy.pair(&self.teams)?;
        info!(
            round = self.rounds.len() + 1,
            strategy = strategy.name(),
            matches = round.num_matches(),
            swaps = round.swaps().len(),
            "round added"
        );
        self.rounds.push(round);
        self.current_round().ok_or(TabError::NoCurrentRound)
    }

    /// Throws away the current round, as long as its pairing isn't locked.
    pub fn discard_last_round(&mut self) -> Result<Round, TabError> {
        match self.rounds.last() {
            None => Err(TabError::NoCurrentRound),
            Some(round) if round.is_pairing_locked() => Err(TabError::DiscardLockedRound),
            Some(_) => self.rounds.pop().ok_or(TabError::NoCurrentRound),
        }
    }

    pub fn lock_current_round(&mut self) -> Result<(), TabError> {
        self.current_round_mut()
            .ok_or(TabError::NoCurrentRound)?
            .lock_pairing()
    }

    /// Pushes every ballot of the current round into both teams' histories
    /// and marks the round played.
    pub fn commit_current_round(&mut self) -> Result<(), TabError> {
        let round = self.rounds.last_mut().ok_or(TabError::NoCurrentRound)?;
        if let Some(unknown) = round
            .teams()
            .into_iter()
            .find(|&id| !self.teams.iter().any(|t| t.id() == id))
        {
            return Err(TabError::UnknownTeam(unknown));
        }

        let ballots = round.play()?;
        for ballot in &ballots {
            for team in self
                .teams
                .iter_mut()
                .filter(|t| ballot.involves(t.id()))
            {
                team.add_ballot(*ballot);
            }
        }
        info!(
            round = self.rounds.len(),
            ballots = ballots.len(),
            "round committed"
        );
        Ok(())
    }

    pub fn rank(&self, ranking: &mut dyn RankingStrategy) -> Vec<FinalStanding> {
        ranking.rank(&self.teams)
    }
}

#[cfg(test)]
#[path = "tournament_tests.rs"]
mod tournament_tests;
