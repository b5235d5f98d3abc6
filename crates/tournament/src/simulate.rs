//! Simulated tournament runs: random field, four paired rounds, random
//! ballots, final standings

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cell::RefCell;
use std::ops::Range;
use std::rc::Rc;
use tracing::{debug, info};

use tab_core::{
    DefaultRanking, FinalStanding, Match, PairingEvent, PairingStrategy, RandomFlip,
    Round1Pairing, Round2Pairing, Round3Pairing, Round4NationalsPairing, TabError, Team, TeamId,
    Tournament,
};

use crate::config::SimulationConfig;

/// Rounds in a standard tournament
pub const ROUNDS: usize = 4;

/// Point totals for the first ballot of a match
pub const FIRST_BALLOT_TOTALS: Range<i32> = 100..140;
/// Point totals for the second ballot of a match
pub const SECOND_BALLOT_TOTALS: Range<i32> = 200..240;

/// Everything a finished simulation produced
#[derive(Debug, Clone)]
pub struct SimulationOutcome {
    pub tournament: Tournament,
    pub standings: Vec<FinalStanding>,
    /// Pairing events reported during the run, in order
    pub events: Vec<String>,
}

/// Plays out one tournament from a config
pub struct Simulation {
    config: SimulationConfig,
    rng: StdRng,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self { config, rng })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Teams 1..=N, with consecutive teams sharing a program when configured
    pub fn build_field(&self) -> Result<Tournament> {
        let mut tournament = Tournament::new();
        for number in 1..=self.config.teams {
            tournament.add_team(Team::new(TeamId(number), format!("Team {number}")))?;
        }

        if self.config.program_size >= 2 {
            let ids: Vec<TeamId> = tournament.teams().iter().map(Team::id).collect();
            for program in ids.chunks(self.config.program_size) {
                tournament.add_program(program)?;
            }
        }
        Ok(tournament)
    }

    /// Plays all four rounds and ranks the field
    pub fn run(&mut self) -> Result<SimulationOutcome> {
        let mut tournament = self.build_field()?;
        info!(
            teams = self.config.teams,
            program_size = self.config.program_size,
            seed = ?self.config.seed,
            "simulating tournament"
        );

        let events: Rc<RefCell<Vec<String>>> = Rc::default();
        let pairing = self.config.pairing;
        let mut round1 = Round1Pairing::seeded(self.rng.gen());
        let mut round2 = Round2Pairing::new(pairing);
        let mut round3 = Round3Pairing::new(pairing);
        let mut round4 = Round4NationalsPairing::new(pairing);
        round1.add_pairing_event_listener(collect_into(&events));
        round2.add_pairing_event_listener(collect_into(&events));
        round3.add_pairing_event_listener(collect_into(&events));
        round4.add_pairing_event_listener(collect_into(&events));

        let strategies: [&mut dyn PairingStrategy; ROUNDS] =
            [&mut round1, &mut round2, &mut round3, &mut round4];
        for (index, strategy) in strategies.into_iter().enumerate() {
            let name = strategy.name().to_string();
            tournament
                .add_round(strategy)
                .with_context(|| format!("Failed to pair {name}"))?;
            tournament.lock_current_round()?;

            let round = tournament
                .current_round_mut()
                .context("No current round after pairing")?;
            for m in round.matches_mut() {
                self.score(m)?;
            }
            tournament
                .commit_current_round()
                .with_context(|| format!("Failed to commit round {}", index + 1))?;
        }

        let mut ranking = DefaultRanking::new(RandomFlip::seeded(self.rng.gen()));
        let standings = tournament.rank(&mut ranking);
        let events = events.borrow().clone();
        Ok(SimulationOutcome {
            tournament,
            standings,
            events,
        })
    }

    /// Attaches the match's two ballots
    fn score(&mut self, m: &mut Match) -> Result<(), TabError> {
        for totals in [FIRST_BALLOT_TOTALS, SECOND_BALLOT_TOTALS] {
            let pi_total = self.rng.gen_range(totals.clone());
            let delta_total = self.rng.gen_range(totals);
            m.score(pi_total, delta_total)?;
        }
        debug!(%m, "scored");
        Ok(())
    }
}

fn collect_into(events: &Rc<RefCell<Vec<String>>>) -> impl Fn(&PairingEvent) + 'static {
    let sink = Rc::clone(events);
    move |event: &PairingEvent| sink.borrow_mut().push(event.to_string())
}
