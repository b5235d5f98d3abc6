//! Final standings storage and reporting

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use tab_core::FinalStanding;

use crate::simulate::SimulationOutcome;

/// Final standings of one tournament, first place first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandingsReport {
    /// Name/description of the tournament
    pub name: String,
    pub rounds: usize,
    /// Pairing events raised while the rounds were paired
    pub events: Vec<String>,
    pub standings: Vec<FinalStanding>,
}

impl StandingsReport {
    pub fn new(name: &str, outcome: &SimulationOutcome) -> Self {
        Self {
            name: name.to_string(),
            rounds: outcome.tournament.num_rounds(),
            events: outcome.events.clone(),
            standings: outcome.standings.clone(),
        }
    }

    /// Save the report as JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json()?)
            .with_context(|| format!("Failed to write {}", path.display()))
    }

    /// Load a report saved with [`StandingsReport::save`]
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&contents).context("Failed to parse standings report")
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize standings report")
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Tournament: {} ===\n\n", self.name));
        report.push_str(&format!(
            "Teams: {}, Rounds: {}\n\n",
            self.standings.len(),
            self.rounds
        ));

        report.push_str(&format!(
            "{:>4}  {:<20} {:>5} {:>6} {:>6} {:>6} {:>6} {:>6}\n",
            "Rank", "Team", "Wins", "CS", "SOW", "SOL", "PD", "Points"
        ));
        report.push_str(&"-".repeat(68));
        report.push('\n');

        for (place, row) in self.standings.iter().enumerate() {
            report.push_str(&format!(
                "{:>4}  {:<20} {:>5.1} {:>6.1} {:>6.1} {:>6.1} {:>6} {:>6}\n",
                place + 1,
                format!("{} ({})", row.id, row.name),
                row.wins,
                row.combined_strength,
                row.sow_rank,
                row.sol_rank,
                row.point_differential(),
                row.total_points()
            ));
        }

        if !self.events.is_empty() {
            report.push_str("\nPairing events:\n");
            for event in &self.events {
                report.push_str(&format!("  {event}\n"));
            }
        }

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}
