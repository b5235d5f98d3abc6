//! Simulated tournaments for the tab_core pairing and ranking engines
//!
//! This crate provides infrastructure for:
//! - Building a random field of teams, optionally grouped into programs
//! - Playing the four standard rounds with random ballots
//! - Reporting the final standings as a table or JSON
//!
//! # Usage
//!
//! ```bash
//! # Simulate a 20-team tournament
//! cargo run -p tournament -- simulate
//!
//! # Reproducible run from a config file, JSON output
//! cargo run -p tournament -- simulate --config sim.toml --seed 7 --json
//! ```

mod config;
mod results;
mod simulate;

pub use config::*;
pub use results::*;
pub use simulate::*;
