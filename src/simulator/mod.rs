//! Battle balance simulator for Monte Carlo analysis.
//!
//! Plays many seeded battles through the real gacha and battle engine and
//! reports win, draw and trigger rates by language, rarity and difficulty.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{BattleRecord, OutcomeCounts, SimReport};
pub use runner::{run_simulation, simulate_battle};
