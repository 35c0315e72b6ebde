//! Simulation configuration.

use crate::cards::{Language, Rarity};

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of battles to simulate
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Opponent difficulty (None = uniform 1-10 per battle)
    pub difficulty: Option<u32>,

    /// Fix the player's language (None = uniform per battle)
    pub language: Option<Language>,

    /// Fix the player's rarity (None = rolled per battle)
    pub rarity: Option<Rarity>,

    /// Log verbosity (0 = silent, 1 = summary, 2 = every battle)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 10_000,
            seed: None,
            difficulty: Some(1),
            language: None,
            rarity: None,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Small run for a quick sanity check
    pub fn quick() -> Self {
        Self {
            num_runs: 500,
            seed: Some(42),
            ..Default::default()
        }
    }

    /// Every language at one rarity against a fixed difficulty
    pub fn language_balance(difficulty: u32, rarity: Rarity) -> Self {
        Self {
            num_runs: 28_000,
            difficulty: Some(difficulty),
            rarity: Some(rarity),
            ..Default::default()
        }
    }

    /// Random difficulties, to see where win rates fall off
    pub fn difficulty_sweep(num_runs: u32) -> Self {
        Self {
            num_runs,
            difficulty: None,
            ..Default::default()
        }
    }
}
