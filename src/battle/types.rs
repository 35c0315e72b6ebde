use serde::{Deserialize, Serialize};

use crate::cards::{Card, Dimension, Language, Stats};
use crate::core::constants::BATTLE_DIMENSIONS_COUNT;

/// The contested dimensions of one battle, in round order.
pub type Dimensions = [Dimension; BATTLE_DIMENSIONS_COUNT];

/// An ephemeral AI opponent. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiOpponent {
    pub language: Language,
    pub stats: Stats,
}

/// Who took a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundWinner {
    Player,
    Ai,
    Tie,
}

impl RoundWinner {
    /// Plain comparison: higher value takes the round, equal values tie.
    pub fn compare(player: u32, ai: u32) -> Self {
        match player.cmp(&ai) {
            std::cmp::Ordering::Greater => RoundWinner::Player,
            std::cmp::Ordering::Less => RoundWinner::Ai,
            std::cmp::Ordering::Equal => RoundWinner::Tie,
        }
    }
}

/// Values that entered one round and who won it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundOutcome {
    pub dimension: Dimension,
    pub player_value: u32,
    pub ai_value: u32,
    pub winner: RoundWinner,
}

impl RoundOutcome {
    /// How far the AI was ahead. Zero unless the AI value is higher.
    pub fn loss_margin(&self) -> u32 {
        self.ai_value.saturating_sub(self.player_value)
    }
}

/// Values for the round currently being fought, before comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundValues {
    /// 0-based round number.
    pub index: usize,
    pub dimension: Dimension,
    pub player: u32,
    pub ai: u32,
}

/// Final battle result from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BattleOutcome {
    Win,
    Lose,
    Draw,
}

impl BattleOutcome {
    pub fn name(&self) -> &'static str {
        match self {
            BattleOutcome::Win => "win",
            BattleOutcome::Lose => "lose",
            BattleOutcome::Draw => "draw",
        }
    }
}

/// Reported when the player's ability fired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbilityTrigger {
    pub triggered: bool,
    pub ability_name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleResult {
    pub player_card: Card,
    pub ai_language: Language,
    /// The opponent's stats as passed in, before any battle effects.
    pub ai_stats: Stats,
    pub dimensions_picked: Dimensions,
    pub result: BattleOutcome,
    pub xp_earned: u32,
    pub ability_triggered: Option<AbilityTrigger>,
    pub is_practice_mode: bool,
    pub rounds: Vec<RoundOutcome>,
}

/// Mutable state of one battle resolution.
///
/// Both stat blocks are working copies; the caller's card and opponent
/// are never touched.
#[derive(Debug, Clone, PartialEq)]
pub struct BattleContext {
    pub dimensions: Dimensions,
    pub player: Stats,
    pub ai: Stats,
    pub rounds: Vec<RoundOutcome>,
    /// Fractional reduction applied to the AI value of the next round only.
    pub pending_ai_debuff: Option<f64>,
}

impl BattleContext {
    pub fn new(dimensions: Dimensions, player: Stats, ai: Stats) -> Self {
        Self {
            dimensions,
            player,
            ai,
            rounds: Vec::with_capacity(BATTLE_DIMENSIONS_COUNT),
            pending_ai_debuff: None,
        }
    }

    /// Whether the player has already taken a round in `dimension`.
    pub fn player_won(&self, dimension: Dimension) -> bool {
        self.rounds
            .iter()
            .any(|r| r.dimension == dimension && r.winner == RoundWinner::Player)
    }

    /// Winner of the most recent finished round.
    pub fn last_winner(&self) -> Option<RoundWinner> {
        self.rounds.last().map(|r| r.winner)
    }

    /// (player, ai) points, 1 per win and 0.5 each per tie.
    pub fn scores(&self) -> (f64, f64) {
        use crate::core::constants::{ROUND_TIE_POINTS, ROUND_WIN_POINTS};
        self.rounds
            .iter()
            .fold((0.0, 0.0), |(p, a), r| match r.winner {
                RoundWinner::Player => (p + ROUND_WIN_POINTS, a),
                RoundWinner::Ai => (p, a + ROUND_WIN_POINTS),
                RoundWinner::Tie => (p + ROUND_TIE_POINTS, a + ROUND_TIE_POINTS),
            })
    }
}
