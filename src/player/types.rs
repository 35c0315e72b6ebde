use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::constants::{FREE_PULLS_PER_DAY, MAX_DAILY_BATTLES, MIN_BATTLES_FOR_WINRATE};

/// Which balance pays for an upgrade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpgradeCurrency {
    Materials,
    Xp,
}

/// A player's balances and daily allowances.
///
/// Pure in-memory state; the caller loads and stores it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProgress {
    pub id: String,
    #[serde(default)]
    pub wallet_address: Option<String>,
    pub free_pulls_remaining: u32,
    /// UTC date the daily allowances were last refilled.
    pub last_reset: NaiveDate,
    pub xp: u64,
    pub materials: u32,
    pub daily_battles: u32,
    #[serde(default)]
    pub bonus_battles: u32,
    #[serde(default)]
    pub unlimited_battles: bool,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(default)]
    pub draws: u32,
}

impl PlayerProgress {
    /// A fresh player with a full day's allowance starting `today`.
    pub fn new(id: impl Into<String>, today: NaiveDate) -> Self {
        Self {
            id: id.into(),
            wallet_address: None,
            free_pulls_remaining: FREE_PULLS_PER_DAY,
            last_reset: today,
            xp: 0,
            materials: 0,
            daily_battles: 0,
            bonus_battles: 0,
            unlimited_battles: false,
            wins: 0,
            losses: 0,
            draws: 0,
        }
    }

    /// Rewarded battles allowed today, or `None` when unlimited.
    pub fn battle_allowance(&self) -> Option<u32> {
        if self.unlimited_battles {
            None
        } else {
            Some(MAX_DAILY_BATTLES + self.bonus_battles)
        }
    }

    /// Rewarded battles left today, or `None` when unlimited.
    pub fn battles_remaining(&self) -> Option<u32> {
        self.battle_allowance()
            .map(|allowance| allowance.saturating_sub(self.daily_battles))
    }

    pub fn total_battles(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Fraction of battles won, once enough battles have been played.
    pub fn win_rate(&self) -> Option<f64> {
        let total = self.total_battles();
        if total < MIN_BATTLES_FOR_WINRATE {
            return None;
        }
        Some(self.wins as f64 / total as f64)
    }
}
