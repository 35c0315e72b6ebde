use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::languages::Language;
use crate::core::constants::MAX_STAT;
use crate::error::GameError;

/// One of the five stat axes contested in battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    Speed,
    Security,
    Ecosystem,
    Scalability,
    DevExp,
}

impl Dimension {
    /// All dimensions in canonical order.
    pub const ALL: [Dimension; 5] = [
        Dimension::Speed,
        Dimension::Security,
        Dimension::Ecosystem,
        Dimension::Scalability,
        Dimension::DevExp,
    ];

    /// Field name as used in serialized data.
    pub fn key(&self) -> &'static str {
        match self {
            Dimension::Speed => "speed",
            Dimension::Security => "security",
            Dimension::Ecosystem => "ecosystem",
            Dimension::Scalability => "scalability",
            Dimension::DevExp => "devExp",
        }
    }

    /// Three-letter label for compact display.
    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Speed => "SPD",
            Dimension::Security => "SEC",
            Dimension::Ecosystem => "ECO",
            Dimension::Scalability => "SCL",
            Dimension::DevExp => "DEV",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Dimension {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dimension::ALL
            .iter()
            .copied()
            .find(|d| d.key().eq_ignore_ascii_case(s) || d.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| GameError::UnknownDimension(s.to_string()))
    }
}

/// The five stat values of a card or opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub speed: u32,
    pub security: u32,
    pub ecosystem: u32,
    pub scalability: u32,
    pub dev_exp: u32,
}

impl Stats {
    pub const fn new(speed: u32, security: u32, ecosystem: u32, scalability: u32, dev_exp: u32) -> Self {
        Self {
            speed,
            security,
            ecosystem,
            scalability,
            dev_exp,
        }
    }

    /// Every dimension set to the same value.
    pub const fn uniform(value: u32) -> Self {
        Self::new(value, value, value, value, value)
    }

    pub fn get(&self, dimension: Dimension) -> u32 {
        match dimension {
            Dimension::Speed => self.speed,
            Dimension::Security => self.security,
            Dimension::Ecosystem => self.ecosystem,
            Dimension::Scalability => self.scalability,
            Dimension::DevExp => self.dev_exp,
        }
    }

    pub fn get_mut(&mut self, dimension: Dimension) -> &mut u32 {
        match dimension {
            Dimension::Speed => &mut self.speed,
            Dimension::Security => &mut self.security,
            Dimension::Ecosystem => &mut self.ecosystem,
            Dimension::Scalability => &mut self.scalability,
            Dimension::DevExp => &mut self.dev_exp,
        }
    }

    pub fn set(&mut self, dimension: Dimension, value: u32) {
        *self.get_mut(dimension) = value;
    }

    pub fn total(&self) -> u32 {
        self.speed + self.security + self.ecosystem + self.scalability + self.dev_exp
    }

    /// Builds stats by evaluating `f` once per dimension, in canonical order.
    pub fn from_fn(mut f: impl FnMut(Dimension) -> u32) -> Self {
        let mut stats = Stats::default();
        for dimension in Dimension::ALL {
            stats.set(dimension, f(dimension));
        }
        stats
    }

    /// Dimension with the lowest value, scanning `candidates` in order.
    /// Ties keep the earliest candidate.
    pub fn weakest_of(&self, candidates: &[Dimension]) -> Option<Dimension> {
        let mut best: Option<Dimension> = None;
        for &d in candidates {
            if best.map_or(true, |b| self.get(d) < self.get(b)) {
                best = Some(d);
            }
        }
        best
    }

    /// Dimension with the highest value, scanning `candidates` in order.
    /// Ties keep the earliest candidate.
    pub fn strongest_of(&self, candidates: &[Dimension]) -> Option<Dimension> {
        let mut best: Option<Dimension> = None;
        for &d in candidates {
            if best.map_or(true, |b| self.get(d) > self.get(b)) {
                best = Some(d);
            }
        }
        best
    }

    /// Highest value across all five dimensions.
    pub fn max_value(&self) -> u32 {
        Dimension::ALL.iter().map(|&d| self.get(d)).max().unwrap_or(0)
    }
}

/// Card rarity tier, ordered from most to least common.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common = 0,
    Uncommon = 1,
    Rare = 2,
    Legendary = 3,
    Mythic = 4,
}

impl Rarity {
    /// Tiers in roll order.
    pub const ALL: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Legendary,
        Rarity::Mythic,
    ];

    /// Returns the display name for this rarity tier.
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Legendary => "Legendary",
            Rarity::Mythic => "Mythic",
        }
    }

    /// Probability of pulling this tier. All tiers sum to 1.0.
    pub fn odds(&self) -> f64 {
        match self {
            Rarity::Common => 0.5,
            Rarity::Uncommon => 0.3,
            Rarity::Rare => 0.15,
            Rarity::Legendary => 0.045,
            Rarity::Mythic => 0.005,
        }
    }

    /// Multiplier applied to language base stats at generation.
    pub fn stat_multiplier(&self) -> f64 {
        match self {
            Rarity::Common => 1.0,
            Rarity::Uncommon => 1.2,
            Rarity::Rare => 1.5,
            Rarity::Legendary => 2.0,
            Rarity::Mythic => 3.0,
        }
    }

    /// Materials refunded when a card of this tier is burned.
    pub fn burn_materials(&self) -> u32 {
        match self {
            Rarity::Common => 1,
            Rarity::Uncommon => 3,
            Rarity::Rare => 8,
            Rarity::Legendary => 25,
            Rarity::Mythic => 100,
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rarity {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rarity::ALL
            .iter()
            .copied()
            .find(|r| r.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| GameError::UnknownRarity(s.to_string()))
    }
}

/// A card owned by a player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: Uuid,
    pub player_id: String,
    pub language: Language,
    pub rarity: Rarity,
    #[serde(flatten)]
    pub stats: Stats,
    pub nft_mint_address: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Card {
    pub fn stat(&self, dimension: Dimension) -> u32 {
        self.stats.get(dimension)
    }

    pub fn is_maxed(&self, dimension: Dimension) -> bool {
        self.stat(dimension) >= MAX_STAT
    }
}

/// A freshly pulled card that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCard {
    pub player_id: String,
    pub language: Language,
    pub rarity: Rarity,
    #[serde(flatten)]
    pub stats: Stats,
    pub nft_mint_address: Option<String>,
}

impl NewCard {
    /// Attaches the identity chosen by the caller's storage layer.
    pub fn into_card(self, id: Uuid, created_at: DateTime<Utc>) -> Card {
        Card {
            id,
            player_id: self.player_id,
            language: self.language,
            rarity: self.rarity,
            stats: self.stats,
            nft_mint_address: self.nft_mint_address,
            created_at,
        }
    }

    /// Assigns a random v4 id and the current time.
    pub fn mint(self) -> Card {
        self.into_card(Uuid::new_v4(), Utc::now())
    }
}
