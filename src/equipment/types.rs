use serde::{Deserialize, Serialize};

use crate::cards::{Dimension, Stats};
use crate::core::constants::{MAX_OPPONENT_DAMPEN_PERCENT, MAX_TRIGGER_CHANCE};
use crate::core::stat_math::scale_round;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotType {
    Consumable,
    StatBoost,
    AbilityEnhancement,
    Utility,
    AiCore,
}

impl SlotType {
    /// Slots a card can hold items in. Consumables are used up instead.
    pub const EQUIPPABLE: [SlotType; 4] = [
        SlotType::StatBoost,
        SlotType::AbilityEnhancement,
        SlotType::Utility,
        SlotType::AiCore,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SlotType::Consumable => "consumable",
            SlotType::StatBoost => "stat_boost",
            SlotType::AbilityEnhancement => "ability_enhancement",
            SlotType::Utility => "utility",
            SlotType::AiCore => "ai_core",
        }
    }
}

/// What an item does once equipped or consumed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "effectType", rename_all = "snake_case")]
pub enum EquipmentEffect {
    /// Flat points added to one dimension for battle.
    StatBoost { dimension: Dimension, amount: u32 },
    /// Flat points added to every dimension for battle.
    AllStatsBoost { amount: u32 },
    /// Added to the ability trigger chance.
    TriggerChance { bonus: f64 },
    /// Percentage added to battle XP.
    XpBonus { percent: u32 },
    /// Percentage removed from every opponent stat.
    OpponentDampen { percent: u32 },
    AddPulls { amount: u32 },
    AddBattles { amount: u32 },
    UnlimitedBattles,
}

impl EquipmentEffect {
    /// The slot an item with this effect belongs in.
    pub fn slot_type(&self) -> SlotType {
        match self {
            EquipmentEffect::StatBoost { .. } | EquipmentEffect::AllStatsBoost { .. } => {
                SlotType::StatBoost
            }
            EquipmentEffect::TriggerChance { .. } => SlotType::AbilityEnhancement,
            EquipmentEffect::XpBonus { .. } => SlotType::Utility,
            EquipmentEffect::OpponentDampen { .. } => SlotType::AiCore,
            EquipmentEffect::AddPulls { .. }
            | EquipmentEffect::AddBattles { .. }
            | EquipmentEffect::UnlimitedBattles => SlotType::Consumable,
        }
    }
}

/// A catalog item. Its slot always follows from its effect, so a stored
/// item cannot claim a slot its effect does not belong to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub effect: EquipmentEffect,
}

impl EquipmentItem {
    pub fn new(id: &str, name: &str, description: &str, effect: EquipmentEffect) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            effect,
        }
    }

    pub fn slot_type(&self) -> SlotType {
        self.effect.slot_type()
    }

    pub fn is_consumable(&self) -> bool {
        self.slot_type() == SlotType::Consumable
    }
}

/// Everything a loadout contributes to one battle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentModifiers {
    pub stat_bonus: Stats,
    pub trigger_chance_bonus: f64,
    pub xp_bonus_percent: u32,
    pub opponent_dampen_percent: u32,
}

impl EquipmentModifiers {
    /// No equipment.
    pub const NONE: EquipmentModifiers = EquipmentModifiers {
        stat_bonus: Stats::uniform(0),
        trigger_chance_bonus: 0.0,
        xp_bonus_percent: 0,
        opponent_dampen_percent: 0,
    };

    /// Base chance plus the bonus, kept within [0, MAX_TRIGGER_CHANCE].
    pub fn trigger_chance(&self, base: f64) -> f64 {
        (base + self.trigger_chance_bonus).clamp(0.0, MAX_TRIGGER_CHANCE)
    }

    /// Card stats with the flat bonuses added. May exceed MAX_STAT.
    pub fn boost(&self, stats: &Stats) -> Stats {
        Stats::from_fn(|d| stats.get(d) + self.stat_bonus.get(d))
    }

    /// Opponent stats after dampening.
    pub fn dampen(&self, stats: &Stats) -> Stats {
        let percent = self.opponent_dampen_percent.min(MAX_OPPONENT_DAMPEN_PERCENT);
        if percent == 0 {
            return *stats;
        }
        let factor = 1.0 - percent as f64 / 100.0;
        Stats::from_fn(|d| scale_round(stats.get(d), factor))
    }

    /// XP with the percentage bonus added, rounded down.
    pub fn apply_xp_bonus(&self, xp: u32) -> u32 {
        xp + xp * self.xp_bonus_percent / 100
    }

    /// Fold one item's effect into the totals. Consumables contribute nothing.
    pub fn add(&mut self, effect: &EquipmentEffect) {
        match *effect {
            EquipmentEffect::StatBoost { dimension, amount } => {
                *self.stat_bonus.get_mut(dimension) += amount;
            }
            EquipmentEffect::AllStatsBoost { amount } => {
                for d in Dimension::ALL {
                    *self.stat_bonus.get_mut(d) += amount;
                }
            }
            EquipmentEffect::TriggerChance { bonus } => self.trigger_chance_bonus += bonus,
            EquipmentEffect::XpBonus { percent } => self.xp_bonus_percent += percent,
            EquipmentEffect::OpponentDampen { percent } => self.opponent_dampen_percent += percent,
            EquipmentEffect::AddPulls { .. }
            | EquipmentEffect::AddBattles { .. }
            | EquipmentEffect::UnlimitedBattles => {}
        }
    }
}

impl Default for EquipmentModifiers {
    fn default() -> Self {
        Self::NONE
    }
}

/// Items equipped on one card, at most one per slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Loadout {
    #[serde(default)]
    pub stat_boost: Option<EquipmentItem>,
    #[serde(default)]
    pub ability_enhancement: Option<EquipmentItem>,
    #[serde(default)]
    pub utility: Option<EquipmentItem>,
    #[serde(default)]
    pub ai_core: Option<EquipmentItem>,
}

impl Loadout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: SlotType) -> Option<&EquipmentItem> {
        match slot {
            SlotType::StatBoost => self.stat_boost.as_ref(),
            SlotType::AbilityEnhancement => self.ability_enhancement.as_ref(),
            SlotType::Utility => self.utility.as_ref(),
            SlotType::AiCore => self.ai_core.as_ref(),
            SlotType::Consumable => None,
        }
    }

    pub(super) fn slot_mut(&mut self, slot: SlotType) -> Option<&mut Option<EquipmentItem>> {
        match slot {
            SlotType::StatBoost => Some(&mut self.stat_boost),
            SlotType::AbilityEnhancement => Some(&mut self.ability_enhancement),
            SlotType::Utility => Some(&mut self.utility),
            SlotType::AiCore => Some(&mut self.ai_core),
            SlotType::Consumable => None,
        }
    }

    pub fn iter_equipped(&self) -> impl Iterator<Item = &EquipmentItem> {
        [
            &self.stat_boost,
            &self.ability_enhancement,
            &self.utility,
            &self.ai_core,
        ]
        .into_iter()
        .filter_map(|item| item.as_ref())
    }
}
