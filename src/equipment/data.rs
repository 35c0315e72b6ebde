use super::types::{EquipmentEffect, EquipmentItem, SlotType};
use crate::cards::Dimension;

/// The stock item catalog.
pub fn default_catalog() -> Vec<EquipmentItem> {
    use EquipmentEffect::*;

    let mut items = vec![
        // Consumables
        EquipmentItem::new(
            "extra_pulls_3",
            "Pull Pack",
            "Three extra summons today",
            AddPulls { amount: 3 },
        ),
        EquipmentItem::new(
            "extra_pulls_10",
            "Pull Crate",
            "Ten extra summons today",
            AddPulls { amount: 10 },
        ),
        EquipmentItem::new(
            "extra_battles_5",
            "Battle Pass",
            "Five more rewarded battles today",
            AddBattles { amount: 5 },
        ),
        EquipmentItem::new(
            "unlimited_battles",
            "Infinite Loop",
            "No daily battle limit",
            UnlimitedBattles,
        ),
        // Ability enhancement
        EquipmentItem::new(
            "trigger_amp_small",
            "Interrupt Handler",
            "+5% ability trigger chance",
            TriggerChance { bonus: 0.05 },
        ),
        EquipmentItem::new(
            "trigger_amp_large",
            "Signal Amplifier",
            "+15% ability trigger chance",
            TriggerChance { bonus: 0.15 },
        ),
        // Utility
        EquipmentItem::new(
            "xp_booster",
            "Code Review Bot",
            "+25% battle XP",
            XpBonus { percent: 25 },
        ),
        EquipmentItem::new(
            "xp_booster_pro",
            "Pair Programmer",
            "+50% battle XP",
            XpBonus { percent: 50 },
        ),
        // AI core
        EquipmentItem::new(
            "ai_core_throttle",
            "Rate Limiter",
            "Opponent stats -5%",
            OpponentDampen { percent: 5 },
        ),
        EquipmentItem::new(
            "ai_core_sandbox",
            "Sandbox",
            "Opponent stats -10%",
            OpponentDampen { percent: 10 },
        ),
        // Stat boost
        EquipmentItem::new(
            "overclock_all",
            "Overclock",
            "+3 to every stat",
            AllStatsBoost { amount: 3 },
        ),
    ];

    items.extend(Dimension::ALL.iter().map(|&dimension| {
        EquipmentItem::new(
            &format!("chip_{}", dimension.key().to_lowercase()),
            &format!("{} Chip", dimension.label()),
            &format!("+10 {}", dimension.label()),
            StatBoost {
                dimension,
                amount: 10,
            },
        )
    }));

    items
}

/// Finds a catalog item by id.
pub fn find_item(id: &str) -> Option<EquipmentItem> {
    default_catalog().into_iter().find(|item| item.id == id)
}

/// Catalog items that go in `slot`.
pub fn items_for_slot(slot: SlotType) -> Vec<EquipmentItem> {
    default_catalog()
        .into_iter()
        .filter(|item| item.slot_type() == slot)
        .collect()
}
