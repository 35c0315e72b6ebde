//! Equipment tests: catalog items equipped on a loadout and fed into battle.

use codecards::battle::{fight, generate_ai_opponent, pick_random_dimensions, Battle, BattleOutcome};
use codecards::cards::{Card, Dimension, Language, NewCard, Rarity, Stats};
use codecards::equipment::{
    find_item, items_for_slot, EquipmentItem, EquipmentModifiers, Loadout, SlotType,
};
use codecards::player::PlayerProgress;
use codecards::GameError;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use Dimension::*;

fn card(language: Language, stats: Stats) -> Card {
    NewCard {
        player_id: "player-1".to_string(),
        language,
        rarity: Rarity::Rare,
        stats,
        nft_mint_address: None,
    }
    .mint()
}

fn item(id: &str) -> EquipmentItem {
    find_item(id).unwrap_or_else(|| panic!("missing catalog item {id}"))
}

// =========================================================================
// Loadout
// =========================================================================

#[test]
fn test_every_slot_has_catalog_items() {
    for slot in SlotType::EQUIPPABLE {
        assert!(!items_for_slot(slot).is_empty(), "{} is empty", slot.name());
    }
}

#[test]
fn test_full_loadout_modifiers() {
    let mut loadout = Loadout::new();
    loadout.equip(SlotType::StatBoost, item("chip_speed")).expect("equip");
    loadout
        .equip(SlotType::AbilityEnhancement, item("trigger_amp_large"))
        .expect("equip");
    loadout.equip(SlotType::Utility, item("xp_booster_pro")).expect("equip");
    loadout.equip(SlotType::AiCore, item("ai_core_sandbox")).expect("equip");

    let mods = loadout.modifiers();
    assert_eq!(mods.stat_bonus, Stats::new(10, 0, 0, 0, 0));
    assert!((mods.trigger_chance_bonus - 0.15).abs() < 1e-9);
    assert_eq!(mods.xp_bonus_percent, 50);
    assert_eq!(mods.opponent_dampen_percent, 10);
    assert_eq!(loadout.iter_equipped().count(), 4);
}

#[test]
fn test_equip_rejects_wrong_slot_and_consumables() {
    let mut loadout = Loadout::new();
    assert_eq!(
        loadout.equip(SlotType::Utility, item("chip_speed")),
        Err(GameError::WrongSlot {
            item: "chip_speed".to_string(),
            expected: SlotType::StatBoost,
            actual: SlotType::Utility,
        })
    );
    assert_eq!(
        loadout.equip(SlotType::Utility, item("extra_pulls_3")),
        Err(GameError::NotEquippable("extra_pulls_3".to_string()))
    );
    assert_eq!(loadout.iter_equipped().count(), 0);
}

#[test]
fn test_stored_items_follow_their_effect() {
    // A saved item claiming the stat slot while carrying a consumable effect
    let item: EquipmentItem = serde_json::from_str(
        r#"{"id":"forged","name":"Forged","description":"","slotType":"stat_boost",
            "effect":{"effectType":"unlimited_battles"}}"#,
    )
    .expect("valid item json");
    assert!(item.is_consumable());

    let mut loadout = Loadout::new();
    assert_eq!(
        loadout.equip(SlotType::StatBoost, item.clone()),
        Err(GameError::NotEquippable("forged".to_string()))
    );
    assert!(loadout.get(SlotType::StatBoost).is_none());

    let today = chrono::NaiveDate::from_ymd_opt(2025, 3, 1).expect("valid date");
    let mut player = PlayerProgress::new("player-1", today);
    player.apply_consumable(&item).expect("consumable");
    assert!(player.unlimited_battles);

    let json = serde_json::to_value(&item).expect("serializes");
    assert!(json.get("slotType").is_none());
}

// =========================================================================
// Battle integration
// =========================================================================

#[test]
fn test_stat_chip_and_dampen_show_in_rounds() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut loadout = Loadout::new();
    loadout.equip(SlotType::StatBoost, item("chip_speed")).expect("equip");
    loadout.equip(SlotType::AiCore, item("ai_core_sandbox")).expect("equip");

    // Haskell's passive is on security, which is not contested
    let c = card(Language::Haskell, Stats::uniform(20));
    let result = Battle::new(&c, Stats::uniform(50), [Speed, Ecosystem, DevExp])
        .with_equipment(&loadout.modifiers())
        .force_trigger(false)
        .resolve(&mut rng);

    assert_eq!(result.rounds[0].player_value, 30);
    assert_eq!(result.rounds[1].player_value, 20);
    assert!(result.rounds.iter().all(|r| r.ai_value == 45));
    assert_eq!(result.ai_stats, Stats::uniform(50));
    assert_eq!(result.player_card.stats, Stats::uniform(20));
}

#[test]
fn test_xp_booster_scales_win_reward() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut loadout = Loadout::new();
    loadout.equip(SlotType::Utility, item("xp_booster_pro")).expect("equip");
    let mods = loadout.modifiers();

    let c = card(Language::Haskell, Stats::uniform(50));
    for _ in 0..50 {
        let result = Battle::new(&c, Stats::uniform(1), pick_random_dimensions(&mut rng))
            .with_equipment(&mods)
            .force_trigger(false)
            .resolve(&mut rng);
        assert_eq!(result.result, BattleOutcome::Win);
        assert!([15, 16, 18, 19, 21].contains(&result.xp_earned), "xp {}", result.xp_earned);
    }
}

#[test]
fn test_trigger_bonus_is_capped() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mods = EquipmentModifiers {
        trigger_chance_bonus: 1.0,
        ..EquipmentModifiers::NONE
    };
    let c = card(Language::Scala, Stats::uniform(20));
    let trials = 1_000;
    let triggered = (0..trials)
        .filter(|_| {
            Battle::new(&c, Stats::uniform(20), pick_random_dimensions(&mut rng))
                .with_equipment(&mods)
                .resolve(&mut rng)
                .ability_triggered
                .is_some()
        })
        .count();
    let rate = triggered as f64 / trials as f64;
    assert!(rate > 0.9, "trigger rate {rate}");
    assert!(rate < 1.0, "trigger rate {rate} ignores the cap");
}

#[test]
fn test_fight_reports_opponent_language() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let c = card(Language::Swift, Stats::uniform(20));
    for _ in 0..10 {
        let ai = generate_ai_opponent(2, &mut rng);
        let dims = pick_random_dimensions(&mut rng);
        let result = fight(&c, &ai, dims, &EquipmentModifiers::NONE, &mut rng);
        assert_eq!(result.ai_language, ai.language);
        assert_eq!(result.ai_stats, ai.stats);
    }
}
