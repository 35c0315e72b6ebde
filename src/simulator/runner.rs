//! Battle simulation runner using the real gacha and battle engine.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::config::SimConfig;
use super::report::{BattleRecord, SimReport};
use crate::battle::{fight, generate_ai_opponent, pick_random_dimensions};
use crate::cards::{Language, NewCard};
use crate::core::constants::{MAX_DIFFICULTY, MIN_DIFFICULTY};
use crate::equipment::EquipmentModifiers;
use crate::gacha::{generate_card_stats, roll_rarity_with};

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut records = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        // One RNG per battle so any single battle can be replayed
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let record = simulate_battle(config, &mut rng);
        if config.verbosity >= 2 {
            tracing::info!(
                run = run_idx + 1,
                total = config.num_runs,
                language = %record.language,
                rarity = %record.rarity,
                difficulty = record.difficulty,
                outcome = record.outcome.name(),
                xp = record.xp,
                "simulated battle"
            );
        }
        records.push(record);
    }

    let report = SimReport::from_records(&records);
    if config.verbosity >= 1 {
        tracing::info!(
            battles = report.num_runs,
            win_rate = report.overall.win_rate(),
            "simulation complete"
        );
    }
    report
}

/// Pull a card per the config and fight one generated opponent.
pub fn simulate_battle(config: &SimConfig, rng: &mut impl Rng) -> BattleRecord {
    let language = config.language.unwrap_or_else(|| Language::random(rng));
    let rarity = config.rarity.unwrap_or_else(|| roll_rarity_with(rng));
    let difficulty = config
        .difficulty
        .unwrap_or_else(|| rng.gen_range(MIN_DIFFICULTY..=MAX_DIFFICULTY));

    let card = NewCard {
        player_id: "simulator".to_string(),
        language,
        rarity,
        stats: generate_card_stats(language, rarity, rng),
        nft_mint_address: None,
    }
    .mint();

    let opponent = generate_ai_opponent(difficulty, rng);
    let dimensions = pick_random_dimensions(rng);
    let result = fight(&card, &opponent, dimensions, &EquipmentModifiers::NONE, rng);

    BattleRecord {
        language,
        rarity,
        difficulty,
        outcome: result.result,
        xp: result.xp_earned,
        triggered: result.ability_triggered.is_some(),
    }
}
