use rand::Rng;

use crate::cards::{Language, NewCard, Rarity, Stats};
use crate::core::constants::MAX_STAT;
use crate::core::stat_math::roll_jittered;

/// Map a roll in [0, 1) to a rarity by walking the cumulative odds.
///
/// Falls back to Common if the cumulative odds never exceed `roll`, which
/// only happens when floating-point error leaves the total just under 1.0.
pub fn roll_rarity(roll: f64) -> Rarity {
    let mut cumulative = 0.0;
    for rarity in Rarity::ALL {
        cumulative += rarity.odds();
        if roll < cumulative {
            return rarity;
        }
    }
    Rarity::Common
}

pub fn roll_rarity_with(rng: &mut impl Rng) -> Rarity {
    roll_rarity(rng.gen::<f64>())
}

/// Derive card stats from the language's base stats and the rarity multiplier.
///
/// Each dimension is sampled independently from
/// `[floor(base * mult * 0.8), ceil(base * mult * 1.2)]` and clamped to MAX_STAT.
pub fn generate_card_stats(language: Language, rarity: Rarity, rng: &mut impl Rng) -> Stats {
    let base = language.base_stats();
    let multiplier = rarity.stat_multiplier();
    Stats::from_fn(|d| roll_jittered(base.get(d) as f64 * multiplier, rng).min(MAX_STAT))
}

/// Pull a card: uniform language, rolled rarity, derived stats.
pub fn generate_card(player_id: &str, rng: &mut impl Rng) -> NewCard {
    let language = Language::random(rng);
    let rarity = roll_rarity_with(rng);
    let stats = generate_card_stats(language, rarity, rng);

    tracing::debug!(player_id, %language, %rarity, total = stats.total(), "card pulled");

    NewCard {
        player_id: player_id.to_string(),
        language,
        rarity,
        stats,
        nft_mint_address: None,
    }
}
