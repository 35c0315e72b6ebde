use rand::Rng;

use crate::cards::{Card, Dimension, Rarity};
use crate::core::constants::{MAX_STAT, UPGRADE_COST_STEP, UPGRADE_INCREMENT_MAX, UPGRADE_INCREMENT_MIN};

/// Materials refunded for burning a card of `rarity`.
pub fn get_burn_materials(rarity: Rarity) -> u32 {
    rarity.burn_materials()
}

/// Cost to raise a stat currently at `current_value` by one upgrade.
/// One extra unit per 10 points already in the stat, minimum 1.
pub fn get_upgrade_cost(current_value: u32) -> u32 {
    (current_value / UPGRADE_COST_STEP + 1).max(1)
}

/// True if the stat is below the cap and either balance covers the cost.
pub fn can_upgrade(card: &Card, dimension: Dimension, materials: u32, xp: u64) -> bool {
    if card.is_maxed(dimension) {
        return false;
    }
    let cost = get_upgrade_cost(card.stat(dimension));
    materials >= cost || xp >= cost as u64
}

/// Returns a copy of `card` with `dimension` raised by 1 to 3, capped at MAX_STAT.
/// Does not check or spend resources.
pub fn apply_upgrade(card: &Card, dimension: Dimension, rng: &mut impl Rng) -> Card {
    let increment = rng.gen_range(UPGRADE_INCREMENT_MIN..=UPGRADE_INCREMENT_MAX);
    let mut upgraded = card.clone();
    let current = upgraded.stat(dimension);
    upgraded.stats.set(dimension, (current + increment).min(MAX_STAT));

    tracing::debug!(
        card = %card.id,
        dimension = dimension.label(),
        from = current,
        to = upgraded.stat(dimension),
        "stat upgraded"
    );
    upgraded
}
