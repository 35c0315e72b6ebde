//! Shared stat math for card generation, opponents and battle effects.
//!
//! These pure functions hold the rounding and jitter rules so the gacha,
//! the opponent generator and the ability effects agree on them.

use rand::Rng;

use crate::core::constants::{STAT_JITTER_HIGH, STAT_JITTER_LOW};

/// Multiply a stat by `factor`, rounding half away from zero.
///
/// Negative products saturate at 0.
pub fn scale_round(value: u32, factor: f64) -> u32 {
    let scaled = (value as f64 * factor).round();
    if scaled <= 0.0 {
        0
    } else {
        scaled as u32
    }
}

/// Inclusive sampling band around a scaled stat.
///
/// # Returns
/// `(floor(scaled * 0.8), ceil(scaled * 1.2))`
pub fn jitter_bounds(scaled: f64) -> (u32, u32) {
    let low = (scaled * STAT_JITTER_LOW).floor().max(0.0) as u32;
    let high = (scaled * STAT_JITTER_HIGH).ceil().max(0.0) as u32;
    (low, high.max(low))
}

/// Sample uniformly from the jitter band around `scaled`.
pub fn roll_jittered(scaled: f64, rng: &mut impl Rng) -> u32 {
    let (low, high) = jitter_bounds(scaled);
    rng.gen_range(low..=high)
}

/// Roll a probability in [0, 1). `chance >= 1.0` always succeeds.
pub fn roll_chance(chance: f64, rng: &mut impl Rng) -> bool {
    rng.gen::<f64>() < chance
}
