//! Battle resolution: dimension picks, opponent generation and the round
//! pipeline that runs ability effects at each stage.

use rand::seq::SliceRandom;
use rand::Rng;

use super::types::{
    AbilityTrigger, AiOpponent, BattleContext, BattleOutcome, BattleResult, Dimensions,
    RoundOutcome, RoundValues, RoundWinner,
};
use crate::abilities::EffectStage;
use crate::cards::{Card, Dimension, Language, Stats};
use crate::core::constants::*;
use crate::core::stat_math::{roll_chance, roll_jittered, scale_round};
use crate::equipment::EquipmentModifiers;

/// Shuffle the five dimensions and keep the first three, in round order.
pub fn pick_random_dimensions(rng: &mut impl Rng) -> Dimensions {
    let mut all = Dimension::ALL;
    all.shuffle(rng);
    [all[0], all[1], all[2]]
}

/// Generate an opponent of a uniform random language scaled to `difficulty`.
///
/// Each stat is `base * difficulty * 1.5` jittered by ±20%, with a floor of 1.
///
/// # Panics
/// If `difficulty` is 0.
pub fn generate_ai_opponent(difficulty: u32, rng: &mut impl Rng) -> AiOpponent {
    assert!(
        difficulty >= MIN_DIFFICULTY,
        "difficulty must be at least {MIN_DIFFICULTY}, got {difficulty}"
    );
    let language = Language::random(rng);
    let base = language.base_stats();
    let scale = difficulty as f64 * AI_DIFFICULTY_SCALE;
    let stats = Stats::from_fn(|d| roll_jittered(base.get(d) as f64 * scale, rng).max(AI_STAT_FLOOR));

    tracing::trace!(%language, difficulty, total = stats.total(), "generated opponent");
    AiOpponent { language, stats }
}

/// One battle, configured before it is resolved.
///
/// ```ignore
/// let result = Battle::new(&card, ai.stats, dims)
///     .with_equipment(&loadout.modifiers())
///     .against(ai.language)
///     .resolve(&mut rng);
/// ```
#[derive(Debug, Clone)]
pub struct Battle<'a> {
    card: &'a Card,
    ai_stats: Stats,
    dimensions: Dimensions,
    modifiers: EquipmentModifiers,
    forced_trigger: Option<bool>,
    ai_language: Option<Language>,
}

impl<'a> Battle<'a> {
    pub fn new(card: &'a Card, ai_stats: Stats, dimensions: Dimensions) -> Self {
        Self {
            card,
            ai_stats,
            dimensions,
            modifiers: EquipmentModifiers::NONE,
            forced_trigger: None,
            ai_language: None,
        }
    }

    pub fn with_equipment(mut self, modifiers: &EquipmentModifiers) -> Self {
        self.modifiers = *modifiers;
        self
    }

    /// Skip the trigger roll and fire (or suppress) the ability.
    pub fn force_trigger(mut self, triggered: bool) -> Self {
        self.forced_trigger = Some(triggered);
        self
    }

    /// Report `language` as the opponent instead of drawing one at random.
    pub fn against(mut self, language: Language) -> Self {
        self.ai_language = Some(language);
        self
    }

    pub fn resolve(self, rng: &mut impl Rng) -> BattleResult {
        let card = self.card;
        let ability = card.language.ability();
        let triggered = match self.forced_trigger {
            Some(forced) => forced,
            None => roll_chance(self.modifiers.trigger_chance(ability.trigger_chance), rng),
        };

        let mut player = self.modifiers.boost(&card.stats);
        let passive = ability.passive_dimension;
        player.set(passive, scale_round(player.get(passive), 1.0 + ability.passive_bonus));

        let ai = self.modifiers.dampen(&self.ai_stats);
        let mut ctx = BattleContext::new(self.dimensions, player, ai);

        if triggered {
            tracing::debug!(language = %card.language, ability = ability.name, "ability triggered");
            for effect in ability.effects_at(EffectStage::PreRound) {
                effect.pre_round(&mut ctx, rng);
            }
        }

        for (index, &dimension) in self.dimensions.iter().enumerate() {
            let mut values = RoundValues {
                index,
                dimension,
                player: ctx.player.get(dimension),
                ai: ctx.ai.get(dimension),
            };
            if let Some(debuff) = ctx.pending_ai_debuff.take() {
                values.ai = scale_round(values.ai, 1.0 - debuff);
            }
            if triggered {
                for effect in ability.effects_at(EffectStage::RoundStart) {
                    effect.on_round_start(&ctx, &mut values);
                }
            }

            let mut round = RoundOutcome {
                dimension,
                player_value: values.player,
                ai_value: values.ai,
                winner: RoundWinner::compare(values.player, values.ai),
            };
            if triggered {
                for effect in ability.effects_at(EffectStage::RoundEnd) {
                    effect.on_round_end(&mut ctx, &mut round);
                }
            }
            tracing::trace!(
                dimension = dimension.label(),
                player = round.player_value,
                ai = round.ai_value,
                winner = ?round.winner,
                "round resolved"
            );
            ctx.rounds.push(round);
        }

        if triggered {
            for effect in ability.effects_at(EffectStage::PostRound) {
                effect.post_round(&mut ctx);
            }
        }

        let (player_score, ai_score) = ctx.scores();
        let result = if player_score > ai_score {
            BattleOutcome::Win
        } else if ai_score > player_score {
            BattleOutcome::Lose
        } else {
            BattleOutcome::Draw
        };

        let mut xp_earned = match result {
            BattleOutcome::Win => WIN_XP_BASE + rng.gen_range(0..WIN_XP_SPREAD),
            BattleOutcome::Lose => LOSE_XP,
            BattleOutcome::Draw => DRAW_XP,
        };
        if triggered {
            for effect in ability.effects_at(EffectStage::PostScore) {
                effect.post_score(result, &mut xp_earned);
            }
        }
        xp_earned = self.modifiers.apply_xp_bonus(xp_earned);

        let ai_language = match self.ai_language {
            Some(language) => language,
            None => Language::random(rng),
        };

        tracing::debug!(
            language = %card.language,
            result = result.name(),
            player_score,
            ai_score,
            xp = xp_earned,
            triggered,
            "battle resolved"
        );

        BattleResult {
            player_card: card.clone(),
            ai_language,
            ai_stats: self.ai_stats,
            dimensions_picked: self.dimensions,
            result,
            xp_earned,
            ability_triggered: triggered.then(|| AbilityTrigger {
                triggered: true,
                ability_name: ability.name.to_string(),
                description: ability.triggered_description.to_string(),
            }),
            is_practice_mode: false,
            rounds: ctx.rounds,
        }
    }
}

/// Resolve a battle between `card` and raw opponent stats.
///
/// The reported `ai_language` is an independent random draw, since only
/// stats are given; use [`fight`] to report a known opponent.
pub fn resolve_battle(
    card: &Card,
    ai_stats: &Stats,
    dimensions: Dimensions,
    equipment: &EquipmentModifiers,
    rng: &mut impl Rng,
) -> BattleResult {
    Battle::new(card, *ai_stats, dimensions)
        .with_equipment(equipment)
        .resolve(rng)
}

/// Resolve a battle against a generated opponent, reporting its language.
pub fn fight(
    card: &Card,
    opponent: &AiOpponent,
    dimensions: Dimensions,
    equipment: &EquipmentModifiers,
    rng: &mut impl Rng,
) -> BattleResult {
    Battle::new(card, opponent.stats, dimensions)
        .with_equipment(equipment)
        .against(opponent.language)
        .resolve(rng)
}
