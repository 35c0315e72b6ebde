//! Stage hooks for triggered effects.
//!
//! The battle engine calls each hook for every effect of a triggered
//! ability; an effect ignores stages it does not belong to.

use rand::seq::SliceRandom;
use rand::Rng;

use super::types::{LossPick, StatTarget, TriggeredEffect};
use crate::battle::{BattleContext, BattleOutcome, RoundOutcome, RoundValues, RoundWinner};
use crate::cards::{Dimension, Stats};
use crate::core::stat_math::scale_round;

impl TriggeredEffect {
    /// Runs before the first round, reshaping the working stat copies.
    pub fn pre_round(&self, ctx: &mut BattleContext, rng: &mut impl Rng) {
        let dims = ctx.dimensions;
        match *self {
            TriggeredEffect::SwapLowestIntoContest => {
                let mut lowest = dims[0];
                for d in Dimension::ALL {
                    if ctx.ai.get(d) < ctx.ai.get(lowest) {
                        lowest = d;
                    }
                }
                let candidates: Vec<Dimension> =
                    dims.iter().copied().filter(|&d| d != lowest).collect();
                if let Some(&swap) = candidates.choose(rng) {
                    swap_values(&mut ctx.ai, swap, lowest);
                }
            }
            TriggeredEffect::SiphonHighest { fraction } => {
                let highest = ctx.ai.max_value();
                let mut weakest = dims[0];
                for d in Dimension::ALL {
                    if ctx.player.get(d) < ctx.player.get(weakest) {
                        weakest = d;
                    }
                }
                let boosted = (ctx.player.get(weakest) as f64 + highest as f64 * fraction).round();
                ctx.player.set(weakest, boosted as u32);
            }
            TriggeredEffect::BoostPlayer { target, percent } => {
                for d in resolve_target(target, &ctx.player, &dims) {
                    let v = ctx.player.get(d);
                    ctx.player.set(d, scale_round(v, 1.0 + percent));
                }
            }
            TriggeredEffect::DebuffOpponent { target, percent } => {
                for d in resolve_target(target, &ctx.ai, &dims) {
                    let v = ctx.ai.get(d);
                    ctx.ai.set(d, scale_round(v, 1.0 - percent));
                }
            }
            TriggeredEffect::StealStrongest { percent } => {
                if let Some(d) = ctx.ai.strongest_of(&dims) {
                    let stolen = scale_round(ctx.ai.get(d), percent);
                    *ctx.ai.get_mut(d) -= stolen;
                    *ctx.player.get_mut(d) += stolen;
                }
            }
            TriggeredEffect::SwapWeakestContested => {
                if let Some(d) = ctx.player.weakest_of(&dims) {
                    let (p, a) = (ctx.player.get(d), ctx.ai.get(d));
                    if a > p {
                        ctx.player.set(d, a);
                        ctx.ai.set(d, p);
                    }
                }
            }
            TriggeredEffect::ScrambleOpponent => {
                let mut values: Vec<u32> = dims.iter().map(|&d| ctx.ai.get(d)).collect();
                values.shuffle(rng);
                for (&d, v) in dims.iter().zip(values) {
                    ctx.ai.set(d, v);
                }
            }
            TriggeredEffect::FlattenOpponentPeak => {
                if let Some(peak) = ctx.ai.strongest_of(&dims) {
                    let sum: u32 = dims.iter().map(|&d| ctx.ai.get(d)).sum();
                    let mean = (sum as f64 / dims.len() as f64).round() as u32;
                    let current = ctx.ai.get(peak);
                    ctx.ai.set(peak, current.min(mean));
                }
            }
            TriggeredEffect::BorrowOpponent { percent } => {
                if let Some(d) = ctx.player.weakest_of(&dims) {
                    let borrowed = scale_round(ctx.ai.get(d), percent);
                    *ctx.player.get_mut(d) += borrowed;
                }
            }
            _ => {}
        }
    }

    /// Adjusts the values of the round about to be compared.
    pub fn on_round_start(&self, ctx: &BattleContext, values: &mut RoundValues) {
        match *self {
            TriggeredEffect::DoubleIfAhead { dimension } => {
                if values.dimension == dimension && values.player > values.ai {
                    values.player *= 2;
                }
            }
            TriggeredEffect::ChainBonus { trigger, percent } => {
                if ctx.player_won(trigger) {
                    values.player = scale_round(values.player, 1.0 + percent);
                }
            }
            TriggeredEffect::Momentum { percent } => {
                if ctx.last_winner() == Some(RoundWinner::Player) {
                    values.player = scale_round(values.player, 1.0 + percent);
                }
            }
            TriggeredEffect::Comeback { percent } => {
                if ctx.last_winner() == Some(RoundWinner::Ai) {
                    values.player = scale_round(values.player, 1.0 + percent);
                }
            }
            TriggeredEffect::RoundBoost { round, percent } => {
                if values.index == round {
                    values.player = scale_round(values.player, 1.0 + percent);
                }
            }
            _ => {}
        }
    }

    /// Runs after a round is compared, before it is recorded.
    pub fn on_round_end(&self, ctx: &mut BattleContext, round: &mut RoundOutcome) {
        match *self {
            TriggeredEffect::TiesToWins => {
                if round.winner == RoundWinner::Tie {
                    round.winner = RoundWinner::Player;
                }
            }
            TriggeredEffect::NextRoundDebuff { trigger, percent } => {
                if round.dimension == trigger && round.winner == RoundWinner::Player {
                    ctx.pending_ai_debuff = Some(percent);
                }
            }
            _ => {}
        }
    }

    /// Rewrites finished rounds before scoring.
    pub fn post_round(&self, ctx: &mut BattleContext) {
        match *self {
            TriggeredEffect::ForgiveLoss { pick } => {
                let target = match pick {
                    LossPick::First => ctx.rounds.iter().position(is_loss),
                    LossPick::Closest => closest_loss(&ctx.rounds),
                };
                if let Some(i) = target {
                    ctx.rounds[i].winner = RoundWinner::Tie;
                }
            }
            TriggeredEffect::NarrowLossToTie { margin } => {
                for round in ctx.rounds.iter_mut().filter(|r| is_loss(r)) {
                    if round.loss_margin() as f64 <= round.ai_value as f64 * margin {
                        round.winner = RoundWinner::Tie;
                    }
                }
            }
            TriggeredEffect::RetryFirstLoss { percent } => {
                if let Some(round) = ctx.rounds.iter_mut().find(|r| is_loss(r)) {
                    round.player_value = scale_round(round.player_value, 1.0 + percent);
                    round.winner = RoundWinner::compare(round.player_value, round.ai_value);
                }
            }
            _ => {}
        }
    }

    /// Adjusts the XP reward once the outcome is known.
    pub fn post_score(&self, outcome: BattleOutcome, xp: &mut u32) {
        match *self {
            TriggeredEffect::XpMultiplier { factor } => {
                if outcome == BattleOutcome::Win {
                    *xp *= factor;
                }
            }
            TriggeredEffect::XpBonus { amount } => {
                if outcome != BattleOutcome::Lose {
                    *xp += amount;
                }
            }
            TriggeredEffect::ConsolationXp { amount } => {
                if outcome == BattleOutcome::Lose {
                    *xp += amount;
                }
            }
            _ => {}
        }
    }
}

fn swap_values(stats: &mut Stats, a: Dimension, b: Dimension) {
    let (va, vb) = (stats.get(a), stats.get(b));
    stats.set(a, vb);
    stats.set(b, va);
}

fn is_loss(round: &RoundOutcome) -> bool {
    round.winner == RoundWinner::Ai
}

/// Index of the lost round with the smallest margin; the earliest wins ties.
fn closest_loss(rounds: &[RoundOutcome]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, r) in rounds.iter().enumerate().filter(|(_, r)| is_loss(r)) {
        if best.map_or(true, |b| r.loss_margin() < rounds[b].loss_margin()) {
            best = Some(i);
        }
    }
    best
}

fn resolve_target(target: StatTarget, stats: &Stats, dims: &[Dimension]) -> Vec<Dimension> {
    match target {
        StatTarget::Dimension(d) => vec![d],
        StatTarget::AllContested => dims.to_vec(),
        StatTarget::StrongestContested => stats.strongest_of(dims).into_iter().collect(),
        StatTarget::WeakestContested => stats.weakest_of(dims).into_iter().collect(),
    }
}
