use serde::Serialize;

use crate::cards::Dimension;

/// A language's battle ability.
///
/// The passive bonus is always active. The triggered part fires with
/// `trigger_chance` once per battle and runs each of `effects` at the
/// pipeline stage the effect belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ability {
    pub name: &'static str,
    pub flavor_text: &'static str,
    pub passive_dimension: Dimension,
    pub passive_bonus: f64,
    pub triggered_description: &'static str,
    pub trigger_chance: f64,
    pub effects: &'static [TriggeredEffect],
}

impl Ability {
    /// Distinct categories of the triggered effects, in declaration order.
    pub fn categories(&self) -> Vec<EffectCategory> {
        let mut categories = Vec::with_capacity(self.effects.len());
        for effect in self.effects {
            let category = effect.category();
            if !categories.contains(&category) {
                categories.push(category);
            }
        }
        categories
    }

    /// Effects that run at `stage`, in declaration order.
    pub fn effects_at(&self, stage: EffectStage) -> impl Iterator<Item = &'static TriggeredEffect> {
        self.effects.iter().filter(move |e| e.stage() == stage)
    }
}

/// Which stats a pre-round boost or debuff applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StatTarget {
    /// A fixed dimension, contested or not.
    Dimension(Dimension),
    /// All three contested dimensions.
    AllContested,
    /// The highest contested value of the affected side.
    StrongestContested,
    /// The lowest contested value of the affected side.
    WeakestContested,
}

/// Which lost round a loss-forgiving effect picks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LossPick {
    /// The loss with the smallest margin.
    Closest,
    /// The earliest loss in round order.
    First,
}

/// Point in the battle pipeline where an effect runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectStage {
    PreRound,
    RoundStart,
    RoundEnd,
    PostRound,
    PostScore,
}

/// Broad family an effect belongs to, used by the simulator report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EffectCategory {
    ConditionalScoreMultiply,
    DebuffOpponentStat,
    TieToWin,
    LossToTie,
    SwapOrCopyStat,
    ChainBonus,
    XpMultiply,
}

impl EffectCategory {
    pub fn name(&self) -> &'static str {
        match self {
            EffectCategory::ConditionalScoreMultiply => "Score Multiply",
            EffectCategory::DebuffOpponentStat => "Opponent Debuff",
            EffectCategory::TieToWin => "Tie To Win",
            EffectCategory::LossToTie => "Loss To Tie",
            EffectCategory::SwapOrCopyStat => "Swap/Copy Stat",
            EffectCategory::ChainBonus => "Chain Bonus",
            EffectCategory::XpMultiply => "XP Multiply",
        }
    }
}

/// A single triggered behavior. Abilities combine one or more of these.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TriggeredEffect {
    /// Swap one of the opponent's contested stats with its globally lowest stat.
    SwapLowestIntoContest,
    /// Add `fraction` of the opponent's highest stat to the player's weakest stat.
    SiphonHighest { fraction: f64 },
    /// Raise the player's targeted stats by `percent`.
    BoostPlayer { target: StatTarget, percent: f64 },
    /// Lower the opponent's targeted stats by `percent`.
    DebuffOpponent { target: StatTarget, percent: f64 },
    /// Move `percent` of the opponent's strongest contested stat to the player.
    StealStrongest { percent: f64 },
    /// Trade values with the opponent on the player's weakest contested stat,
    /// when that trade helps the player.
    SwapWeakestContested,
    /// Shuffle the opponent's contested values among the contested dimensions.
    ScrambleOpponent,
    /// Pull the opponent's strongest contested stat down to its contested mean.
    FlattenOpponentPeak,
    /// Add `percent` of the opponent's value to the player's weakest contested stat.
    BorrowOpponent { percent: f64 },
    /// Double the player's value in `dimension` when already ahead there.
    DoubleIfAhead { dimension: Dimension },
    /// Once `trigger` has been won, later rounds get `percent` more.
    ChainBonus { trigger: Dimension, percent: f64 },
    /// A round right after a won round gets `percent` more.
    Momentum { percent: f64 },
    /// A round right after a lost round gets `percent` more.
    Comeback { percent: f64 },
    /// Round number `round` (0-based) gets `percent` more.
    RoundBoost { round: usize, percent: f64 },
    /// Tied rounds go to the player.
    TiesToWins,
    /// Winning `trigger` lowers the opponent's next round value by `percent`.
    NextRoundDebuff { trigger: Dimension, percent: f64 },
    /// One lost round becomes a tie.
    ForgiveLoss { pick: LossPick },
    /// Losses whose margin is within `margin` of the opponent's value become ties.
    NarrowLossToTie { margin: f64 },
    /// The first lost round is re-compared with the player's value raised by `percent`.
    RetryFirstLoss { percent: f64 },
    /// A won battle pays `factor` times the XP.
    XpMultiplier { factor: u32 },
    /// A won or drawn battle pays `amount` extra XP.
    XpBonus { amount: u32 },
    /// A lost battle still pays `amount` XP.
    ConsolationXp { amount: u32 },
}

impl TriggeredEffect {
    pub fn stage(&self) -> EffectStage {
        use TriggeredEffect::*;
        match self {
            SwapLowestIntoContest
            | SiphonHighest { .. }
            | BoostPlayer { .. }
            | DebuffOpponent { .. }
            | StealStrongest { .. }
            | SwapWeakestContested
            | ScrambleOpponent
            | FlattenOpponentPeak
            | BorrowOpponent { .. } => EffectStage::PreRound,
            DoubleIfAhead { .. }
            | ChainBonus { .. }
            | Momentum { .. }
            | Comeback { .. }
            | RoundBoost { .. } => EffectStage::RoundStart,
            TiesToWins | NextRoundDebuff { .. } => EffectStage::RoundEnd,
            ForgiveLoss { .. } | NarrowLossToTie { .. } | RetryFirstLoss { .. } => {
                EffectStage::PostRound
            }
            XpMultiplier { .. } | XpBonus { .. } | ConsolationXp { .. } => EffectStage::PostScore,
        }
    }

    pub fn category(&self) -> EffectCategory {
        use TriggeredEffect::*;
        match self {
            SwapLowestIntoContest
            | SiphonHighest { .. }
            | StealStrongest { .. }
            | SwapWeakestContested
            | ScrambleOpponent
            | BorrowOpponent { .. } => EffectCategory::SwapOrCopyStat,
            DebuffOpponent { .. } | FlattenOpponentPeak | NextRoundDebuff { .. } => {
                EffectCategory::DebuffOpponentStat
            }
            BoostPlayer { .. } | DoubleIfAhead { .. } | RoundBoost { .. } => {
                EffectCategory::ConditionalScoreMultiply
            }
            ChainBonus { .. } | Momentum { .. } | Comeback { .. } => EffectCategory::ChainBonus,
            TiesToWins => EffectCategory::TieToWin,
            ForgiveLoss { .. } | NarrowLossToTie { .. } | RetryFirstLoss { .. } => {
                EffectCategory::LossToTie
            }
            XpMultiplier { .. } | XpBonus { .. } | ConsolationXp { .. } => EffectCategory::XpMultiply,
        }
    }
}
