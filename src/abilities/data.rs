//! Static ability table, one entry per language.

use super::types::{Ability, LossPick, StatTarget, TriggeredEffect};
use crate::cards::{Dimension, Language};
use crate::core::constants::ABILITY_TRIGGER_CHANCE;

use Dimension::*;
use TriggeredEffect::*;

/// Looks up the ability a language brings into battle.
pub fn ability_for(language: Language) -> &'static Ability {
    match language {
        Language::Assembly => &ASSEMBLY,
        Language::C => &C,
        Language::CPlusPlus => &CPLUSPLUS,
        Language::CSharp => &CSHARP,
        Language::Clojure => &CLOJURE,
        Language::Cobol => &COBOL,
        Language::Dart => &DART,
        Language::Delphi => &DELPHI,
        Language::Elixir => &ELIXIR,
        Language::Erlang => &ERLANG,
        Language::Go => &GO,
        Language::Haskell => &HASKELL,
        Language::Java => &JAVA,
        Language::JavaScript => &JAVASCRIPT,
        Language::Kotlin => &KOTLIN,
        Language::Lua => &LUA,
        Language::Matlab => &MATLAB,
        Language::Pascal => &PASCAL,
        Language::Perl => &PERL,
        Language::Php => &PHP,
        Language::Python => &PYTHON,
        Language::R => &R,
        Language::Ruby => &RUBY,
        Language::Rust => &RUST,
        Language::Scala => &SCALA,
        Language::Solidity => &SOLIDITY,
        Language::Sql => &SQL,
        Language::Swift => &SWIFT,
    }
}

static ASSEMBLY: Ability = Ability {
    name: "Direct Damage Array",
    flavor_text: "No abstractions. No mercy.",
    passive_dimension: Speed,
    passive_bonus: 0.20,
    triggered_description: "If SPD wins, double your SPD score",
    trigger_chance: ABILITY_TRIGGER_CHANCE,
    effects: &[DoubleIfAhead { dimension: Speed }],
};

static C: Ability = Ability {
    name: "Direct Memory Access",
    flavor_text: "Every byte answers to me.",
    passive_dimension: Speed,
    passive_bonus: 0.10,
    triggered_description: "If losing any round, ignore your lowest loss",
    trigger_chance: ABILITY_TRIGGER_CHANCE,
    effects: &[ForgiveLoss { pick: LossPick::Closest }],
};

static CPLUSPLUS: Ability = Ability {
    name: "Template Instantiation",
    flavor_text: "Zero-cost, until the compile finishes.",
    passive_dimension: Speed,
    passive_bonus: 0.10,
    triggered_description: "Your strongest contested stat +15% and opponent SPD -10%",
    trigger_chance: ABILITY_TRIGGER_CHANCE,
    effects: &[
        BoostPlayer {
            target: StatTarget::StrongestContested,
            percent: 0.15,
        },
        DebuffOpponent {
            target: StatTarget::Dimension(Speed),
            percent: 0.10,
        },
    ],
};

static CSHARP: Ability = Ability {
    name: "LINQ Cascade",
    flavor_text: "Query the battlefield, select victory.",
    passive_dimension: Ecosystem,
    passive_bonus: 0.10,
    triggered_description: "Each round won boosts your next round by 8%",
    trigger_chance: ABILITY_TRIGGER_CHANCE,
    effects: &[Momentum { percent: 0.08 }],
};

static CLOJURE: Ability = Ability {
    name: "Persistent Structure",
    flavor_text: "Nothing you do can change what I am.",
    passive_dimension: Security,
    passive_bonus: 0.10,
    triggered_description: "Opponent's strongest contested stat -15%",
    trigger_chance: ABILITY_TRIGGER_CHANCE,
    effects: &[DebuffOpponent {
        target: StatTarget::StrongestContested,
        percent: 0.15,
    }],
};

static COBOL: Ability = Ability {
    name: "Batch Settlement",
    flavor_text: "The nightly run always finishes.",
    passive_dimension: Security,
    passive_bonus: 0.15,
    triggered_description: "Final round +20%",
    trigger_chance: ABILITY_TRIGGER_CHANCE,
    effects: &[RoundBoost {
        round: 2,
        percent: 0.20,
    }],
};

static DART: Ability = Ability {
    name: "Hot Reload",
    flavor_text: "Save. Refresh. Try again.",
    passive_dimension: DevExp,
    passive_bonus: 0.15,
    triggered_description: "Replay your first lost round with +10%",
    trigger_chance: ABILITY_TRIGGER_CHANCE,
    effects: &[RetryFirstLoss { percent: 0.10 }],
};

static DELPHI: Ability = Ability {
    name: "Rapid Application",
    flavor_text: "Drag, drop, deploy.",
    passive_dimension: DevExp,
    passive_bonus: 0.10,
    triggered_description: "Opening round +25%",
    trigger_chance: ABILITY_TRIGGER_CHANCE,
    effects: &[RoundBoost {
        round: 0,
        percent: 0.25,
    }],
};

static ELIXIR: Ability = Ability {
    name: "Supervisor Tree",
    flavor_text: "Fall down, get restarted, hit harder.",
    passive_dimension: Scalability,
    passive_bonus: 0.10,
    triggered_description: "After losing a round, your next round +15%",
    trigger_chance: ABILITY_TRIGGER_CHANCE,
    effects: &[Comeback { percent: 0.15 }],
};

static ERLANG: Ability = Ability {
    name: "Let It Crash",
    flavor_text: "Nine nines of uptime, one of defeat.",
    passive_dimension: Scalability,
    passive_bonus: 0.15,
    triggered_description: "Losses within 10% become ties",
    trigger_chance: ABILITY_TRIGGER_CHANCE,
    effects: &[NarrowLossToTie { margin: 0.10 }],
};

static GO: Ability = Ability {
    name: "Goroutine Swarm",
    flavor_text: "Ten thousand workers, one channel.",
    passive_dimension: Scalability,
    passive_bonus: 0.15,
    triggered_description: "If SCL already won, +5% to all remaining rounds",
    trigger_chance: ABILITY_TRIGGER_CHANCE,
    effects: &[ChainBonus {
        trigger: Scalability,
        percent: 0.05,
    }],
};

static HASKELL: Ability = Ability {
    name: "Lazy Evaluation",
    flavor_text: "Your weakness is only computed when needed.",
    passive_dimension: Security,
    passive_bonus: 0.10,
    triggered_description: "Trade values with the opponent on your weakest contested stat",
    trigger_chance: ABILITY_TRIGGER_CHANCE,
    effects: &[SwapWeakestContested],
};

static JAVA: Ability = Ability {
    name: "The Garbage Collector",
    flavor_text: "Whatever is left behind belongs to me.",
    passive_dimension: Ecosystem,
    passive_bonus: 0.10,
    triggered_description: "Ties become wins",
    trigger_chance: ABILITY_TRIGGER_CHANCE,
    effects: &[TiesToWins],
};

static JAVASCRIPT: Ability = Ability {
    name: "Event Storm",
    flavor_text: "Callbacks from every direction.",
    passive_dimension: DevExp,
    passive_bonus: 0.10,
    triggered_description: "Swap one opponent dimension with their lowest",
    trigger_chance: ABILITY_TRIGGER_CHANCE,
    effects: &[SwapLowestIntoContest],
};

static KOTLIN: Ability = Ability {
    name: "Null Safety",
    flavor_text: "The first mistake never reaches production.",
    passive_dimension: DevExp,
    passive_bonus: 0.10,
    triggered_description: "Your first lost round becomes a tie",
    trigger_chance: ABILITY_TRIGGER_CHANCE,
    effects: &[ForgiveLoss { pick: LossPick::First }],
};

static LUA: Ability = Ability {
    name: "Embedded Hook",
    flavor_text: "I live inside your engine now.",
    passive_dimension: Speed,
    passive_bonus: 0.10,
    triggered_description: "Steal 10% of the opponent's strongest contested stat",
    trigger_chance: ABILITY_TRIGGER_CHANCE,
    effects: &[StealStrongest { percent: 0.10 }],
};

static MATLAB: Ability = Ability {
    name: "Matrix Broadcast",
    flavor_text: "One operation, every element.",
    passive_dimension: Ecosystem,
    passive_bonus: 0.10,
    triggered_description: "All contested stats +10%",
    trigger_chance: ABILITY_TRIGGER_CHANCE,
    effects: &[BoostPlayer {
        target: StatTarget::AllContested,
        percent: 0.10,
    }],
};

static PASCAL: Ability = Ability {
    name: "Strong Typing",
    flavor_text: "Declare your intentions before you act.",
    passive_dimension: Security,
    passive_bonus: 0.15,
    triggered_description: "Opponent's contested stats -8%",
    trigger_chance: ABILITY_TRIGGER_CHANCE,
    effects: &[DebuffOpponent {
        target: StatTarget::AllContested,
        percent: 0.08,
    }],
};

static PERL: Ability = Ability {
    name: "Regex Hex",
    flavor_text: "There is more than one way to lose.",
    passive_dimension: Ecosystem,
    passive_bonus: 0.10,
    triggered_description: "Scramble the opponent's contested stats",
    trigger_chance: ABILITY_TRIGGER_CHANCE,
    effects: &[ScrambleOpponent],
};

static PHP: Ability = Ability {
    name: "Dynamic Dispatch",
    flavor_text: "It works on my server.",
    passive_dimension: Ecosystem,
    passive_bonus: 0.15,
    triggered_description: "+5 XP on a win or draw",
    trigger_chance: ABILITY_TRIGGER_CHANCE,
    effects: &[XpBonus { amount: 5 }],
};

static PYTHON: Ability = Ability {
    name: "Library Summon",
    flavor_text: "There is a package for that.",
    passive_dimension: DevExp,
    passive_bonus: 0.15,
    triggered_description: "Copy 10% of the opponent's highest stat into your weakest",
    trigger_chance: ABILITY_TRIGGER_CHANCE,
    effects: &[SiphonHighest { fraction: 0.10 }],
};

static R: Ability = Ability {
    name: "Regression to the Mean",
    flavor_text: "Outliers do not survive the model.",
    passive_dimension: Ecosystem,
    passive_bonus: 0.10,
    triggered_description: "Opponent's strongest contested stat drops to their contested average",
    trigger_chance: ABILITY_TRIGGER_CHANCE,
    effects: &[FlattenOpponentPeak],
};

static RUBY: Ability = Ability {
    name: "Metaprogramming",
    flavor_text: "Your methods are my methods.",
    passive_dimension: DevExp,
    passive_bonus: 0.15,
    triggered_description: "Your weakest contested stat gains 50% of the opponent's value there",
    trigger_chance: ABILITY_TRIGGER_CHANCE,
    effects: &[BorrowOpponent { percent: 0.50 }],
};

static RUST: Ability = Ability {
    name: "The Borrow Checker",
    flavor_text: "Your reference does not live long enough.",
    passive_dimension: Security,
    passive_bonus: 0.15,
    triggered_description: "If SEC wins, opponent -10% on the next round",
    trigger_chance: ABILITY_TRIGGER_CHANCE,
    effects: &[NextRoundDebuff {
        trigger: Security,
        percent: 0.10,
    }],
};

static SCALA: Ability = Ability {
    name: "Paradigm Fusion",
    flavor_text: "Objects and functions, one strike.",
    passive_dimension: Scalability,
    passive_bonus: 0.10,
    triggered_description: "SCL +10% and each round won boosts the next by 5%",
    trigger_chance: ABILITY_TRIGGER_CHANCE,
    effects: &[
        BoostPlayer {
            target: StatTarget::Dimension(Scalability),
            percent: 0.10,
        },
        Momentum { percent: 0.05 },
    ],
};

static SOLIDITY: Ability = Ability {
    name: "The Nexus",
    flavor_text: "Every victory is settled on-chain.",
    passive_dimension: Security,
    passive_bonus: 0.10,
    triggered_description: "If you win, double XP",
    trigger_chance: ABILITY_TRIGGER_CHANCE,
    effects: &[XpMultiplier { factor: 2 }],
};

static SQL: Ability = Ability {
    name: "Rollback Transaction",
    flavor_text: "Nothing is lost that was committed.",
    passive_dimension: Ecosystem,
    passive_bonus: 0.10,
    triggered_description: "Earn 5 XP even on a loss",
    trigger_chance: ABILITY_TRIGGER_CHANCE,
    effects: &[ConsolationXp { amount: 5 }],
};

static SWIFT: Ability = Ability {
    name: "Protocol Witness",
    flavor_text: "Conform, and be made faster.",
    passive_dimension: Speed,
    passive_bonus: 0.15,
    triggered_description: "If SPD already won, +10% to all remaining rounds",
    trigger_chance: ABILITY_TRIGGER_CHANCE,
    effects: &[ChainBonus {
        trigger: Speed,
        percent: 0.10,
    }],
};
