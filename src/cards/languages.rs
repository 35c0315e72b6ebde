//! Language roster and per-language base stats.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::types::Stats;
use crate::abilities::{ability_for, Ability};
use crate::error::GameError;

/// Programming language a card represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Language {
    Assembly,
    C,
    CPlusPlus,
    CSharp,
    Clojure,
    #[serde(rename = "COBOL")]
    Cobol,
    Dart,
    Delphi,
    Elixir,
    Erlang,
    Go,
    Haskell,
    Java,
    JavaScript,
    Kotlin,
    Lua,
    #[serde(rename = "MATLAB")]
    Matlab,
    Pascal,
    Perl,
    #[serde(rename = "PHP")]
    Php,
    Python,
    R,
    Ruby,
    Rust,
    Scala,
    Solidity,
    #[serde(rename = "SQL")]
    Sql,
    Swift,
}

impl Language {
    /// Full roster in codex order.
    pub const ALL: [Language; 28] = [
        Language::Assembly,
        Language::C,
        Language::CPlusPlus,
        Language::CSharp,
        Language::Clojure,
        Language::Cobol,
        Language::Dart,
        Language::Delphi,
        Language::Elixir,
        Language::Erlang,
        Language::Go,
        Language::Haskell,
        Language::Java,
        Language::JavaScript,
        Language::Kotlin,
        Language::Lua,
        Language::Matlab,
        Language::Pascal,
        Language::Perl,
        Language::Php,
        Language::Python,
        Language::R,
        Language::Ruby,
        Language::Rust,
        Language::Scala,
        Language::Solidity,
        Language::Sql,
        Language::Swift,
    ];

    /// Identifier used in card data and the codex.
    pub fn name(&self) -> &'static str {
        match self {
            Language::Assembly => "Assembly",
            Language::C => "C",
            Language::CPlusPlus => "CPlusPlus",
            Language::CSharp => "CSharp",
            Language::Clojure => "Clojure",
            Language::Cobol => "COBOL",
            Language::Dart => "Dart",
            Language::Delphi => "Delphi",
            Language::Elixir => "Elixir",
            Language::Erlang => "Erlang",
            Language::Go => "Go",
            Language::Haskell => "Haskell",
            Language::Java => "Java",
            Language::JavaScript => "JavaScript",
            Language::Kotlin => "Kotlin",
            Language::Lua => "Lua",
            Language::Matlab => "MATLAB",
            Language::Pascal => "Pascal",
            Language::Perl => "Perl",
            Language::Php => "PHP",
            Language::Python => "Python",
            Language::R => "R",
            Language::Ruby => "Ruby",
            Language::Rust => "Rust",
            Language::Scala => "Scala",
            Language::Solidity => "Solidity",
            Language::Sql => "SQL",
            Language::Swift => "Swift",
        }
    }

    /// Unscaled stats, each in [1, 10]. Rarity and difficulty multiply these.
    pub fn base_stats(&self) -> Stats {
        // speed, security, ecosystem, scalability, devExp
        match self {
            Language::Assembly => Stats::new(10, 3, 2, 4, 1),
            Language::C => Stats::new(9, 2, 7, 5, 3),
            Language::CPlusPlus => Stats::new(9, 4, 8, 7, 3),
            Language::CSharp => Stats::new(7, 7, 8, 7, 7),
            Language::Clojure => Stats::new(5, 7, 4, 7, 6),
            Language::Cobol => Stats::new(4, 8, 2, 6, 1),
            Language::Dart => Stats::new(6, 6, 5, 6, 8),
            Language::Delphi => Stats::new(7, 5, 3, 4, 7),
            Language::Elixir => Stats::new(6, 7, 5, 9, 8),
            Language::Erlang => Stats::new(6, 7, 4, 10, 4),
            Language::Go => Stats::new(7, 6, 6, 9, 7),
            Language::Haskell => Stats::new(6, 9, 4, 6, 3),
            Language::Java => Stats::new(6, 7, 10, 8, 5),
            Language::JavaScript => Stats::new(5, 3, 10, 6, 8),
            Language::Kotlin => Stats::new(6, 8, 8, 7, 9),
            Language::Lua => Stats::new(8, 4, 4, 5, 7),
            Language::Matlab => Stats::new(5, 5, 6, 4, 6),
            Language::Pascal => Stats::new(6, 7, 3, 4, 6),
            Language::Perl => Stats::new(6, 3, 7, 4, 4),
            Language::Php => Stats::new(5, 3, 9, 6, 6),
            Language::Python => Stats::new(3, 4, 10, 4, 10),
            Language::R => Stats::new(3, 4, 8, 3, 6),
            Language::Ruby => Stats::new(4, 5, 8, 5, 10),
            Language::Rust => Stats::new(9, 10, 6, 8, 4),
            Language::Scala => Stats::new(7, 7, 7, 9, 5),
            Language::Solidity => Stats::new(4, 5, 5, 3, 5),
            Language::Sql => Stats::new(7, 6, 9, 8, 6),
            Language::Swift => Stats::new(8, 8, 6, 6, 8),
        }
    }

    /// Uniform pick from the full roster.
    pub fn random(rng: &mut impl Rng) -> Language {
        Language::ALL[rng.gen_range(0..Language::ALL.len())]
    }

    /// The language's ability, looked up from the static ability table.
    pub fn ability(&self) -> &'static Ability {
        ability_for(*self)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Language::ALL
            .iter()
            .copied()
            .find(|l| l.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| GameError::UnknownLanguage(s.to_string()))
    }
}
