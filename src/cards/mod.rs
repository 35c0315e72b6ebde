//! Card data: dimensions, stats, rarity tiers and the language roster.

pub mod languages;
pub mod types;

pub use languages::*;
pub use types::*;
