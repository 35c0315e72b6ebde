//! Card summoning: rarity rolls and stat generation.

mod logic;

pub use logic::{generate_card, generate_card_stats, roll_rarity, roll_rarity_with};
