//! Codecards - collectible programming-language card game engine.
//!
//! Pure game rules: card summoning, stat upgrades, equipment, daily
//! allowances and the three-round battle resolver with per-language
//! abilities. Storage, payments and presentation live with the caller.

pub mod abilities;
pub mod battle;
pub mod cards;
pub mod core;
pub mod equipment;
pub mod error;
pub mod gacha;
pub mod player;
pub mod simulator;
pub mod upgrade;

pub use error::{GameError, Result};
