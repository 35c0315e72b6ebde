//! Language abilities: passive bonuses plus triggered effects that hook
//! into the battle pipeline by stage.

mod data;
mod effects;
pub mod types;

pub use data::ability_for;
pub use types::*;
