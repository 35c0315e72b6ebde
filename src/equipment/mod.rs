//! Equipment: item catalog, per-card loadouts and the battle modifiers
//! a loadout produces.

mod data;
mod logic;
pub mod types;

pub use data::{default_catalog, find_item, items_for_slot};
pub use types::*;
