//! Burn refunds and stat upgrades.

mod logic;

pub use logic::{apply_upgrade, can_upgrade, get_burn_materials, get_upgrade_cost};
