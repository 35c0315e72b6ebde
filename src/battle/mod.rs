//! Battle engine: picks the contested dimensions, builds opponents and
//! resolves three rounds into a result with XP.

mod logic;
pub mod types;

pub use logic::{fight, generate_ai_opponent, pick_random_dimensions, resolve_battle, Battle};
pub use types::*;
