//! Player balances, daily allowances and the operations that spend them.

mod logic;
pub mod types;

pub use types::*;
