//! Error types for player-facing card operations.
//!
//! The battle, gacha and upgrade math never fails; these errors come from
//! the operations that spend player resources or parse names from text.

use thiserror::Error;

use crate::cards::Dimension;
use crate::equipment::SlotType;

/// Result type alias using [`GameError`].
pub type Result<T> = std::result::Result<T, GameError>;

/// Errors raised by player progress, equipment and parsing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GameError {
    /// No free pulls left today.
    #[error("No free pulls remaining")]
    NoFreePulls,

    /// The stat is already at the cap.
    #[error("{dimension} is already at the maximum stat value")]
    StatAtMax {
        /// Dimension that cannot be raised further.
        dimension: Dimension,
    },

    /// Not enough materials to pay for an upgrade.
    #[error("Insufficient materials: need {required}, have {available}")]
    InsufficientMaterials {
        /// Cost of the upgrade.
        required: u32,
        /// Current balance.
        available: u32,
    },

    /// Not enough XP to pay for an upgrade.
    #[error("Insufficient XP: need {required}, have {available}")]
    InsufficientXp {
        /// Cost of the upgrade.
        required: u32,
        /// Current balance.
        available: u64,
    },

    /// Consumables are used, not equipped.
    #[error("Item '{0}' cannot be equipped")]
    NotEquippable(String),

    /// The item was offered to a slot it does not belong to.
    #[error("Item '{item}' belongs in the {expected:?} slot, not {actual:?}")]
    WrongSlot {
        /// Item identifier.
        item: String,
        /// Slot declared by the item.
        expected: SlotType,
        /// Slot it was offered to.
        actual: SlotType,
    },

    /// Only consumables can be applied to a player.
    #[error("Item '{0}' is not a consumable")]
    NotConsumable(String),

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("Unknown dimension: {0}")]
    UnknownDimension(String),

    #[error("Unknown rarity: {0}")]
    UnknownRarity(String),
}
