use super::types::{EquipmentItem, EquipmentModifiers, Loadout, SlotType};
use crate::error::{GameError, Result};

impl Loadout {
    /// Puts `item` into `slot`, returning whatever was there before.
    ///
    /// Fails for consumables and for items that belong to another slot.
    pub fn equip(&mut self, slot: SlotType, item: EquipmentItem) -> Result<Option<EquipmentItem>> {
        if item.is_consumable() {
            return Err(GameError::NotEquippable(item.id));
        }
        let expected = item.slot_type();
        if expected != slot {
            return Err(GameError::WrongSlot {
                item: item.id,
                expected,
                actual: slot,
            });
        }
        let target = self
            .slot_mut(slot)
            .ok_or_else(|| GameError::NotEquippable(item.id.clone()))?;
        tracing::debug!(item = %item.id, slot = slot.name(), "equipped item");
        Ok(target.replace(item))
    }

    /// Empties `slot`, returning the item that was in it.
    pub fn unequip(&mut self, slot: SlotType) -> Option<EquipmentItem> {
        self.slot_mut(slot).and_then(Option::take)
    }

    /// Sum of all equipped effects.
    pub fn modifiers(&self) -> EquipmentModifiers {
        let mut mods = EquipmentModifiers::NONE;
        for item in self.iter_equipped() {
            mods.add(&item.effect);
        }
        mods
    }
}
