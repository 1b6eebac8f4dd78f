//! Local inventory state of one character.

use ficha_domain::{
    Armor, ArmorId, Character, EntryRef, HandsProjection, InventoryCapacity, InventoryEntry, Item,
    Loadout, Weapon, WeaponId,
};

/// Lists as last confirmed by the backend plus the UI selection.
#[derive(Debug, Clone, PartialEq)]
pub struct EquipmentState {
    pub character: Character,
    pub items: Vec<Item>,
    pub armor: Vec<Armor>,
    pub weapons: Vec<Weapon>,
    pub selected: Option<EntryRef>,
}

impl EquipmentState {
    pub fn new(character: Character, items: Vec<Item>, armor: Vec<Armor>, weapons: Vec<Weapon>) -> Self {
        Self {
            character,
            items,
            armor,
            weapons,
            selected: None,
        }
    }

    pub fn entry_count(&self) -> usize {
        self.items.len() + self.armor.len() + self.weapons.len()
    }

    pub fn capacity(&self) -> InventoryCapacity {
        InventoryCapacity::new(self.character.strength(), self.entry_count())
    }

    pub fn loadout(&self) -> Loadout {
        Loadout::from_records(&self.armor, &self.weapons)
    }

    pub fn hands(&self) -> HandsProjection {
        HandsProjection::from_weapons(&self.weapons, self.character.strength())
    }

    pub fn find_armor(&self, id: ArmorId) -> Option<&Armor> {
        self.armor.iter().find(|piece| piece.id == id)
    }

    pub fn find_weapon(&self, id: WeaponId) -> Option<&Weapon> {
        self.weapons.iter().find(|weapon| weapon.id == id)
    }

    pub fn entry(&self, entry: EntryRef) -> Option<InventoryEntry<'_>> {
        match entry {
            EntryRef::Item(id) => self
                .items
                .iter()
                .find(|item| item.id == id)
                .map(InventoryEntry::Item),
            EntryRef::Armor(id) => self.find_armor(id).map(InventoryEntry::Armor),
            EntryRef::Weapon(id) => self.find_weapon(id).map(InventoryEntry::Weapon),
        }
    }

    pub fn contains(&self, entry: EntryRef) -> bool {
        self.entry(entry).is_some()
    }

    /// Every entry in display order: items, then armor, then weapons.
    pub fn entries(&self) -> impl Iterator<Item = InventoryEntry<'_>> {
        self.items
            .iter()
            .map(InventoryEntry::Item)
            .chain(self.armor.iter().map(InventoryEntry::Armor))
            .chain(self.weapons.iter().map(InventoryEntry::Weapon))
    }

    pub fn replace_weapon(&mut self, weapon: Weapon) {
        if let Some(slot) = self.weapons.iter_mut().find(|w| w.id == weapon.id) {
            *slot = weapon;
        }
    }

    /// Drops the entry and clears the selection if it pointed at it.
    pub fn remove(&mut self, entry: EntryRef) -> bool {
        let before = self.entry_count();
        match entry {
            EntryRef::Item(id) => self.items.retain(|item| item.id != id),
            EntryRef::Armor(id) => self.armor.retain(|piece| piece.id != id),
            EntryRef::Weapon(id) => self.weapons.retain(|weapon| weapon.id != id),
        }
        if self.selected == Some(entry) {
            self.selected = None;
        }
        before != self.entry_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{armor, character, item, weapon};
    use ficha_domain::{BodySlot, ItemId};

    fn state() -> EquipmentState {
        EquipmentState::new(
            character(4, Some(9)),
            vec![item(1), item(2)],
            vec![armor(3, BodySlot::Chest, 5, true), armor(4, BodySlot::Head, 2, false)],
            vec![weapon(5, true), weapon(6, false)],
        )
    }

    #[test]
    fn capacity_counts_all_three_lists() {
        let capacity = state().capacity();
        assert_eq!(capacity.used(), 6);
        assert_eq!(capacity.total(), 20);
    }

    #[test]
    fn loadout_reflects_equipped_flags() {
        let loadout = state().loadout();
        assert_eq!(loadout.armor.occupant(BodySlot::Chest), Some(ArmorId::new(3)));
        assert!(!loadout.armor.is_equipped(ArmorId::new(4)));
        assert!(loadout.weapons.contains(&WeaponId::new(5)));
    }

    #[test]
    fn remove_clears_matching_selection() {
        let mut state = state();
        state.selected = Some(EntryRef::Item(ItemId::new(2)));
        assert!(state.remove(EntryRef::Item(ItemId::new(2))));
        assert_eq!(state.selected, None);
        assert!(!state.remove(EntryRef::Item(ItemId::new(2))));
        assert_eq!(state.entries().count(), 5);
    }
}
