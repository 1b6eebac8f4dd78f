//! Inventory entries: the three record kinds that share inventory space

use serde::{Deserialize, Serialize};

use super::{Armor, Item, NewArmor, NewItem, NewWeapon, Weapon};
use crate::ids::{ArmorId, ItemId, WeaponId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryKind {
    Item,
    Armor,
    Weapon,
}

impl EntryKind {
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::Item => "Item",
            Self::Armor => "Armadura",
            Self::Weapon => "Armamento",
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Typed reference to one inventory entry; ids are only unique per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryRef {
    Item(ItemId),
    Armor(ArmorId),
    Weapon(WeaponId),
}

impl EntryRef {
    pub fn kind(&self) -> EntryKind {
        match self {
            Self::Item(_) => EntryKind::Item,
            Self::Armor(_) => EntryKind::Armor,
            Self::Weapon(_) => EntryKind::Weapon,
        }
    }

    pub fn raw_id(&self) -> i64 {
        match self {
            Self::Item(id) => id.get(),
            Self::Armor(id) => id.get(),
            Self::Weapon(id) => id.get(),
        }
    }

    /// Only armor and weapons can be equipped.
    pub fn is_equippable(&self) -> bool {
        !matches!(self, Self::Item(_))
    }
}

impl std::fmt::Display for EntryRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} #{}", self.kind(), self.raw_id())
    }
}

/// Borrowed view over any inventory record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InventoryEntry<'a> {
    Item(&'a Item),
    Armor(&'a Armor),
    Weapon(&'a Weapon),
}

impl InventoryEntry<'_> {
    pub fn entry_ref(&self) -> EntryRef {
        match self {
            Self::Item(item) => EntryRef::Item(item.id),
            Self::Armor(piece) => EntryRef::Armor(piece.id),
            Self::Weapon(weapon) => EntryRef::Weapon(weapon.id),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Item(item) => &item.name,
            Self::Armor(piece) => &piece.name,
            Self::Weapon(weapon) => &weapon.name,
        }
    }

    pub fn is_equipped(&self) -> bool {
        match self {
            Self::Item(_) => false,
            Self::Armor(piece) => piece.equipped,
            Self::Weapon(weapon) => weapon.equipped,
        }
    }
}

/// Creation form submission for any entry kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewEntry {
    Item(NewItem),
    Armor(NewArmor),
    Weapon(NewWeapon),
}

impl NewEntry {
    pub fn kind(&self) -> EntryKind {
        match self {
            Self::Item(_) => EntryKind::Item,
            Self::Armor(_) => EntryKind::Armor,
            Self::Weapon(_) => EntryKind::Weapon,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Item(item) => item.name.as_str(),
            Self::Armor(piece) => piece.name.as_str(),
            Self::Weapon(weapon) => weapon.name.as_str(),
        }
    }
}
