//! Domain entities as the sheet backend stores them

mod armor;
mod character;
mod cosmetic;
mod entry;
mod item;
mod weapon;

pub use armor::{equipped_protection, Armor, ArmorCharacteristic, NewArmor, CUSTOM_CHARACTERISTIC_NAME};
pub use character::{Attributes, Character, Skills, Status, StatusField};
pub use cosmetic::{CosmeticLoadout, CosmeticSlot};
pub use entry::{EntryKind, EntryRef, InventoryEntry, NewEntry};
pub use item::{Item, NewItem};
pub use weapon::{
    NewCharacteristic, NewPenalty, NewRequirement, NewWeapon, Penalty, Requirement, Weapon,
    WeaponCharacteristic, WeaponKind,
};
