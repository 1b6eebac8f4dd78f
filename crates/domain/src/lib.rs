//! Domain model of the character sheet's equipment and inventory.
//!
//! Pure data and rules: no I/O. Records mirror what the sheet backend
//! stores, value objects carry the equip, capacity and projection rules.

pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use entities::{
    equipped_protection, Armor, ArmorCharacteristic, Attributes, Character, CosmeticLoadout,
    CosmeticSlot, EntryKind, EntryRef, InventoryEntry, Item, NewArmor, NewCharacteristic,
    NewEntry, NewItem, NewPenalty, NewRequirement, NewWeapon, Penalty, Requirement, Skills, Status,
    StatusField, Weapon, WeaponCharacteristic, WeaponKind, CUSTOM_CHARACTERISTIC_NAME,
};

pub use error::DomainError;

pub use ids::{
    ArmorId, AttributesId, CharacterId, CharacteristicId, ItemId, PenaltyId, RequirementId,
    SkillsId, StatusId, WeaponId,
};

pub use value_objects::{
    parse_characteristics, parse_penalties, parse_requirements, ArmorLoadout, AttributeChange,
    AttributeKind, AttributeScore, BodySlot, BoundedSet, DamageDisplay, DamageRange, Description,
    EntryName, EquipGroup, EquipOutcome, EquipRejection, HandView, HandsProjection,
    InventoryCapacity, Loadout, Quantity, ReloadKind, SizeClass, SkillKind, WeaponRange, MAX_ATTRIBUTE,
    MAX_RINGS, MAX_WEAPONS, MIN_ATTRIBUTE, SLOTS_PER_STRENGTH, UNARMED_ATTACKS_PER_TURN,
    VITAL_MULTIPLIER,
};

/// Record builders shared by the unit tests of this crate.
#[cfg(test)]
pub(crate) mod test_support {
    use crate::{Armor, ArmorId, BodySlot, CharacterId, SizeClass, Weapon, WeaponId, WeaponRange};

    pub fn armor(id: i64, slot: BodySlot, protection: u32, equipped: bool) -> Armor {
        Armor {
            id: ArmorId::new(id),
            entry_type: "Armadura".to_string(),
            name: format!("Armadura {}", id),
            description: String::new(),
            protection,
            size: SizeClass::Medium,
            slot,
            equipped,
            character_id: CharacterId::new(1),
            characteristics: Vec::new(),
        }
    }

    pub fn weapon(id: i64, equipped: bool) -> Weapon {
        Weapon {
            id: WeaponId::new(id),
            entry_type: "Armamento".to_string(),
            name: format!("Arma {}", id),
            description: String::new(),
            damage_min: 1,
            damage_max: 6,
            skill: String::new(),
            range: WeaponRange::Personal,
            reload: None,
            rate_of_fire: None,
            magazine: None,
            size: SizeClass::Medium,
            equipped,
            character_id: CharacterId::new(1),
            requirements: Vec::new(),
            penalties: Vec::new(),
            characteristics: Vec::new(),
        }
    }
}
