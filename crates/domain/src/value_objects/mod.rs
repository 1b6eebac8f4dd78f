//! Value objects: validated scalars, categories and pure projections

mod attribute;
mod capacity;
mod categories;
mod damage;
mod hands;
mod loadout;
mod names;
mod quantity;
mod skill;
mod slot;
mod weapon_traits;

pub use attribute::{
    AttributeChange, AttributeKind, AttributeScore, MAX_ATTRIBUTE, MIN_ATTRIBUTE, VITAL_MULTIPLIER,
};
pub use capacity::{InventoryCapacity, SLOTS_PER_STRENGTH};
pub use categories::{ReloadKind, SizeClass, WeaponRange};
pub use damage::DamageRange;
pub use hands::{DamageDisplay, HandView, HandsProjection, UNARMED_ATTACKS_PER_TURN};
pub use loadout::{
    ArmorLoadout, BoundedSet, EquipGroup, EquipOutcome, EquipRejection, Loadout, MAX_RINGS,
    MAX_WEAPONS,
};
pub use names::{Description, EntryName};
pub use quantity::Quantity;
pub use skill::SkillKind;
pub use slot::BodySlot;
pub use weapon_traits::{parse_characteristics, parse_penalties, parse_requirements};
