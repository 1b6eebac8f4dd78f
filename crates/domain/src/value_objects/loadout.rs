//! Equip state as bounded sets
//!
//! The equip rules live in the data structures instead of in scans at each
//! call site:
//!
//! - every non-ring [`BodySlot`] maps to at most one armor id,
//! - rings form an ordered set of at most [`MAX_RINGS`] ids,
//! - weapons form an ordered set of at most [`MAX_WEAPONS`] ids.
//!
//! Each `try_equip_*` returns a typed [`EquipOutcome`] or an
//! [`EquipRejection`], so the caller only decides what to persist.

use std::collections::BTreeMap;

use crate::entities::{Armor, Weapon};
use crate::ids::{ArmorId, WeaponId};

use super::BodySlot;

/// Rings that may be worn at once.
pub const MAX_RINGS: usize = 2;

/// Weapons that may be held at once.
pub const MAX_WEAPONS: usize = 2;

/// Constraint group with a counted capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EquipGroup {
    Rings,
    Weapons,
}

impl std::fmt::Display for EquipGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rings => write!(f, "rings"),
            Self::Weapons => write!(f, "weapons"),
        }
    }
}

/// What a successful equip did to the loadout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EquipOutcome<Id> {
    /// The entry now occupies a free place.
    Equipped,
    /// The entry was already equipped; nothing else changed.
    AlreadyEquipped,
    /// The entry took a single slot from `displaced`, which is now unequipped.
    SlotConflict { displaced: Id },
}

impl<Id: Copy> EquipOutcome<Id> {
    pub fn displaced(&self) -> Option<Id> {
        match self {
            Self::SlotConflict { displaced } => Some(*displaced),
            _ => None,
        }
    }
}

/// Why an equip was refused. The loadout is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EquipRejection {
    #[error("max {limit} {group}")]
    CapacityExceeded { group: EquipGroup, limit: usize },
}

// ============================================================================
// BoundedSet
// ============================================================================

/// Insertion-ordered set holding at most `N` ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedSet<T, const N: usize> {
    members: Vec<T>,
}

impl<T: Copy + Eq, const N: usize> BoundedSet<T, N> {
    pub const LIMIT: usize = N;

    pub fn new() -> Self {
        Self {
            members: Vec::with_capacity(N),
        }
    }

    pub fn contains(&self, id: &T) -> bool {
        self.members.contains(id)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.members.len() >= N
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.members.iter()
    }

    /// Add `id` unless it is present already or the set is full.
    pub fn try_insert(&mut self, id: T, group: EquipGroup) -> Result<EquipOutcome<T>, EquipRejection> {
        if self.contains(&id) {
            return Ok(EquipOutcome::AlreadyEquipped);
        }
        if self.is_full() {
            return Err(EquipRejection::CapacityExceeded { group, limit: N });
        }
        self.members.push(id);
        Ok(EquipOutcome::Equipped)
    }

    /// Returns whether `id` was present.
    pub fn remove(&mut self, id: &T) -> bool {
        let before = self.members.len();
        self.members.retain(|member| member != id);
        before != self.members.len()
    }
}

impl<T: Copy + Eq, const N: usize> Default for BoundedSet<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// ArmorLoadout
// ============================================================================

/// Equipped armor: one id per single slot plus the ring set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArmorLoadout {
    slots: BTreeMap<BodySlot, ArmorId>,
    rings: BoundedSet<ArmorId, MAX_RINGS>,
}

impl ArmorLoadout {
    /// Build from records flagged `equipped`, in list order.
    ///
    /// When stored data already breaks a rule, the earliest pieces win and
    /// the rest are left out of the loadout.
    pub fn from_armor(pieces: &[Armor]) -> Self {
        let mut loadout = Self::default();
        for piece in pieces.iter().filter(|p| p.equipped) {
            if piece.slot.is_counted() {
                let _ = loadout.rings.try_insert(piece.id, EquipGroup::Rings);
            } else {
                loadout.slots.entry(piece.slot).or_insert(piece.id);
            }
        }
        loadout
    }

    pub fn try_equip(
        &mut self,
        id: ArmorId,
        slot: BodySlot,
    ) -> Result<EquipOutcome<ArmorId>, EquipRejection> {
        if slot.is_counted() {
            return self.rings.try_insert(id, EquipGroup::Rings);
        }
        match self.slots.insert(slot, id) {
            None => Ok(EquipOutcome::Equipped),
            Some(previous) if previous == id => Ok(EquipOutcome::AlreadyEquipped),
            Some(previous) => Ok(EquipOutcome::SlotConflict {
                displaced: previous,
            }),
        }
    }

    /// Returns whether `id` was equipped.
    pub fn unequip(&mut self, id: ArmorId) -> bool {
        if self.rings.remove(&id) {
            return true;
        }
        let before = self.slots.len();
        self.slots.retain(|_, occupant| *occupant != id);
        before != self.slots.len()
    }

    pub fn is_equipped(&self, id: ArmorId) -> bool {
        self.rings.contains(&id) || self.slots.values().any(|occupant| *occupant == id)
    }

    pub fn occupant(&self, slot: BodySlot) -> Option<ArmorId> {
        self.slots.get(&slot).copied()
    }

    pub fn rings(&self) -> &BoundedSet<ArmorId, MAX_RINGS> {
        &self.rings
    }

    pub fn equipped(&self) -> impl Iterator<Item = ArmorId> + '_ {
        self.slots.values().copied().chain(self.rings.iter().copied())
    }
}

// ============================================================================
// Loadout
// ============================================================================

/// Everything a character has equipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Loadout {
    pub armor: ArmorLoadout,
    pub weapons: BoundedSet<WeaponId, MAX_WEAPONS>,
}

impl Loadout {
    pub fn from_records(armor: &[Armor], weapons: &[Weapon]) -> Self {
        let mut weapon_set = BoundedSet::new();
        for weapon in weapons.iter().filter(|w| w.equipped) {
            let _ = weapon_set.try_insert(weapon.id, EquipGroup::Weapons);
        }
        Self {
            armor: ArmorLoadout::from_armor(armor),
            weapons: weapon_set,
        }
    }

    pub fn try_equip_armor(
        &mut self,
        id: ArmorId,
        slot: BodySlot,
    ) -> Result<EquipOutcome<ArmorId>, EquipRejection> {
        self.armor.try_equip(id, slot)
    }

    pub fn unequip_armor(&mut self, id: ArmorId) -> bool {
        self.armor.unequip(id)
    }

    pub fn try_equip_weapon(&mut self, id: WeaponId) -> Result<EquipOutcome<WeaponId>, EquipRejection> {
        self.weapons.try_insert(id, EquipGroup::Weapons)
    }

    pub fn unequip_weapon(&mut self, id: WeaponId) -> bool {
        self.weapons.remove(&id)
    }
}
