//! Carry capacity derived from strength

use super::AttributeScore;

/// Inventory slots granted per point of strength.
pub const SLOTS_PER_STRENGTH: u32 = 5;

/// Carry capacity of a character against what it currently holds.
///
/// Recomputed from live state whenever it is needed; never cached or
/// persisted. The limit is soft: it only gates adding new entries, so a
/// character whose strength dropped may sit above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventoryCapacity {
    total: u32,
    used: u32,
}

impl InventoryCapacity {
    /// `used` is the combined count of items, armor pieces and weapons.
    pub fn new(strength: AttributeScore, used: usize) -> Self {
        Self {
            total: strength.value() as u32 * SLOTS_PER_STRENGTH,
            used: u32::try_from(used).unwrap_or(u32::MAX),
        }
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn used(&self) -> u32 {
        self.used
    }

    pub fn is_full(&self) -> bool {
        self.used >= self.total
    }

    /// Whether a new entry may be added right now.
    pub fn can_add(&self) -> bool {
        !self.is_full()
    }
}

impl std::fmt::Display for InventoryCapacity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.used, self.total)
    }
}
