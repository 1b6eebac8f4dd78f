//! Per-hand combat figures shown on the equipment sheet
//!
//! Pure projections of the equipped weapons; recomputed whenever they are
//! displayed and never written back.

use crate::entities::Weapon;

use super::{AttributeScore, WeaponRange};

/// Attacks per turn with nothing in hand.
pub const UNARMED_ATTACKS_PER_TURN: u32 = 2;

/// Damage figure shown for a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageDisplay {
    Range { min: u32, max: u32 },
    /// Empty hand: the raw strength score stands in for damage.
    Strength(AttributeScore),
}

impl std::fmt::Display for DamageDisplay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Range { min, max } => write!(f, "{} - {}", min, max),
            Self::Strength(score) => write!(f, "{}", score),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandView {
    /// Name of the held weapon, `None` when empty-handed.
    pub weapon_name: Option<String>,
    pub damage: DamageDisplay,
    pub attacks_per_turn: u32,
    pub range: WeaponRange,
}

impl HandView {
    fn holding(weapon: &Weapon) -> Self {
        Self {
            weapon_name: Some(weapon.name.clone()),
            damage: DamageDisplay::Range {
                min: weapon.damage_min,
                max: weapon.damage_max,
            },
            attacks_per_turn: weapon.magazine.filter(|m| *m > 0).unwrap_or(1),
            range: weapon.range,
        }
    }

    fn empty(strength: AttributeScore) -> Self {
        Self {
            weapon_name: None,
            damage: DamageDisplay::Strength(strength),
            attacks_per_turn: UNARMED_ATTACKS_PER_TURN,
            range: WeaponRange::Personal,
        }
    }
}

/// Right and left hand figures.
///
/// The right hand is the first equipped weapon in list order and the left
/// hand the second; there is no user-assigned handedness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandsProjection {
    pub right: HandView,
    pub left: HandView,
}

impl HandsProjection {
    pub fn from_weapons(weapons: &[Weapon], strength: AttributeScore) -> Self {
        let mut equipped = weapons.iter().filter(|w| w.equipped);
        let right = equipped
            .next()
            .map(HandView::holding)
            .unwrap_or_else(|| HandView::empty(strength));
        let left = equipped
            .next()
            .map(HandView::holding)
            .unwrap_or_else(|| HandView::empty(strength));
        Self { right, left }
    }
}
