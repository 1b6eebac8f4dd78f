use std::fmt;

use serde::{Deserialize, Serialize};

/// Record ids are assigned by the backend as plain integers.
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            pub fn get(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse().map(Self)
            }
        }
    };
}

// Character and its one-to-one records
define_id!(CharacterId);
define_id!(AttributesId);
define_id!(StatusId);
define_id!(SkillsId);

// Inventory entries
define_id!(ItemId);
define_id!(ArmorId);
define_id!(WeaponId);

// Weapon sub-records
define_id!(RequirementId);
define_id!(PenaltyId);
define_id!(CharacteristicId);
