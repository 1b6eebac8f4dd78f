//! Weapon damage range

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Inclusive damage range of a weapon: `1 <= min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DamageRange {
    #[serde(rename = "danoMin")]
    min: u32,
    #[serde(rename = "danoMax")]
    max: u32,
}

impl DamageRange {
    /// Create a validated damage range.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if either bound is zero or if
    /// `min > max`.
    pub fn new(min: u32, max: u32) -> Result<Self, DomainError> {
        if min == 0 || max == 0 {
            return Err(DomainError::validation("Damage must be at least 1"));
        }
        if min > max {
            return Err(DomainError::validation(format!(
                "Minimum damage {} exceeds maximum damage {}",
                min, max
            )));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }
}

impl std::fmt::Display for DamageRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.min, self.max)
    }
}
