//! Attribute scores and the status fields they drive

use serde::{Deserialize, Serialize};

use crate::entities::StatusField;
use crate::error::DomainError;

/// Lowest score an attribute can hold.
pub const MIN_ATTRIBUTE: u8 = 0;

/// Highest score an attribute can hold.
pub const MAX_ATTRIBUTE: u8 = 20;

/// Each point in a vital-driving attribute is worth this many status points.
pub const VITAL_MULTIPLIER: i32 = 5;

/// A single attribute value, always within `[0, 20]`.
///
/// Out-of-range input is clamped rather than rejected, both from the wire
/// and from dice rolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct AttributeScore(u8);

impl AttributeScore {
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(MIN_ATTRIBUTE as i64, MAX_ATTRIBUTE as i64) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Apply a change and clamp the result.
    pub fn apply(self, change: AttributeChange) -> Self {
        match change {
            AttributeChange::Set(value) => Self::clamped(value),
            AttributeChange::Adjust(delta) => Self::clamped(self.0 as i64 + delta),
        }
    }
}

impl From<i64> for AttributeScore {
    fn from(value: i64) -> Self {
        Self::clamped(value)
    }
}

impl From<AttributeScore> for u8 {
    fn from(score: AttributeScore) -> u8 {
        score.0
    }
}

impl std::fmt::Display for AttributeScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How an attribute is being changed: a rolled value replaces it, an
/// adjustment is added to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeChange {
    Set(i64),
    Adjust(i64),
}

/// The ten character attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    Strength,
    Dexterity,
    Constitution,
    Mystic,
    Will,
    Presence,
    Curiosity,
    Reason,
    Perception,
    Luck,
}

impl AttributeKind {
    pub const ALL: [AttributeKind; 10] = [
        Self::Strength,
        Self::Dexterity,
        Self::Constitution,
        Self::Mystic,
        Self::Will,
        Self::Presence,
        Self::Curiosity,
        Self::Reason,
        Self::Perception,
        Self::Luck,
    ];

    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::Strength => "forca",
            Self::Dexterity => "destreza",
            Self::Constitution => "constituicao",
            Self::Mystic => "mistico",
            Self::Will => "vontade",
            Self::Presence => "presenca",
            Self::Curiosity => "curiosidade",
            Self::Reason => "razao",
            Self::Perception => "percepcao",
            Self::Luck => "sorte",
        }
    }

    /// Status field recomputed whenever this attribute changes, if any.
    pub fn derived_status_field(&self) -> Option<StatusField> {
        match self {
            Self::Constitution => Some(StatusField::Health),
            Self::Mystic => Some(StatusField::Mana),
            Self::Will => Some(StatusField::Sanity),
            _ => None,
        }
    }

    /// Status value derived from a score of this attribute.
    pub fn derived_status_value(&self, score: AttributeScore) -> Option<i32> {
        self.derived_status_field()
            .map(|_| score.value() as i32 * VITAL_MULTIPLIER)
    }
}

impl std::fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl std::str::FromStr for AttributeKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| {
                kind.wire_name().eq_ignore_ascii_case(needle)
                    || format!("{kind:?}").eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| DomainError::parse(format!("Unknown attribute: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_clamp_to_range() {
        assert_eq!(AttributeScore::clamped(-3).value(), 0);
        assert_eq!(AttributeScore::clamped(25).value(), 20);
        assert_eq!(AttributeScore::clamped(11).value(), 11);
    }

    #[test]
    fn wire_values_are_clamped_on_read() {
        let score: AttributeScore = serde_json::from_str("42").expect("deserialize");
        assert_eq!(score.value(), 20);
    }

    #[test]
    fn adjust_and_set_clamp() {
        let score = AttributeScore::clamped(19);
        assert_eq!(score.apply(AttributeChange::Adjust(3)).value(), 20);
        assert_eq!(score.apply(AttributeChange::Adjust(-25)).value(), 0);
        assert_eq!(score.apply(AttributeChange::Set(7)).value(), 7);
    }

    #[test]
    fn only_three_attributes_drive_status() {
        let score = AttributeScore::clamped(4);
        assert_eq!(AttributeKind::Constitution.derived_status_value(score), Some(20));
        assert_eq!(
            AttributeKind::Mystic.derived_status_field(),
            Some(StatusField::Mana)
        );
        assert_eq!(
            AttributeKind::Will.derived_status_field(),
            Some(StatusField::Sanity)
        );
        assert_eq!(AttributeKind::Strength.derived_status_value(score), None);
    }

    #[test]
    fn parses_portuguese_and_english_names() {
        assert_eq!("forca".parse::<AttributeKind>(), Ok(AttributeKind::Strength));
        assert_eq!("will".parse::<AttributeKind>(), Ok(AttributeKind::Will));
    }
}
