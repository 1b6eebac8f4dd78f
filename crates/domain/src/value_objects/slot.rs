//! Body slots for armor pieces

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Body location an armor piece occupies.
///
/// Every slot holds a single equipped piece except [`BodySlot::Ring`], which
/// is a counted set (see [`crate::value_objects::ArmorLoadout`]).
///
/// New armor without an explicit slot goes on the chest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum BodySlot {
    #[serde(rename = "Cabeca")]
    Head,
    #[serde(rename = "Ombro")]
    Shoulder,
    #[default]
    #[serde(rename = "Peito")]
    Chest,
    #[serde(rename = "Capa")]
    Cape,
    #[serde(rename = "Luva")]
    Glove,
    #[serde(rename = "Cinto")]
    Belt,
    #[serde(rename = "Colar")]
    Necklace,
    #[serde(rename = "Anel")]
    Ring,
    #[serde(rename = "Perna")]
    Leg,
    #[serde(rename = "Bota")]
    Boot,
}

impl BodySlot {
    pub const ALL: [BodySlot; 10] = [
        Self::Head,
        Self::Shoulder,
        Self::Chest,
        Self::Cape,
        Self::Glove,
        Self::Belt,
        Self::Necklace,
        Self::Ring,
        Self::Leg,
        Self::Boot,
    ];

    /// Name used by the backend.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::Head => "Cabeca",
            Self::Shoulder => "Ombro",
            Self::Chest => "Peito",
            Self::Cape => "Capa",
            Self::Glove => "Luva",
            Self::Belt => "Cinto",
            Self::Necklace => "Colar",
            Self::Ring => "Anel",
            Self::Leg => "Perna",
            Self::Boot => "Bota",
        }
    }

    /// Whether the slot admits more than one equipped piece.
    pub fn is_counted(&self) -> bool {
        matches!(self, Self::Ring)
    }
}

impl std::fmt::Display for BodySlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl std::str::FromStr for BodySlot {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|slot| {
                slot.wire_name().eq_ignore_ascii_case(needle)
                    || format!("{slot:?}").eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| DomainError::parse(format!("Unknown body slot: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wire_and_english_names() {
        assert_eq!("Anel".parse::<BodySlot>(), Ok(BodySlot::Ring));
        assert_eq!("ring".parse::<BodySlot>(), Ok(BodySlot::Ring));
        assert_eq!("peito".parse::<BodySlot>(), Ok(BodySlot::Chest));
        assert!("Tail".parse::<BodySlot>().is_err());
    }

    #[test]
    fn serializes_with_backend_names() {
        let json = serde_json::to_string(&BodySlot::Head).expect("serialize");
        assert_eq!(json, "\"Cabeca\"");
    }

    #[test]
    fn only_ring_is_counted() {
        let counted: Vec<_> = BodySlot::ALL.iter().filter(|s| s.is_counted()).collect();
        assert_eq!(counted, vec![&BodySlot::Ring]);
    }
}
