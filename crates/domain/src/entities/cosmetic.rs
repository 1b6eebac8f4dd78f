//! Cosmetic equipment: the purely visual paper-doll loadout
//!
//! Independent of [`super::Armor`] and [`super::Weapon`]; a cosmetic slot
//! holds an image path and nothing else.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::CharacterId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CosmeticSlot {
    #[serde(rename = "capacete")]
    Helmet,
    #[serde(rename = "ombreira")]
    Pauldron,
    #[serde(rename = "armadura")]
    BodyArmor,
    #[serde(rename = "capa")]
    Cape,
    #[serde(rename = "luva")]
    Glove,
    #[serde(rename = "cinto")]
    Belt,
    #[serde(rename = "colar")]
    Necklace,
    #[serde(rename = "anel1")]
    FirstRing,
    #[serde(rename = "calcas")]
    Trousers,
    #[serde(rename = "anel2")]
    SecondRing,
    #[serde(rename = "armaMaoEsquerda")]
    LeftHandWeapon,
    #[serde(rename = "botas")]
    Boots,
    #[serde(rename = "armaMaoDireita")]
    RightHandWeapon,
}

impl CosmeticSlot {
    pub const ALL: [CosmeticSlot; 13] = [
        CosmeticSlot::Helmet,
        CosmeticSlot::Pauldron,
        CosmeticSlot::BodyArmor,
        CosmeticSlot::Cape,
        CosmeticSlot::Glove,
        CosmeticSlot::Belt,
        CosmeticSlot::Necklace,
        CosmeticSlot::FirstRing,
        CosmeticSlot::Trousers,
        CosmeticSlot::SecondRing,
        CosmeticSlot::LeftHandWeapon,
        CosmeticSlot::Boots,
        CosmeticSlot::RightHandWeapon,
    ];

    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::Helmet => "capacete",
            Self::Pauldron => "ombreira",
            Self::BodyArmor => "armadura",
            Self::Cape => "capa",
            Self::Glove => "luva",
            Self::Belt => "cinto",
            Self::Necklace => "colar",
            Self::FirstRing => "anel1",
            Self::Trousers => "calcas",
            Self::SecondRing => "anel2",
            Self::LeftHandWeapon => "armaMaoEsquerda",
            Self::Boots => "botas",
            Self::RightHandWeapon => "armaMaoDireita",
        }
    }

    /// Directory the selectable images for this slot are served from.
    pub fn image_dir(&self) -> &'static str {
        match self {
            Self::Helmet => "/equipamentos/capacetes",
            Self::Pauldron => "/equipamentos/ombreiras",
            Self::BodyArmor => "/equipamentos/armaduras",
            Self::Cape => "/equipamentos/capas",
            Self::Glove => "/equipamentos/luvas",
            Self::Belt => "/equipamentos/cintos",
            Self::Necklace => "/equipamentos/colares",
            Self::FirstRing | Self::SecondRing => "/equipamentos/aneis",
            Self::Trousers => "/equipamentos/calcas",
            Self::LeftHandWeapon | Self::RightHandWeapon => "/equipamentos/armas",
            Self::Boots => "/equipamentos/botas",
        }
    }
}

impl std::fmt::Display for CosmeticSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl std::str::FromStr for CosmeticSlot {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|slot| slot.wire_name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::parse(format!("Unknown cosmetic slot: {}", s)))
    }
}

/// Image path per cosmetic slot; a missing key is an empty slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CosmeticLoadout {
    #[serde(rename = "personagemId", default, skip_serializing_if = "Option::is_none")]
    pub character_id: Option<CharacterId>,
    #[serde(flatten, deserialize_with = "slots_skipping_nulls")]
    slots: BTreeMap<CosmeticSlot, String>,
}

fn slots_skipping_nulls<'de, D>(deserializer: D) -> Result<BTreeMap<CosmeticSlot, String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum SlotValue {
        Path(String),
        Other(serde::de::IgnoredAny),
    }

    // The flattened map also sees `id` and any other record keys.
    let raw = BTreeMap::<String, SlotValue>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|(key, value)| match (key.parse::<CosmeticSlot>(), value) {
            (Ok(slot), SlotValue::Path(path)) if !path.is_empty() => Some((slot, path)),
            _ => None,
        })
        .collect())
}

impl CosmeticLoadout {
    pub fn new(character_id: CharacterId) -> Self {
        Self {
            character_id: Some(character_id),
            slots: BTreeMap::new(),
        }
    }

    pub fn get(&self, slot: CosmeticSlot) -> Option<&str> {
        self.slots.get(&slot).map(String::as_str)
    }

    /// `None` or an empty path clears the slot.
    pub fn set(&mut self, slot: CosmeticSlot, image: Option<String>) {
        match image.filter(|path| !path.is_empty()) {
            Some(path) => {
                self.slots.insert(slot, path);
            }
            None => {
                self.slots.remove(&slot);
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (CosmeticSlot, &str)> {
        self.slots.iter().map(|(slot, path)| (*slot, path.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_names_round_trip_through_from_str() {
        for slot in CosmeticSlot::ALL {
            assert_eq!(slot.wire_name().parse::<CosmeticSlot>().ok(), Some(slot));
        }
        assert!("elmo".parse::<CosmeticSlot>().is_err());
    }

    #[test]
    fn backend_record_keeps_only_filled_slots() {
        let json = r#"{
            "id": 1, "personagemId": 7,
            "capacete": "/equipamentos/capacetes/capacete1.png",
            "anel2": null, "botas": ""
        }"#;
        let loadout: CosmeticLoadout = serde_json::from_str(json).expect("deserialize");
        assert_eq!(loadout.character_id, Some(CharacterId::new(7)));
        assert_eq!(
            loadout.get(CosmeticSlot::Helmet),
            Some("/equipamentos/capacetes/capacete1.png")
        );
        assert_eq!(loadout.get(CosmeticSlot::SecondRing), None);
        assert_eq!(loadout.get(CosmeticSlot::Boots), None);
        assert_eq!(loadout.iter().count(), 1);
    }

    #[test]
    fn setting_empty_path_clears_slot() {
        let mut loadout = CosmeticLoadout::new(CharacterId::new(1));
        loadout.set(CosmeticSlot::Cape, Some("/equipamentos/capas/capa1.png".to_string()));
        assert!(loadout.get(CosmeticSlot::Cape).is_some());
        loadout.set(CosmeticSlot::Cape, Some(String::new()));
        assert_eq!(loadout.get(CosmeticSlot::Cape), None);
    }
}
