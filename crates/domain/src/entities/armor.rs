//! Armor entity - protective pieces worn in a body slot

use serde::{Deserialize, Serialize};

use crate::ids::{ArmorId, CharacterId, CharacteristicId};
use crate::value_objects::{BodySlot, Description, EntryName, SizeClass};

fn armor_tag() -> String {
    "Armadura".to_string()
}

/// Name given to the single free-text characteristic typed on the form.
pub const CUSTOM_CHARACTERISTIC_NAME: &str = "Personalizada";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Armor {
    pub id: ArmorId,
    #[serde(rename = "tipo", default = "armor_tag")]
    pub entry_type: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao", default)]
    pub description: String,
    #[serde(rename = "protecao", default)]
    pub protection: u32,
    #[serde(rename = "tamanho", default)]
    pub size: SizeClass,
    #[serde(rename = "peca")]
    pub slot: BodySlot,
    #[serde(rename = "equipado", default)]
    pub equipped: bool,
    #[serde(rename = "personagemId")]
    pub character_id: CharacterId,
    #[serde(rename = "caracteristicas", default)]
    pub characteristics: Vec<ArmorCharacteristic>,
}

impl Armor {
    /// Copy of this record with the equip flag set.
    pub fn with_equipped(&self, equipped: bool) -> Self {
        Self {
            equipped,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmorCharacteristic {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CharacteristicId>,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao", default)]
    pub description: String,
}

/// Sum of protection over the equipped pieces.
pub fn equipped_protection(pieces: &[Armor]) -> u32 {
    pieces
        .iter()
        .filter(|piece| piece.equipped)
        .fold(0u32, |total, piece| total.saturating_add(piece.protection))
}

/// Form data for a new armor piece. New pieces start unequipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArmor {
    pub name: EntryName,
    pub description: Description,
    pub protection: u32,
    pub size: SizeClass,
    pub slot: BodySlot,
    /// Free text stored as a single characteristic named
    /// [`CUSTOM_CHARACTERISTIC_NAME`]; empty means none.
    pub characteristic: Description,
}

impl NewArmor {
    pub fn new(name: EntryName, slot: BodySlot) -> Self {
        Self {
            name,
            description: Description::default(),
            protection: 0,
            size: SizeClass::default(),
            slot,
            characteristic: Description::default(),
        }
    }

    pub fn with_protection(mut self, protection: u32) -> Self {
        self.protection = protection;
        self
    }

    pub fn with_description(mut self, description: Description) -> Self {
        self.description = description;
        self
    }

    pub fn with_size(mut self, size: SizeClass) -> Self {
        self.size = size;
        self
    }

    pub fn with_characteristic(mut self, text: Description) -> Self {
        self.characteristic = text;
        self
    }

    pub fn characteristics(&self) -> Vec<ArmorCharacteristic> {
        if self.characteristic.is_empty() {
            return Vec::new();
        }
        vec![ArmorCharacteristic {
            id: None,
            name: CUSTOM_CHARACTERISTIC_NAME.to_string(),
            description: self.characteristic.as_str().to_string(),
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::armor;

    #[test]
    fn protection_sums_only_equipped_pieces() {
        let pieces = vec![
            armor(1, BodySlot::Chest, 5, true),
            armor(2, BodySlot::Head, 2, false),
            armor(3, BodySlot::Ring, 1, true),
        ];
        assert_eq!(equipped_protection(&pieces), 6);
        assert_eq!(equipped_protection(&[]), 0);
    }

    #[test]
    fn protection_total_saturates() {
        let pieces = vec![
            armor(1, BodySlot::Chest, u32::MAX, true),
            armor(2, BodySlot::Head, 5, true),
        ];
        assert_eq!(equipped_protection(&pieces), u32::MAX);
    }

    #[test]
    fn deserializes_backend_record() {
        let json = r#"{
            "id": 4, "tipo": "Armadura", "nome": "Cota", "descricao": "",
            "protecao": 6, "tamanho": "Grande", "peca": "Peito",
            "equipado": true, "personagemId": 1,
            "caracteristicas": [{"id": 2, "nome": "Pesada", "descricao": "-1 Destreza"}]
        }"#;
        let piece: Armor = serde_json::from_str(json).expect("deserialize");
        assert_eq!(piece.slot, BodySlot::Chest);
        assert_eq!(piece.size, SizeClass::Large);
        assert!(piece.equipped);
        assert_eq!(piece.characteristics.len(), 1);
    }

    #[test]
    fn form_text_becomes_single_custom_characteristic() {
        let name = EntryName::new("Elmo").expect("name");
        let blank = NewArmor::new(name.clone(), BodySlot::Head);
        assert!(blank.characteristics().is_empty());

        let with_text = NewArmor::new(name, BodySlot::Head)
            .with_characteristic(Description::new("Brilha no escuro").expect("text"));
        let traits = with_text.characteristics();
        assert_eq!(traits[0].name, CUSTOM_CHARACTERISTIC_NAME);
        assert_eq!(traits[0].description, "Brilha no escuro");
    }
}
