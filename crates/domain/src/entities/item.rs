//! Item entity - plain carried objects (rations, rope, potions)

use serde::{Deserialize, Serialize};

use crate::ids::{CharacterId, ItemId};
use crate::value_objects::{Description, EntryName, Quantity, SizeClass};

fn item_tag() -> String {
    "Item".to_string()
}

/// An item owned by a character.
///
/// Simple data struct: records come from the backend as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    #[serde(rename = "tipo", default = "item_tag")]
    pub entry_type: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao", default)]
    pub description: String,
    #[serde(rename = "quantidade", default = "default_quantity")]
    pub quantity: u32,
    #[serde(rename = "tamanho", default)]
    pub size: SizeClass,
    #[serde(rename = "personagemId")]
    pub character_id: CharacterId,
}

fn default_quantity() -> u32 {
    1
}

/// Form data for a new item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub name: EntryName,
    pub description: Description,
    pub quantity: Quantity,
    pub size: SizeClass,
}

impl NewItem {
    pub fn new(name: EntryName) -> Self {
        Self {
            name,
            description: Description::default(),
            quantity: Quantity::ONE,
            size: SizeClass::default(),
        }
    }

    pub fn with_description(mut self, description: Description) -> Self {
        self.description = description;
        self
    }

    pub fn with_quantity(mut self, quantity: Quantity) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_size(mut self, size: SizeClass) -> Self {
        self.size = size;
        self
    }
}
