//! Record builders for unit tests.

use serde_json::json;

use ficha_domain::{
    Armor, ArmorId, BodySlot, Character, CharacterId, Item, ItemId, SizeClass, Status, StatusId,
    Weapon, WeaponId, WeaponRange,
};

pub const OWNER: CharacterId = CharacterId::new(1);

pub fn character(strength: i64, status_id: Option<i64>) -> Character {
    let status = match status_id {
        Some(id) => json!([{ "id": id, "armadura": 0 }]),
        None => json!([]),
    };
    serde_json::from_value(json!({
        "id": OWNER,
        "nome": "Lyra",
        "atributos": [{ "id": 3, "forca": strength }],
        "status": status,
    }))
    .expect("character fixture")
}

pub fn status(id: i64, armor: i32) -> Status {
    Status {
        id: Some(StatusId::new(id)),
        armor,
        ..Status::default()
    }
}

pub fn item(id: i64) -> Item {
    Item {
        id: ItemId::new(id),
        entry_type: "Item".to_string(),
        name: format!("Item {}", id),
        description: String::new(),
        quantity: 1,
        size: SizeClass::Small,
        character_id: OWNER,
    }
}

pub fn armor(id: i64, slot: BodySlot, protection: u32, equipped: bool) -> Armor {
    Armor {
        id: ArmorId::new(id),
        entry_type: "Armadura".to_string(),
        name: format!("Armadura {}", id),
        description: String::new(),
        protection,
        size: SizeClass::Medium,
        slot,
        equipped,
        character_id: OWNER,
        characteristics: Vec::new(),
    }
}

pub fn weapon(id: i64, equipped: bool) -> Weapon {
    Weapon {
        id: WeaponId::new(id),
        entry_type: "Armamento".to_string(),
        name: format!("Arma {}", id),
        description: String::new(),
        damage_min: 1,
        damage_max: 6,
        skill: "Luta".to_string(),
        range: WeaponRange::Personal,
        reload: None,
        rate_of_fire: None,
        magazine: None,
        size: SizeClass::Medium,
        equipped,
        character_id: OWNER,
        requirements: Vec::new(),
        penalties: Vec::new(),
        characteristics: Vec::new(),
    }
}
