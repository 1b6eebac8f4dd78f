//! Typed ports for the sheet backend's resource collections.

use async_trait::async_trait;

use ficha_domain::{
    Armor, Attributes, Character, CharacterId, CosmeticLoadout, CosmeticSlot, EntryRef, Item,
    NewArmor, NewCharacteristic, NewItem, NewPenalty, NewRequirement, NewWeapon, Skills, Status,
    StatusField, StatusId, Weapon, WeaponId,
};

use super::ApiError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CharacterPort: Send + Sync {
    async fn get_character(&self, id: CharacterId) -> Result<Character, ApiError>;
}

/// Items, armor and weapons owned by one character.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InventoryPort: Send + Sync {
    async fn list_items(&self, owner: CharacterId) -> Result<Vec<Item>, ApiError>;
    async fn list_armor(&self, owner: CharacterId) -> Result<Vec<Armor>, ApiError>;
    async fn list_weapons(&self, owner: CharacterId) -> Result<Vec<Weapon>, ApiError>;

    async fn create_item(&self, owner: CharacterId, item: &NewItem) -> Result<Item, ApiError>;
    async fn create_armor(&self, owner: CharacterId, armor: &NewArmor) -> Result<Armor, ApiError>;
    async fn create_weapon(&self, owner: CharacterId, weapon: &NewWeapon)
        -> Result<Weapon, ApiError>;

    /// Full-record PUT; returns the record as the server stored it.
    async fn update_armor(&self, armor: &Armor) -> Result<Armor, ApiError>;
    /// Full-record PUT without the embedded relations.
    async fn update_weapon(&self, weapon: &Weapon) -> Result<Weapon, ApiError>;

    async fn delete_entry(&self, entry: EntryRef) -> Result<(), ApiError>;

    async fn add_requirement(
        &self,
        weapon: WeaponId,
        requirement: &NewRequirement,
    ) -> Result<(), ApiError>;
    async fn add_penalty(&self, weapon: WeaponId, penalty: &NewPenalty) -> Result<(), ApiError>;
    async fn add_characteristic(
        &self,
        weapon: WeaponId,
        characteristic: &NewCharacteristic,
    ) -> Result<(), ApiError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatusPort: Send + Sync {
    /// `None` when the character has no status record yet.
    async fn get_status(&self, owner: CharacterId) -> Result<Option<Status>, ApiError>;

    /// Partial update of exactly one field.
    async fn patch_field(
        &self,
        status: StatusId,
        field: StatusField,
        value: i32,
    ) -> Result<(), ApiError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AttributesPort: Send + Sync {
    /// PUT when the record has an id, POST otherwise.
    async fn save_attributes(
        &self,
        owner: CharacterId,
        attributes: &Attributes,
    ) -> Result<Attributes, ApiError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SkillsPort: Send + Sync {
    /// PUT when the record has an id, POST otherwise.
    async fn save_skills(&self, owner: CharacterId, skills: &Skills) -> Result<Skills, ApiError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CosmeticPort: Send + Sync {
    async fn get_loadout(&self, owner: CharacterId) -> Result<Option<CosmeticLoadout>, ApiError>;

    /// `None` clears the slot.
    async fn set_slot(
        &self,
        owner: CharacterId,
        slot: CosmeticSlot,
        image: Option<String>,
    ) -> Result<(), ApiError>;
}
