//! Equipment Manager - the character's inventory and equip state
//!
//! Holds the locally confirmed copy of a character's items, armor and
//! weapons and runs every mutation against the backend first. Actions on one
//! manager are serialised: the state lock is held from the first check to
//! the last write, so two rapid equip requests can never interleave.

mod add_entry;
mod delete_entry;
mod error;
mod saga;
mod set_equipped;
mod state;

use std::sync::Arc;

use tokio::sync::Mutex;

use ficha_domain::{CharacterId, EntryRef, HandsProjection, InventoryCapacity, Loadout};

use crate::ports::outbound::{CharacterPort, InventoryPort, StatusPort};

use super::ArmorAggregator;

pub use delete_entry::DeleteReport;
pub use error::EquipmentError;
pub use saga::Saga;
pub use set_equipped::EquipReport;
pub use state::EquipmentState;

/// Ports the manager talks to.
#[derive(Clone)]
pub struct EquipmentPorts {
    pub characters: Arc<dyn CharacterPort>,
    pub inventory: Arc<dyn InventoryPort>,
    pub status: Arc<dyn StatusPort>,
}

pub struct EquipmentManager {
    character_id: CharacterId,
    characters: Arc<dyn CharacterPort>,
    inventory: Arc<dyn InventoryPort>,
    armor_aggregator: ArmorAggregator,
    state: Mutex<EquipmentState>,
}

impl EquipmentManager {
    /// Fetch the character and its three inventory lists.
    pub async fn load(ports: EquipmentPorts, character_id: CharacterId) -> Result<Self, EquipmentError> {
        let state = fetch_state(&*ports.characters, &*ports.inventory, character_id).await?;
        tracing::info!(
            character_id = %character_id,
            entries = state.entry_count(),
            capacity = %state.capacity(),
            "Equipment loaded"
        );

        Ok(Self {
            character_id,
            characters: ports.characters,
            inventory: ports.inventory,
            armor_aggregator: ArmorAggregator::new(ports.status),
            state: Mutex::new(state),
        })
    }

    pub fn character_id(&self) -> CharacterId {
        self.character_id
    }

    /// Replace local state with a fresh copy from the backend.
    ///
    /// The selection survives when the selected entry still exists.
    pub async fn reload(&self) -> Result<(), EquipmentError> {
        let mut state = self.state.lock().await;
        let mut fresh = fetch_state(&*self.characters, &*self.inventory, self.character_id).await?;
        fresh.selected = state.selected.filter(|entry| fresh.contains(*entry));
        *state = fresh;
        Ok(())
    }

    pub async fn snapshot(&self) -> EquipmentState {
        self.state.lock().await.clone()
    }

    /// Read local state without cloning it.
    pub async fn with_state<R>(&self, read: impl FnOnce(&EquipmentState) -> R) -> R {
        read(&*self.state.lock().await)
    }

    pub async fn capacity(&self) -> InventoryCapacity {
        self.with_state(EquipmentState::capacity).await
    }

    pub async fn loadout(&self) -> Loadout {
        self.with_state(EquipmentState::loadout).await
    }

    pub async fn hands(&self) -> HandsProjection {
        self.with_state(EquipmentState::hands).await
    }

    pub async fn select(&self, entry: EntryRef) -> Result<(), EquipmentError> {
        let mut state = self.state.lock().await;
        if !state.contains(entry) {
            return Err(EquipmentError::EntryNotFound(entry));
        }
        state.selected = Some(entry);
        Ok(())
    }

    pub async fn clear_selection(&self) {
        self.state.lock().await.selected = None;
    }
}

async fn fetch_state(
    characters: &dyn CharacterPort,
    inventory: &dyn InventoryPort,
    character_id: CharacterId,
) -> Result<EquipmentState, EquipmentError> {
    let character = characters.get_character(character_id).await?;
    let (items, armor, weapons) = tokio::try_join!(
        inventory.list_items(character_id),
        inventory.list_armor(character_id),
        inventory.list_weapons(character_id),
    )?;
    Ok(EquipmentState::new(character, items, armor, weapons))
}
