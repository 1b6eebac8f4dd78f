//! Deleting inventory entries.

use ficha_domain::{EntryRef, InventoryEntry};

use crate::application::services::ArmorSync;

use super::{EquipmentError, EquipmentManager, EquipmentState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteReport {
    pub entry: EntryRef,
    /// Set when the deleted entry was worn armor.
    pub armor: Option<ArmorSync>,
}

impl EquipmentManager {
    pub async fn delete_selected(&self) -> Result<DeleteReport, EquipmentError> {
        let mut state = self.state.lock().await;
        let entry = state.selected.ok_or(EquipmentError::NothingSelected)?;
        self.delete_locked(&mut state, entry).await
    }

    pub async fn delete_entry(&self, entry: EntryRef) -> Result<DeleteReport, EquipmentError> {
        let mut state = self.state.lock().await;
        self.delete_locked(&mut state, entry).await
    }

    /// A delete cannot be undone, so once the backend accepted it the entry
    /// leaves local state even if the armor re-sync then fails.
    async fn delete_locked(
        &self,
        state: &mut EquipmentState,
        entry: EntryRef,
    ) -> Result<DeleteReport, EquipmentError> {
        let worn_armor = match state.entry(entry) {
            None => return Err(EquipmentError::EntryNotFound(entry)),
            Some(InventoryEntry::Armor(piece)) => piece.equipped,
            Some(_) => false,
        };

        self.inventory.delete_entry(entry).await.map_err(|e| {
            tracing::error!(character_id = %self.character_id, %entry, error = %e, "Failed to delete entry");
            e
        })?;
        state.remove(entry);
        tracing::info!(character_id = %self.character_id, %entry, "Inventory entry deleted");

        let armor = if worn_armor {
            let sync = self.armor_aggregator.sync(self.character_id, &state.armor).await?;
            state.character.status.armor = sync.total();
            Some(sync)
        } else {
            None
        };

        Ok(DeleteReport { entry, armor })
    }
}
