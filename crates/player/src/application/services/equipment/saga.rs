//! Compensation log for multi-step armor equip writes.

use ficha_domain::{Armor, EntryRef};

use crate::ports::outbound::InventoryPort;

use super::EquipmentError;

/// Armor records as they were before each completed remote write.
#[derive(Debug, Default)]
pub struct Saga {
    completed: Vec<Armor>,
}

impl Saga {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the prior record of a write that just succeeded.
    pub fn record(&mut self, previous: Armor) {
        self.completed.push(previous);
    }

    /// Undo completed writes newest first by PUTting each prior record back.
    ///
    /// Returns `cause` when every undo went through, or `Diverged` naming
    /// the entries that could not be restored.
    pub async fn unwind(self, inventory: &dyn InventoryPort, cause: EquipmentError) -> EquipmentError {
        let mut unresolved = Vec::new();
        for previous in self.completed.iter().rev() {
            let entry = EntryRef::Armor(previous.id);
            match inventory.update_armor(previous).await {
                Ok(_) => {
                    tracing::warn!(%entry, "Compensated equip step");
                }
                Err(e) => {
                    tracing::error!(%entry, error = %e, "Compensation failed");
                    unresolved.push(entry);
                }
            }
        }

        if unresolved.is_empty() {
            cause
        } else {
            EquipmentError::Diverged {
                cause: cause.to_string(),
                unresolved,
            }
        }
    }
}
