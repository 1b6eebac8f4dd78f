//! Equipment operation errors.

use ficha_domain::{DomainError, EntryRef, EquipRejection};

use crate::application::services::StatusError;
use crate::ports::outbound::ApiError;

/// Errors that can occur during equipment operations.
///
/// A failed equip or add never changes local state. Every variant except
/// `Diverged` also means the backend is as it was before the action.
#[derive(Debug, thiserror::Error)]
pub enum EquipmentError {
    #[error("No entry selected")]
    NothingSelected,
    #[error("{0} cannot be equipped")]
    NotEquippable(EntryRef),
    #[error("{0} not found in inventory")]
    EntryNotFound(EntryRef),
    #[error(transparent)]
    CapacityExceeded(#[from] EquipRejection),
    #[error("Inventory full ({used}/{total})")]
    InventoryFull { used: u32, total: u32 },
    #[error("Validation error: {0}")]
    Validation(#[from] DomainError),
    #[error("API error: {0}")]
    Api(#[from] ApiError),
    #[error("Status sync failed: {0}")]
    Status(#[from] StatusError),
    /// A later step failed and undoing the earlier ones failed too.
    #[error("Server state diverged after '{cause}'; could not restore {}", format_refs(.unresolved))]
    Diverged {
        cause: String,
        unresolved: Vec<EntryRef>,
    },
}

fn format_refs(refs: &[EntryRef]) -> String {
    refs.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl EquipmentError {
    /// Rejected by client-side policy before any network call.
    pub fn is_policy_rejection(&self) -> bool {
        matches!(
            self,
            Self::NothingSelected
                | Self::NotEquippable(_)
                | Self::CapacityExceeded(_)
                | Self::InventoryFull { .. }
        )
    }
}
