//! Cosmetic paper-doll slots.

use std::sync::Arc;

use tokio::sync::Mutex;

use ficha_domain::{CharacterId, CosmeticLoadout, CosmeticSlot};

use crate::ports::outbound::{ApiError, CosmeticPort};

#[derive(Debug, thiserror::Error)]
pub enum CosmeticsError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),
}

/// Keeps a character's cosmetic loadout in step with the backend.
pub struct CosmeticsService {
    port: Arc<dyn CosmeticPort>,
    owner: CharacterId,
    loadout: Mutex<CosmeticLoadout>,
}

impl CosmeticsService {
    pub fn new(port: Arc<dyn CosmeticPort>, owner: CharacterId) -> Self {
        Self {
            port,
            owner,
            loadout: Mutex::new(CosmeticLoadout::new(owner)),
        }
    }

    /// Load the stored loadout; a character without one gets empty slots.
    pub async fn fetch(&self) -> Result<CosmeticLoadout, CosmeticsError> {
        let stored = self
            .port
            .get_loadout(self.owner)
            .await?
            .unwrap_or_else(|| CosmeticLoadout::new(self.owner));
        let mut loadout = self.loadout.lock().await;
        *loadout = stored.clone();
        Ok(stored)
    }

    pub async fn loadout(&self) -> CosmeticLoadout {
        self.loadout.lock().await.clone()
    }

    /// Put `image` in `slot`, or clear it with `None` / an empty path.
    ///
    /// Local state only changes once the backend accepted the write.
    pub async fn set_slot(
        &self,
        slot: CosmeticSlot,
        image: Option<String>,
    ) -> Result<CosmeticLoadout, CosmeticsError> {
        let image = image.filter(|path| !path.is_empty());
        let mut loadout = self.loadout.lock().await;

        self.port
            .set_slot(self.owner, slot, image.clone())
            .await
            .map_err(|e| {
                tracing::error!(character_id = %self.owner, %slot, error = %e, "Failed to save cosmetic slot");
                e
            })?;

        tracing::info!(character_id = %self.owner, %slot, image = ?image, "Cosmetic slot saved");
        loadout.set(slot, image);
        Ok(loadout.clone())
    }
}
