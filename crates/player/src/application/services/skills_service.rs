//! Skill scores. Skills drive no status field, so a change is one save.

use std::sync::Arc;

use ficha_domain::{AttributeChange, CharacterId, SkillKind, Skills};

use crate::ports::outbound::{ApiError, SkillsPort};

#[derive(Debug, thiserror::Error)]
pub enum SkillsError {
    #[error("Failed to save skills: {0}")]
    Api(#[from] ApiError),
}

#[derive(Clone)]
pub struct SkillsService {
    port: Arc<dyn SkillsPort>,
}

impl SkillsService {
    pub fn new(port: Arc<dyn SkillsPort>) -> Self {
        Self { port }
    }

    /// Apply `change` to one skill, clamped to `[0, 20]`, and persist the
    /// whole record. Returns the record as it now stands.
    pub async fn adjust(
        &self,
        owner: CharacterId,
        current: &Skills,
        kind: SkillKind,
        change: AttributeChange,
    ) -> Result<Skills, SkillsError> {
        let score = current.get(kind).apply(change);
        let mut next = current.clone();
        next.set(kind, score);

        let saved = self.port.save_skills(owner, &next).await.map_err(|e| {
            tracing::error!(character_id = %owner, skill = %kind, error = %e, "Failed to save skill");
            e
        })?;
        next.id = saved.id.or(next.id);

        tracing::info!(character_id = %owner, skill = %kind, score = %score, "Skill saved");
        Ok(next)
    }
}
