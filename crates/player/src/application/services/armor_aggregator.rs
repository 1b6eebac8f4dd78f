//! Armor Aggregator - sole writer of `Status.armadura`
//!
//! The armor total is derived from the equipped armor pieces and nothing
//! else. Only the equipment flows call into this service, and it writes the
//! one field with a partial PATCH, so the attributes view (which owns the
//! vital fields) can never clobber it or be clobbered by it.

use std::sync::Arc;

use ficha_domain::{equipped_protection, Armor, CharacterId, StatusField, StatusId};

use crate::ports::outbound::StatusPort;

use super::StatusError;

/// What a sync did to the persisted status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArmorSync {
    Written { status: StatusId, total: i32 },
    /// The character has no status record; nothing was written.
    NoStatusRecord { total: i32 },
}

impl ArmorSync {
    pub fn total(&self) -> i32 {
        match self {
            Self::Written { total, .. } | Self::NoStatusRecord { total } => *total,
        }
    }
}

#[derive(Clone)]
pub struct ArmorAggregator {
    status: Arc<dyn StatusPort>,
}

impl ArmorAggregator {
    pub fn new(status: Arc<dyn StatusPort>) -> Self {
        Self { status }
    }

    /// Recompute the armor total from `pieces` and persist it.
    pub async fn sync(&self, owner: CharacterId, pieces: &[Armor]) -> Result<ArmorSync, StatusError> {
        let total = i32::try_from(equipped_protection(pieces)).unwrap_or(i32::MAX);

        let current = self
            .status
            .get_status(owner)
            .await
            .map_err(StatusError::Read)?;
        let Some(status_id) = current.and_then(|status| status.id) else {
            tracing::warn!(character_id = %owner, total, "No status record; armor total not persisted");
            return Ok(ArmorSync::NoStatusRecord { total });
        };

        self.status
            .patch_field(status_id, StatusField::Armor, total)
            .await
            .map_err(|source| StatusError::Write {
                field: StatusField::Armor,
                source,
            })?;

        tracing::info!(character_id = %owner, status_id = %status_id, total, "Armor total synced");
        Ok(ArmorSync::Written {
            status: status_id,
            total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::{ApiError, MockStatusPort};
    use crate::test_fixtures::{armor, status};
    use ficha_domain::BodySlot;
    use mockall::predicate::*;

    #[tokio::test]
    async fn patches_sum_of_equipped_protection() {
        let mut port = MockStatusPort::new();
        port.expect_get_status()
            .with(eq(CharacterId::new(1)))
            .times(1)
            .returning(|_| Ok(Some(status(9, 0))));
        port.expect_patch_field()
            .with(eq(StatusId::new(9)), eq(StatusField::Armor), eq(7))
            .times(1)
            .returning(|_, _, _| Ok(()));

        let aggregator = ArmorAggregator::new(Arc::new(port));
        let pieces = vec![
            armor(1, BodySlot::Chest, 5, true),
            armor(2, BodySlot::Head, 3, false),
            armor(3, BodySlot::Ring, 2, true),
        ];

        let sync = aggregator.sync(CharacterId::new(1), &pieces).await.expect("sync");
        assert_eq!(
            sync,
            ArmorSync::Written {
                status: StatusId::new(9),
                total: 7
            }
        );
    }

    #[tokio::test]
    async fn missing_status_record_skips_patch() {
        let mut port = MockStatusPort::new();
        port.expect_get_status().returning(|_| Ok(None));
        port.expect_patch_field().never();

        let aggregator = ArmorAggregator::new(Arc::new(port));
        let sync = aggregator
            .sync(CharacterId::new(1), &[armor(1, BodySlot::Chest, 4, true)])
            .await
            .expect("sync");
        assert_eq!(sync, ArmorSync::NoStatusRecord { total: 4 });
    }

    #[tokio::test]
    async fn patch_failure_is_reported() {
        let mut port = MockStatusPort::new();
        port.expect_get_status().returning(|_| Ok(Some(status(9, 0))));
        port.expect_patch_field()
            .returning(|_, _, _| Err(ApiError::network("connection reset")));

        let aggregator = ArmorAggregator::new(Arc::new(port));
        let err = aggregator
            .sync(CharacterId::new(1), &[])
            .await
            .expect_err("patch fails");
        assert!(matches!(
            err,
            StatusError::Write {
                field: StatusField::Armor,
                ..
            }
        ));
    }
}
