//! Vitals Aggregator - sole writer of `vida`, `mana` and `sanidade`
//!
//! Each of these is five times one attribute (constitution, mystic and
//! will respectively). Changing an attribute saves the attribute record and
//! then patches only the status field that attribute drives.

use std::sync::Arc;

use ficha_domain::{AttributeChange, AttributeKind, Attributes, CharacterId, StatusField};

use crate::ports::outbound::{AttributesPort, StatusPort};

use super::StatusError;

/// A vital status field written as a side effect of an attribute change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VitalWrite {
    pub field: StatusField,
    pub value: i32,
    /// False when the character has no status record to write to.
    pub persisted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeUpdate {
    pub attributes: Attributes,
    pub vital: Option<VitalWrite>,
}

#[derive(Clone)]
pub struct VitalsAggregator {
    attributes: Arc<dyn AttributesPort>,
    status: Arc<dyn StatusPort>,
}

impl VitalsAggregator {
    pub fn new(attributes: Arc<dyn AttributesPort>, status: Arc<dyn StatusPort>) -> Self {
        Self { attributes, status }
    }

    /// Apply `change` to one attribute, clamped to `[0, 20]`, and persist it
    /// together with the vital field it drives.
    pub async fn adjust(
        &self,
        owner: CharacterId,
        current: &Attributes,
        kind: AttributeKind,
        change: AttributeChange,
    ) -> Result<AttributeUpdate, StatusError> {
        let score = current.get(kind).apply(change);
        let mut next = current.clone();
        next.set(kind, score);

        let saved = self
            .attributes
            .save_attributes(owner, &next)
            .await
            .map_err(StatusError::Attributes)?;
        // The backend only echoes what it stored; keep the local scores and
        // pick up a newly assigned id.
        next.id = saved.id.or(next.id);
        tracing::info!(character_id = %owner, attribute = %kind, score = %score, "Attribute saved");

        let vital = match (kind.derived_status_field(), kind.derived_status_value(score)) {
            (Some(field), Some(value)) => Some(self.write_vital(owner, field, value).await?),
            _ => None,
        };

        Ok(AttributeUpdate {
            attributes: next,
            vital,
        })
    }

    async fn write_vital(
        &self,
        owner: CharacterId,
        field: StatusField,
        value: i32,
    ) -> Result<VitalWrite, StatusError> {
        let current = self
            .status
            .get_status(owner)
            .await
            .map_err(StatusError::Read)?;
        let Some(status_id) = current.and_then(|status| status.id) else {
            tracing::warn!(character_id = %owner, %field, value, "No status record; vital not persisted");
            return Ok(VitalWrite {
                field,
                value,
                persisted: false,
            });
        };

        self.status
            .patch_field(status_id, field, value)
            .await
            .map_err(|source| StatusError::Write { field, source })?;

        tracing::info!(character_id = %owner, %field, value, "Vital synced");
        Ok(VitalWrite {
            field,
            value,
            persisted: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::{MockAttributesPort, MockStatusPort};
    use crate::test_fixtures::status;
    use ficha_domain::{AttributeScore, AttributesId, StatusId};
    use mockall::predicate::*;

    fn attributes(constitution: i64, dexterity: i64) -> Attributes {
        Attributes {
            id: Some(AttributesId::new(4)),
            constitution: AttributeScore::clamped(constitution),
            dexterity: AttributeScore::clamped(dexterity),
            ..Attributes::default()
        }
    }

    #[tokio::test]
    async fn constitution_change_patches_health_only() {
        let mut attribute_port = MockAttributesPort::new();
        attribute_port
            .expect_save_attributes()
            .withf(|owner, attrs| *owner == CharacterId::new(1) && attrs.constitution.value() == 20)
            .times(1)
            .returning(|_, attrs| Ok(attrs.clone()));

        let mut status_port = MockStatusPort::new();
        status_port
            .expect_get_status()
            .returning(|_| Ok(Some(status(9, 3))));
        status_port
            .expect_patch_field()
            .with(eq(StatusId::new(9)), eq(StatusField::Health), eq(100))
            .times(1)
            .returning(|_, _, _| Ok(()));

        let aggregator = VitalsAggregator::new(Arc::new(attribute_port), Arc::new(status_port));
        let update = aggregator
            .adjust(
                CharacterId::new(1),
                &attributes(18, 5),
                AttributeKind::Constitution,
                AttributeChange::Adjust(7),
            )
            .await
            .expect("adjust");

        assert_eq!(update.attributes.constitution.value(), 20);
        assert_eq!(
            update.vital,
            Some(VitalWrite {
                field: StatusField::Health,
                value: 100,
                persisted: true
            })
        );
    }

    #[tokio::test]
    async fn non_vital_attribute_touches_no_status() {
        let mut attribute_port = MockAttributesPort::new();
        attribute_port
            .expect_save_attributes()
            .times(1)
            .returning(|_, attrs| Ok(attrs.clone()));
        let mut status_port = MockStatusPort::new();
        status_port.expect_get_status().never();
        status_port.expect_patch_field().never();

        let aggregator = VitalsAggregator::new(Arc::new(attribute_port), Arc::new(status_port));
        let update = aggregator
            .adjust(
                CharacterId::new(1),
                &attributes(10, 5),
                AttributeKind::Dexterity,
                AttributeChange::Set(-4),
            )
            .await
            .expect("adjust");

        assert_eq!(update.attributes.dexterity.value(), 0);
        assert_eq!(update.vital, None);
    }

    #[tokio::test]
    async fn new_attribute_record_id_is_kept() {
        let mut attribute_port = MockAttributesPort::new();
        attribute_port.expect_save_attributes().returning(|_, attrs| {
            let mut stored = attrs.clone();
            stored.id = Some(AttributesId::new(77));
            Ok(stored)
        });
        let mut status_port = MockStatusPort::new();
        status_port.expect_get_status().returning(|_| Ok(None));
        status_port.expect_patch_field().never();

        let aggregator = VitalsAggregator::new(Arc::new(attribute_port), Arc::new(status_port));
        let update = aggregator
            .adjust(
                CharacterId::new(1),
                &Attributes::default(),
                AttributeKind::Will,
                AttributeChange::Set(3),
            )
            .await
            .expect("adjust");

        assert_eq!(update.attributes.id, Some(AttributesId::new(77)));
        assert_eq!(
            update.vital,
            Some(VitalWrite {
                field: StatusField::Sanity,
                value: 15,
                persisted: false
            })
        );
    }
}
