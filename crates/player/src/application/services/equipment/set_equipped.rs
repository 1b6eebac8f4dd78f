//! Equip and unequip of the selected armor piece or weapon.

use ficha_domain::{Armor, ArmorId, EntryRef, EquipOutcome, Weapon, WeaponId};

use crate::application::services::ArmorSync;

use super::saga::Saga;
use super::{EquipmentError, EquipmentManager, EquipmentState};

/// What a successful equip action changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquipReport {
    pub entry: EntryRef,
    pub equipped: bool,
    /// Pieces unequipped because they held the same body slot.
    pub displaced: Vec<EntryRef>,
    /// Set for armor only; weapons have no persisted derived stat.
    pub armor: Option<ArmorSync>,
}

impl EquipmentManager {
    /// Equip or unequip the selected entry.
    pub async fn set_equipped(&self, equip: bool) -> Result<EquipReport, EquipmentError> {
        let mut state = self.state.lock().await;
        let entry = state.selected.ok_or(EquipmentError::NothingSelected)?;
        self.apply_equip(&mut state, entry, equip).await
    }

    /// Select `entry` and equip or unequip it in one locked step.
    pub async fn equip_entry(&self, entry: EntryRef, equip: bool) -> Result<EquipReport, EquipmentError> {
        let mut state = self.state.lock().await;
        if !state.contains(entry) {
            return Err(EquipmentError::EntryNotFound(entry));
        }
        state.selected = Some(entry);
        self.apply_equip(&mut state, entry, equip).await
    }

    async fn apply_equip(
        &self,
        state: &mut EquipmentState,
        entry: EntryRef,
        equip: bool,
    ) -> Result<EquipReport, EquipmentError> {
        let result = match entry {
            EntryRef::Item(_) => Err(EquipmentError::NotEquippable(entry)),
            EntryRef::Armor(id) => self.equip_armor(state, id, equip).await,
            EntryRef::Weapon(id) => self.equip_weapon(state, id, equip).await,
        };
        if let Err(e) = &result {
            if e.is_policy_rejection() {
                tracing::warn!(character_id = %self.character_id, %entry, equip, reason = %e, "Equip rejected");
            } else {
                tracing::error!(character_id = %self.character_id, %entry, equip, error = %e, "Equip failed");
            }
        }
        result
    }

    async fn equip_armor(
        &self,
        state: &mut EquipmentState,
        id: ArmorId,
        equip: bool,
    ) -> Result<EquipReport, EquipmentError> {
        let entry = EntryRef::Armor(id);
        let current = state
            .find_armor(id)
            .cloned()
            .ok_or(EquipmentError::EntryNotFound(entry))?;

        let mut loadout = state.loadout();
        let displaced: Vec<Armor> = if equip {
            // Stored data may already hold more pieces than the cap allows.
            // A piece flagged equipped is never refused.
            let outcome = if current.equipped {
                EquipOutcome::AlreadyEquipped
            } else {
                loadout.try_equip_armor(id, current.slot)?
            };
            tracing::debug!(%entry, ?outcome, "Armor equip resolved");
            // Besides the loadout's occupant, sweep any stale duplicates the
            // stored data may hold for the same single slot.
            state
                .armor
                .iter()
                .filter(|piece| {
                    piece.id != id
                        && piece.equipped
                        && !current.slot.is_counted()
                        && piece.slot == current.slot
                })
                .cloned()
                .collect()
        } else {
            loadout.unequip_armor(id);
            Vec::new()
        };

        let mut saga = Saga::new();
        let mut updated = state.armor.clone();

        for piece in &displaced {
            match self.inventory.update_armor(&piece.with_equipped(false)).await {
                Ok(stored) => {
                    saga.record(piece.clone());
                    replace_armor(&mut updated, merge_armor(piece, stored));
                }
                Err(e) => return Err(saga.unwind(&*self.inventory, e.into()).await),
            }
        }

        match self.inventory.update_armor(&current.with_equipped(equip)).await {
            Ok(stored) => {
                saga.record(current.clone());
                replace_armor(&mut updated, merge_armor(&current, stored));
            }
            Err(e) => return Err(saga.unwind(&*self.inventory, e.into()).await),
        }

        let sync = match self.armor_aggregator.sync(self.character_id, &updated).await {
            Ok(sync) => sync,
            Err(e) => return Err(saga.unwind(&*self.inventory, e.into()).await),
        };

        state.armor = updated;
        state.character.status.armor = sync.total();

        let displaced: Vec<EntryRef> = displaced.iter().map(|p| EntryRef::Armor(p.id)).collect();
        tracing::info!(
            character_id = %self.character_id,
            %entry,
            equip,
            displaced = ?displaced,
            armor_total = sync.total(),
            "Armor equip state saved"
        );

        Ok(EquipReport {
            entry,
            equipped: equip,
            displaced,
            armor: Some(sync),
        })
    }

    async fn equip_weapon(
        &self,
        state: &mut EquipmentState,
        id: WeaponId,
        equip: bool,
    ) -> Result<EquipReport, EquipmentError> {
        let entry = EntryRef::Weapon(id);
        let current = state
            .find_weapon(id)
            .cloned()
            .ok_or(EquipmentError::EntryNotFound(entry))?;

        let mut loadout = state.loadout();
        if equip {
            let outcome = if current.equipped {
                EquipOutcome::AlreadyEquipped
            } else {
                loadout.try_equip_weapon(id)?
            };
            tracing::debug!(%entry, ?outcome, "Weapon equip resolved");
        } else {
            loadout.unequip_weapon(id);
        }

        let stored = self
            .inventory
            .update_weapon(&current.with_equipped(equip))
            .await?;
        state.replace_weapon(merge_weapon(&current, stored));

        tracing::info!(character_id = %self.character_id, %entry, equip, "Weapon equip state saved");
        Ok(EquipReport {
            entry,
            equipped: equip,
            displaced: Vec::new(),
            armor: None,
        })
    }
}

fn replace_armor(pieces: &mut [Armor], piece: Armor) {
    if let Some(slot) = pieces.iter_mut().find(|p| p.id == piece.id) {
        *slot = piece;
    }
}

/// Server record, with local characteristics kept if the response left them out.
fn merge_armor(local: &Armor, mut stored: Armor) -> Armor {
    if stored.characteristics.is_empty() {
        stored.characteristics = local.characteristics.clone();
    }
    stored
}

/// Weapon updates are sent without nested relations, so responses usually
/// come back without them too.
fn merge_weapon(local: &Weapon, mut stored: Weapon) -> Weapon {
    if stored.requirements.is_empty() {
        stored.requirements = local.requirements.clone();
    }
    if stored.penalties.is_empty() {
        stored.penalties = local.penalties.clone();
    }
    if stored.characteristics.is_empty() {
        stored.characteristics = local.characteristics.clone();
    }
    stored
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::super::test_support::manager;
    use super::*;
    use crate::ports::outbound::{ApiError, MockInventoryPort, MockStatusPort};
    use crate::test_fixtures::{armor, item, status, weapon};
    use ficha_domain::{BodySlot, ItemId, Penalty, StatusField, StatusId};
    use mockall::predicate::*;
    use mockall::Sequence;

    fn armor_put(
        inventory: &mut MockInventoryPort,
        seq: &mut Sequence,
        id: i64,
        equipped: bool,
        result: Result<(), ApiError>,
    ) {
        inventory
            .expect_update_armor()
            .withf(move |piece| piece.id == ArmorId::new(id) && piece.equipped == equipped)
            .times(1)
            .in_sequence(seq)
            .returning(move |piece| result.clone().map(|()| piece.clone()));
    }

    fn status_port(patched_total: Option<i32>) -> MockStatusPort {
        let mut port = MockStatusPort::new();
        match patched_total {
            Some(total) => {
                port.expect_get_status().returning(|_| Ok(Some(status(9, 0))));
                port.expect_patch_field()
                    .with(eq(StatusId::new(9)), eq(StatusField::Armor), eq(total))
                    .times(1)
                    .returning(|_, _, _| Ok(()));
            }
            None => {
                port.expect_get_status().never();
                port.expect_patch_field().never();
            }
        }
        port
    }

    fn chest_pair() -> Vec<Armor> {
        vec![
            armor(10, BodySlot::Chest, 4, false),
            armor(11, BodySlot::Chest, 3, true),
            armor(12, BodySlot::Head, 2, true),
        ]
    }

    #[tokio::test]
    async fn equipping_chest_piece_displaces_the_worn_one() {
        let mut inventory = MockInventoryPort::new();
        let mut seq = Sequence::new();
        armor_put(&mut inventory, &mut seq, 11, false, Ok(()));
        armor_put(&mut inventory, &mut seq, 10, true, Ok(()));

        let manager = manager(4, vec![], chest_pair(), vec![], inventory, status_port(Some(6))).await;
        manager.select(EntryRef::Armor(ArmorId::new(10))).await.expect("select");

        let report = manager.set_equipped(true).await.expect("equip");
        assert_eq!(report.displaced, vec![EntryRef::Armor(ArmorId::new(11))]);
        assert_eq!(report.armor.map(|sync| sync.total()), Some(6));

        let state = manager.snapshot().await;
        assert!(state.find_armor(ArmorId::new(10)).expect("x").equipped);
        assert!(!state.find_armor(ArmorId::new(11)).expect("y").equipped);
        assert_eq!(state.character.status.armor, 6);
    }

    #[tokio::test]
    async fn third_ring_is_refused_without_network_calls() {
        let mut inventory = MockInventoryPort::new();
        inventory.expect_update_armor().never();
        let rings = vec![
            armor(1, BodySlot::Ring, 1, true),
            armor(2, BodySlot::Ring, 1, true),
            armor(3, BodySlot::Ring, 1, false),
        ];
        let manager = manager(4, vec![], rings, vec![], inventory, status_port(None)).await;
        let before = manager.snapshot().await;

        let err = manager
            .equip_entry(EntryRef::Armor(ArmorId::new(3)), true)
            .await
            .expect_err("ring cap");
        assert_eq!(err.to_string(), "max 2 rings");

        let after = manager.snapshot().await;
        assert_eq!(after.armor, before.armor);
    }

    #[tokio::test]
    async fn third_weapon_is_refused_without_network_calls() {
        let mut inventory = MockInventoryPort::new();
        inventory.expect_update_weapon().never();
        let weapons = vec![weapon(1, true), weapon(2, true), weapon(3, false)];
        let manager = manager(4, vec![], vec![], weapons.clone(), inventory, status_port(None)).await;

        let err = manager
            .equip_entry(EntryRef::Weapon(WeaponId::new(3)), true)
            .await
            .expect_err("weapon cap");
        assert!(matches!(err, EquipmentError::CapacityExceeded(_)));
        assert_eq!(err.to_string(), "max 2 weapons");
        assert_eq!(manager.snapshot().await.weapons, weapons);
    }

    #[tokio::test]
    async fn worn_third_ring_can_be_re_equipped() {
        let mut inventory = MockInventoryPort::new();
        let mut seq = Sequence::new();
        armor_put(&mut inventory, &mut seq, 3, true, Ok(()));
        let rings = vec![
            armor(1, BodySlot::Ring, 1, true),
            armor(2, BodySlot::Ring, 1, true),
            armor(3, BodySlot::Ring, 1, true),
        ];
        let manager = manager(4, vec![], rings, vec![], inventory, status_port(Some(3))).await;

        let report = manager
            .equip_entry(EntryRef::Armor(ArmorId::new(3)), true)
            .await
            .expect("already worn");
        assert!(report.equipped);
        assert!(report.displaced.is_empty());
        assert_eq!(report.armor.map(|sync| sync.total()), Some(3));
    }

    #[tokio::test]
    async fn held_third_weapon_can_be_re_equipped() {
        let mut inventory = MockInventoryPort::new();
        inventory
            .expect_update_weapon()
            .withf(|w| w.id == WeaponId::new(3) && w.equipped)
            .times(1)
            .returning(|w| Ok(w.clone()));
        let weapons = vec![weapon(1, true), weapon(2, true), weapon(3, true)];
        let manager = manager(4, vec![], vec![], weapons, inventory, status_port(None)).await;

        let report = manager
            .equip_entry(EntryRef::Weapon(WeaponId::new(3)), true)
            .await
            .expect("already held");
        assert!(report.equipped);
        assert!(manager
            .snapshot()
            .await
            .find_weapon(WeaponId::new(3))
            .expect("weapon")
            .equipped);
    }

    #[tokio::test]
    async fn items_and_empty_selection_are_rejected() {
        let mut inventory = MockInventoryPort::new();
        inventory.expect_update_armor().never();
        inventory.expect_update_weapon().never();
        let manager = manager(4, vec![item(1)], vec![], vec![], inventory, status_port(None)).await;

        let err = manager.set_equipped(true).await.expect_err("nothing selected");
        assert!(matches!(err, EquipmentError::NothingSelected));

        manager.select(EntryRef::Item(ItemId::new(1))).await.expect("select");
        let err = manager.set_equipped(true).await.expect_err("item");
        assert!(matches!(err, EquipmentError::NotEquippable(EntryRef::Item(_))));
    }

    #[tokio::test]
    async fn failed_entry_write_restores_displaced_piece() {
        let mut inventory = MockInventoryPort::new();
        let mut seq = Sequence::new();
        armor_put(&mut inventory, &mut seq, 11, false, Ok(()));
        armor_put(
            &mut inventory,
            &mut seq,
            10,
            true,
            Err(ApiError::Rejected {
                status: 500,
                message: "erro interno".to_string(),
            }),
        );
        armor_put(&mut inventory, &mut seq, 11, true, Ok(()));

        let manager = manager(4, vec![], chest_pair(), vec![], inventory, status_port(None)).await;
        let before = manager.snapshot().await;

        let err = manager
            .equip_entry(EntryRef::Armor(ArmorId::new(10)), true)
            .await
            .expect_err("entry write fails");
        assert!(matches!(err, EquipmentError::Api(ApiError::Rejected { status: 500, .. })));
        assert_eq!(manager.snapshot().await.armor, before.armor);
    }

    #[tokio::test]
    async fn failed_undo_after_status_failure_reports_divergence() {
        let mut inventory = MockInventoryPort::new();
        let mut seq = Sequence::new();
        armor_put(&mut inventory, &mut seq, 11, false, Ok(()));
        armor_put(&mut inventory, &mut seq, 10, true, Ok(()));
        armor_put(
            &mut inventory,
            &mut seq,
            10,
            false,
            Err(ApiError::network("connection reset")),
        );
        armor_put(&mut inventory, &mut seq, 11, true, Ok(()));

        let mut statuses = MockStatusPort::new();
        statuses
            .expect_get_status()
            .returning(|_| Ok(Some(status(9, 3))));
        statuses
            .expect_patch_field()
            .returning(|_, _, _| Err(ApiError::network("timeout")));

        let manager = manager(4, vec![], chest_pair(), vec![], inventory, statuses).await;
        let before = manager.snapshot().await;

        let err = manager
            .equip_entry(EntryRef::Armor(ArmorId::new(10)), true)
            .await
            .expect_err("status fails");
        match err {
            EquipmentError::Diverged { unresolved, .. } => {
                assert_eq!(unresolved, vec![EntryRef::Armor(ArmorId::new(10))]);
            }
            other => panic!("expected divergence, got {other:?}"),
        }
        let after = manager.snapshot().await;
        assert_eq!(after.armor, before.armor);
        assert_eq!(after.character.status.armor, before.character.status.armor);
    }

    #[tokio::test]
    async fn re_equipping_is_written_again_and_resynced() {
        let mut inventory = MockInventoryPort::new();
        let mut seq = Sequence::new();
        armor_put(&mut inventory, &mut seq, 12, true, Ok(()));

        let manager = manager(4, vec![], chest_pair(), vec![], inventory, status_port(Some(5))).await;
        let report = manager
            .equip_entry(EntryRef::Armor(ArmorId::new(12)), true)
            .await
            .expect("idempotent equip");
        assert!(report.displaced.is_empty());
        assert_eq!(report.armor.map(|sync| sync.total()), Some(5));
    }

    #[tokio::test]
    async fn unequipping_armor_lowers_the_total() {
        let mut inventory = MockInventoryPort::new();
        let mut seq = Sequence::new();
        armor_put(&mut inventory, &mut seq, 11, false, Ok(()));

        let manager = manager(4, vec![], chest_pair(), vec![], inventory, status_port(Some(2))).await;
        manager
            .equip_entry(EntryRef::Armor(ArmorId::new(11)), false)
            .await
            .expect("unequip");
        assert_eq!(manager.snapshot().await.character.status.armor, 2);
    }

    #[tokio::test]
    async fn weapon_response_without_relations_keeps_local_ones() {
        let mut sword = weapon(1, false);
        sword.penalties = vec![Penalty {
            id: None,
            name: "Furtividade".to_string(),
            value: -2,
        }];

        let mut inventory = MockInventoryPort::new();
        inventory
            .expect_update_weapon()
            .withf(|w| w.id == WeaponId::new(1) && w.equipped)
            .times(1)
            .returning(|w| {
                let mut stored = w.clone();
                stored.penalties.clear();
                Ok(stored)
            });

        let manager = manager(4, vec![], vec![], vec![sword], inventory, status_port(None)).await;
        manager
            .equip_entry(EntryRef::Weapon(WeaponId::new(1)), true)
            .await
            .expect("equip weapon");

        let state = manager.snapshot().await;
        let held = state.find_weapon(WeaponId::new(1)).expect("weapon");
        assert!(held.equipped);
        assert_eq!(held.penalties.len(), 1);
        assert_eq!(state.hands().right.weapon_name.as_deref(), Some("Arma 1"));
    }

    #[tokio::test]
    async fn concurrent_equips_cannot_both_take_the_last_hand() {
        let mut inventory = MockInventoryPort::new();
        inventory
            .expect_update_weapon()
            .times(1)
            .returning(|w| Ok(w.clone()));
        let weapons = vec![weapon(1, true), weapon(2, false), weapon(3, false)];
        let manager = Arc::new(manager(4, vec![], vec![], weapons, inventory, status_port(None)).await);

        let first = {
            let manager = Arc::clone(&manager);
            tokio::spawn(async move { manager.equip_entry(EntryRef::Weapon(WeaponId::new(2)), true).await })
        };
        let second = {
            let manager = Arc::clone(&manager);
            tokio::spawn(async move { manager.equip_entry(EntryRef::Weapon(WeaponId::new(3)), true).await })
        };
        let (first, second) = (first.await.expect("join"), second.await.expect("join"));

        assert_eq!([first.is_ok(), second.is_ok()].iter().filter(|ok| **ok).count(), 1);
        assert_eq!(manager.loadout().await.weapons.len(), 2);
    }
}
