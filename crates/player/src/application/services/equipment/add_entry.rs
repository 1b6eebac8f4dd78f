//! Creating new inventory entries.

use ficha_domain::{EntryRef, NewEntry, NewWeapon, Weapon, WeaponId};

use super::{EquipmentError, EquipmentManager, EquipmentState};

impl EquipmentManager {
    /// Create an entry for the character.
    ///
    /// Refused before any network call when the inventory is already at
    /// capacity. A new weapon's parsed requirements, penalties and
    /// characteristics are posted one by one afterwards.
    pub async fn add_entry(&self, entry: NewEntry) -> Result<EntryRef, EquipmentError> {
        let mut state = self.state.lock().await;

        let capacity = state.capacity();
        if capacity.is_full() {
            tracing::warn!(
                character_id = %self.character_id,
                kind = %entry.kind(),
                capacity = %capacity,
                "Inventory full, entry not added"
            );
            return Err(EquipmentError::InventoryFull {
                used: capacity.used(),
                total: capacity.total(),
            });
        }

        let created = match &entry {
            NewEntry::Item(form) => {
                let item = self.inventory.create_item(self.character_id, form).await?;
                let id = EntryRef::Item(item.id);
                state.items.push(item);
                id
            }
            NewEntry::Armor(form) => {
                let piece = self.inventory.create_armor(self.character_id, form).await?;
                let id = EntryRef::Armor(piece.id);
                state.armor.push(piece);
                id
            }
            NewEntry::Weapon(form) => {
                let weapon = self.inventory.create_weapon(self.character_id, form).await?;
                let id = EntryRef::Weapon(weapon.id);
                self.attach_weapon_traits(weapon.id, form).await;
                self.refresh_weapons(&mut state, weapon).await;
                id
            }
        };

        tracing::info!(
            character_id = %self.character_id,
            entry = %created,
            name = %entry.name(),
            "Inventory entry created"
        );
        Ok(created)
    }

    /// Sub-record failures are logged; the weapon itself already exists.
    async fn attach_weapon_traits(&self, weapon: WeaponId, form: &NewWeapon) {
        for requirement in &form.requirements {
            if let Err(e) = self.inventory.add_requirement(weapon, requirement).await {
                tracing::error!(weapon_id = %weapon, attribute = %requirement.attribute, error = %e, "Failed to save requirement");
            }
        }
        for penalty in &form.penalties {
            if let Err(e) = self.inventory.add_penalty(weapon, penalty).await {
                tracing::error!(weapon_id = %weapon, penalty = %penalty.name, error = %e, "Failed to save penalty");
            }
        }
        for characteristic in &form.characteristics {
            if let Err(e) = self.inventory.add_characteristic(weapon, characteristic).await {
                tracing::error!(weapon_id = %weapon, characteristic = %characteristic.name, error = %e, "Failed to save characteristic");
            }
        }
    }

    /// Re-read the weapon list so the new weapon carries its sub-records.
    async fn refresh_weapons(&self, state: &mut EquipmentState, created: Weapon) {
        match self.inventory.list_weapons(self.character_id).await {
            Ok(weapons) => state.weapons = weapons,
            Err(e) => {
                tracing::warn!(character_id = %self.character_id, error = %e, "Weapon refetch failed, keeping created record");
                state.weapons.push(created);
            }
        }
    }
}
