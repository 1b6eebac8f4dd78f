//! Typed sheet ports over the raw JSON transport.
//!
//! `SheetApi` owns the backend's URL layout and request shapes. Two
//! shapes matter beyond plain serialization:
//!
//! - weapon updates never carry the embedded `requerimento`, `penalidade`
//!   and `caracteristica` relations, and omit `carregador`, `recarga` and
//!   `cadencia` when absent or zero (the backend rejects null and zero);
//! - the one-to-one `status` collection is read through a filtered list.

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};

use ficha_domain::{
    Armor, ArmorCharacteristic, Attributes, BodySlot, Character, CharacterId, CosmeticLoadout,
    CosmeticSlot, EntryRef, Item, NewArmor, NewCharacteristic, NewItem, NewPenalty,
    NewRequirement, NewWeapon, ReloadKind, SizeClass, Skills, Status, StatusField, StatusId,
    Weapon, WeaponId, WeaponKind, WeaponRange,
};

use crate::ports::outbound::{
    ApiError, AttributesPort, CharacterPort, CosmeticPort, InventoryPort, RawApiPort, SkillsPort,
    StatusPort,
};

#[derive(Clone)]
pub struct SheetApi {
    raw: Arc<dyn RawApiPort>,
}

impl SheetApi {
    pub fn new(raw: Arc<dyn RawApiPort>) -> Self {
        Self { raw }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let value = self.raw.get_json(path).await?;
        decode(value)
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let value = self.raw.post_json(path, &encode(body)?).await?;
        decode(value)
    }

    async fn post_no_response<B: Serialize + Sync>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        self.raw.post_json(path, &encode(body)?).await.map(|_| ())
    }

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let value = self.raw.put_json(path, &encode(body)?).await?;
        decode(value)
    }
}

fn encode<B: Serialize>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Serialize(e.to_string()))
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::parse(e.to_string()))
}

fn collection(entry: EntryRef) -> &'static str {
    match entry {
        EntryRef::Item(_) => "itens",
        EntryRef::Armor(_) => "armaduras",
        EntryRef::Weapon(_) => "armamentos",
    }
}

// ============================================================================
// Request bodies
// ============================================================================

#[derive(Serialize)]
struct ItemBody<'a> {
    tipo: &'static str,
    nome: &'a str,
    descricao: &'a str,
    quantidade: u32,
    tamanho: SizeClass,
    #[serde(rename = "personagemId")]
    owner: CharacterId,
}

impl<'a> ItemBody<'a> {
    fn new(owner: CharacterId, item: &'a NewItem) -> Self {
        Self {
            tipo: "Item",
            nome: item.name.as_str(),
            descricao: item.description.as_str(),
            quantidade: item.quantity.get(),
            tamanho: item.size,
            owner,
        }
    }
}

#[derive(Serialize)]
struct ArmorBody<'a> {
    tipo: &'static str,
    nome: &'a str,
    descricao: &'a str,
    protecao: u32,
    tamanho: SizeClass,
    peca: BodySlot,
    equipado: bool,
    #[serde(rename = "personagemId")]
    owner: CharacterId,
    caracteristicas: Vec<ArmorCharacteristic>,
}

impl<'a> ArmorBody<'a> {
    fn new(owner: CharacterId, armor: &'a NewArmor) -> Self {
        Self {
            tipo: "Armadura",
            nome: armor.name.as_str(),
            descricao: armor.description.as_str(),
            protecao: armor.protection,
            tamanho: armor.size,
            peca: armor.slot,
            equipado: false,
            owner,
            caracteristicas: armor.characteristics(),
        }
    }
}

/// Weapon fields the backend accepts on write.
#[derive(Debug, Serialize)]
struct WeaponBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<WeaponId>,
    tipo: &'static str,
    nome: &'a str,
    descricao: &'a str,
    #[serde(rename = "danoMin")]
    dano_min: u32,
    #[serde(rename = "danoMax")]
    dano_max: u32,
    habilidade: &'a str,
    alcance: WeaponRange,
    tamanho: SizeClass,
    equipado: bool,
    #[serde(rename = "personagemId")]
    owner: CharacterId,
    #[serde(skip_serializing_if = "Option::is_none")]
    recarga: Option<ReloadKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cadencia: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    carregador: Option<u32>,
}

impl<'a> WeaponBody<'a> {
    fn for_update(weapon: &'a Weapon) -> Self {
        Self {
            id: Some(weapon.id),
            tipo: "Armamento",
            nome: &weapon.name,
            descricao: &weapon.description,
            dano_min: weapon.damage_min,
            dano_max: weapon.damage_max,
            habilidade: &weapon.skill,
            alcance: weapon.range,
            tamanho: weapon.size,
            equipado: weapon.equipped,
            owner: weapon.character_id,
            recarga: weapon.reload,
            cadencia: weapon.rate_of_fire.filter(|rate| *rate > 0),
            carregador: weapon.magazine.filter(|count| *count > 0),
        }
    }

    fn for_create(owner: CharacterId, weapon: &'a NewWeapon) -> Self {
        let (recarga, cadencia) = match weapon.kind {
            WeaponKind::Melee => (None, None),
            WeaponKind::Ranged {
                reload,
                rate_of_fire,
            } => (Some(reload), Some(rate_of_fire).filter(|rate| *rate > 0)),
        };
        Self {
            id: None,
            tipo: "Armamento",
            nome: weapon.name.as_str(),
            descricao: weapon.description.as_str(),
            dano_min: weapon.damage.min(),
            dano_max: weapon.damage.max(),
            habilidade: &weapon.skill,
            alcance: weapon.range,
            tamanho: weapon.size,
            equipado: false,
            owner,
            recarga,
            cadencia,
            carregador: weapon.magazine.map(|count| count.get()),
        }
    }
}

#[derive(Serialize)]
struct AttributesBody<'a> {
    #[serde(flatten)]
    attributes: &'a Attributes,
    #[serde(rename = "personagemId")]
    owner: CharacterId,
}

#[derive(Serialize)]
struct SkillsBody<'a> {
    #[serde(flatten)]
    skills: &'a Skills,
    #[serde(rename = "personagemId")]
    owner: CharacterId,
}

// ============================================================================
// Port implementations
// ============================================================================

#[async_trait]
impl CharacterPort for SheetApi {
    async fn get_character(&self, id: CharacterId) -> Result<Character, ApiError> {
        self.get(&format!("/personagens/{}", id)).await
    }
}

#[async_trait]
impl InventoryPort for SheetApi {
    async fn list_items(&self, owner: CharacterId) -> Result<Vec<Item>, ApiError> {
        self.get(&format!("/itens?personagemId={}", owner)).await
    }

    async fn list_armor(&self, owner: CharacterId) -> Result<Vec<Armor>, ApiError> {
        self.get(&format!("/armaduras?personagemId={}", owner)).await
    }

    async fn list_weapons(&self, owner: CharacterId) -> Result<Vec<Weapon>, ApiError> {
        self.get(&format!("/armamentos?personagemId={}", owner)).await
    }

    async fn create_item(&self, owner: CharacterId, item: &NewItem) -> Result<Item, ApiError> {
        self.post("/itens", &ItemBody::new(owner, item)).await
    }

    async fn create_armor(&self, owner: CharacterId, armor: &NewArmor) -> Result<Armor, ApiError> {
        self.post("/armaduras", &ArmorBody::new(owner, armor)).await
    }

    async fn create_weapon(
        &self,
        owner: CharacterId,
        weapon: &NewWeapon,
    ) -> Result<Weapon, ApiError> {
        self.post("/armamentos", &WeaponBody::for_create(owner, weapon))
            .await
    }

    async fn update_armor(&self, armor: &Armor) -> Result<Armor, ApiError> {
        self.put(&format!("/armaduras/{}", armor.id), armor).await
    }

    async fn update_weapon(&self, weapon: &Weapon) -> Result<Weapon, ApiError> {
        self.put(
            &format!("/armamentos/{}", weapon.id),
            &WeaponBody::for_update(weapon),
        )
        .await
    }

    async fn delete_entry(&self, entry: EntryRef) -> Result<(), ApiError> {
        self.raw
            .delete(&format!("/{}/{}", collection(entry), entry.raw_id()))
            .await
    }

    async fn add_requirement(
        &self,
        weapon: WeaponId,
        requirement: &NewRequirement,
    ) -> Result<(), ApiError> {
        let body = json!({
            "atributo": requirement.attribute,
            "valor": requirement.value,
            "armamentoId": weapon,
        });
        self.post_no_response("/requerimentos", &body).await
    }

    async fn add_penalty(&self, weapon: WeaponId, penalty: &NewPenalty) -> Result<(), ApiError> {
        let body = json!({
            "nome": penalty.name,
            "valor": penalty.value,
            "armamentoId": weapon,
        });
        self.post_no_response("/penalidades", &body).await
    }

    async fn add_characteristic(
        &self,
        weapon: WeaponId,
        characteristic: &NewCharacteristic,
    ) -> Result<(), ApiError> {
        let body = json!({
            "nome": characteristic.name,
            "descricao": characteristic.description,
            "armamentoId": weapon,
        });
        self.post_no_response("/caracteristicas", &body).await
    }
}

#[async_trait]
impl StatusPort for SheetApi {
    async fn get_status(&self, owner: CharacterId) -> Result<Option<Status>, ApiError> {
        let records: Vec<Status> = self.get(&format!("/status?personagemId={}", owner)).await?;
        Ok(records.into_iter().next())
    }

    async fn patch_field(
        &self,
        status: StatusId,
        field: StatusField,
        value: i32,
    ) -> Result<(), ApiError> {
        let mut body = serde_json::Map::new();
        body.insert(field.wire_name().to_string(), Value::from(value));
        self.raw
            .patch_json(&format!("/status/{}", status), &Value::Object(body))
            .await
            .map(|_| ())
    }
}

#[async_trait]
impl AttributesPort for SheetApi {
    async fn save_attributes(
        &self,
        owner: CharacterId,
        attributes: &Attributes,
    ) -> Result<Attributes, ApiError> {
        let body = AttributesBody { attributes, owner };
        match attributes.id {
            Some(id) => self.put(&format!("/atributos/{}", id), &body).await,
            None => self.post("/atributos", &body).await,
        }
    }
}

#[async_trait]
impl SkillsPort for SheetApi {
    async fn save_skills(&self, owner: CharacterId, skills: &Skills) -> Result<Skills, ApiError> {
        let body = SkillsBody { skills, owner };
        match skills.id {
            Some(id) => self.put(&format!("/pericias/{}", id), &body).await,
            None => self.post("/pericias", &body).await,
        }
    }
}

#[async_trait]
impl CosmeticPort for SheetApi {
    async fn get_loadout(&self, owner: CharacterId) -> Result<Option<CosmeticLoadout>, ApiError> {
        match self
            .get::<Option<CosmeticLoadout>>(&format!("/equipamentocosmeticos/{}", owner))
            .await
        {
            Ok(loadout) => Ok(loadout),
            Err(ApiError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn set_slot(
        &self,
        owner: CharacterId,
        slot: CosmeticSlot,
        image: Option<String>,
    ) -> Result<(), ApiError> {
        let body = json!({ "slot": slot.wire_name(), "caminhoImagem": image });
        self.raw
            .patch_json(&format!("/equipamentocosmeticos/{}", owner), &body)
            .await
            .map(|_| ())
    }
}
