//! Weapon entity and its owned sub-records

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::ids::{CharacterId, CharacteristicId, PenaltyId, RequirementId, WeaponId};
use crate::value_objects::{
    parse_characteristics, parse_penalties, parse_requirements, DamageRange, Description,
    EntryName, ReloadKind, SizeClass, WeaponRange,
};

fn weapon_tag() -> String {
    "Armamento".to_string()
}

/// A weapon owned by a character.
///
/// `reload` and `rate_of_fire` are only meaningful for ranged weapons; the
/// backend stores them as absent for melee ones. `requirements`, `penalties`
/// and `characteristics` are relations the backend embeds on read and
/// refuses on write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    pub id: WeaponId,
    #[serde(rename = "tipo", default = "weapon_tag")]
    pub entry_type: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao", default)]
    pub description: String,
    #[serde(rename = "danoMin", default = "one")]
    pub damage_min: u32,
    #[serde(rename = "danoMax", default = "one")]
    pub damage_max: u32,
    #[serde(rename = "habilidade", default)]
    pub skill: String,
    #[serde(rename = "alcance", default)]
    pub range: WeaponRange,
    #[serde(rename = "recarga", default, skip_serializing_if = "Option::is_none")]
    pub reload: Option<ReloadKind>,
    #[serde(rename = "cadencia", default, skip_serializing_if = "Option::is_none")]
    pub rate_of_fire: Option<u32>,
    #[serde(rename = "carregador", default, skip_serializing_if = "Option::is_none")]
    pub magazine: Option<u32>,
    #[serde(rename = "tamanho", default)]
    pub size: SizeClass,
    #[serde(rename = "equipado", default)]
    pub equipped: bool,
    #[serde(rename = "personagemId")]
    pub character_id: CharacterId,
    #[serde(rename = "requerimento", default)]
    pub requirements: Vec<Requirement>,
    #[serde(rename = "penalidade", default)]
    pub penalties: Vec<Penalty>,
    #[serde(rename = "caracteristica", default)]
    pub characteristics: Vec<WeaponCharacteristic>,
}

fn one() -> u32 {
    1
}

impl Weapon {
    pub fn with_equipped(&self, equipped: bool) -> Self {
        Self {
            equipped,
            ..self.clone()
        }
    }

    pub fn is_ranged(&self) -> bool {
        self.reload.is_some()
    }
}

/// Minimum attribute score needed to wield a weapon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RequirementId>,
    #[serde(rename = "atributo")]
    pub attribute: String,
    #[serde(rename = "valor")]
    pub value: u32,
}

/// Signed modifier applied while wielding a weapon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Penalty {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PenaltyId>,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "valor")]
    pub value: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponCharacteristic {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CharacteristicId>,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao", default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRequirement {
    pub attribute: String,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPenalty {
    pub name: String,
    pub value: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCharacteristic {
    pub name: String,
    pub description: String,
}

/// Melee weapons have no reload or rate of fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeaponKind {
    Melee,
    Ranged {
        reload: ReloadKind,
        rate_of_fire: u32,
    },
}

/// Form data for a new weapon. New weapons start unequipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWeapon {
    pub name: EntryName,
    pub description: Description,
    pub damage: DamageRange,
    pub skill: String,
    pub range: WeaponRange,
    pub size: SizeClass,
    pub kind: WeaponKind,
    pub magazine: Option<NonZeroU32>,
    pub requirements: Vec<NewRequirement>,
    pub penalties: Vec<NewPenalty>,
    pub characteristics: Vec<NewCharacteristic>,
}

impl NewWeapon {
    pub fn new(name: EntryName, damage: DamageRange, kind: WeaponKind) -> Self {
        Self {
            name,
            description: Description::default(),
            damage,
            skill: String::new(),
            range: WeaponRange::default(),
            size: SizeClass::default(),
            kind,
            magazine: None,
            requirements: Vec::new(),
            penalties: Vec::new(),
            characteristics: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: Description) -> Self {
        self.description = description;
        self
    }

    pub fn with_skill(mut self, skill: impl Into<String>) -> Self {
        self.skill = skill.into();
        self
    }

    pub fn with_range(mut self, range: WeaponRange) -> Self {
        self.range = range;
        self
    }

    pub fn with_size(mut self, size: SizeClass) -> Self {
        self.size = size;
        self
    }

    /// Zero means "no magazine".
    pub fn with_magazine(mut self, magazine: u32) -> Self {
        self.magazine = NonZeroU32::new(magazine);
        self
    }

    /// Parse the three free-text sub-record fields of the creation form.
    pub fn with_trait_text(mut self, requirements: &str, penalties: &str, characteristics: &str) -> Self {
        self.requirements = parse_requirements(requirements);
        self.penalties = parse_penalties(penalties);
        self.characteristics = parse_characteristics(characteristics);
        self
    }
}
