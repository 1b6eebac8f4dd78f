//! Character aggregate with its one-to-one attribute, skill and status records

use serde::{Deserialize, Deserializer, Serialize};

use crate::ids::{AttributesId, CharacterId, SkillsId, StatusId};
use crate::value_objects::{AttributeKind, AttributeScore, SkillKind};

/// A player's in-game persona.
///
/// The backend returns the one-to-one `atributos`, `pericias` and `status`
/// relations as arrays; the first element is used and a zeroed record stands in when the
/// array is empty or missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "raca", default)]
    pub race: String,
    #[serde(rename = "idade", default)]
    pub age: u32,
    #[serde(rename = "ranque", default)]
    pub rank: i32,
    #[serde(rename = "experiencia", default)]
    pub experience: i64,
    #[serde(rename = "altura", default)]
    pub height: String,
    #[serde(rename = "movimento", default)]
    pub movement: String,
    #[serde(rename = "foto", default)]
    pub portrait: String,
    #[serde(rename = "afinidade", default)]
    pub affinity: String,
    #[serde(rename = "caracteristicas", default)]
    pub traits: Option<String>,
    #[serde(default)]
    pub background: Option<String>,
    #[serde(rename = "atributos", default, deserialize_with = "first_or_default")]
    pub attributes: Attributes,
    #[serde(rename = "pericias", default, deserialize_with = "first_or_default")]
    pub skills: Skills,
    #[serde(default, deserialize_with = "first_or_default")]
    pub status: Status,
}

impl Character {
    pub fn strength(&self) -> AttributeScore {
        self.attributes.strength
    }
}

/// Accepts `[record, ...]`, a bare `record`, or `null`.
fn first_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany<T> {
        Many(Vec<T>),
        One(T),
    }

    Ok(match Option::<OneOrMany<T>>::deserialize(deserializer)? {
        Some(OneOrMany::Many(records)) => records.into_iter().next().unwrap_or_default(),
        Some(OneOrMany::One(record)) => record,
        None => T::default(),
    })
}

/// The ten attribute scores, each within `[0, 20]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<AttributesId>,
    #[serde(rename = "forca", default)]
    pub strength: AttributeScore,
    #[serde(rename = "destreza", default)]
    pub dexterity: AttributeScore,
    #[serde(rename = "constituicao", default)]
    pub constitution: AttributeScore,
    #[serde(rename = "mistico", default)]
    pub mystic: AttributeScore,
    #[serde(rename = "vontade", default)]
    pub will: AttributeScore,
    #[serde(rename = "presenca", default)]
    pub presence: AttributeScore,
    #[serde(rename = "curiosidade", default)]
    pub curiosity: AttributeScore,
    #[serde(rename = "razao", default)]
    pub reason: AttributeScore,
    #[serde(rename = "percepcao", default)]
    pub perception: AttributeScore,
    #[serde(rename = "sorte", default)]
    pub luck: AttributeScore,
}

impl Attributes {
    pub fn get(&self, kind: AttributeKind) -> AttributeScore {
        match kind {
            AttributeKind::Strength => self.strength,
            AttributeKind::Dexterity => self.dexterity,
            AttributeKind::Constitution => self.constitution,
            AttributeKind::Mystic => self.mystic,
            AttributeKind::Will => self.will,
            AttributeKind::Presence => self.presence,
            AttributeKind::Curiosity => self.curiosity,
            AttributeKind::Reason => self.reason,
            AttributeKind::Perception => self.perception,
            AttributeKind::Luck => self.luck,
        }
    }

    pub fn set(&mut self, kind: AttributeKind, score: AttributeScore) {
        let slot = match kind {
            AttributeKind::Strength => &mut self.strength,
            AttributeKind::Dexterity => &mut self.dexterity,
            AttributeKind::Constitution => &mut self.constitution,
            AttributeKind::Mystic => &mut self.mystic,
            AttributeKind::Will => &mut self.will,
            AttributeKind::Presence => &mut self.presence,
            AttributeKind::Curiosity => &mut self.curiosity,
            AttributeKind::Reason => &mut self.reason,
            AttributeKind::Perception => &mut self.perception,
            AttributeKind::Luck => &mut self.luck,
        };
        *slot = score;
    }
}

/// The fifteen skill scores, clamped like attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skills {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<SkillsId>,
    #[serde(rename = "adestramento", default)]
    pub animal_handling: AttributeScore,
    #[serde(default)]
    pub ranged: AttributeScore,
    #[serde(default)]
    pub melee: AttributeScore,
    #[serde(rename = "desarmado", default)]
    pub unarmed: AttributeScore,
    #[serde(rename = "atuacao", default)]
    pub performance: AttributeScore,
    #[serde(rename = "furtividade", default)]
    pub stealth: AttributeScore,
    #[serde(rename = "historia", default)]
    pub history: AttributeScore,
    #[serde(rename = "iniciativa", default)]
    pub initiative: AttributeScore,
    #[serde(rename = "leitura", default)]
    pub reading: AttributeScore,
    #[serde(rename = "medicina", default)]
    pub medicine: AttributeScore,
    #[serde(rename = "mitologia", default)]
    pub mythology: AttributeScore,
    #[serde(rename = "negociacao", default)]
    pub negotiation: AttributeScore,
    #[serde(rename = "persuasao", default)]
    pub persuasion: AttributeScore,
    #[serde(rename = "psicologia", default)]
    pub psychology: AttributeScore,
    #[serde(rename = "teologia", default)]
    pub theology: AttributeScore,
}

impl Skills {
    pub fn get(&self, kind: SkillKind) -> AttributeScore {
        match kind {
            SkillKind::AnimalHandling => self.animal_handling,
            SkillKind::Ranged => self.ranged,
            SkillKind::Melee => self.melee,
            SkillKind::Unarmed => self.unarmed,
            SkillKind::Performance => self.performance,
            SkillKind::Stealth => self.stealth,
            SkillKind::History => self.history,
            SkillKind::Initiative => self.initiative,
            SkillKind::Reading => self.reading,
            SkillKind::Medicine => self.medicine,
            SkillKind::Mythology => self.mythology,
            SkillKind::Negotiation => self.negotiation,
            SkillKind::Persuasion => self.persuasion,
            SkillKind::Psychology => self.psychology,
            SkillKind::Theology => self.theology,
        }
    }

    pub fn set(&mut self, kind: SkillKind, score: AttributeScore) {
        let slot = match kind {
            SkillKind::AnimalHandling => &mut self.animal_handling,
            SkillKind::Ranged => &mut self.ranged,
            SkillKind::Melee => &mut self.melee,
            SkillKind::Unarmed => &mut self.unarmed,
            SkillKind::Performance => &mut self.performance,
            SkillKind::Stealth => &mut self.stealth,
            SkillKind::History => &mut self.history,
            SkillKind::Initiative => &mut self.initiative,
            SkillKind::Reading => &mut self.reading,
            SkillKind::Medicine => &mut self.medicine,
            SkillKind::Mythology => &mut self.mythology,
            SkillKind::Negotiation => &mut self.negotiation,
            SkillKind::Persuasion => &mut self.persuasion,
            SkillKind::Psychology => &mut self.psychology,
            SkillKind::Theology => &mut self.theology,
        };
        *slot = score;
    }
}

/// Aggregate combat stats derived from attributes and equipment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<StatusId>,
    #[serde(rename = "vida", default)]
    pub health: i32,
    #[serde(default)]
    pub mana: i32,
    #[serde(rename = "sanidade", default)]
    pub sanity: i32,
    #[serde(rename = "armadura", default)]
    pub armor: i32,
    #[serde(rename = "estoicismo", default)]
    pub fortitude: i32,
    #[serde(rename = "afinco", default)]
    pub resolve: i32,
}

impl Status {
    pub fn get(&self, field: StatusField) -> i32 {
        match field {
            StatusField::Health => self.health,
            StatusField::Mana => self.mana,
            StatusField::Sanity => self.sanity,
            StatusField::Armor => self.armor,
            StatusField::Fortitude => self.fortitude,
            StatusField::Resolve => self.resolve,
        }
    }

    pub fn set(&mut self, field: StatusField, value: i32) {
        match field {
            StatusField::Health => self.health = value,
            StatusField::Mana => self.mana = value,
            StatusField::Sanity => self.sanity = value,
            StatusField::Armor => self.armor = value,
            StatusField::Fortitude => self.fortitude = value,
            StatusField::Resolve => self.resolve = value,
        }
    }
}

/// One field of [`Status`], named as the backend names it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusField {
    Health,
    Mana,
    Sanity,
    Armor,
    Fortitude,
    Resolve,
}

impl StatusField {
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::Health => "vida",
            Self::Mana => "mana",
            Self::Sanity => "sanidade",
            Self::Armor => "armadura",
            Self::Fortitude => "estoicismo",
            Self::Resolve => "afinco",
        }
    }
}

impl std::fmt::Display for StatusField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_to_one_arrays_take_first_element() {
        let json = r#"{
            "id": 3,
            "nome": "Lyra",
            "atributos": [{"id": 9, "forca": 4, "destreza": 30}],
            "status": [{"id": 5, "vida": 20, "armadura": 7}]
        }"#;
        let character: Character = serde_json::from_str(json).expect("deserialize");
        assert_eq!(character.attributes.id, Some(AttributesId::new(9)));
        assert_eq!(character.strength().value(), 4);
        assert_eq!(character.attributes.dexterity.value(), 20);
        assert_eq!(character.status.armor, 7);
    }

    #[test]
    fn missing_or_empty_relations_fall_back_to_zeroes() {
        let json = r#"{"id": 3, "nome": "Lyra", "atributos": [], "status": null}"#;
        let character: Character = serde_json::from_str(json).expect("deserialize");
        assert_eq!(character.attributes, Attributes::default());
        assert_eq!(character.status, Status::default());
    }

    #[test]
    fn attributes_get_and_set_by_kind() {
        let mut attributes = Attributes::default();
        attributes.set(AttributeKind::Will, AttributeScore::clamped(12));
        assert_eq!(attributes.get(AttributeKind::Will).value(), 12);
        assert_eq!(attributes.will.value(), 12);
    }

    #[test]
    fn skills_relation_is_read_like_attributes() {
        let json = r#"{
            "id": 3,
            "nome": "Lyra",
            "pericias": [{"id": 6, "furtividade": 8, "desarmado": 40}]
        }"#;
        let character: Character = serde_json::from_str(json).expect("deserialize");
        assert_eq!(character.skills.id, Some(SkillsId::new(6)));
        assert_eq!(character.skills.get(SkillKind::Stealth).value(), 8);
        assert_eq!(character.skills.get(SkillKind::Unarmed).value(), 20);
        assert_eq!(character.skills.get(SkillKind::Theology).value(), 0);
    }

    #[test]
    fn skills_set_by_kind() {
        let mut skills = Skills::default();
        skills.set(SkillKind::Medicine, AttributeScore::clamped(5));
        assert_eq!(skills.medicine.value(), 5);
        assert_eq!(skills.get(SkillKind::Medicine).value(), 5);
    }

    #[test]
    fn status_get_and_set_by_field() {
        let mut status = Status::default();
        status.set(StatusField::Armor, 9);
        assert_eq!(status.get(StatusField::Armor), 9);
        assert_eq!(StatusField::Armor.wire_name(), "armadura");
    }
}
