//! Skill names

use crate::error::DomainError;

/// The fifteen trained skills. Scores share the attribute range and clamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillKind {
    AnimalHandling,
    Ranged,
    Melee,
    Unarmed,
    Performance,
    Stealth,
    History,
    Initiative,
    Reading,
    Medicine,
    Mythology,
    Negotiation,
    Persuasion,
    Psychology,
    Theology,
}

impl SkillKind {
    pub const ALL: [SkillKind; 15] = [
        Self::AnimalHandling,
        Self::Ranged,
        Self::Melee,
        Self::Unarmed,
        Self::Performance,
        Self::Stealth,
        Self::History,
        Self::Initiative,
        Self::Reading,
        Self::Medicine,
        Self::Mythology,
        Self::Negotiation,
        Self::Persuasion,
        Self::Psychology,
        Self::Theology,
    ];

    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::AnimalHandling => "adestramento",
            Self::Ranged => "ranged",
            Self::Melee => "melee",
            Self::Unarmed => "desarmado",
            Self::Performance => "atuacao",
            Self::Stealth => "furtividade",
            Self::History => "historia",
            Self::Initiative => "iniciativa",
            Self::Reading => "leitura",
            Self::Medicine => "medicina",
            Self::Mythology => "mitologia",
            Self::Negotiation => "negociacao",
            Self::Persuasion => "persuasao",
            Self::Psychology => "psicologia",
            Self::Theology => "teologia",
        }
    }
}

impl std::fmt::Display for SkillKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl std::str::FromStr for SkillKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| {
                kind.wire_name().eq_ignore_ascii_case(needle)
                    || format!("{kind:?}").eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| DomainError::parse(format!("Unknown skill: {}", s)))
    }
}
