//! Size, range and reload categories shared by inventory entries

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// How bulky an entry is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SizeClass {
    #[serde(rename = "Muito_pequeno")]
    Tiny,
    #[serde(rename = "Pequeno")]
    Small,
    #[default]
    #[serde(rename = "Medio")]
    Medium,
    #[serde(rename = "Grande")]
    Large,
    #[serde(rename = "Muito_grande")]
    Huge,
}

impl SizeClass {
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::Tiny => "Muito_pequeno",
            Self::Small => "Pequeno",
            Self::Medium => "Medio",
            Self::Large => "Grande",
            Self::Huge => "Muito_grande",
        }
    }
}

impl std::fmt::Display for SizeClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl std::str::FromStr for SizeClass {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Muito_pequeno" | "tiny" => Ok(Self::Tiny),
            "Pequeno" | "small" => Ok(Self::Small),
            "Medio" | "medium" => Ok(Self::Medium),
            "Grande" | "large" => Ok(Self::Large),
            "Muito_grande" | "huge" => Ok(Self::Huge),
            _ => Err(DomainError::parse(format!("Unknown size class: {}", s))),
        }
    }
}

/// Weapon reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WeaponRange {
    /// Melee; also what an empty hand reaches.
    #[default]
    #[serde(rename = "Pessoal")]
    Personal,
    #[serde(rename = "Curto")]
    Short,
    #[serde(rename = "Medio")]
    Medium,
    #[serde(rename = "Longo")]
    Long,
    #[serde(rename = "Superior")]
    Superior,
}

impl WeaponRange {
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::Personal => "Pessoal",
            Self::Short => "Curto",
            Self::Medium => "Medio",
            Self::Long => "Longo",
            Self::Superior => "Superior",
        }
    }
}

impl std::fmt::Display for WeaponRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl std::str::FromStr for WeaponRange {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Pessoal" | "personal" => Ok(Self::Personal),
            "Curto" | "short" => Ok(Self::Short),
            "Medio" | "medium" => Ok(Self::Medium),
            "Longo" | "long" => Ok(Self::Long),
            "Superior" | "superior" => Ok(Self::Superior),
            _ => Err(DomainError::parse(format!("Unknown weapon range: {}", s))),
        }
    }
}

/// Reload time of a ranged weapon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReloadKind {
    #[serde(rename = "Instantaneo")]
    Instant,
    #[serde(rename = "Turno_inteiro")]
    FullTurn,
    #[serde(rename = "Acao_extra")]
    ExtraAction,
}

impl std::fmt::Display for ReloadKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Instant => write!(f, "Instantaneo"),
            Self::FullTurn => write!(f, "Turno_inteiro"),
            Self::ExtraAction => write!(f, "Acao_extra"),
        }
    }
}

impl std::str::FromStr for ReloadKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Instantaneo" | "instant" => Ok(Self::Instant),
            "Turno_inteiro" | "full-turn" => Ok(Self::FullTurn),
            "Acao_extra" | "extra-action" => Ok(Self::ExtraAction),
            _ => Err(DomainError::parse(format!("Unknown reload kind: {}", s))),
        }
    }
}
