//! Free-text parsers for weapon requirements, penalties and characteristics
//!
//! The creation form takes these as plain text. Malformed entries are
//! dropped silently; whatever parses becomes one sub-record each.

use std::sync::OnceLock;

use regex::Regex;

use crate::entities::{NewCharacteristic, NewPenalty, NewRequirement};

const MIN_NAME_CHARS: usize = 3;
const MIN_DESCRIPTION_CHARS: usize = 2;

/// `"Forca 12, Destreza 8"` or one per line; the last token is the value.
pub fn parse_requirements(text: &str) -> Vec<NewRequirement> {
    text.split([',', '\n'])
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| {
            let parts: Vec<&str> = entry.split_whitespace().collect();
            if parts.len() < 2 {
                return None;
            }
            let attribute = parts[0];
            let value: i64 = parts[parts.len() - 1].parse().ok()?;
            if attribute.chars().count() < MIN_NAME_CHARS || value < 1 {
                return None;
            }
            Some(NewRequirement {
                attribute: attribute.to_string(),
                value: u32::try_from(value).ok()?,
            })
        })
        .collect()
}

fn penalty_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"([\p{L}\s]+)\s*([+-]?\d+)").expect("penalty pattern is a valid literal")
    })
}

/// `"Destreza -2, Percepção -1"`: a name followed by a signed number.
pub fn parse_penalties(text: &str) -> Vec<NewPenalty> {
    penalty_pattern()
        .captures_iter(text)
        .filter_map(|caps| {
            let name = caps.get(1)?.as_str().trim();
            let value: i32 = caps.get(2)?.as_str().parse().ok()?;
            if name.chars().count() < MIN_NAME_CHARS {
                return None;
            }
            Some(NewPenalty {
                name: name.to_string(),
                value,
            })
        })
        .collect()
}

/// One per line: `"Afiada - Ignora 1 de armadura"`. Only the first ` - `
/// separates; the description may contain more.
pub fn parse_characteristics(text: &str) -> Vec<NewCharacteristic> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let (name, description) = line.split_once(" - ")?;
            let name = name.trim();
            let description = description.trim();
            if name.chars().count() < MIN_NAME_CHARS
                || description.chars().count() < MIN_DESCRIPTION_CHARS
            {
                return None;
            }
            Some(NewCharacteristic {
                name: name.to_string(),
                description: description.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requirements_use_first_and_last_token() {
        let parsed = parse_requirements("Forca 12, Destreza minima 8\nSo 3, Vontade 0, Razao");
        assert_eq!(
            parsed,
            vec![
                NewRequirement {
                    attribute: "Forca".to_string(),
                    value: 12
                },
                NewRequirement {
                    attribute: "Destreza".to_string(),
                    value: 8
                },
            ]
        );
    }

    #[test]
    fn requirements_of_empty_text_are_empty() {
        assert!(parse_requirements("").is_empty());
        assert!(parse_requirements(" , \n ").is_empty());
    }

    #[test]
    fn penalties_keep_sign_and_accented_names() {
        let parsed = parse_penalties("Destreza -2, Percepção -1, Fé +3, Sorte 4");
        let names: Vec<_> = parsed.iter().map(|p| p.name.as_str()).collect();
        let values: Vec<_> = parsed.iter().map(|p| p.value).collect();
        assert_eq!(names, vec!["Destreza", "Percepção", "Sorte"]);
        assert_eq!(values, vec![-2, -1, 4]);
    }

    #[test]
    fn characteristics_split_on_first_separator_only() {
        let parsed = parse_characteristics(
            "Afiada - Corta - e corta bem\nX - curta demais\nPesada -\n\nLeve - ok",
        );
        assert_eq!(
            parsed,
            vec![
                NewCharacteristic {
                    name: "Afiada".to_string(),
                    description: "Corta - e corta bem".to_string()
                },
                NewCharacteristic {
                    name: "Leve".to_string(),
                    description: "ok".to_string()
                },
            ]
        );
    }
}
