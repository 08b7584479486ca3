use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{EngineError, ErrorInfo};

/// GHG Protocol scope of an emission source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Scope {
    /// Direct emissions from owned or controlled sources.
    #[serde(rename = "SCOPE_1")]
    Scope1,
    /// Indirect emissions from purchased energy.
    #[serde(rename = "SCOPE_2")]
    Scope2,
}

impl Scope {
    /// Returns the GHG Protocol scope number.
    pub fn number(&self) -> u8 {
        match self {
            Scope::Scope1 => 1,
            Scope::Scope2 => 2,
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SCOPE_{}", self.number())
    }
}

impl FromStr for Scope {
    type Err = EngineError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let cleaned: String = raw
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();
        match cleaned.as_str() {
            "1" | "scope1" => Ok(Scope::Scope1),
            "2" | "scope2" => Ok(Scope::Scope2),
            _ => Err(EngineError::Config(
                ErrorInfo::new("scope.unknown", format!("unknown scope '{raw}'"))
                    .with_hint("use 1, 2, SCOPE_1 or SCOPE_2"),
            )),
        }
    }
}

/// Output language for names and units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English labels.
    #[default]
    En,
    /// Thai labels, falling back to English where a record has none.
    Th,
}

impl FromStr for Language {
    type Err = EngineError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "th" | "thai" => Ok(Language::Th),
            _ => Err(EngineError::Config(ErrorInfo::new(
                "language.unknown",
                format!("unknown language '{raw}'"),
            ))),
        }
    }
}

/// One emission factor from a published factor table.
///
/// `value` is expressed in kg CO2-equivalent per one `unit_en` of activity.
/// Records are only ever produced by catalog loading and are never mutated
/// afterwards; `key` is the join key used by every stored emission record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorRecord {
    /// Stable machine identifier, unique across the catalog.
    pub key: String,
    /// GHG Protocol scope.
    pub scope: Scope,
    /// English category label shared by related records.
    pub category: String,
    /// Thai category label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_th: Option<String>,
    /// English display name.
    pub name_en: String,
    /// Thai display name, absent on legacy English-only records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_th: Option<String>,
    /// Unit the factor is denominated in.
    pub unit_en: String,
    /// The same physical unit written in Thai.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_th: Option<String>,
    /// Emission factor, never negative.
    pub value: f64,
    /// Free text; no effect on calculation.
    #[serde(default)]
    pub notes_en: String,
    /// Free text; no effect on calculation.
    #[serde(default)]
    pub notes_th: String,
}

impl FactorRecord {
    /// True only when both the Thai name and the Thai unit are present.
    pub fn is_bilingual(&self) -> bool {
        non_blank(self.name_th.as_deref()) && non_blank(self.unit_th.as_deref())
    }

    /// Display name in the requested language.
    pub fn name(&self, language: Language) -> &str {
        match language {
            Language::Th => self.name_th.as_deref().unwrap_or(&self.name_en),
            Language::En => &self.name_en,
        }
    }

    /// Unit label in the requested language.
    pub fn unit(&self, language: Language) -> &str {
        match language {
            Language::Th => self.unit_th.as_deref().unwrap_or(&self.unit_en),
            Language::En => &self.unit_en,
        }
    }

    /// Category label in the requested language.
    pub fn category_label(&self, language: Language) -> &str {
        match language {
            Language::Th => self.category_th.as_deref().unwrap_or(&self.category),
            Language::En => &self.category,
        }
    }
}

fn non_blank(value: Option<&str>) -> bool {
    value.map(|v| !v.trim().is_empty()).unwrap_or(false)
}
