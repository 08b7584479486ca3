use serde::{Deserialize, Serialize};
use tgo_core::{FactorRecord, SchemaVersion, Scope};

/// On-disk representation of a published factor table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogDataset {
    /// Schema the dataset was written with.
    #[serde(default)]
    pub schema_version: SchemaVersion,
    /// Publishing body of the factor table.
    pub source: String,
    /// Publication date as printed by the source.
    #[serde(default)]
    pub source_date: String,
    /// Factor rows in catalog order.
    pub factors: Vec<FactorEntry>,
    /// Activity-type synonyms.
    #[serde(default)]
    pub aliases: Vec<ActivityAlias>,
}

/// One factor row as authored in a dataset file.
///
/// `is_bilingual` may be declared by the author; it is checked against the
/// Thai fields on load and is never stored on the resulting record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorEntry {
    pub key: String,
    pub scope: Scope,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_th: Option<String>,
    pub name_en: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_th: Option<String>,
    pub unit_en: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_th: Option<String>,
    pub value: f64,
    #[serde(default)]
    pub notes_en: String,
    #[serde(default)]
    pub notes_th: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_bilingual: Option<bool>,
}

impl FactorEntry {
    pub(crate) fn into_record(self) -> FactorRecord {
        FactorRecord {
            key: self.key,
            scope: self.scope,
            category: self.category,
            category_th: blank_to_none(self.category_th),
            name_en: self.name_en,
            name_th: blank_to_none(self.name_th),
            unit_en: self.unit_en,
            unit_th: blank_to_none(self.unit_th),
            value: self.value,
            notes_en: self.notes_en,
            notes_th: self.notes_th,
        }
    }
}

impl From<&FactorRecord> for FactorEntry {
    fn from(record: &FactorRecord) -> Self {
        Self {
            key: record.key.clone(),
            scope: record.scope,
            category: record.category.clone(),
            category_th: record.category_th.clone(),
            name_en: record.name_en.clone(),
            name_th: record.name_th.clone(),
            unit_en: record.unit_en.clone(),
            unit_th: record.unit_th.clone(),
            value: record.value,
            notes_en: record.notes_en.clone(),
            notes_th: record.notes_th.clone(),
            is_bilingual: Some(record.is_bilingual()),
        }
    }
}

/// Synonym that resolves to one or more factor keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityAlias {
    pub alias: String,
    pub keys: Vec<String>,
}

fn blank_to_none(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
