use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use tgo_core::errors::{EngineError, ErrorInfo};
use tgo_core::{CatalogVersion, FactorRecord, SchemaVersion};

use crate::builtin::builtin_dataset;
use crate::dataset::{ActivityAlias, CatalogDataset, FactorEntry};
use crate::hash::dataset_fingerprint;
use crate::serde::dataset_from_json;
use crate::units::lint_units;

/// Schema this build reads.
pub const SUPPORTED_SCHEMA: SchemaVersion = SchemaVersion::new(1, 0, 0);

/// A validated, immutable factor table.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    records: Vec<FactorRecord>,
    aliases: Vec<ActivityAlias>,
    by_key: HashMap<String, usize>,
    version: CatalogVersion,
}

impl Catalog {
    /// Records in dataset order.
    pub fn records(&self) -> &[FactorRecord] {
        &self.records
    }

    /// Activity-type synonyms carried by the dataset.
    pub fn aliases(&self) -> &[ActivityAlias] {
        &self.aliases
    }

    pub fn version(&self) -> &CatalogVersion {
        &self.version
    }

    pub fn get(&self, key: &str) -> Option<&FactorRecord> {
        self.by_key.get(key).map(|&idx| &self.records[idx])
    }

    /// Position of a record in [`Catalog::records`].
    pub fn position(&self, key: &str) -> Option<usize> {
        self.by_key.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .map(|record| record.category.as_str())
            .filter(|category| seen.insert(*category))
            .collect()
    }

    /// Converts the catalog back into its dataset form.
    pub fn to_dataset(&self) -> CatalogDataset {
        CatalogDataset {
            schema_version: self.version.schema_version,
            source: self.version.source.clone(),
            source_date: self.version.source_date.clone(),
            factors: self.records.iter().map(FactorEntry::from).collect(),
            aliases: self.aliases.clone(),
        }
    }
}

/// Loads the compiled-in TGO factor table.
pub fn load() -> Result<Catalog, EngineError> {
    load_dataset(builtin_dataset())
}

/// Loads a catalog from a JSON dataset file.
pub fn load_path(path: &Path) -> Result<Catalog, EngineError> {
    let contents = fs::read_to_string(path).map_err(|err| {
        EngineError::Serde(
            ErrorInfo::new("dataset.read", format!("failed to read dataset: {err}"))
                .with_context("path", path.display().to_string()),
        )
    })?;
    let dataset = dataset_from_json(&contents).map_err(|err| match err {
        EngineError::Serde(info) => {
            EngineError::Serde(info.with_context("path", path.display().to_string()))
        }
        other => other,
    })?;
    load_dataset(dataset)
}

/// Validates a dataset and builds a catalog from it.
///
/// Either every record passes or nothing is returned.
pub fn load_dataset(dataset: CatalogDataset) -> Result<Catalog, EngineError> {
    if !SUPPORTED_SCHEMA.accepts(&dataset.schema_version) {
        return Err(load_error(
            "catalog.schema_version",
            format!(
                "dataset schema {} is not readable by schema {}",
                dataset.schema_version, SUPPORTED_SCHEMA
            ),
        ));
    }
    if dataset.factors.is_empty() {
        return Err(load_error("catalog.empty", "dataset contains no factors"));
    }

    let fingerprint = dataset_fingerprint(&dataset)?;
    let mut by_key = HashMap::with_capacity(dataset.factors.len());
    for (idx, entry) in dataset.factors.iter().enumerate() {
        check_entry(entry)?;
        if by_key.insert(entry.key.clone(), idx).is_some() {
            return Err(EngineError::CatalogLoad(
                ErrorInfo::new("catalog.duplicate_key", "factor key is not unique")
                    .with_context("key", entry.key.clone()),
            ));
        }
    }
    for alias in &dataset.aliases {
        check_alias(alias, &by_key)?;
    }

    let version = CatalogVersion {
        schema_version: dataset.schema_version,
        source: dataset.source,
        source_date: dataset.source_date,
        fingerprint,
    };
    let catalog = Catalog {
        records: dataset
            .factors
            .into_iter()
            .map(FactorEntry::into_record)
            .collect(),
        aliases: dataset.aliases,
        by_key,
        version,
    };

    for mismatch in lint_units(&catalog) {
        tracing::warn!(
            key = %mismatch.key,
            unit_en = %mismatch.unit_en,
            unit_th = %mismatch.unit_th,
            "thai unit does not match english unit"
        );
    }
    tracing::info!(
        records = catalog.len(),
        aliases = catalog.aliases.len(),
        version = %catalog.version,
        "factor catalog loaded"
    );
    Ok(catalog)
}

fn load_error(code: &str, message: impl Into<String>) -> EngineError {
    EngineError::CatalogLoad(ErrorInfo::new(code, message))
}

fn check_entry(entry: &FactorEntry) -> Result<(), EngineError> {
    if entry.key.is_empty() || entry.key.trim() != entry.key {
        return Err(EngineError::CatalogLoad(
            ErrorInfo::new("catalog.invalid_key", "factor key is empty or padded")
                .with_context("key", entry.key.clone()),
        ));
    }
    for (field, value) in [
        ("name_en", &entry.name_en),
        ("unit_en", &entry.unit_en),
        ("category", &entry.category),
    ] {
        if value.trim().is_empty() {
            return Err(EngineError::CatalogLoad(
                ErrorInfo::new("catalog.missing_field", format!("{field} is empty"))
                    .with_context("key", entry.key.clone())
                    .with_context("field", field),
            ));
        }
    }
    if !entry.value.is_finite() {
        return Err(EngineError::CatalogLoad(
            ErrorInfo::new("catalog.non_finite_value", "factor value is not finite")
                .with_context("key", entry.key.clone())
                .with_context("value", entry.value.to_string()),
        ));
    }
    if entry.value < 0.0 {
        return Err(EngineError::CatalogLoad(
            ErrorInfo::new("catalog.negative_value", "factor value is negative")
                .with_context("key", entry.key.clone())
                .with_context("value", entry.value.to_string()),
        ));
    }
    if entry.is_bilingual == Some(true) {
        let missing = [("name_th", &entry.name_th), ("unit_th", &entry.unit_th)]
            .into_iter()
            .find(|(_, value)| value.as_deref().map(str::trim).unwrap_or("").is_empty());
        if let Some((field, _)) = missing {
            return Err(EngineError::CatalogLoad(
                ErrorInfo::new(
                    "catalog.bilingual_incomplete",
                    "record is declared bilingual but lacks a Thai field",
                )
                .with_context("key", entry.key.clone())
                .with_context("field", field)
                .with_hint("fill in the Thai field or drop is_bilingual"),
            ));
        }
    }
    Ok(())
}

fn check_alias(alias: &ActivityAlias, by_key: &HashMap<String, usize>) -> Result<(), EngineError> {
    if alias.alias.trim().is_empty() || alias.keys.is_empty() {
        return Err(EngineError::CatalogLoad(
            ErrorInfo::new("catalog.empty_alias", "alias has no token or no target keys")
                .with_context("alias", alias.alias.clone()),
        ));
    }
    if let Some(missing) = alias.keys.iter().find(|key| !by_key.contains_key(*key)) {
        return Err(EngineError::CatalogLoad(
            ErrorInfo::new(
                "catalog.unknown_alias_target",
                "alias points at a key that is not in the catalog",
            )
            .with_context("alias", alias.alias.clone())
            .with_context("key", missing.clone()),
        ));
    }
    Ok(())
}
