//! Token resolution over a catalog and its alias index.
//!
//! Tiers are probed in [`Tier::ORDER`]; the first tier with any hit decides
//! the outcome. A key hit is returned as-is. A shared token is narrowed by the
//! caller's hint and otherwise reported as ambiguous, never guessed.

use serde::{Deserialize, Serialize};
use tgo_catalog::{canonical_unit, Catalog};
use tgo_core::{FactorRecord, Scope};

use crate::index::{AliasIndex, Tier};
use crate::normalize::normalize;

/// Extra context used to pick between records sharing a token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hint {
    /// Category label, English or Thai.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<Scope>,
    /// Unit label, English or Thai.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl Hint {
    pub fn category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            ..Self::default()
        }
    }

    pub fn scope(scope: Scope) -> Self {
        Self {
            scope: Some(scope),
            ..Self::default()
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.scope.is_none() && self.unit.is_none()
    }

    /// Whether the record satisfies every supplied field.
    pub fn matches(&self, record: &FactorRecord) -> bool {
        let category_ok = self.category.as_deref().map_or(true, |wanted| {
            label_matches(wanted, &record.category, record.category_th.as_deref())
        });
        let scope_ok = self.scope.map_or(true, |wanted| wanted == record.scope);
        let unit_ok = self.unit.as_deref().map_or(true, |wanted| {
            unit_matches(wanted, &record.unit_en, record.unit_th.as_deref())
        });
        category_ok && scope_ok && unit_ok
    }
}

fn label_matches(wanted: &str, english: &str, thai: Option<&str>) -> bool {
    let wanted = normalize(wanted);
    normalize(english) == wanted || thai.map_or(false, |thai| normalize(thai) == wanted)
}

/// Compares units through their canonical spelling (`liter`, `L` and `ลิตร`
/// all name `litre`), falling back to label comparison for unknown units.
fn unit_matches(wanted: &str, english: &str, thai: Option<&str>) -> bool {
    match (canonical_unit(wanted), canonical_unit(english)) {
        (Some(wanted), Some(english)) => wanted == english,
        _ => label_matches(wanted, english, thai),
    }
}

/// Outcome of resolving one token.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<'a> {
    /// Exactly one record was selected.
    Found {
        record: &'a FactorRecord,
        tier: Tier,
    },
    /// Nothing matched at any tier.
    NotFound,
    /// Several records matched and the hint did not narrow them to one.
    Ambiguous {
        tier: Tier,
        candidates: Vec<&'a FactorRecord>,
    },
}

impl<'a> Resolution<'a> {
    pub fn record(&self) -> Option<&'a FactorRecord> {
        match self {
            Resolution::Found { record, .. } => Some(*record),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found { .. })
    }
}

/// Resolves `token` against `catalog` using `index`, which should have been
/// built from the same catalog. Index positions the catalog does not hold
/// are ignored.
pub fn resolve<'a>(
    catalog: &'a Catalog,
    index: &AliasIndex,
    token: &str,
    hint: &Hint,
) -> Resolution<'a> {
    let records = catalog.records();
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return Resolution::NotFound;
    }

    if let Some(record) = index
        .probe(Tier::Key, trimmed)
        .first()
        .and_then(|&position| records.get(position))
    {
        tracing::debug!(token = trimmed, key = %record.key, "resolved by key");
        return Resolution::Found {
            record,
            tier: Tier::Key,
        };
    }

    let normalized = normalize(trimmed);
    for tier in [Tier::NameEn, Tier::NameTh, Tier::Alias] {
        let candidates: Vec<&FactorRecord> = index
            .probe(tier, &normalized)
            .iter()
            .filter_map(|&position| records.get(position))
            .collect();
        if candidates.is_empty() {
            continue;
        }
        if let [record] = candidates.as_slice() {
            tracing::debug!(token = trimmed, %tier, key = %record.key, "resolved");
            return Resolution::Found {
                record: *record,
                tier,
            };
        }

        if !hint.is_empty() {
            let narrowed: Vec<&FactorRecord> = candidates
                .iter()
                .copied()
                .filter(|record| hint.matches(record))
                .collect();
            if let [record] = narrowed.as_slice() {
                tracing::debug!(token = trimmed, %tier, key = %record.key, "resolved by hint");
                return Resolution::Found {
                    record: *record,
                    tier,
                };
            }
        }
        tracing::debug!(
            token = trimmed,
            %tier,
            candidates = candidates.len(),
            "ambiguous token"
        );
        return Resolution::Ambiguous { tier, candidates };
    }

    tracing::debug!(token = trimmed, "no factor matches token");
    Resolution::NotFound
}
