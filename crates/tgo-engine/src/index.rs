//! Token → factor lookup tables derived from a catalog.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tgo_catalog::Catalog;

use crate::normalize::{activity_slug, normalize};

/// Lookup strategy, in the order the resolver tries them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Canonical key, exact and case-sensitive.
    Key,
    /// Normalized English display name.
    NameEn,
    /// Normalized Thai display name.
    NameTh,
    /// Activity-type synonym or derived activity slug.
    Alias,
}

impl Tier {
    /// All tiers in precedence order.
    pub const ORDER: [Tier; 4] = [Tier::Key, Tier::NameEn, Tier::NameTh, Tier::Alias];

    fn slot(self) -> usize {
        match self {
            Tier::Key => 0,
            Tier::NameEn => 1,
            Tier::NameTh => 2,
            Tier::Alias => 3,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Tier::Key => "key",
            Tier::NameEn => "name_en",
            Tier::NameTh => "name_th",
            Tier::Alias => "alias",
        };
        f.write_str(label)
    }
}

/// One registered token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasEntry {
    /// Token as written in the catalog.
    pub token: String,
    /// Form used for comparison.
    pub normalized: String,
    /// Key of the record the token points at.
    pub key: String,
    pub tier: Tier,
}

/// Per-tier token tables over one catalog.
///
/// Positions refer to [`Catalog::records`] of the catalog the index was built
/// from; an index must only be used together with that catalog.
#[derive(Debug, Clone, Default)]
pub struct AliasIndex {
    tiers: [HashMap<String, Vec<usize>>; 4],
    entries: Vec<AliasEntry>,
}

impl AliasIndex {
    /// Registers every token of every record.
    pub fn build(catalog: &Catalog) -> Self {
        let mut index = AliasIndex::default();
        for (position, record) in catalog.records().iter().enumerate() {
            index.register(Tier::Key, &record.key, record.key.clone(), position, &record.key);
            index.register(
                Tier::NameEn,
                &record.name_en,
                normalize(&record.name_en),
                position,
                &record.key,
            );
            if let Some(name_th) = &record.name_th {
                index.register(Tier::NameTh, name_th, normalize(name_th), position, &record.key);
            }
            let slug = activity_slug(&record.name_en);
            if slug != record.key {
                index.register(Tier::Alias, &slug, normalize(&slug), position, &record.key);
            }
        }
        for alias in catalog.aliases() {
            for key in &alias.keys {
                if let Some(position) = catalog.position(key) {
                    let normalized = normalize(&alias.alias);
                    index.register(Tier::Alias, &alias.alias, normalized, position, key);
                }
            }
        }
        index
    }

    fn register(
        &mut self,
        tier: Tier,
        token: &str,
        normalized: String,
        position: usize,
        key: &str,
    ) {
        if normalized.is_empty() {
            return;
        }
        let slot = self.tiers[tier.slot()].entry(normalized.clone()).or_default();
        if slot.contains(&position) {
            return;
        }
        slot.push(position);
        self.entries.push(AliasEntry {
            token: token.to_string(),
            normalized,
            key: key.to_string(),
            tier,
        });
    }

    /// Catalog positions registered under `token` at `tier`.
    ///
    /// The token must already be in comparison form: trimmed for
    /// [`Tier::Key`], [`normalize`]d for the others.
    pub fn probe(&self, tier: Tier, token: &str) -> &[usize] {
        self.tiers[tier.slot()]
            .get(token)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every token shared by several records, grouped by tier, sorted.
    pub fn ambiguous_tokens(&self) -> Vec<(Tier, String, usize)> {
        let mut shared: Vec<_> = Tier::ORDER
            .iter()
            .flat_map(|&tier| {
                self.tiers[tier.slot()]
                    .iter()
                    .filter(|(_, positions)| positions.len() > 1)
                    .map(move |(token, positions)| (tier, token.clone(), positions.len()))
            })
            .collect();
        shared.sort();
        shared
    }

    /// Registered tokens in registration order.
    pub fn entries(&self) -> &[AliasEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
