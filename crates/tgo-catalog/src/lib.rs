//! Versioned emission-factor catalog.
//!
//! A catalog is loaded once, validated as a whole and never mutated. The
//! compiled-in table is the TGO Thailand edition; deployments may instead
//! point at a JSON dataset with the same shape.

mod builtin;
mod catalog;
mod dataset;
mod hash;
mod serde;
mod units;

pub use builtin::builtin_dataset;
pub use catalog::{load, load_dataset, load_path, Catalog, SUPPORTED_SCHEMA};
pub use dataset::{ActivityAlias, CatalogDataset, FactorEntry};
pub use hash::dataset_fingerprint;
pub use crate::serde::{dataset_from_json, dataset_to_json, to_canonical_json_bytes};
pub use units::{canonical_unit, lint_units, thai_spellings, units_agree, UnitMismatch};
