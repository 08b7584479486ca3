use sha2::{Digest, Sha256};
use tgo_core::errors::EngineError;

use crate::dataset::CatalogDataset;
use crate::serde::to_canonical_json_bytes;

/// Hex SHA-256 of the canonical JSON form of a dataset.
pub fn dataset_fingerprint(dataset: &CatalogDataset) -> Result<String, EngineError> {
    let bytes = to_canonical_json_bytes(dataset)?;
    Ok(hex::encode(Sha256::digest(bytes)))
}
