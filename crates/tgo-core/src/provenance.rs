//! Provenance and schema descriptors attached to every factor catalog.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Semantic version describing the schema of serialized catalog datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SchemaVersion {
    /// Major version incremented for breaking changes.
    pub major: u32,
    /// Minor version incremented for additive changes.
    pub minor: u32,
    /// Patch version incremented for data corrections.
    pub patch: u32,
}

impl SchemaVersion {
    /// Creates a new schema version descriptor.
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Whether a dataset written with `other` can be read by this schema.
    pub fn accepts(&self, other: &SchemaVersion) -> bool {
        self.major == other.major && other.minor <= self.minor
    }
}

impl Default for SchemaVersion {
    fn default() -> Self {
        Self::new(1, 0, 0)
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Identifies which published factor table a catalog was loaded from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CatalogVersion {
    /// Schema of the dataset the catalog was read from.
    pub schema_version: SchemaVersion,
    /// Publishing body of the factor table (e.g. "TGO Thailand").
    pub source: String,
    /// Publication date of the factor table as printed by the source.
    pub source_date: String,
    /// Hex SHA-256 of the canonical dataset JSON.
    pub fingerprint: String,
}

impl fmt::Display for CatalogVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let short = self.fingerprint.get(..12).unwrap_or(&self.fingerprint);
        write!(
            f,
            "{} ({}) schema {} [{}]",
            self.source, self.source_date, self.schema_version, short
        )
    }
}
