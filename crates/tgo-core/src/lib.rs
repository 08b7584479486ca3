#![deny(missing_docs)]
#![doc = "Core data model and error types for the TGO emission-factor engine."]

pub mod errors;
pub mod provenance;
mod types;

pub use errors::{EngineError, ErrorInfo};
pub use provenance::{CatalogVersion, SchemaVersion};
pub use types::{FactorRecord, Language, Scope};
