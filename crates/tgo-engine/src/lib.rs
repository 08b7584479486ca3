//! Emission-factor resolution and CO2-equivalent calculation.
//!
//! A lookup token (canonical key, English or Thai display name, or an
//! activity-type synonym) is resolved against an [`AliasIndex`] built once
//! per catalog, then multiplied by the activity amount. Everything here is
//! synchronous and free of I/O apart from loading configuration.

mod calculator;
mod config;
mod estimate;
mod index;
mod normalize;
mod resolver;
mod snapshot;

pub use calculator::{
    check_amount, compute, Calculator, Co2Equivalent, DEFAULT_PRECISION, MAX_PRECISION,
};
pub use config::{CatalogSource, EngineConfig};
pub use estimate::{Candidate, Estimate, EstimateRequest, EstimateResult};
pub use index::{AliasEntry, AliasIndex, Tier};
pub use normalize::{activity_slug, normalize};
pub use resolver::{resolve, Hint, Resolution};
pub use snapshot::{EngineHandle, EngineSnapshot};
