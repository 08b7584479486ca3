#![allow(dead_code)]

use tgo_catalog::Catalog;
use tgo_engine::{AliasIndex, Calculator, EngineSnapshot};

pub const ON_ROAD: &str = "Mobile Combustion - On Road Vehicles";
pub const STATIONARY_FOSSIL: &str = "Stationary Combustion - Fossil Fuels";

pub fn catalog() -> Catalog {
    tgo_catalog::load().expect("builtin catalog")
}

pub fn catalog_and_index() -> (Catalog, AliasIndex) {
    let catalog = catalog();
    let index = AliasIndex::build(&catalog);
    (catalog, index)
}

pub fn snapshot() -> EngineSnapshot {
    EngineSnapshot::new(catalog(), Calculator::default())
}
