//! Immutable catalog/index pairs and the handle that publishes them.

use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use tgo_catalog::{Catalog, CatalogDataset};
use tgo_core::errors::EngineError;
use tgo_core::{CatalogVersion, FactorRecord};

use crate::calculator::{check_amount, Calculator, Co2Equivalent};
use crate::config::EngineConfig;
use crate::estimate::{Candidate, Estimate, EstimateRequest, EstimateResult};
use crate::index::AliasIndex;
use crate::resolver::{resolve, Hint, Resolution};

/// A catalog together with the index built from it.
#[derive(Debug)]
pub struct EngineSnapshot {
    catalog: Catalog,
    index: AliasIndex,
    calculator: Calculator,
    generation: u64,
}

impl EngineSnapshot {
    pub fn new(catalog: Catalog, calculator: Calculator) -> Self {
        let index = AliasIndex::build(&catalog);
        Self {
            catalog,
            index,
            calculator,
            generation: 0,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn index(&self) -> &AliasIndex {
        &self.index
    }

    pub fn version(&self) -> &CatalogVersion {
        self.catalog.version()
    }

    /// Number of reloads that preceded this snapshot.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn resolve(&self, token: &str, hint: &Hint) -> Resolution<'_> {
        resolve(&self.catalog, &self.index, token, hint)
    }

    pub fn compute(
        &self,
        record: &FactorRecord,
        amount: f64,
    ) -> Result<Co2Equivalent, EngineError> {
        self.calculator.compute(record, amount)
    }

    /// Resolves the request token and computes its CO2e.
    ///
    /// The amount is checked first, so an invalid amount is reported even
    /// when the token would not resolve.
    pub fn estimate(&self, request: &EstimateRequest) -> Result<Estimate, EngineError> {
        check_amount(request.amount)?;
        match self.resolve(&request.token, &request.hint) {
            Resolution::Found { record, tier } => {
                let value = self.calculator.compute(record, request.amount)?;
                Ok(Estimate::Computed(EstimateResult {
                    key: record.key.clone(),
                    name_en: record.name_en.clone(),
                    name_th: record.name_th.clone(),
                    category: record.category.clone(),
                    category_th: record.category_th.clone(),
                    scope: record.scope,
                    amount: request.amount,
                    factor_value: record.value,
                    co2_equivalent: value.co2_equivalent,
                    unit: value.unit,
                    unit_th: value.unit_th,
                    matched_by: tier,
                }))
            }
            Resolution::NotFound => Ok(Estimate::NotFound {
                token: request.token.clone(),
            }),
            Resolution::Ambiguous { candidates, .. } => Ok(Estimate::Ambiguous {
                token: request.token.clone(),
                candidates: candidates.into_iter().map(Candidate::from).collect(),
            }),
        }
    }
}

/// Shared owner of the current snapshot.
///
/// Readers clone the `Arc` and work on it without holding the lock; a reload
/// builds the replacement completely before swapping the pointer, so nobody
/// sees a partially built index and a failed reload changes nothing.
#[derive(Debug)]
pub struct EngineHandle {
    current: RwLock<Arc<EngineSnapshot>>,
    calculator: Calculator,
}

impl EngineHandle {
    pub fn new(catalog: Catalog, calculator: Calculator) -> Self {
        Self {
            current: RwLock::new(Arc::new(EngineSnapshot::new(catalog, calculator))),
            calculator,
        }
    }

    /// Loads the configured catalog and builds the first snapshot.
    pub fn from_config(config: &EngineConfig) -> Result<Self, EngineError> {
        let calculator = config.calculator()?;
        let catalog = config.load_catalog()?;
        Ok(Self::new(catalog, calculator))
    }

    /// Handle over the compiled-in catalog with default settings.
    pub fn builtin() -> Result<Self, EngineError> {
        Self::from_config(&EngineConfig::default())
    }

    pub fn snapshot(&self) -> Arc<EngineSnapshot> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Publishes a new catalog and returns its generation.
    pub fn reload(&self, catalog: Catalog) -> u64 {
        let mut next = EngineSnapshot::new(catalog, self.calculator);
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        next.generation = current.generation + 1;
        let generation = next.generation;
        *current = Arc::new(next);
        drop(current);
        tracing::info!(generation, "published factor catalog snapshot");
        generation
    }

    /// Validates a dataset and publishes it; on error the current snapshot stays.
    pub fn reload_dataset(&self, dataset: CatalogDataset) -> Result<u64, EngineError> {
        let catalog = tgo_catalog::load_dataset(dataset)?;
        Ok(self.reload(catalog))
    }

    /// Same as [`EngineHandle::reload_dataset`] for a dataset file.
    pub fn reload_path(&self, path: &Path) -> Result<u64, EngineError> {
        let catalog = tgo_catalog::load_path(path)?;
        Ok(self.reload(catalog))
    }

    pub fn estimate(&self, request: &EstimateRequest) -> Result<Estimate, EngineError> {
        self.snapshot().estimate(request)
    }
}
