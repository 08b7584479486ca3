use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tgo_catalog::Catalog;
use tgo_core::errors::{EngineError, ErrorInfo};
use tgo_core::Language;

use crate::calculator::{Calculator, DEFAULT_PRECISION};

/// YAML-configurable engine settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Where the factor table comes from.
    #[serde(default)]
    pub catalog: CatalogSource,
    /// Decimal places of computed CO2e values.
    #[serde(default = "default_precision")]
    pub precision: u32,
    /// Preferred label language for presentation.
    #[serde(default)]
    pub language: Language,
}

fn default_precision() -> u32 {
    DEFAULT_PRECISION
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            catalog: CatalogSource::default(),
            precision: default_precision(),
            language: Language::default(),
        }
    }
}

/// Catalog selection. Without a path the compiled-in TGO table is used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CatalogSource {
    /// JSON dataset file.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl EngineConfig {
    /// Reads and validates a YAML configuration file.
    pub fn from_path(path: &Path) -> Result<Self, EngineError> {
        let contents = fs::read_to_string(path).map_err(|err| {
            EngineError::Config(
                ErrorInfo::new("config.read", format!("failed to read config: {err}"))
                    .with_context("path", path.display().to_string()),
            )
        })?;
        Self::from_yaml_str(&contents).map_err(|err| match err {
            EngineError::Config(info) => {
                EngineError::Config(info.with_context("path", path.display().to_string()))
            }
            other => other,
        })
    }

    /// Parses and validates YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, EngineError> {
        let config: EngineConfig = serde_yaml::from_str(yaml).map_err(|err| {
            EngineError::Config(ErrorInfo::new("config.parse", err.to_string()))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        self.calculator().map(|_| ())
    }

    pub fn calculator(&self) -> Result<Calculator, EngineError> {
        Calculator::with_precision(self.precision)
    }

    /// Loads the configured catalog.
    pub fn load_catalog(&self) -> Result<Catalog, EngineError> {
        match &self.catalog.path {
            Some(path) => tgo_catalog::load_path(path),
            None => tgo_catalog::load(),
        }
    }
}
