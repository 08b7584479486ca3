use serde::{Deserialize, Serialize};
use tgo_core::{FactorRecord, Scope};

use crate::index::Tier;
use crate::resolver::Hint;

/// A token and amount as supplied by a caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateRequest {
    pub token: String,
    pub amount: f64,
    #[serde(default)]
    pub hint: Hint,
}

impl EstimateRequest {
    pub fn new(token: impl Into<String>, amount: f64) -> Self {
        Self {
            token: token.into(),
            amount,
            hint: Hint::default(),
        }
    }

    pub fn with_hint(mut self, hint: Hint) -> Self {
        self.hint = hint;
        self
    }
}

/// Result of an estimate request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Estimate {
    Computed(EstimateResult),
    NotFound { token: String },
    Ambiguous {
        token: String,
        candidates: Vec<Candidate>,
    },
}

impl Estimate {
    pub fn computed(&self) -> Option<&EstimateResult> {
        match self {
            Estimate::Computed(result) => Some(result),
            _ => None,
        }
    }
}

/// CO2e value together with the factor it was computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateResult {
    pub key: String,
    pub name_en: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_th: Option<String>,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_th: Option<String>,
    pub scope: Scope,
    pub amount: f64,
    pub factor_value: f64,
    pub co2_equivalent: f64,
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_th: Option<String>,
    /// Lookup strategy that selected the factor.
    pub matched_by: Tier,
}

/// One of several records a token could mean.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub key: String,
    pub name_en: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_th: Option<String>,
    pub category: String,
    pub scope: Scope,
    pub unit: String,
}

impl From<&FactorRecord> for Candidate {
    fn from(record: &FactorRecord) -> Self {
        Self {
            key: record.key.clone(),
            name_en: record.name_en.clone(),
            name_th: record.name_th.clone(),
            category: record.category.clone(),
            scope: record.scope,
            unit: record.unit_en.clone(),
        }
    }
}
