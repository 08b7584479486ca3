use serde::{Deserialize, Serialize};
use tgo_core::errors::{EngineError, ErrorInfo};
use tgo_core::{FactorRecord, Language};

/// Decimal places the published factors are given to.
pub const DEFAULT_PRECISION: u32 = 4;

/// Largest precision accepted by [`Calculator::with_precision`].
pub const MAX_PRECISION: u32 = 10;

/// CO2-equivalent for one activity amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Co2Equivalent {
    /// kg CO2e, rounded to the calculator's precision.
    pub co2_equivalent: f64,
    /// Activity unit in English.
    pub unit: String,
    /// Activity unit in Thai, when the record has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_th: Option<String>,
}

impl Co2Equivalent {
    /// Unit label for the requested language, falling back to English.
    pub fn unit_for(&self, language: Language) -> &str {
        match language {
            Language::Th => self.unit_th.as_deref().unwrap_or(&self.unit),
            Language::En => &self.unit,
        }
    }
}

/// Multiplies activity amounts by factor values.
///
/// Only the final product is rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calculator {
    precision: u32,
}

impl Default for Calculator {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
        }
    }
}

impl Calculator {
    /// Creates a calculator rounding to `precision` decimal places.
    pub fn with_precision(precision: u32) -> Result<Self, EngineError> {
        if precision > MAX_PRECISION {
            return Err(EngineError::Config(
                ErrorInfo::new("config.precision", "precision exceeds supported maximum")
                    .with_context("precision", precision.to_string())
                    .with_context("max", MAX_PRECISION.to_string()),
            ));
        }
        Ok(Self { precision })
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Computes `amount * record.value`.
    pub fn compute(
        &self,
        record: &FactorRecord,
        amount: f64,
    ) -> Result<Co2Equivalent, EngineError> {
        check_amount(amount)?;
        let raw = amount * record.value;
        if !raw.is_finite() {
            return Err(EngineError::InvalidAmount(
                ErrorInfo::new("calc.result_overflow", "amount is too large for this factor")
                    .with_context("key", record.key.clone())
                    .with_context("amount", amount.to_string()),
            ));
        }
        Ok(Co2Equivalent {
            co2_equivalent: round_to(raw, self.precision),
            unit: record.unit_en.clone(),
            unit_th: record.unit_th.clone(),
        })
    }
}

/// Computes with the default precision.
pub fn compute(record: &FactorRecord, amount: f64) -> Result<Co2Equivalent, EngineError> {
    Calculator::default().compute(record, amount)
}

/// Rejects quantities that cannot describe an activity.
pub fn check_amount(amount: f64) -> Result<(), EngineError> {
    if !amount.is_finite() {
        return Err(EngineError::InvalidAmount(
            ErrorInfo::new("calc.non_finite_amount", "amount must be a finite number")
                .with_context("amount", amount.to_string()),
        ));
    }
    if amount < 0.0 {
        return Err(EngineError::InvalidAmount(
            ErrorInfo::new("calc.negative_amount", "amount must not be negative")
                .with_context("amount", amount.to_string()),
        ));
    }
    Ok(())
}

fn round_to(value: f64, precision: u32) -> f64 {
    let scale = 10f64.powi(precision as i32);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    let rounded = scaled.round() / scale;
    // fold -0.0
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
