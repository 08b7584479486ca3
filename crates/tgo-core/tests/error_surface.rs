use tgo_core::errors::{EngineError, ErrorInfo};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("key", "gas_diesel_oil")
        .with_context("reason", "example")
}

#[test]
fn catalog_load_error_surface() {
    let err = EngineError::CatalogLoad(sample_info("catalog.duplicate_key", "duplicate key"));
    assert_eq!(err.code(), "catalog.duplicate_key");
    assert!(err.info().context.contains_key("key"));
    assert!(err.is_fatal());
}

#[test]
fn invalid_amount_error_surface() {
    let err = EngineError::InvalidAmount(sample_info("calc.negative_amount", "negative"));
    assert_eq!(err.info().code, "calc.negative_amount");
    assert!(!err.is_fatal());
}

#[test]
fn config_error_surface() {
    let err = EngineError::Config(sample_info("config.precision", "too many digits"));
    assert_eq!(err.info().code, "config.precision");
    assert!(err.is_fatal());
}

#[test]
fn display_includes_context_and_hint() {
    let info = ErrorInfo::new("calc.non_finite_amount", "amount is not finite")
        .with_context("amount", "NaN")
        .with_hint("supply a finite quantity");
    let rendered = EngineError::InvalidAmount(info).to_string();
    assert_eq!(
        rendered,
        "invalid amount: amount is not finite (code: calc.non_finite_amount) | context: [amount=NaN] | hint: supply a finite quantity"
    );
}

#[test]
fn errors_serialize_with_family_tag() {
    let err = EngineError::Serde(ErrorInfo::new("dataset.parse", "bad json"));
    let json = serde_json::to_value(&err).unwrap();
    assert_eq!(json["family"], "Serde");
    assert_eq!(json["detail"]["code"], "dataset.parse");
    let back: EngineError = serde_json::from_value(json).unwrap();
    assert_eq!(back, err);
}
