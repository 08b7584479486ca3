mod common;

use std::fs;
use std::sync::Arc;

use common::catalog;
use tgo_catalog::{dataset_to_json, CatalogDataset};
use tgo_engine::{Calculator, EngineHandle, EstimateRequest};

fn rescaled_dataset(factor: f64) -> CatalogDataset {
    let mut dataset = catalog().to_dataset();
    for entry in &mut dataset.factors {
        entry.value *= factor;
    }
    dataset.source_date = "rescaled".to_string();
    dataset
}

fn grid_co2(handle: &EngineHandle) -> f64 {
    handle
        .estimate(&EstimateRequest::new("grid_electricity", 100.0))
        .unwrap()
        .computed()
        .map(|result| result.co2_equivalent)
        .unwrap()
}

#[test]
fn reload_publishes_new_generation() {
    let handle = EngineHandle::new(catalog(), Calculator::default());
    assert_eq!(handle.snapshot().generation(), 0);
    assert_eq!(grid_co2(&handle), 49.99);

    let generation = handle.reload_dataset(rescaled_dataset(2.0)).unwrap();
    assert_eq!(generation, 1);
    assert_eq!(handle.snapshot().generation(), 1);
    assert_eq!(grid_co2(&handle), 99.98);
    assert_eq!(handle.snapshot().version().source_date, "rescaled");
}

#[test]
fn held_snapshot_is_unaffected_by_reload() {
    let handle = EngineHandle::builtin().unwrap();
    let before: Arc<_> = handle.snapshot();
    handle.reload_dataset(rescaled_dataset(10.0)).unwrap();

    let old = before
        .estimate(&EstimateRequest::new("grid_electricity", 100.0))
        .unwrap();
    assert_eq!(old.computed().unwrap().co2_equivalent, 49.99);
    assert_eq!(grid_co2(&handle), 499.9);
    assert_ne!(before.version().fingerprint, handle.snapshot().version().fingerprint);
}

#[test]
fn failed_reload_keeps_current_snapshot() {
    let handle = EngineHandle::builtin().unwrap();
    let fingerprint = handle.snapshot().version().fingerprint.clone();

    let mut broken = catalog().to_dataset();
    broken.factors[1].key = broken.factors[0].key.clone();
    let err = handle.reload_dataset(broken).unwrap_err();
    assert_eq!(err.code(), "catalog.duplicate_key");

    let err = handle
        .reload_path(std::path::Path::new("/nonexistent/factors.json"))
        .unwrap_err();
    assert_eq!(err.code(), "dataset.read");

    let current = handle.snapshot();
    assert_eq!(current.generation(), 0);
    assert_eq!(current.version().fingerprint, fingerprint);
    assert_eq!(grid_co2(&handle), 49.99);
}

#[test]
fn reload_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("factors.json");
    fs::write(&path, dataset_to_json(&rescaled_dataset(0.5)).unwrap()).unwrap();

    let handle = EngineHandle::builtin().unwrap();
    assert_eq!(handle.reload_path(&path).unwrap(), 1);
    assert_eq!(handle.reload_path(&path).unwrap(), 2);
    assert_eq!(grid_co2(&handle), 24.995);
}

#[test]
fn readers_see_whole_snapshots_during_reloads() {
    let handle = EngineHandle::builtin().unwrap();
    let scaled = rescaled_dataset(2.0);

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..200 {
                    let snapshot = handle.snapshot();
                    let result = snapshot
                        .estimate(&EstimateRequest::new("grid_electricity", 100.0))
                        .unwrap();
                    let value = result.computed().unwrap().co2_equivalent;
                    let expected = if snapshot.version().source_date == "rescaled" {
                        99.98
                    } else {
                        49.99
                    };
                    assert_eq!(value, expected);
                }
            });
        }
        scope.spawn(|| {
            for _ in 0..20 {
                handle.reload_dataset(scaled.clone()).unwrap();
            }
        });
    });

    assert_eq!(handle.snapshot().generation(), 20);
}
