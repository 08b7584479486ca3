mod common;

use common::catalog_and_index;
use tgo_engine::{resolve, AliasIndex, Hint, Resolution, Tier};

fn entries_for<'a>(index: &'a AliasIndex, key: &str, tier: Tier) -> Vec<(&'a str, &'a str)> {
    index
        .entries()
        .iter()
        .filter(|entry| entry.key == key && entry.tier == tier)
        .map(|entry| (entry.token.as_str(), entry.normalized.as_str()))
        .collect()
}

#[test]
fn every_tier_registers_grid_electricity() {
    let (_, index) = catalog_and_index();
    let key = "grid_electricity";

    assert_eq!(
        entries_for(&index, key, Tier::Key),
        vec![("grid_electricity", "grid_electricity")]
    );
    assert_eq!(
        entries_for(&index, key, Tier::NameEn),
        vec![("Grid Mix Electricity (Thailand)", "grid mix electricity (thailand)")]
    );
    assert_eq!(
        entries_for(&index, key, Tier::NameTh),
        vec![("ไฟฟ้าจากระบบส่ายไฟ (ประเทศไทย)", "ไฟฟ้าจากระบบส่ายไฟ (ประเทศไทย)")]
    );

    let aliases = entries_for(&index, key, Tier::Alias);
    for expected in [
        ("grid_mix_electricity_thailand", "grid_mix_electricity_thailand"),
        ("electricity", "electricity"),
        ("ไฟฟ้า", "ไฟฟ้า"),
    ] {
        assert!(aliases.contains(&expected), "missing {expected:?} in {aliases:?}");
    }
}

#[test]
fn index_entries_point_at_catalog_keys() {
    let (catalog, index) = catalog_and_index();
    assert_eq!(index.len(), index.entries().len());
    for entry in index.entries() {
        assert!(catalog.get(&entry.key).is_some(), "{}", entry.key);
        assert!(!entry.normalized.is_empty());
        let positions = index.probe(entry.tier, &entry.normalized);
        let position = catalog.position(&entry.key).unwrap();
        assert!(positions.contains(&position));
    }
}

#[test]
fn shared_tokens_are_reported() {
    let (_, index) = catalog_and_index();
    let shared = index.ambiguous_tokens();
    assert!(shared.contains(&(Tier::Alias, "diesel".to_string(), 2)));
    assert!(shared.contains(&(Tier::Alias, "lpg".to_string(), 4)));
    assert!(shared.contains(&(Tier::NameEn, "agriculture equipment".to_string(), 3)));
    assert!(shared.iter().all(|(tier, _, _)| *tier != Tier::Key));
}

#[test]
fn foreign_index_positions_are_ignored() {
    let (_, full_index) = catalog_and_index();
    let mut dataset = tgo_catalog::builtin_dataset();
    dataset.factors.truncate(3);
    dataset.aliases.clear();
    let small = tgo_catalog::load_dataset(dataset).unwrap();

    for token in ["grid_electricity", "r143a", "electricity", "R-143a"] {
        assert_eq!(
            resolve(&small, &full_index, token, &Hint::default()),
            Resolution::NotFound,
            "{token}"
        );
    }
}
