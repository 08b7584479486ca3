mod common;

use common::{catalog_and_index, ON_ROAD, STATIONARY_FOSSIL};
use tgo_core::Scope;
use tgo_engine::{resolve, Hint, Resolution, Tier};

fn found_key(resolution: &Resolution<'_>) -> Option<String> {
    resolution.record().map(|record| record.key.clone())
}

fn candidate_keys(resolution: &Resolution<'_>) -> Vec<String> {
    match resolution {
        Resolution::Ambiguous { candidates, .. } => {
            let mut keys: Vec<_> = candidates.iter().map(|r| r.key.clone()).collect();
            keys.sort();
            keys
        }
        other => panic!("expected ambiguous outcome, got {other:?}"),
    }
}

#[test]
fn every_key_resolves_to_its_record() {
    let (catalog, index) = catalog_and_index();
    for record in catalog.records() {
        let resolution = resolve(&catalog, &index, &record.key, &Hint::default());
        match resolution {
            Resolution::Found { record: hit, tier } => {
                assert_eq!(hit, record);
                assert_eq!(tier, Tier::Key);
            }
            other => panic!("{} did not resolve: {other:?}", record.key),
        }
    }
}

#[test]
fn key_lookup_ignores_hints() {
    let (catalog, index) = catalog_and_index();
    let resolution = resolve(&catalog, &index, "r22", &Hint::scope(Scope::Scope2));
    assert_eq!(found_key(&resolution).as_deref(), Some("r22"));
}

#[test]
fn english_and_thai_names_agree() {
    let (catalog, index) = catalog_and_index();
    let mut compared = 0;
    for record in catalog.records().iter().filter(|r| r.is_bilingual()) {
        let english = resolve(&catalog, &index, &record.name_en, &Hint::default());
        let thai = resolve(
            &catalog,
            &index,
            record.name_th.as_deref().unwrap(),
            &Hint::default(),
        );
        if english.is_found() && thai.is_found() {
            assert_eq!(found_key(&english), found_key(&thai), "{}", record.key);
            assert_eq!(found_key(&english).as_deref(), Some(record.key.as_str()));
            compared += 1;
        }
    }
    assert!(compared >= 30, "only {compared} records compared");
}

#[test]
fn bare_diesel_is_ambiguous() {
    let (catalog, index) = catalog_and_index();
    let resolution = resolve(&catalog, &index, "diesel", &Hint::default());
    assert!(matches!(resolution, Resolution::Ambiguous { tier: Tier::Alias, .. }));
    assert_eq!(
        candidate_keys(&resolution),
        vec!["gas_diesel_oil", "gas_diesel_oil_mobile"]
    );
}

#[test]
fn category_hint_selects_on_road_diesel() {
    let (catalog, index) = catalog_and_index();
    let resolution = resolve(&catalog, &index, "diesel", &Hint::category(ON_ROAD));
    assert_eq!(found_key(&resolution).as_deref(), Some("gas_diesel_oil_mobile"));

    let resolution = resolve(&catalog, &index, "Diesel", &Hint::category(STATIONARY_FOSSIL));
    assert_eq!(found_key(&resolution).as_deref(), Some("gas_diesel_oil"));
}

#[test]
fn thai_category_hint_is_accepted() {
    let (catalog, index) = catalog_and_index();
    let hint = Hint::category("การเผาไหม้เคลื่อนที่ - ยานพาหนะบนถนน");
    let resolution = resolve(&catalog, &index, "ดีเซล", &hint);
    assert_eq!(found_key(&resolution).as_deref(), Some("gas_diesel_oil_mobile"));
}

#[test]
fn shared_display_name_is_ambiguous() {
    let (catalog, index) = catalog_and_index();
    let resolution = resolve(&catalog, &index, "Gas/Diesel Oil", &Hint::default());
    assert!(matches!(resolution, Resolution::Ambiguous { tier: Tier::NameEn, .. }));
    let resolution = resolve(&catalog, &index, "Gas/Diesel Oil", &Hint::category(ON_ROAD));
    assert_eq!(found_key(&resolution).as_deref(), Some("gas_diesel_oil_mobile"));
}

#[test]
fn hint_that_does_not_narrow_keeps_full_candidate_set() {
    let (catalog, index) = catalog_and_index();
    let resolution = resolve(&catalog, &index, "diesel", &Hint::scope(Scope::Scope1));
    assert_eq!(candidate_keys(&resolution).len(), 2);

    let resolution = resolve(&catalog, &index, "diesel", &Hint::category("Purchased Electricity"));
    assert_eq!(candidate_keys(&resolution).len(), 2);
}

#[test]
fn unit_hint_separates_unit_variants() {
    let (catalog, index) = catalog_and_index();
    let name = "LPG (Liquefied Petroleum Gas)";
    let resolution = resolve(&catalog, &index, name, &Hint::default());
    assert_eq!(candidate_keys(&resolution), vec!["lpg_kg", "lpg_litre"]);

    let resolution = resolve(&catalog, &index, name, &Hint::default().with_unit("kg"));
    assert_eq!(found_key(&resolution).as_deref(), Some("lpg_kg"));

    let resolution = resolve(&catalog, &index, name, &Hint::default().with_unit("ลิตร"));
    assert_eq!(found_key(&resolution).as_deref(), Some("lpg_litre"));
}

#[test]
fn unit_hint_accepts_unit_synonyms() {
    let (catalog, index) = catalog_and_index();
    for unit in ["litre", "liter", "l", "L", " Liter ", "ลิตร"] {
        let hint = Hint::category(ON_ROAD).with_unit(unit);
        let resolution = resolve(&catalog, &index, "lpg", &hint);
        assert_eq!(
            found_key(&resolution).as_deref(),
            Some("lpg_mobile_litre"),
            "{unit}"
        );
    }
    for unit in ["kg", "KG", "กิโลกรัม"] {
        let hint = Hint::category(ON_ROAD).with_unit(unit);
        let resolution = resolve(&catalog, &index, "lpg", &hint);
        assert_eq!(found_key(&resolution).as_deref(), Some("lpg_mobile_kg"), "{unit}");
    }
}

#[test]
fn bare_gas_means_natural_gas() {
    let (catalog, index) = catalog_and_index();
    let resolution = resolve(&catalog, &index, "gas", &Hint::default());
    assert!(matches!(resolution, Resolution::Ambiguous { tier: Tier::Alias, .. }));
    assert_eq!(
        candidate_keys(&resolution),
        vec!["natural_gas_mj", "natural_gas_scf"]
    );
    let resolution = resolve(&catalog, &index, "Gas", &Hint::default().with_unit("mj"));
    assert_eq!(found_key(&resolution).as_deref(), Some("natural_gas_mj"));
}

#[test]
fn combined_hint_fields_all_apply() {
    let (catalog, index) = catalog_and_index();
    let hint = Hint::category(ON_ROAD).with_unit("litre");
    let resolution = resolve(&catalog, &index, "lpg", &hint);
    assert_eq!(found_key(&resolution).as_deref(), Some("lpg_mobile_litre"));

    let resolution = resolve(&catalog, &index, "lpg", &Hint::category(ON_ROAD));
    assert_eq!(
        candidate_keys(&resolution),
        vec!["lpg_kg", "lpg_litre", "lpg_mobile_kg", "lpg_mobile_litre"]
    );
}

#[test]
fn off_road_equipment_needs_a_category() {
    let (catalog, index) = catalog_and_index();
    let resolution = resolve(&catalog, &index, "Agriculture Equipment", &Hint::default());
    assert_eq!(candidate_keys(&resolution).len(), 3);

    let hint = Hint::category("Mobile Combustion - Off Road Equipment (Gasoline 2-Stroke)");
    let resolution = resolve(&catalog, &index, "Agriculture Equipment", &hint);
    assert_eq!(found_key(&resolution).as_deref(), Some("gasoline_2s_agriculture"));

    let resolution = resolve(&catalog, &index, "เครื่องจักรกลการเกษตร", &hint);
    assert_eq!(found_key(&resolution).as_deref(), Some("gasoline_2s_agriculture"));
}

#[test]
fn names_are_matched_after_normalization() {
    let (catalog, index) = catalog_and_index();
    let resolution = resolve(
        &catalog,
        &index,
        "  grid   MIX electricity (THAILAND) ",
        &Hint::default(),
    );
    assert!(matches!(
        resolution,
        Resolution::Found { tier: Tier::NameEn, .. }
    ));
    assert_eq!(found_key(&resolution).as_deref(), Some("grid_electricity"));
}

#[test]
fn thai_names_resolve() {
    let (catalog, index) = catalog_and_index();
    let resolution = resolve(&catalog, &index, " ถ่านหินลิกไนท์ ", &Hint::default());
    assert!(matches!(
        resolution,
        Resolution::Found { tier: Tier::NameTh, .. }
    ));
    assert_eq!(found_key(&resolution).as_deref(), Some("lignite_coal"));
}

#[test]
fn synonyms_resolve_through_alias_tier() {
    let (catalog, index) = catalog_and_index();
    for (token, key) in [
        ("electricity", "grid_electricity"),
        ("Power", "grid_electricity"),
        ("ไฟฟ้า", "grid_electricity"),
        ("HCFC-22", "r22"),
        ("grid_mix_electricity_thailand", "grid_electricity"),
        ("transport", "motor_gasoline_uncontrolled"),
        ("การขนส่ง", "motor_gasoline_uncontrolled"),
        ("transport_diesel", "gas_diesel_oil_mobile"),
    ] {
        let resolution = resolve(&catalog, &index, token, &Hint::default());
        assert!(
            matches!(resolution, Resolution::Found { tier: Tier::Alias, .. }),
            "{token}: {resolution:?}"
        );
        assert_eq!(found_key(&resolution).as_deref(), Some(key), "{token}");
    }
}

#[test]
fn single_match_is_returned_even_if_hint_disagrees() {
    let (catalog, index) = catalog_and_index();
    let resolution = resolve(
        &catalog,
        &index,
        "Lignite Coal",
        &Hint::category("Purchased Electricity"),
    );
    assert_eq!(found_key(&resolution).as_deref(), Some("lignite_coal"));
}

#[test]
fn unknown_token_is_not_found() {
    let (catalog, index) = catalog_and_index();
    assert_eq!(
        resolve(&catalog, &index, "unobtainium", &Hint::default()),
        Resolution::NotFound
    );
    assert_eq!(
        resolve(&catalog, &index, "   ", &Hint::default()),
        Resolution::NotFound
    );
}

#[test]
fn keys_are_case_sensitive() {
    let (catalog, index) = catalog_and_index();
    let resolution = resolve(&catalog, &index, "LIGNITE_COAL", &Hint::default());
    assert!(!matches!(resolution, Resolution::Found { tier: Tier::Key, .. }));
}

#[test]
fn repeated_resolution_is_identical() {
    let (catalog, index) = catalog_and_index();
    for token in ["diesel", "grid_electricity", "unobtainium", "LPG - Mobile"] {
        let first = resolve(&catalog, &index, token, &Hint::default());
        for _ in 0..5 {
            assert_eq!(resolve(&catalog, &index, token, &Hint::default()), first);
        }
    }
}
