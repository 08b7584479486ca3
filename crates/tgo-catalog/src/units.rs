//! English/Thai unit equivalence checks.
//!
//! The Thai unit on a record must name the same physical unit as the English
//! one. Loading does not enforce this; [`lint_units`] reports disagreements so
//! catalog authors and the test suite can.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;

/// Known spellings of each unit, English first.
const UNIT_PAIRS: &[(&[&str], &[&str])] = &[
    (&["litre", "liter", "l"], &["ลิตร"]),
    (&["kg"], &["กก.", "กิโลกรัม"]),
    (&["kwh"], &["กิโลวัตต์ชั่วโมง", "kwh"]),
    (&["m³", "m3", "cubic_meter"], &["ลม.", "ลบ.ม."]),
    (&["scf"], &["ลบ.ฟุต"]),
    (&["mj"], &["mj", "เมกะจูล"]),
];

/// A bilingual record whose Thai unit does not match its English unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitMismatch {
    pub key: String,
    pub unit_en: String,
    pub unit_th: String,
    /// Set when the English unit is not in the equivalence table at all.
    pub unknown_unit: bool,
}

/// Returns the accepted Thai spellings for an English unit.
pub fn thai_spellings(unit_en: &str) -> Option<&'static [&'static str]> {
    let wanted = unit_en.trim().to_lowercase();
    UNIT_PAIRS
        .iter()
        .find(|(english, _)| english.iter().any(|candidate| *candidate == wanted))
        .map(|(_, thai)| *thai)
}

/// Canonical English spelling of a unit written in either language.
///
/// Matching ignores case and surrounding whitespace; unknown units give `None`.
pub fn canonical_unit(unit: &str) -> Option<&'static str> {
    let wanted = unit.trim().to_lowercase();
    UNIT_PAIRS
        .iter()
        .find(|(english, thai)| {
            english
                .iter()
                .chain(thai.iter())
                .any(|candidate| *candidate == wanted)
        })
        .and_then(|(english, _)| english.first().copied())
}

/// Whether `unit_th` names the same physical unit as `unit_en`.
pub fn units_agree(unit_en: &str, unit_th: &str) -> bool {
    let unit_th = unit_th.trim().to_lowercase();
    thai_spellings(unit_en)
        .map(|thai| thai.iter().any(|candidate| *candidate == unit_th))
        .unwrap_or(false)
}

/// Checks every bilingual record in the catalog.
pub fn lint_units(catalog: &Catalog) -> Vec<UnitMismatch> {
    catalog
        .records()
        .iter()
        .filter(|record| record.is_bilingual())
        .filter_map(|record| {
            let unit_th = record.unit_th.as_deref()?;
            if units_agree(&record.unit_en, unit_th) {
                return None;
            }
            Some(UnitMismatch {
                key: record.key.clone(),
                unit_en: record.unit_en.clone(),
                unit_th: unit_th.to_string(),
                unknown_unit: thai_spellings(&record.unit_en).is_none(),
            })
        })
        .collect()
}
