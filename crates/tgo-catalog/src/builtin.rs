//! Built-in TGO Thailand emission factor table (April 2022 edition).
//!
//! Values are kg CO2-equivalent per unit of activity, as published. The
//! biomass rows come in two variants: the plain rows exclude biogenic CO2,
//! the `_co2` rows include it.

use tgo_core::{SchemaVersion, Scope};

use crate::dataset::{ActivityAlias, CatalogDataset, FactorEntry};

pub(crate) const SOURCE: &str = "TGO Thailand";
pub(crate) const SOURCE_DATE: &str = "April 2022";

struct BuiltinFactor {
    key: &'static str,
    name_en: &'static str,
    name_th: &'static str,
    unit_en: &'static str,
    unit_th: &'static str,
    value: f64,
    notes_en: &'static str,
    notes_th: &'static str,
}

struct BuiltinGroup {
    scope: Scope,
    category: &'static str,
    category_th: &'static str,
    factors: &'static [BuiltinFactor],
}

#[rustfmt::skip]
const STATIONARY_FOSSIL: &[BuiltinFactor] = &[
    BuiltinFactor { key: "natural_gas_scf", name_en: "Natural Gas (SCF)", name_th: "ก๊าซธรรมชาติ (ลูกบาศก์ฟุต)", unit_en: "scf", unit_th: "ลบ.ฟุต", value: 0.0573, notes_en: "Volumetric measurement", notes_th: "การวัดปริมาตร" },
    BuiltinFactor { key: "natural_gas_mj", name_en: "Natural Gas (MJ)", name_th: "ก๊าซธรรมชาติ (เมกะจูล)", unit_en: "MJ", unit_th: "MJ", value: 0.0562, notes_en: "Energy content measurement", notes_th: "การวัดปริมาณพลังงาน" },
    BuiltinFactor { key: "lignite_coal", name_en: "Lignite Coal", name_th: "ถ่านหินลิกไนท์", unit_en: "kg", unit_th: "กก.", value: 1.0619, notes_en: "", notes_th: "" },
    BuiltinFactor { key: "heavy_fuel_oil_a", name_en: "Heavy Fuel Oil A", name_th: "น้ำมันเตาหนัก เอ", unit_en: "litre", unit_th: "ลิตร", value: 3.22, notes_en: "Lower viscosity, lighter grade", notes_th: "ความหนืดต่ำ เกรดเบา" },
    BuiltinFactor { key: "heavy_fuel_oil_c", name_en: "Heavy Fuel Oil C", name_th: "น้ำมันเตาหนัก ซี", unit_en: "litre", unit_th: "ลิตร", value: 3.2457, notes_en: "Higher viscosity, heavier grade", notes_th: "ความหนืดสูง เกรดหนัก" },
    BuiltinFactor { key: "gas_diesel_oil", name_en: "Gas/Diesel Oil", name_th: "น้ำมันก๊าซโซหีน/ดีเซล", unit_en: "litre", unit_th: "ลิตร", value: 2.7078, notes_en: "", notes_th: "" },
    BuiltinFactor { key: "anthracite_coal", name_en: "Anthracite Coal", name_th: "ถ่านหินแอนทราไซต์", unit_en: "kg", unit_th: "กก.", value: 3.1, notes_en: "", notes_th: "" },
    BuiltinFactor { key: "sub_bituminous_coal", name_en: "Sub-bituminous Coal", name_th: "ถ่านหินซับบิทูมินัส", unit_en: "kg", unit_th: "กก.", value: 2.5454, notes_en: "", notes_th: "" },
    BuiltinFactor { key: "jet_kerosene", name_en: "Jet Kerosene", name_th: "น้ำมันเจ็ทเคโรซีน", unit_en: "litre", unit_th: "ลิตร", value: 2.4775, notes_en: "", notes_th: "" },
    BuiltinFactor { key: "lpg_litre", name_en: "LPG (Liquefied Petroleum Gas)", name_th: "แอลพีจี (แก๊สปิโตรเลียมเหลว)", unit_en: "litre", unit_th: "ลิตร", value: 1.6812, notes_en: "", notes_th: "" },
    BuiltinFactor { key: "lpg_kg", name_en: "LPG (Liquefied Petroleum Gas)", name_th: "แอลพีจี (แก๊สปิโตรเลียมเหลว)", unit_en: "kg", unit_th: "กก.", value: 3.1134, notes_en: "1 litre = 0.54 kg", notes_th: "1 ลิตร = 0.54 กิโลกรัม" },
    BuiltinFactor { key: "motor_gasoline", name_en: "Motor Gasoline", name_th: "น้ำมันเบนซิน", unit_en: "litre", unit_th: "ลิตร", value: 2.1894, notes_en: "", notes_th: "" },
];

#[rustfmt::skip]
const STATIONARY_BIOMASS: &[BuiltinFactor] = &[
    BuiltinFactor { key: "fuel_wood", name_en: "Fuel Wood", name_th: "ไม้เชื้อเพลิง", unit_en: "kg", unit_th: "กก.", value: 0.0304, notes_en: "Excludes biogenic CO₂", notes_th: "ไม่รวมคาร์บอนไดออกไซด์จากชีวภาพ" },
    BuiltinFactor { key: "bagasse", name_en: "Bagasse", name_th: "กากอ้อย", unit_en: "kg", unit_th: "กก.", value: 0.0143, notes_en: "Excludes biogenic CO₂", notes_th: "ไม่รวมคาร์บอนไดออกไซด์จากชีวภาพ" },
    BuiltinFactor { key: "palm_kernel_shell", name_en: "Palm Kernel Shell", name_th: "เปลือกเมล็ดปาล์ม", unit_en: "kg", unit_th: "กก.", value: 0.0352, notes_en: "Excludes biogenic CO₂", notes_th: "ไม่รวมคาร์บอนไดออกไซด์จากชีวภาพ" },
    BuiltinFactor { key: "corn_cob", name_en: "Corn Cob", name_th: "ซังข้าวโพด", unit_en: "kg", unit_th: "กก.", value: 0.0319, notes_en: "Excludes biogenic CO₂", notes_th: "ไม่รวมคาร์บอนไดออกไซด์จากชีวภาพ" },
    BuiltinFactor { key: "biogas", name_en: "Biogas", name_th: "ก๊าซชีวภาพ", unit_en: "m³", unit_th: "ลม.", value: 0.0011, notes_en: "Excludes biogenic CO₂", notes_th: "ไม่รวมคาร์บอนไดออกไซด์จากชีวภาพ" },
    BuiltinFactor { key: "fuel_wood_co2", name_en: "Fuel Wood (CO₂ only)", name_th: "ไม้เชื้อเพลิง (รวม CO₂)", unit_en: "kg", unit_th: "กก.", value: 1.7909, notes_en: "Includes biogenic CO₂", notes_th: "รวมคาร์บอนไดออกไซด์จากชีวภาพ" },
    BuiltinFactor { key: "bagasse_co2", name_en: "Bagasse (CO₂ only)", name_th: "กากอ้อย (รวม CO₂)", unit_en: "kg", unit_th: "กก.", value: 0.753, notes_en: "Includes biogenic CO₂", notes_th: "รวมคาร์บอนไดออกไซด์จากชีวภาพ" },
    BuiltinFactor { key: "palm_kernel_shell_co2", name_en: "Palm Kernel Shell (CO₂ only)", name_th: "เปลือกเมล็ดปาล์ม (รวม CO₂)", unit_en: "kg", unit_th: "กก.", value: 1.853, notes_en: "Includes biogenic CO₂", notes_th: "รวมคาร์บอนไดออกไซด์จากชีวภาพ" },
    BuiltinFactor { key: "corn_cob_co2", name_en: "Corn Cob (CO₂ only)", name_th: "ซังข้าวโพด (รวม CO₂)", unit_en: "kg", unit_th: "กก.", value: 1.678, notes_en: "Includes biogenic CO₂", notes_th: "รวมคาร์บอนไดออกไซด์จากชีวภาพ" },
    BuiltinFactor { key: "biogas_co2", name_en: "Biogas (CO₂ only)", name_th: "ก๊าซชีวภาพ (รวม CO₂)", unit_en: "m³", unit_th: "ลม.", value: 1.1428, notes_en: "Includes biogenic CO₂", notes_th: "รวมคาร์บอนไดออกไซด์จากชีวภาพ" },
];

#[rustfmt::skip]
const PURCHASED_ELECTRICITY: &[BuiltinFactor] = &[
    BuiltinFactor { key: "grid_electricity", name_en: "Grid Mix Electricity (Thailand)", name_th: "ไฟฟ้าจากระบบส่ายไฟ (ประเทศไทย)", unit_en: "kWh", unit_th: "กิโลวัตต์ชั่วโมง", value: 0.4999, notes_en: "Based on 2016-2018 Thai grid mix", notes_th: "อิงจากผลิตภัณฑ์ไฟฟ้าไทย ปี 2559-2561" },
];

#[rustfmt::skip]
const MOBILE_ON_ROAD: &[BuiltinFactor] = &[
    BuiltinFactor { key: "motor_gasoline_uncontrolled", name_en: "Motor Gasoline - Uncontrolled", name_th: "น้ำมันเบนซิน - ไม่มีระบบควบคุม", unit_en: "litre", unit_th: "ลิตร", value: 2.2394, notes_en: "", notes_th: "" },
    BuiltinFactor { key: "motor_gasoline_catalyst", name_en: "Motor Gasoline - Oxidation Catalyst", name_th: "น้ำมันเบนซิน - ตัวเร่งปฏิกิริยาออกซิเดชัน", unit_en: "litre", unit_th: "ลิตร", value: 2.2719, notes_en: "", notes_th: "" },
    BuiltinFactor { key: "motor_gasoline_low_mileage", name_en: "Motor Gasoline - Low Mileage Light Duty (1995+)", name_th: "น้ำมันเบนซิน - รถเบา ไมล์น้อย (1995+)", unit_en: "litre", unit_th: "ลิตร", value: 2.2327, notes_en: "", notes_th: "" },
    BuiltinFactor { key: "gas_diesel_oil_mobile", name_en: "Gas/Diesel Oil", name_th: "น้ำมันดีเซล", unit_en: "litre", unit_th: "ลิตร", value: 2.7406, notes_en: "", notes_th: "" },
    BuiltinFactor { key: "cng", name_en: "Compressed Natural Gas (CNG)", name_th: "ก๊าซธรรมชาติอัด (ซีเอ็นจี)", unit_en: "kg", unit_th: "กก.", value: 2.2609, notes_en: "", notes_th: "" },
    BuiltinFactor { key: "lpg_mobile_litre", name_en: "LPG - Mobile", name_th: "แอลพีจี - ยานพาหนะ", unit_en: "litre", unit_th: "ลิตร", value: 1.7306, notes_en: "", notes_th: "" },
    BuiltinFactor { key: "lpg_mobile_kg", name_en: "LPG - Mobile", name_th: "แอลพีจี - ยานพาหนะ", unit_en: "kg", unit_th: "กก.", value: 3.2049, notes_en: "1 litre = 0.54 kg", notes_th: "1 ลิตร = 0.54 กิโลกรัม" },
];

#[rustfmt::skip]
const OFF_ROAD_DIESEL: &[BuiltinFactor] = &[
    BuiltinFactor { key: "diesel_agriculture", name_en: "Agriculture Equipment", name_th: "เครื่องจักรกลการเกษตร", unit_en: "litre", unit_th: "ลิตร", value: 2.9793, notes_en: "", notes_th: "" },
    BuiltinFactor { key: "diesel_forestry", name_en: "Forestry Equipment", name_th: "เครื่องจักรป่าไม้", unit_en: "litre", unit_th: "ลิตร", value: 2.9793, notes_en: "", notes_th: "" },
    BuiltinFactor { key: "diesel_industrial", name_en: "Industrial Equipment", name_th: "เครื่องจักรอุตสาหกรรม", unit_en: "litre", unit_th: "ลิตร", value: 2.9793, notes_en: "", notes_th: "" },
    BuiltinFactor { key: "diesel_household", name_en: "Household Equipment", name_th: "เครื่องจักรในครัวเรือน", unit_en: "litre", unit_th: "ลิตร", value: 2.9793, notes_en: "", notes_th: "" },
];

#[rustfmt::skip]
const OFF_ROAD_GASOLINE_4S: &[BuiltinFactor] = &[
    BuiltinFactor { key: "gasoline_4s_agriculture", name_en: "Agriculture Equipment", name_th: "เครื่องจักรกลการเกษตร", unit_en: "litre", unit_th: "ลิตร", value: 2.2738, notes_en: "", notes_th: "" },
    BuiltinFactor { key: "gasoline_4s_forestry", name_en: "Forestry Equipment", name_th: "เครื่องจักรป่าไม้", unit_en: "litre", unit_th: "ลิตร", value: 2.1816, notes_en: "", notes_th: "" },
    BuiltinFactor { key: "gasoline_4s_industrial", name_en: "Industrial Equipment", name_th: "เครื่องจักรอุตสาหกรรม", unit_en: "litre", unit_th: "ลิตร", value: 2.2455, notes_en: "", notes_th: "" },
    BuiltinFactor { key: "gasoline_4s_household", name_en: "Household Equipment", name_th: "เครื่องจักรในครัวเรือน", unit_en: "litre", unit_th: "ลิตร", value: 2.3116, notes_en: "", notes_th: "" },
];

#[rustfmt::skip]
const OFF_ROAD_GASOLINE_2S: &[BuiltinFactor] = &[
    BuiltinFactor { key: "gasoline_2s_agriculture", name_en: "Agriculture Equipment", name_th: "เครื่องจักรกลการเกษตร", unit_en: "litre", unit_th: "ลิตร", value: 2.3171, notes_en: "", notes_th: "" },
    BuiltinFactor { key: "gasoline_2s_forestry", name_en: "Forestry Equipment", name_th: "เครื่องจักรป่าไม้", unit_en: "litre", unit_th: "ลิตร", value: 2.3454, notes_en: "", notes_th: "" },
    BuiltinFactor { key: "gasoline_2s_industrial", name_en: "Industrial Equipment", name_th: "เครื่องจักรอุตสาหกรรม", unit_en: "litre", unit_th: "ลิตร", value: 2.3077, notes_en: "", notes_th: "" },
    BuiltinFactor { key: "gasoline_2s_household", name_en: "Household Equipment", name_th: "เครื่องจักรในครัวเรือน", unit_en: "litre", unit_th: "ลิตร", value: 2.3549, notes_en: "", notes_th: "" },
];

#[rustfmt::skip]
const REFRIGERANTS: &[BuiltinFactor] = &[
    BuiltinFactor { key: "r22", name_en: "R-22 (HCFC-22)", name_th: "สารทำความเย็น R-22 (HCFC-22)", unit_en: "kg", unit_th: "กก.", value: 1760.0, notes_en: "GWP: 1,760", notes_th: "ศักยภาพความร้อนโลก: 1,760" },
    BuiltinFactor { key: "r32", name_en: "R-32", name_th: "สารทำความเย็น R-32", unit_en: "kg", unit_th: "กก.", value: 677.0, notes_en: "GWP: 677", notes_th: "ศักยภาพความร้อนโลก: 677" },
    BuiltinFactor { key: "r125", name_en: "R-125", name_th: "สารทำความเย็น R-125", unit_en: "kg", unit_th: "กก.", value: 3170.0, notes_en: "GWP: 3,170", notes_th: "ศักยภาพความร้อนโลก: 3,170" },
    BuiltinFactor { key: "r134", name_en: "R-134", name_th: "สารทำความเย็น R-134", unit_en: "kg", unit_th: "กก.", value: 1120.0, notes_en: "GWP: 1,120", notes_th: "ศักยภาพความร้อนโลก: 1,120" },
    BuiltinFactor { key: "r134a", name_en: "R-134a", name_th: "สารทำความเย็น R-134a", unit_en: "kg", unit_th: "กก.", value: 1300.0, notes_en: "GWP: 1,300", notes_th: "ศักยภาพความร้อนโลก: 1,300" },
    BuiltinFactor { key: "r143", name_en: "R-143", name_th: "สารทำความเย็น R-143", unit_en: "kg", unit_th: "กก.", value: 328.0, notes_en: "GWP: 328", notes_th: "ศักยภาพความร้อนโลก: 328" },
    BuiltinFactor { key: "r143a", name_en: "R-143a", name_th: "สารทำความเย็น R-143a", unit_en: "kg", unit_th: "กก.", value: 4800.0, notes_en: "GWP: 4,800", notes_th: "ศักยภาพความร้อนโลก: 4,800" },
];

#[rustfmt::skip]
const GROUPS: &[BuiltinGroup] = &[
    BuiltinGroup { scope: Scope::Scope1, category: "Stationary Combustion - Fossil Fuels", category_th: "การเผาไหม้แบบนิ่ง - เชื้อเพลิงฟอสซิล", factors: STATIONARY_FOSSIL },
    BuiltinGroup { scope: Scope::Scope1, category: "Stationary Combustion - Biomass", category_th: "การเผาไหม้แบบนิ่ง - ชีวมวล", factors: STATIONARY_BIOMASS },
    BuiltinGroup { scope: Scope::Scope2, category: "Purchased Electricity", category_th: "การใช้ไฟฟ้าที่ซื้อมา", factors: PURCHASED_ELECTRICITY },
    BuiltinGroup { scope: Scope::Scope1, category: "Mobile Combustion - On Road Vehicles", category_th: "การเผาไหม้เคลื่อนที่ - ยานพาหนะบนถนน", factors: MOBILE_ON_ROAD },
    BuiltinGroup { scope: Scope::Scope1, category: "Mobile Combustion - Off Road Equipment (Diesel)", category_th: "การเผาไหม้เคลื่อนที่ - เครื่องจักรนอกถนน (ดีเซล)", factors: OFF_ROAD_DIESEL },
    BuiltinGroup { scope: Scope::Scope1, category: "Mobile Combustion - Off Road Equipment (Gasoline 4-Stroke)", category_th: "การเผาไหม้เคลื่อนที่ - เครื่องจักรนอกถนน (เบนซิน 4 จังหวะ)", factors: OFF_ROAD_GASOLINE_4S },
    BuiltinGroup { scope: Scope::Scope1, category: "Mobile Combustion - Off Road Equipment (Gasoline 2-Stroke)", category_th: "การเผาไหม้เคลื่อนที่ - เครื่องจักรนอกถนน (เบนซิน 2 จังหวะ)", factors: OFF_ROAD_GASOLINE_2S },
    BuiltinGroup { scope: Scope::Scope1, category: "Fugitive Emissions - Refrigerants", category_th: "การปล่อยรั่วไหล - สารทำความเย็น", factors: REFRIGERANTS },
];

/// Activity-type synonyms mapped onto one or more factor keys.
const ALIASES: &[(&str, &[&str])] = &[
    ("electricity", &["grid_electricity"]),
    ("electric", &["grid_electricity"]),
    ("power", &["grid_electricity"]),
    ("ไฟฟ้า", &["grid_electricity"]),
    ("diesel", &["gas_diesel_oil", "gas_diesel_oil_mobile"]),
    ("ดีเซล", &["gas_diesel_oil", "gas_diesel_oil_mobile"]),
    ("gasoline", &["motor_gasoline", "motor_gasoline_uncontrolled"]),
    ("petrol", &["motor_gasoline", "motor_gasoline_uncontrolled"]),
    ("เบนซิน", &["motor_gasoline", "motor_gasoline_uncontrolled"]),
    ("natural_gas", &["natural_gas_scf", "natural_gas_mj"]),
    ("natural gas", &["natural_gas_scf", "natural_gas_mj"]),
    ("ก๊าซธรรมชาติ", &["natural_gas_scf", "natural_gas_mj"]),
    ("lpg", &["lpg_litre", "lpg_kg", "lpg_mobile_litre", "lpg_mobile_kg"]),
    ("แอลพีจี", &["lpg_litre", "lpg_kg", "lpg_mobile_litre", "lpg_mobile_kg"]),
    ("gas", &["natural_gas_scf", "natural_gas_mj"]),
    ("transport", &["motor_gasoline_uncontrolled"]),
    ("การขนส่ง", &["motor_gasoline_uncontrolled"]),
    ("transport_diesel", &["gas_diesel_oil_mobile"]),
    ("hcfc-22", &["r22"]),
    ("hfc-32", &["r32"]),
    ("hfc-125", &["r125"]),
    ("hfc-134", &["r134"]),
    ("hfc-134a", &["r134a"]),
    ("hfc-143", &["r143"]),
    ("hfc-143a", &["r143a"]),
];

/// Builds the dataset for the compiled-in factor table.
pub fn builtin_dataset() -> CatalogDataset {
    let factors = GROUPS
        .iter()
        .flat_map(|group| {
            group.factors.iter().map(move |factor| FactorEntry {
                key: factor.key.to_string(),
                scope: group.scope,
                category: group.category.to_string(),
                category_th: Some(group.category_th.to_string()),
                name_en: factor.name_en.to_string(),
                name_th: Some(factor.name_th.to_string()),
                unit_en: factor.unit_en.to_string(),
                unit_th: Some(factor.unit_th.to_string()),
                value: factor.value,
                notes_en: factor.notes_en.to_string(),
                notes_th: factor.notes_th.to_string(),
                is_bilingual: Some(true),
            })
        })
        .collect();
    let aliases = ALIASES
        .iter()
        .map(|(alias, keys)| ActivityAlias {
            alias: alias.to_string(),
            keys: keys.iter().map(|key| key.to_string()).collect(),
        })
        .collect();
    CatalogDataset {
        schema_version: SchemaVersion::default(),
        source: SOURCE.to_string(),
        source_date: SOURCE_DATE.to_string(),
        factors,
        aliases,
    }
}
