//! Built-in demo catalog.
//!
//! A small deterministic cable catalog used when no `--catalog` file is
//! supplied, covering the HT/LT/control/EHT tiers so every command has
//! something meaningful to rank and price out of the box.

use rust_decimal::Decimal;
use tendermatch_core::{
    Catalog, CatalogProduct, ConductorMaterial, InsulationMaterial, ProductId,
};

struct DemoEntry {
    id: &'static str,
    name: &'static str,
    category: &'static str,
    voltage_volts: u32,
    cross_section_sqmm: f64,
    core_count: u32,
    conductor: ConductorMaterial,
    insulation: InsulationMaterial,
    armour: &'static str,
    temperature_c: u32,
    unit_price: i64,
    lead_time_weeks: u32,
}

const DEMO_ENTRIES: &[DemoEntry] = &[
    DemoEntry {
        id: "cbl-ht-cu-095",
        name: "11kV 3C x 95 sqmm Cu XLPE armoured",
        category: "HT Power Cable",
        voltage_volts: 11_000,
        cross_section_sqmm: 95.0,
        core_count: 3,
        conductor: ConductorMaterial::Copper,
        insulation: InsulationMaterial::Xlpe,
        armour: "GI wire armoured",
        temperature_c: 90,
        unit_price: 2_720,
        lead_time_weeks: 6,
    },
    DemoEntry {
        id: "cbl-ht-cu-120",
        name: "11kV 3C x 120 sqmm Cu XLPE armoured",
        category: "HT Power Cable",
        voltage_volts: 11_000,
        cross_section_sqmm: 120.0,
        core_count: 3,
        conductor: ConductorMaterial::Copper,
        insulation: InsulationMaterial::Xlpe,
        armour: "GI wire armoured",
        temperature_c: 90,
        unit_price: 3_350,
        lead_time_weeks: 6,
    },
    DemoEntry {
        id: "cbl-ht-cu-185",
        name: "11kV 3C x 185 sqmm Cu XLPE armoured",
        category: "HT Power Cable",
        voltage_volts: 11_000,
        cross_section_sqmm: 185.0,
        core_count: 3,
        conductor: ConductorMaterial::Copper,
        insulation: InsulationMaterial::Xlpe,
        armour: "GI wire armoured",
        temperature_c: 90,
        unit_price: 4_650,
        lead_time_weeks: 8,
    },
    DemoEntry {
        id: "cbl-ht-al-095",
        name: "11kV 3C x 95 sqmm Al XLPE armoured",
        category: "HT Power Cable",
        voltage_volts: 11_000,
        cross_section_sqmm: 95.0,
        core_count: 3,
        conductor: ConductorMaterial::Aluminium,
        insulation: InsulationMaterial::Xlpe,
        armour: "GI wire armoured",
        temperature_c: 90,
        unit_price: 1_300,
        lead_time_weeks: 5,
    },
    DemoEntry {
        id: "cbl-ht-al-240",
        name: "11kV 3C x 240 sqmm Al XLPE armoured",
        category: "HT Power Cable",
        voltage_volts: 11_000,
        cross_section_sqmm: 240.0,
        core_count: 3,
        conductor: ConductorMaterial::Aluminium,
        insulation: InsulationMaterial::Xlpe,
        armour: "GI wire armoured",
        temperature_c: 90,
        unit_price: 2_680,
        lead_time_weeks: 8,
    },
    DemoEntry {
        id: "cbl-lt-cu-004",
        name: "1.1kV 3C x 4 sqmm Cu PVC unarmoured",
        category: "LT Power Cable",
        voltage_volts: 1_100,
        cross_section_sqmm: 4.0,
        core_count: 3,
        conductor: ConductorMaterial::Copper,
        insulation: InsulationMaterial::Pvc,
        armour: "Unarmoured",
        temperature_c: 70,
        unit_price: 158,
        lead_time_weeks: 2,
    },
    DemoEntry {
        id: "cbl-ctrl-cu-2p5",
        name: "1.1kV 12C x 2.5 sqmm Cu PVC control armoured",
        category: "Control Cable",
        voltage_volts: 1_100,
        cross_section_sqmm: 2.5,
        core_count: 12,
        conductor: ConductorMaterial::Copper,
        insulation: InsulationMaterial::Pvc,
        armour: "GI steel strip armoured",
        temperature_c: 70,
        unit_price: 295,
        lead_time_weeks: 4,
    },
    DemoEntry {
        id: "cbl-ctrl-cu-1p5",
        name: "1.1kV 7C x 1.5 sqmm Cu XLPE control",
        category: "Control Cable",
        voltage_volts: 1_100,
        cross_section_sqmm: 1.5,
        core_count: 7,
        conductor: ConductorMaterial::Copper,
        insulation: InsulationMaterial::Xlpe,
        armour: "Unarmoured",
        temperature_c: 90,
        unit_price: 210,
        lead_time_weeks: 4,
    },
    DemoEntry {
        id: "cbl-eht-al-300",
        name: "33kV 1C x 300 sqmm Al XLPE armoured",
        category: "EHT Power Cable",
        voltage_volts: 33_000,
        cross_section_sqmm: 300.0,
        core_count: 1,
        conductor: ConductorMaterial::Aluminium,
        insulation: InsulationMaterial::Xlpe,
        armour: "Al wire armoured",
        temperature_c: 90,
        unit_price: 4_200,
        lead_time_weeks: 10,
    },
];

pub fn demo_catalog() -> Catalog {
    let products = DEMO_ENTRIES
        .iter()
        .map(|entry| CatalogProduct {
            id: ProductId(entry.id.to_string()),
            name: entry.name.to_string(),
            category: entry.category.to_string(),
            voltage_volts: Some(entry.voltage_volts),
            cross_section_sqmm: Some(entry.cross_section_sqmm),
            core_count: Some(entry.core_count),
            conductor: Some(entry.conductor),
            insulation: Some(entry.insulation),
            armour: Some(entry.armour.to_string()),
            temperature_c: Some(entry.temperature_c),
            unit_price: Decimal::from(entry.unit_price),
            unit_of_measure: "meter".to_string(),
            lead_time_weeks: entry.lead_time_weeks,
        })
        .collect();
    Catalog::new(products)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_catalog_has_unique_ids() {
        let catalog = demo_catalog();
        let mut ids: Vec<&str> =
            catalog.products().iter().map(|product| product.id.0.as_str()).collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn demo_catalog_covers_all_voltage_tiers() {
        let catalog = demo_catalog();
        let voltages: Vec<u32> =
            catalog.products().iter().filter_map(|product| product.voltage_volts).collect();
        assert!(voltages.iter().any(|&voltage| voltage >= 33_000));
        assert!(voltages.iter().any(|&voltage| voltage == 11_000));
        assert!(voltages.iter().any(|&voltage| voltage <= 1_100));
    }
}
