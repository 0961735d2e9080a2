use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::requirement::{ConductorMaterial, InsulationMaterial};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub String);

/// A static, read-only catalog entry.
///
/// Attributes mirror [`RequirementSpec`](crate::domain::RequirementSpec) but
/// hold provided values; `None` here means the vendor datasheet does not
/// state the attribute. Loaded once at startup and never mutated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogProduct {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub voltage_volts: Option<u32>,
    pub cross_section_sqmm: Option<f64>,
    pub core_count: Option<u32>,
    pub conductor: Option<ConductorMaterial>,
    pub insulation: Option<InsulationMaterial>,
    /// Vendor armour descriptor as printed in the datasheet, e.g.
    /// "GI wire armoured" or "Unarmoured".
    pub armour: Option<String>,
    pub temperature_c: Option<u32>,
    /// List price per unit of measure.
    pub unit_price: Decimal,
    pub unit_of_measure: String,
    pub lead_time_weeks: u32,
}

impl CatalogProduct {
    /// Interpret the vendor's free-text armour descriptor as a boolean.
    ///
    /// "unarmoured"/"unarmored" wins over the bare "armour" substring it
    /// contains; "swa" (steel wire armour) also counts as armoured.
    pub fn is_armoured(&self) -> Option<bool> {
        let descriptor = self.armour.as_deref()?.to_lowercase();
        if descriptor.contains("unarmour") || descriptor.contains("unarmor") {
            return Some(false);
        }
        Some(descriptor.contains("armour") || descriptor.contains("armor") || descriptor.contains("swa"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product_with_armour(descriptor: Option<&str>) -> CatalogProduct {
        CatalogProduct {
            id: ProductId("prod-1".to_string()),
            name: "Test cable".to_string(),
            category: "HT Power Cable".to_string(),
            voltage_volts: Some(11_000),
            cross_section_sqmm: Some(95.0),
            core_count: Some(3),
            conductor: Some(ConductorMaterial::Copper),
            insulation: Some(InsulationMaterial::Xlpe),
            armour: descriptor.map(str::to_string),
            temperature_c: Some(90),
            unit_price: Decimal::from(2700),
            unit_of_measure: "meter".to_string(),
            lead_time_weeks: 6,
        }
    }

    #[test]
    fn armoured_descriptor_reads_true() {
        assert_eq!(product_with_armour(Some("GI wire ARMOURED")).is_armoured(), Some(true));
        assert_eq!(product_with_armour(Some("SWA construction")).is_armoured(), Some(true));
    }

    #[test]
    fn unarmoured_wins_over_contained_armour_substring() {
        assert_eq!(product_with_armour(Some("Unarmoured")).is_armoured(), Some(false));
    }

    #[test]
    fn missing_descriptor_is_unknown() {
        assert_eq!(product_with_armour(None).is_armoured(), None);
    }

    #[test]
    fn descriptor_without_armour_terms_reads_false() {
        assert_eq!(product_with_armour(Some("PVC outer sheath")).is_armoured(), Some(false));
    }
}
