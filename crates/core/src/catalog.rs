use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::product::{CatalogProduct, ProductId};
use crate::errors::{DomainError, DomainResult};

/// Read-only product catalog, loaded once at process start.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    products: Vec<CatalogProduct>,
}

impl Catalog {
    pub fn new(products: Vec<CatalogProduct>) -> Self {
        Self { products }
    }

    pub fn find(&self, product_id: &ProductId) -> Option<&CatalogProduct> {
        self.products.iter().find(|product| &product.id == product_id)
    }

    pub fn products(&self) -> &[CatalogProduct] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Load a catalog from its TOML representation:
    ///
    /// ```toml
    /// [[products]]
    /// id = "cbl-ht-095"
    /// name = "11kV 3C x 95 sqmm Cu XLPE"
    /// ...
    /// ```
    ///
    /// Negative list prices are a caller contract violation and rejected.
    pub fn from_toml_str(input: &str) -> DomainResult<Self> {
        let file: CatalogFile =
            toml::from_str(input).map_err(|error| DomainError::CatalogParse(error.to_string()))?;
        let catalog = Self::new(file.products);
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> DomainResult<()> {
        for product in &self.products {
            if product.unit_price < Decimal::ZERO {
                return Err(DomainError::InvariantViolation(format!(
                    "product {} has a negative list price {}",
                    product.id.0, product.unit_price
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    products: Vec<CatalogProduct>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG_TOML: &str = r#"
[[products]]
id = "cbl-ht-095"
name = "11kV 3C x 95 sqmm Cu XLPE armoured"
category = "HT Power Cable"
voltage_volts = 11000
cross_section_sqmm = 95.0
core_count = 3
conductor = "copper"
insulation = "xlpe"
armour = "GI wire armoured"
temperature_c = 90
unit_price = "2720"
unit_of_measure = "meter"
lead_time_weeks = 6

[[products]]
id = "cbl-lt-ctrl-012"
name = "1.1kV 12C x 2.5 sqmm Cu PVC control"
category = "Control Cable"
voltage_volts = 1100
cross_section_sqmm = 2.5
core_count = 12
conductor = "copper"
insulation = "pvc"
armour = "Unarmoured"
temperature_c = 70
unit_price = "310"
unit_of_measure = "meter"
lead_time_weeks = 4
"#;

    #[test]
    fn loads_products_from_toml() {
        let catalog = Catalog::from_toml_str(CATALOG_TOML).unwrap();
        assert_eq!(catalog.len(), 2);

        let found = catalog.find(&ProductId("cbl-ht-095".to_string())).unwrap();
        assert_eq!(found.voltage_volts, Some(11_000));
        assert_eq!(found.is_armoured(), Some(true));
    }

    #[test]
    fn unknown_product_id_is_none() {
        let catalog = Catalog::from_toml_str(CATALOG_TOML).unwrap();
        assert!(catalog.find(&ProductId("missing".to_string())).is_none());
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = Catalog::from_toml_str("products = 3").unwrap_err();
        assert!(matches!(err, DomainError::CatalogParse(_)));
    }

    #[test]
    fn negative_list_price_is_rejected() {
        let toml = CATALOG_TOML.replace("unit_price = \"310\"", "unit_price = \"-310\"");
        let err = Catalog::from_toml_str(&toml).unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
    }
}
