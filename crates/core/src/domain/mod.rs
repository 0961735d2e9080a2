pub mod product;
pub mod requirement;

pub use product::{CatalogProduct, ProductId};
pub use requirement::{ApplicationClass, ConductorMaterial, InsulationMaterial, RequirementSpec};
