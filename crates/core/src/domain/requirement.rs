use serde::{Deserialize, Serialize};

/// Conductor material of a cable core.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConductorMaterial {
    Copper,
    Aluminium,
}

impl ConductorMaterial {
    pub fn label(&self) -> &'static str {
        match self {
            ConductorMaterial::Copper => "Copper",
            ConductorMaterial::Aluminium => "Aluminium",
        }
    }

    /// Relative electrical grade. A higher-grade conductor offered in place
    /// of a lower-grade one is an upgrade, never a downgrade.
    pub fn grade(&self) -> u8 {
        match self {
            ConductorMaterial::Copper => 2,
            ConductorMaterial::Aluminium => 1,
        }
    }
}

/// Insulation system of a cable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsulationMaterial {
    Xlpe,
    Pvc,
}

impl InsulationMaterial {
    pub fn label(&self) -> &'static str {
        match self {
            InsulationMaterial::Xlpe => "XLPE",
            InsulationMaterial::Pvc => "PVC",
        }
    }

    /// XLPE outranks PVC on thermal and dielectric performance.
    pub fn grade(&self) -> u8 {
        match self {
            InsulationMaterial::Xlpe => 2,
            InsulationMaterial::Pvc => 1,
        }
    }
}

/// Application class inferred from requirement wording. Drives which
/// attribute weight profile the matcher uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationClass {
    PowerDistribution,
    Control,
    Instrumentation,
    #[default]
    General,
}

impl ApplicationClass {
    pub fn label(&self) -> &'static str {
        match self {
            ApplicationClass::PowerDistribution => "power distribution",
            ApplicationClass::Control => "control",
            ApplicationClass::Instrumentation => "instrumentation",
            ApplicationClass::General => "general",
        }
    }
}

/// Canonical attributes extracted from a free-text buyer requirement.
///
/// Every attribute is optional: `None` means "not specified", which is
/// semantically distinct from a present-but-mismatched value and never
/// penalizes a candidate. Immutable once parsed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RequirementSpec {
    /// The original requirement wording, kept for display and audit.
    pub raw_text: String,
    /// Rated voltage in volts.
    pub voltage_volts: Option<u32>,
    /// Conductor cross-section area in mm².
    pub cross_section_sqmm: Option<f64>,
    /// Number of cores.
    pub core_count: Option<u32>,
    pub conductor: Option<ConductorMaterial>,
    pub insulation: Option<InsulationMaterial>,
    pub armoured: Option<bool>,
    /// Operating temperature rating in °C.
    pub temperature_c: Option<u32>,
    /// Inferred application class; defaults to `General` when no keyword hits.
    pub application: ApplicationClass,
}

impl RequirementSpec {
    /// True when no attribute could be extracted from the text. Downstream
    /// components treat this as "always matching", not as a failure.
    pub fn is_unconstrained(&self) -> bool {
        self.voltage_volts.is_none()
            && self.cross_section_sqmm.is_none()
            && self.core_count.is_none()
            && self.conductor.is_none()
            && self.insulation.is_none()
            && self.armoured.is_none()
            && self.temperature_c.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_spec_is_unconstrained() {
        assert!(RequirementSpec::default().is_unconstrained());
    }

    #[test]
    fn any_attribute_makes_spec_constrained() {
        let spec = RequirementSpec { core_count: Some(3), ..Default::default() };
        assert!(!spec.is_unconstrained());
    }

    #[test]
    fn copper_outranks_aluminium() {
        assert!(ConductorMaterial::Copper.grade() > ConductorMaterial::Aluminium.grade());
    }

    #[test]
    fn xlpe_outranks_pvc() {
        assert!(InsulationMaterial::Xlpe.grade() > InsulationMaterial::Pvc.grade());
    }
}
