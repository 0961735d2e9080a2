//! Attribute importance weight profiles.
//!
//! One profile per application class. Weights are in [0, 100] and express
//! domain priority, not probabilities; the matcher normalizes by the sum of
//! weights actually in play, so profiles need not sum to any fixed total.

use serde::{Deserialize, Serialize};

use crate::domain::requirement::ApplicationClass;
use crate::matching::comparators::AttributeKind;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeightProfile {
    pub voltage: f64,
    pub cross_section: f64,
    pub core_count: f64,
    pub conductor: f64,
    pub insulation: f64,
    pub armour: f64,
    pub temperature: f64,
}

/// Feeders and distribution runs: conductor material and electrical
/// headroom dominate; core count barely matters.
pub const POWER_DISTRIBUTION_WEIGHTS: WeightProfile = WeightProfile {
    voltage: 90.0,
    cross_section: 85.0,
    core_count: 40.0,
    conductor: 95.0,
    insulation: 70.0,
    armour: 60.0,
    temperature: 50.0,
};

/// Control wiring: getting the core count right is the whole job.
pub const CONTROL_WEIGHTS: WeightProfile = WeightProfile {
    voltage: 60.0,
    cross_section: 70.0,
    core_count: 95.0,
    conductor: 50.0,
    insulation: 55.0,
    armour: 45.0,
    temperature: 40.0,
};

/// Instrumentation/signal runs: pairs and insulation quality first.
pub const INSTRUMENTATION_WEIGHTS: WeightProfile = WeightProfile {
    voltage: 50.0,
    cross_section: 55.0,
    core_count: 85.0,
    conductor: 45.0,
    insulation: 75.0,
    armour: 40.0,
    temperature: 60.0,
};

pub const GENERAL_WEIGHTS: WeightProfile = WeightProfile {
    voltage: 75.0,
    cross_section: 75.0,
    core_count: 70.0,
    conductor: 65.0,
    insulation: 60.0,
    armour: 50.0,
    temperature: 45.0,
};

impl WeightProfile {
    pub fn for_application(application: ApplicationClass) -> &'static WeightProfile {
        match application {
            ApplicationClass::PowerDistribution => &POWER_DISTRIBUTION_WEIGHTS,
            ApplicationClass::Control => &CONTROL_WEIGHTS,
            ApplicationClass::Instrumentation => &INSTRUMENTATION_WEIGHTS,
            ApplicationClass::General => &GENERAL_WEIGHTS,
        }
    }

    pub fn weight(&self, attribute: AttributeKind) -> f64 {
        match attribute {
            AttributeKind::Voltage => self.voltage,
            AttributeKind::CrossSection => self.cross_section,
            AttributeKind::CoreCount => self.core_count,
            AttributeKind::Conductor => self.conductor,
            AttributeKind::Insulation => self.insulation,
            AttributeKind::Armour => self.armour,
            AttributeKind::Temperature => self.temperature,
        }
    }
}
