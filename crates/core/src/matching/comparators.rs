//! Per-attribute comparison rules.
//!
//! A closed set of comparator variants dispatched by [`AttributeKind`], one
//! pure function per attribute. Every rule produces a [`SpecAttributeMatch`]
//! with a 0–100 score, a status, and a rationale a buyer can read back in an
//! audit. Two rules apply to every attribute before its own logic runs: an
//! unset requirement can never penalize a candidate (score 100), and a set
//! requirement the datasheet cannot answer scores 0.

use serde::{Deserialize, Serialize};

use crate::domain::product::CatalogProduct;
use crate::domain::requirement::RequirementSpec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeKind {
    Voltage,
    CrossSection,
    CoreCount,
    Conductor,
    Insulation,
    Armour,
    Temperature,
}

impl AttributeKind {
    pub const ALL: [AttributeKind; 7] = [
        AttributeKind::Voltage,
        AttributeKind::CrossSection,
        AttributeKind::CoreCount,
        AttributeKind::Conductor,
        AttributeKind::Insulation,
        AttributeKind::Armour,
        AttributeKind::Temperature,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AttributeKind::Voltage => "voltage rating",
            AttributeKind::CrossSection => "cross-section area",
            AttributeKind::CoreCount => "core count",
            AttributeKind::Conductor => "conductor material",
            AttributeKind::Insulation => "insulation material",
            AttributeKind::Armour => "armour",
            AttributeKind::Temperature => "temperature rating",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    ExactMatch,
    NotSpecified,
    NotAvailable,
    ExceedsRequirement,
    BelowRequirement,
    UpgradedMaterial,
    DowngradedMaterial,
    AcceptableLarger,
    MarginalLarger,
    Oversized,
    MarginalSmaller,
    Undersized,
    AcceptableMoreCores,
    ExcessiveCores,
    InsufficientCores,
    MissingArmour,
    HasArmour,
}

/// Outcome of comparing one requirement attribute against one catalog
/// product attribute. Created fresh per (requirement, candidate) pair.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpecAttributeMatch {
    pub attribute: AttributeKind,
    pub required: Option<String>,
    pub offered: Option<String>,
    pub status: MatchStatus,
    pub score: f64,
    /// Deviation magnitude where meaningful: percent for numeric sizes,
    /// extra-core count for cores.
    pub deviation: Option<f64>,
    pub rationale: String,
}

/// Compare one attribute of a requirement against a catalog product.
pub fn compare(
    attribute: AttributeKind,
    requirement: &RequirementSpec,
    product: &CatalogProduct,
) -> SpecAttributeMatch {
    match attribute {
        AttributeKind::Voltage => compare_voltage(requirement, product),
        AttributeKind::CrossSection => compare_cross_section(requirement, product),
        AttributeKind::CoreCount => compare_core_count(requirement, product),
        AttributeKind::Conductor => compare_conductor(requirement, product),
        AttributeKind::Insulation => compare_insulation(requirement, product),
        AttributeKind::Armour => compare_armour(requirement, product),
        AttributeKind::Temperature => compare_temperature(requirement, product),
    }
}

fn not_specified(attribute: AttributeKind, offered: Option<String>) -> SpecAttributeMatch {
    SpecAttributeMatch {
        attribute,
        required: None,
        offered,
        status: MatchStatus::NotSpecified,
        score: 100.0,
        deviation: None,
        rationale: format!("{} not specified in requirement; no constraint", attribute.label()),
    }
}

fn not_available(attribute: AttributeKind, required: String) -> SpecAttributeMatch {
    SpecAttributeMatch {
        attribute,
        required: Some(required),
        offered: None,
        status: MatchStatus::NotAvailable,
        score: 0.0,
        deviation: None,
        rationale: format!("{} required but not stated for this product", attribute.label()),
    }
}

fn compare_voltage(requirement: &RequirementSpec, product: &CatalogProduct) -> SpecAttributeMatch {
    let kind = AttributeKind::Voltage;
    let Some(required) = requirement.voltage_volts else {
        return not_specified(kind, product.voltage_volts.map(format_volts));
    };
    let Some(offered) = product.voltage_volts else {
        return not_available(kind, format_volts(required));
    };

    let (status, score, rationale) = if offered == required {
        (MatchStatus::ExactMatch, 100.0, format!("voltage rating {} as required", format_volts(offered)))
    } else if offered > required {
        // Excess voltage grade is safety margin, never a penalty.
        (
            MatchStatus::ExceedsRequirement,
            100.0,
            format!(
                "rated {} against required {}; extra voltage grade is safety margin",
                format_volts(offered),
                format_volts(required)
            ),
        )
    } else {
        (
            MatchStatus::BelowRequirement,
            0.0,
            format!(
                "rated {} below required {}; an under-rated cable is never acceptable",
                format_volts(offered),
                format_volts(required)
            ),
        )
    };

    SpecAttributeMatch {
        attribute: kind,
        required: Some(format_volts(required)),
        offered: Some(format_volts(offered)),
        status,
        score,
        deviation: Some(deviation_pct(required as f64, offered as f64)),
        rationale,
    }
}

fn compare_cross_section(
    requirement: &RequirementSpec,
    product: &CatalogProduct,
) -> SpecAttributeMatch {
    let kind = AttributeKind::CrossSection;
    let Some(required) = requirement.cross_section_sqmm else {
        return not_specified(kind, product.cross_section_sqmm.map(format_sqmm));
    };
    let Some(offered) = product.cross_section_sqmm else {
        return not_available(kind, format_sqmm(required));
    };

    let deviation = deviation_pct(required, offered);
    let (status, score, rationale) = if deviation == 0.0 {
        (MatchStatus::ExactMatch, 100.0, format!("{} exactly as required", format_sqmm(offered)))
    } else if deviation > 0.0 {
        // Larger conductor: tolerated in bands, wasteful beyond them.
        if deviation <= 15.0 {
            (
                MatchStatus::AcceptableLarger,
                90.0 - deviation,
                format!("{:.1}% larger than required; acceptable oversizing", deviation),
            )
        } else if deviation <= 30.0 {
            (
                MatchStatus::MarginalLarger,
                70.0 - (deviation - 15.0),
                format!("{:.1}% larger than required; marginal oversizing adds cost", deviation),
            )
        } else {
            (
                MatchStatus::Oversized,
                40.0,
                format!("{:.1}% larger than required; substantially oversized", deviation),
            )
        }
    } else {
        // Smaller conductor: current capacity shortfall, hard floor at -10%.
        let shortfall = -deviation;
        if shortfall <= 10.0 {
            (
                MatchStatus::MarginalSmaller,
                60.0 - 2.0 * shortfall,
                format!("{:.1}% smaller than required; verify derating before accepting", shortfall),
            )
        } else {
            (
                MatchStatus::Undersized,
                0.0,
                format!(
                    "{:.1}% smaller than required; insufficient current capacity is never acceptable",
                    shortfall
                ),
            )
        }
    };

    SpecAttributeMatch {
        attribute: kind,
        required: Some(format_sqmm(required)),
        offered: Some(format_sqmm(offered)),
        status,
        score,
        deviation: Some(deviation),
        rationale,
    }
}

fn compare_core_count(requirement: &RequirementSpec, product: &CatalogProduct) -> SpecAttributeMatch {
    let kind = AttributeKind::CoreCount;
    let Some(required) = requirement.core_count else {
        return not_specified(kind, product.core_count.map(|cores| cores.to_string()));
    };
    let Some(offered) = product.core_count else {
        return not_available(kind, required.to_string());
    };

    let (status, score, deviation, rationale) = if offered == required {
        (MatchStatus::ExactMatch, 100.0, None, format!("{offered} cores as required"))
    } else if offered > required {
        let extra = offered - required;
        if extra <= 2 {
            (
                MatchStatus::AcceptableMoreCores,
                85.0 - 10.0 * extra as f64,
                Some(extra as f64),
                format!("{extra} spare core(s); usable but pays for unused copper"),
            )
        } else {
            (
                MatchStatus::ExcessiveCores,
                50.0,
                Some(extra as f64),
                format!("{extra} spare cores; far more than the application needs"),
            )
        }
    } else {
        (
            MatchStatus::InsufficientCores,
            0.0,
            Some((required - offered) as f64),
            format!("only {offered} of {required} required cores; circuit cannot be wired"),
        )
    };

    SpecAttributeMatch {
        attribute: kind,
        required: Some(required.to_string()),
        offered: Some(offered.to_string()),
        status,
        score,
        deviation,
        rationale,
    }
}

fn compare_conductor(requirement: &RequirementSpec, product: &CatalogProduct) -> SpecAttributeMatch {
    let kind = AttributeKind::Conductor;
    let Some(required) = requirement.conductor else {
        return not_specified(kind, product.conductor.map(|material| material.label().to_string()));
    };
    let Some(offered) = product.conductor else {
        return not_available(kind, required.label().to_string());
    };

    let (status, score, rationale) = if offered == required {
        (MatchStatus::ExactMatch, 100.0, format!("{} conductor as required", offered.label()))
    } else if offered.grade() > required.grade() {
        (
            MatchStatus::UpgradedMaterial,
            75.0,
            format!(
                "{} offered for required {}; an upgrade electrically, usually at a price premium",
                offered.label(),
                required.label()
            ),
        )
    } else {
        (
            MatchStatus::DowngradedMaterial,
            0.0,
            format!(
                "{} offered for required {}; a conductor downgrade is not acceptable",
                offered.label(),
                required.label()
            ),
        )
    };

    SpecAttributeMatch {
        attribute: kind,
        required: Some(required.label().to_string()),
        offered: Some(offered.label().to_string()),
        status,
        score,
        deviation: None,
        rationale,
    }
}

fn compare_insulation(requirement: &RequirementSpec, product: &CatalogProduct) -> SpecAttributeMatch {
    let kind = AttributeKind::Insulation;
    let Some(required) = requirement.insulation else {
        return not_specified(kind, product.insulation.map(|material| material.label().to_string()));
    };
    let Some(offered) = product.insulation else {
        return not_available(kind, required.label().to_string());
    };

    let (status, score, rationale) = if offered == required {
        (MatchStatus::ExactMatch, 100.0, format!("{} insulation as required", offered.label()))
    } else if offered.grade() > required.grade() {
        (
            MatchStatus::UpgradedMaterial,
            80.0,
            format!(
                "{} offered for required {}; thermally superior insulation",
                offered.label(),
                required.label()
            ),
        )
    } else {
        (
            MatchStatus::DowngradedMaterial,
            0.0,
            format!(
                "{} offered for required {}; an insulation downgrade is not acceptable",
                offered.label(),
                required.label()
            ),
        )
    };

    SpecAttributeMatch {
        attribute: kind,
        required: Some(required.label().to_string()),
        offered: Some(offered.label().to_string()),
        status,
        score,
        deviation: None,
        rationale,
    }
}

fn compare_armour(requirement: &RequirementSpec, product: &CatalogProduct) -> SpecAttributeMatch {
    let kind = AttributeKind::Armour;
    let Some(required) = requirement.armoured else {
        return not_specified(kind, product.armour.clone());
    };
    let required_label = armour_label(required).to_string();
    let Some(offered) = product.is_armoured() else {
        return not_available(kind, required_label);
    };

    let (status, score, rationale) = if offered == required {
        (MatchStatus::ExactMatch, 100.0, format!("{} as required", armour_label(offered)))
    } else if required && !offered {
        (
            MatchStatus::MissingArmour,
            0.0,
            "armour required but product is unarmoured; mechanical protection cannot be waived"
                .to_string(),
        )
    } else {
        (
            MatchStatus::HasArmour,
            90.0,
            "armoured product offered where none was required; acceptable extra protection"
                .to_string(),
        )
    };

    SpecAttributeMatch {
        attribute: kind,
        required: Some(required_label),
        offered: product.armour.clone(),
        status,
        score,
        deviation: None,
        rationale,
    }
}

fn compare_temperature(
    requirement: &RequirementSpec,
    product: &CatalogProduct,
) -> SpecAttributeMatch {
    let kind = AttributeKind::Temperature;
    let Some(required) = requirement.temperature_c else {
        return not_specified(kind, product.temperature_c.map(format_celsius));
    };
    let Some(offered) = product.temperature_c else {
        return not_available(kind, format_celsius(required));
    };

    let (status, score, rationale) = if offered == required {
        (MatchStatus::ExactMatch, 100.0, format!("rated {} as required", format_celsius(offered)))
    } else if offered > required {
        (
            MatchStatus::ExceedsRequirement,
            100.0,
            format!(
                "rated {} against required {}; thermal headroom",
                format_celsius(offered),
                format_celsius(required)
            ),
        )
    } else {
        (
            MatchStatus::BelowRequirement,
            0.0,
            format!(
                "rated {} below required {}; insulation would run over temperature",
                format_celsius(offered),
                format_celsius(required)
            ),
        )
    };

    SpecAttributeMatch {
        attribute: kind,
        required: Some(format_celsius(required)),
        offered: Some(format_celsius(offered)),
        status,
        score,
        deviation: Some(deviation_pct(required as f64, offered as f64)),
        rationale,
    }
}

/// Signed percentage deviation of `offered` from `required`; 0 when the
/// reference is 0.
fn deviation_pct(required: f64, offered: f64) -> f64 {
    if required == 0.0 {
        return 0.0;
    }
    (offered - required) / required * 100.0
}

fn format_volts(volts: u32) -> String {
    format!("{volts} V")
}

fn format_celsius(degrees: u32) -> String {
    format!("{degrees} °C")
}

fn format_sqmm(area: f64) -> String {
    if area.fract() == 0.0 {
        format!("{} mm²", area as i64)
    } else {
        format!("{area} mm²")
    }
}

fn armour_label(armoured: bool) -> &'static str {
    if armoured {
        "armoured"
    } else {
        "unarmoured"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::ProductId;
    use crate::domain::requirement::{ConductorMaterial, InsulationMaterial};
    use rust_decimal::Decimal;

    fn requirement() -> RequirementSpec {
        RequirementSpec {
            raw_text: "3 core 95 sq mm copper XLPE cable 11kV armoured".to_string(),
            voltage_volts: Some(11_000),
            cross_section_sqmm: Some(95.0),
            core_count: Some(3),
            conductor: Some(ConductorMaterial::Copper),
            insulation: Some(InsulationMaterial::Xlpe),
            armoured: Some(true),
            temperature_c: None,
            application: Default::default(),
        }
    }

    fn product() -> CatalogProduct {
        CatalogProduct {
            id: ProductId("cbl-ht-095".to_string()),
            name: "11kV 3C x 95 sqmm Cu XLPE armoured".to_string(),
            category: "HT Power Cable".to_string(),
            voltage_volts: Some(11_000),
            cross_section_sqmm: Some(95.0),
            core_count: Some(3),
            conductor: Some(ConductorMaterial::Copper),
            insulation: Some(InsulationMaterial::Xlpe),
            armour: Some("GI wire armoured".to_string()),
            temperature_c: Some(90),
            unit_price: Decimal::from(2720),
            unit_of_measure: "meter".to_string(),
            lead_time_weeks: 6,
        }
    }

    #[test]
    fn unset_requirement_attribute_scores_100_regardless_of_candidate() {
        let requirement = RequirementSpec::default();
        for attribute in AttributeKind::ALL {
            let result = compare(attribute, &requirement, &product());
            assert_eq!(result.status, MatchStatus::NotSpecified, "{attribute:?}");
            assert_eq!(result.score, 100.0, "{attribute:?}");
        }
    }

    #[test]
    fn set_requirement_against_silent_datasheet_scores_0() {
        let mut bare = product();
        bare.voltage_volts = None;
        bare.cross_section_sqmm = None;
        bare.core_count = None;
        bare.conductor = None;
        bare.insulation = None;
        bare.armour = None;
        bare.temperature_c = None;

        let mut requirement = requirement();
        requirement.temperature_c = Some(90);
        for attribute in AttributeKind::ALL {
            let result = compare(attribute, &requirement, &bare);
            assert_eq!(result.status, MatchStatus::NotAvailable, "{attribute:?}");
            assert_eq!(result.score, 0.0, "{attribute:?}");
        }
    }

    #[test]
    fn exact_product_scores_100_on_every_specified_attribute() {
        for attribute in AttributeKind::ALL {
            let result = compare(attribute, &requirement(), &product());
            assert_eq!(result.score, 100.0, "{attribute:?}");
        }
    }

    #[test]
    fn voltage_excess_is_full_credit_and_shortfall_is_zero() {
        let mut higher = product();
        higher.voltage_volts = Some(33_000);
        let result = compare(AttributeKind::Voltage, &requirement(), &higher);
        assert_eq!(result.status, MatchStatus::ExceedsRequirement);
        assert_eq!(result.score, 100.0);

        let mut lower = product();
        lower.voltage_volts = Some(3_300);
        let result = compare(AttributeKind::Voltage, &requirement(), &lower);
        assert_eq!(result.status, MatchStatus::BelowRequirement);
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn cross_section_larger_bands() {
        // +10.5% -> acceptable band, 90 - 10.5
        let mut larger = product();
        larger.cross_section_sqmm = Some(105.0);
        let result = compare(AttributeKind::CrossSection, &requirement(), &larger);
        assert_eq!(result.status, MatchStatus::AcceptableLarger);
        assert!((result.score - (90.0 - 10.526315789473685)).abs() < 1e-9);

        // +26.3% (120 for 95) -> marginal band, score ≈ 58.7
        larger.cross_section_sqmm = Some(120.0);
        let result = compare(AttributeKind::CrossSection, &requirement(), &larger);
        assert_eq!(result.status, MatchStatus::MarginalLarger);
        assert!((result.score - 58.68421052631579).abs() < 1e-9);

        // +31.6% -> flat 40
        larger.cross_section_sqmm = Some(125.0);
        let result = compare(AttributeKind::CrossSection, &requirement(), &larger);
        assert_eq!(result.status, MatchStatus::Oversized);
        assert_eq!(result.score, 40.0);
    }

    #[test]
    fn cross_section_smaller_bands() {
        // -5.3% (90 for 95) -> 60 - 2*5.26..
        let mut smaller = product();
        smaller.cross_section_sqmm = Some(90.0);
        let result = compare(AttributeKind::CrossSection, &requirement(), &smaller);
        assert_eq!(result.status, MatchStatus::MarginalSmaller);
        assert!((result.score - (60.0 - 2.0 * 5.263157894736842)).abs() < 1e-9);

        // -21% -> undersized, never acceptable
        smaller.cross_section_sqmm = Some(75.0);
        let result = compare(AttributeKind::CrossSection, &requirement(), &smaller);
        assert_eq!(result.status, MatchStatus::Undersized);
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn core_count_bands() {
        let mut more = product();
        more.core_count = Some(4);
        let result = compare(AttributeKind::CoreCount, &requirement(), &more);
        assert_eq!(result.status, MatchStatus::AcceptableMoreCores);
        assert_eq!(result.score, 75.0);

        more.core_count = Some(5);
        assert_eq!(compare(AttributeKind::CoreCount, &requirement(), &more).score, 65.0);

        more.core_count = Some(7);
        let result = compare(AttributeKind::CoreCount, &requirement(), &more);
        assert_eq!(result.status, MatchStatus::ExcessiveCores);
        assert_eq!(result.score, 50.0);

        more.core_count = Some(2);
        let result = compare(AttributeKind::CoreCount, &requirement(), &more);
        assert_eq!(result.status, MatchStatus::InsufficientCores);
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn material_upgrades_are_partial_credit_and_downgrades_zero() {
        let mut aluminium_required = requirement();
        aluminium_required.conductor = Some(ConductorMaterial::Aluminium);
        let result = compare(AttributeKind::Conductor, &aluminium_required, &product());
        assert_eq!(result.status, MatchStatus::UpgradedMaterial);
        assert_eq!(result.score, 75.0);

        let mut aluminium_product = product();
        aluminium_product.conductor = Some(ConductorMaterial::Aluminium);
        let result = compare(AttributeKind::Conductor, &requirement(), &aluminium_product);
        assert_eq!(result.status, MatchStatus::DowngradedMaterial);
        assert_eq!(result.score, 0.0);

        let mut pvc_required = requirement();
        pvc_required.insulation = Some(InsulationMaterial::Pvc);
        let result = compare(AttributeKind::Insulation, &pvc_required, &product());
        assert_eq!(result.status, MatchStatus::UpgradedMaterial);
        assert_eq!(result.score, 80.0);
    }

    #[test]
    fn armour_mismatch_asymmetry() {
        let mut unarmoured = product();
        unarmoured.armour = Some("Unarmoured".to_string());
        let result = compare(AttributeKind::Armour, &requirement(), &unarmoured);
        assert_eq!(result.status, MatchStatus::MissingArmour);
        assert_eq!(result.score, 0.0);

        let mut no_armour_required = requirement();
        no_armour_required.armoured = Some(false);
        let result = compare(AttributeKind::Armour, &no_armour_required, &product());
        assert_eq!(result.status, MatchStatus::HasArmour);
        assert_eq!(result.score, 90.0);
    }

    #[test]
    fn temperature_headroom_is_full_credit() {
        let mut requirement = requirement();
        requirement.temperature_c = Some(70);
        let result = compare(AttributeKind::Temperature, &requirement, &product());
        assert_eq!(result.status, MatchStatus::ExceedsRequirement);
        assert_eq!(result.score, 100.0);

        requirement.temperature_c = Some(105);
        let result = compare(AttributeKind::Temperature, &requirement, &product());
        assert_eq!(result.status, MatchStatus::BelowRequirement);
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn status_serializes_in_screaming_snake_case() {
        let json = serde_json::to_string(&MatchStatus::AcceptableLarger).unwrap();
        assert_eq!(json, "\"ACCEPTABLE_LARGER\"");
    }
}
