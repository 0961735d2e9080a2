//! Multi-factor recommendation rubric.
//!
//! Folds the spec-match score, price competitiveness, vendor credibility,
//! and test coverage into one 0–100 score with a verdict and risk level.
//! Weights are fixed and must total 100; spec match dominates because an
//! unsuitable product cannot be salvaged by good pricing.

use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};
use crate::pricing::analysis::PriceCategory;

/// Rubric component weights, in percent of the overall score.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RubricWeights {
    pub spec_match: f64,
    pub price_competitiveness: f64,
    pub credibility: f64,
    pub test_coverage: f64,
}

pub const DEFAULT_RUBRIC_WEIGHTS: RubricWeights = RubricWeights {
    spec_match: 50.0,
    price_competitiveness: 25.0,
    credibility: 18.0,
    test_coverage: 7.0,
};

impl RubricWeights {
    pub fn total(&self) -> f64 {
        self.spec_match + self.price_competitiveness + self.credibility + self.test_coverage
    }
}

impl Default for RubricWeights {
    fn default() -> Self {
        DEFAULT_RUBRIC_WEIGHTS
    }
}

/// Raw component inputs; each is clamped to [0, 100] before weighting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RubricInputs {
    pub spec_match_score: f64,
    pub price_competitiveness_score: f64,
    pub credibility_score: f64,
    pub test_coverage_score: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn from_score(score: f64) -> Self {
        if score >= 75.0 {
            RiskLevel::Low
        } else if score >= 50.0 {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }
}

/// Procurement verdict bands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Go,
    Evaluate,
    EvaluateAlternatives,
    NoGo,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RubricScore {
    /// Weighted overall score in [0, 100].
    pub overall_score: f64,
    pub verdict: Verdict,
    pub risk_level: RiskLevel,
    pub recommendation: String,
    /// Component inputs after clamping, for audit.
    pub components: RubricInputs,
}

/// Rubric aggregator with validated weights.
#[derive(Clone, Debug)]
pub struct RubricAggregator {
    weights: RubricWeights,
}

impl Default for RubricAggregator {
    fn default() -> Self {
        Self { weights: RubricWeights::default() }
    }
}

impl RubricAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom weights; the weights of a rubric must total 100.
    pub fn with_weights(weights: RubricWeights) -> DomainResult<Self> {
        if (weights.total() - 100.0).abs() > 1e-9 {
            return Err(DomainError::InvariantViolation(format!(
                "rubric weights must total 100, got {}",
                weights.total()
            )));
        }
        Ok(Self { weights })
    }

    pub fn aggregate(&self, inputs: &RubricInputs) -> RubricScore {
        let components = RubricInputs {
            spec_match_score: clamp_score(inputs.spec_match_score),
            price_competitiveness_score: clamp_score(inputs.price_competitiveness_score),
            credibility_score: clamp_score(inputs.credibility_score),
            test_coverage_score: clamp_score(inputs.test_coverage_score),
        };

        let overall_score = (components.spec_match_score * self.weights.spec_match
            + components.price_competitiveness_score * self.weights.price_competitiveness
            + components.credibility_score * self.weights.credibility
            + components.test_coverage_score * self.weights.test_coverage)
            / 100.0;

        RubricScore {
            overall_score,
            verdict: verdict_for(overall_score),
            risk_level: RiskLevel::from_score(overall_score),
            recommendation: recommendation_for(overall_score).to_string(),
            components,
        }
    }
}

fn verdict_for(score: f64) -> Verdict {
    if score >= 65.0 {
        Verdict::Go
    } else if score >= 50.0 {
        Verdict::Evaluate
    } else if score >= 35.0 {
        Verdict::EvaluateAlternatives
    } else {
        Verdict::NoGo
    }
}

fn recommendation_for(score: f64) -> &'static str {
    if score >= 80.0 {
        "Strongly recommended: specification and commercial terms both fit; proceed to award."
    } else if score >= 65.0 {
        "Recommended: good overall fit; proceed with standard negotiation."
    } else if score >= 50.0 {
        "Conditional: acceptable fit; evaluate the deviations and negotiate before committing."
    } else if score >= 35.0 {
        "Conditional: weak fit; evaluate alternative candidates before committing."
    } else {
        "Not recommended: the offer does not fit the requirement; do not proceed."
    }
}

/// Fixed point value each price tier contributes to the price
/// competitiveness component.
pub fn price_competitiveness_points(category: PriceCategory) -> f64 {
    match category {
        PriceCategory::BelowAverage => 90.0,
        PriceCategory::BelowMarket => 85.0,
        PriceCategory::Competitive => 80.0,
        PriceCategory::AboveAverage => 60.0,
        PriceCategory::AboveMarket => 50.0,
        PriceCategory::Overpriced => 40.0,
        PriceCategory::SuspiciouslyLow => 35.0,
        PriceCategory::SignificantlyOverpriced => 20.0,
    }
}

/// Average the tier points across all line items of an RFP; no line items
/// means no price signal at all.
pub fn average_price_points(categories: &[PriceCategory]) -> f64 {
    if categories.is_empty() {
        return 0.0;
    }
    categories.iter().map(|&category| price_competitiveness_points(category)).sum::<f64>()
        / categories.len() as f64
}

/// Map test-cost share of project value to a coverage score. The sweet spot
/// is 2–5%; spending either too little or far too much on testing is a
/// quality signal in itself.
pub fn test_coverage_score(pct_of_project: f64) -> f64 {
    if (2.0..=5.0).contains(&pct_of_project) {
        100.0
    } else if (1.0..2.0).contains(&pct_of_project) {
        70.0
    } else if pct_of_project > 5.0 && pct_of_project <= 8.0 {
        80.0
    } else if pct_of_project > 8.0 {
        60.0
    } else {
        40.0
    }
}

fn clamp_score(score: f64) -> f64 {
    score.clamp(0.0, 100.0)
}
