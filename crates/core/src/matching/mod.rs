//! Tolerance-aware weighted specification matching.
//!
//! Scores every catalog candidate against a parsed requirement, attribute by
//! attribute, and ranks candidates by a weighted overall score. The weighted
//! sum runs only over attributes the requirement actually specifies; an
//! unconstrained requirement matches everything at 100.

pub mod comparators;
pub mod compromise;
pub mod weights;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::domain::product::{CatalogProduct, ProductId};
use crate::domain::requirement::RequirementSpec;

pub use comparators::{AttributeKind, MatchStatus, SpecAttributeMatch};
pub use compromise::{CompromiseEntry, CompromiseReport};
pub use weights::WeightProfile;

/// Overall match quality bands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchCategory {
    Excellent,
    Good,
    Acceptable,
    Marginal,
    Poor,
}

impl MatchCategory {
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            MatchCategory::Excellent
        } else if score >= 75.0 {
            MatchCategory::Good
        } else if score >= 60.0 {
            MatchCategory::Acceptable
        } else if score >= 40.0 {
            MatchCategory::Marginal
        } else {
            MatchCategory::Poor
        }
    }
}

/// All attribute comparisons for one (requirement, candidate) pair, folded
/// into one weighted overall score.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CandidateMatch {
    pub product_id: ProductId,
    pub product_name: String,
    /// Weighted overall score, rounded to the nearest integer, in [0, 100].
    pub overall_score: f64,
    pub category: MatchCategory,
    pub attributes: Vec<SpecAttributeMatch>,
    /// Specified attributes the candidate meets exactly (score 100).
    pub exact_attributes: Vec<AttributeKind>,
    /// Specified attributes with partial credit (0 < score < 100).
    pub partial_attributes: Vec<AttributeKind>,
    /// Specified attributes the candidate fails outright (score 0).
    pub mismatched_attributes: Vec<AttributeKind>,
}

/// Stateless specification matcher.
#[derive(Clone, Debug, Default)]
pub struct SpecMatcher;

impl SpecMatcher {
    pub fn new() -> Self {
        Self
    }

    /// Score one candidate against the requirement.
    pub fn evaluate(&self, requirement: &RequirementSpec, product: &CatalogProduct) -> CandidateMatch {
        let profile = WeightProfile::for_application(requirement.application);

        let attributes: Vec<SpecAttributeMatch> = AttributeKind::ALL
            .iter()
            .map(|&attribute| comparators::compare(attribute, requirement, product))
            .collect();

        let mut weighted_sum = 0.0;
        let mut weight_total = 0.0;
        let mut exact_attributes = Vec::new();
        let mut partial_attributes = Vec::new();
        let mut mismatched_attributes = Vec::new();

        for result in &attributes {
            // Unset requirement attributes carry no weight: absence of a
            // requirement cannot move the overall score either way.
            if result.status == MatchStatus::NotSpecified {
                continue;
            }
            let weight = profile.weight(result.attribute);
            weighted_sum += result.score * weight;
            weight_total += weight;

            if result.score >= 100.0 {
                exact_attributes.push(result.attribute);
            } else if result.score > 0.0 {
                partial_attributes.push(result.attribute);
            } else {
                mismatched_attributes.push(result.attribute);
            }
        }

        let overall_score = if weight_total == 0.0 {
            // Nothing specified: every candidate trivially matches.
            100.0
        } else {
            (weighted_sum / weight_total).round().clamp(0.0, 100.0)
        };

        CandidateMatch {
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            overall_score,
            category: MatchCategory::from_score(overall_score),
            attributes,
            exact_attributes,
            partial_attributes,
            mismatched_attributes,
        }
    }

    /// Score every candidate and return the top `top_n`, best first.
    ///
    /// Candidates with equal overall scores keep catalog insertion order
    /// (stable sort), so output is reproducible run to run.
    pub fn rank(
        &self,
        requirement: &RequirementSpec,
        catalog: &Catalog,
        top_n: usize,
    ) -> Vec<CandidateMatch> {
        let mut matches: Vec<CandidateMatch> = catalog
            .products()
            .iter()
            .map(|product| self.evaluate(requirement, product))
            .collect();

        matches.sort_by(|a, b| {
            b.overall_score.partial_cmp(&a.overall_score).unwrap_or(std::cmp::Ordering::Equal)
        });
        matches.truncate(top_n);
        matches
    }
}
