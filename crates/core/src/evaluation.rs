//! End-to-end RFP evaluation.
//!
//! Composes the parser, matcher, benchmark resolver, price analyzer, test
//! scaler, and rubric into one deterministic engine: requirement text in,
//! ranked candidates plus price analysis plus one rubric verdict out. The
//! engine owns the read-only catalog and is itself stateless across calls;
//! evaluating many lines or many RFPs concurrently needs no coordination.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::domain::requirement::RequirementSpec;
use crate::errors::{ensure_non_negative, DomainResult};
use crate::matching::{compromise, CandidateMatch, CompromiseReport, SpecMatcher};
use crate::parser::RequirementParser;
use crate::pricing::analysis::{AnalysisContext, PriceAnalysis, PriceAnalyzer};
use crate::pricing::benchmark::{BenchmarkResolver, MarketBenchmark};
use crate::rubric::{
    average_price_points, price_competitiveness_points, test_coverage_score, RubricAggregator,
    RubricInputs, RubricScore,
};
use crate::testcost::{TestCostScaler, TestCostSummary, TestDefinition};

/// Default number of ranked candidates returned per requirement line.
pub const DEFAULT_TOP_CANDIDATES: usize = 5;

/// One RFP line item: a free-text requirement and, when the vendor has
/// quoted, the quoted unit price. Without a quote the best candidate's list
/// price stands in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub requirement_text: String,
    pub quoted_price: Option<Decimal>,
}

/// A whole-RFP evaluation request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RfqRequest {
    pub lines: Vec<LineItem>,
    pub project_value: Decimal,
    /// Externally supplied vendor credibility in [0, 100]; values outside
    /// the range are clamped, not rejected.
    pub credibility_score: f64,
    /// Tests required for the project; the scaler substitutes its default
    /// set when empty.
    pub required_tests: Vec<TestDefinition>,
    pub top_candidates: usize,
}

impl RfqRequest {
    pub fn new(lines: Vec<LineItem>, project_value: Decimal, credibility_score: f64) -> Self {
        Self {
            lines,
            project_value,
            credibility_score,
            required_tests: Vec::new(),
            top_candidates: DEFAULT_TOP_CANDIDATES,
        }
    }
}

/// Everything the engine derives for one requirement line.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineEvaluation {
    pub requirement: RequirementSpec,
    pub candidates: Vec<CandidateMatch>,
    pub compromise: CompromiseReport,
    /// Market band of the best candidate; absent when the catalog produced
    /// no candidate at all.
    pub benchmark: Option<MarketBenchmark>,
    pub price: Option<PriceAnalysis>,
    pub rubric: RubricScore,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RfqEvaluation {
    pub lines: Vec<LineEvaluation>,
    pub test_costs: TestCostSummary,
    /// Rubric over the whole RFP: mean best-candidate match score and mean
    /// price tier points across lines.
    pub overall: RubricScore,
}

/// Deterministic RFP evaluation engine over a read-only catalog.
#[derive(Debug)]
pub struct RfqEngine {
    catalog: Catalog,
    parser: RequirementParser,
    matcher: SpecMatcher,
    resolver: BenchmarkResolver,
    analyzer: PriceAnalyzer,
    scaler: TestCostScaler,
    aggregator: RubricAggregator,
}

impl RfqEngine {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            parser: RequirementParser::new(),
            matcher: SpecMatcher::new(),
            resolver: BenchmarkResolver::new(),
            analyzer: PriceAnalyzer::new(),
            scaler: TestCostScaler::new(),
            aggregator: RubricAggregator::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn parse(&self, requirement_text: &str) -> RequirementSpec {
        self.parser.parse(requirement_text)
    }

    /// Parse and rank one requirement against the catalog.
    pub fn match_line(
        &self,
        requirement_text: &str,
        top_candidates: usize,
    ) -> (RequirementSpec, Vec<CandidateMatch>, CompromiseReport) {
        let requirement = self.parser.parse(requirement_text);
        let candidates = self.matcher.rank(&requirement, &self.catalog, top_candidates);
        let compromise = compromise::analyze(&candidates);
        (requirement, candidates, compromise)
    }

    /// Evaluate a whole RFP: every line plus project-level test costs and
    /// an aggregate verdict.
    pub fn evaluate_rfp(&self, request: &RfqRequest) -> DomainResult<RfqEvaluation> {
        ensure_non_negative("project_value", request.project_value)?;
        let credibility = request.credibility_score.clamp(0.0, 100.0);

        let test_costs = self.scaler.scale(request.project_value, &request.required_tests)?;
        let coverage_score = test_coverage_score(test_costs.pct_of_project);

        let context = AnalysisContext {
            test_cost_total: Some(test_costs.grand_total),
            project_value: Some(request.project_value),
            credibility_score: Some(credibility),
        };

        let mut lines = Vec::with_capacity(request.lines.len());
        for line in &request.lines {
            lines.push(self.evaluate_line(line, request.top_candidates, &context, coverage_score)?);
        }

        let best_scores: Vec<f64> = lines
            .iter()
            .filter_map(|line| line.candidates.first().map(|best| best.overall_score))
            .collect();
        let spec_match_score = if lines.is_empty() {
            0.0
        } else {
            // Lines with no candidate at all contribute 0, not a gap.
            best_scores.iter().sum::<f64>() / lines.len() as f64
        };
        let price_categories: Vec<_> = lines
            .iter()
            .filter_map(|line| line.price.as_ref().map(|analysis| analysis.category))
            .collect();

        let overall = self.aggregator.aggregate(&RubricInputs {
            spec_match_score,
            price_competitiveness_score: average_price_points(&price_categories),
            credibility_score: credibility,
            test_coverage_score: coverage_score,
        });

        Ok(RfqEvaluation { lines, test_costs, overall })
    }

    fn evaluate_line(
        &self,
        line: &LineItem,
        top_candidates: usize,
        context: &AnalysisContext,
        coverage_score: f64,
    ) -> DomainResult<LineEvaluation> {
        let (requirement, candidates, compromise) =
            self.match_line(&line.requirement_text, top_candidates);

        let mut benchmark = None;
        let mut price = None;
        if let Some(best) = candidates.first() {
            if let Some(product) = self.catalog.find(&best.product_id) {
                let band = self.resolver.resolve(product);
                let quoted = line.quoted_price.unwrap_or(product.unit_price);
                price = Some(self.analyzer.analyze(quoted, &band, Some(context))?);
                benchmark = Some(band);
            }
        }

        let rubric = self.aggregator.aggregate(&RubricInputs {
            spec_match_score: candidates.first().map_or(0.0, |best| best.overall_score),
            price_competitiveness_score: price
                .as_ref()
                .map_or(0.0, |analysis| price_competitiveness_points(analysis.category)),
            credibility_score: context.credibility_score.unwrap_or(0.0),
            test_coverage_score: coverage_score,
        });

        Ok(LineEvaluation { requirement, candidates, compromise, benchmark, price, rubric })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::{CatalogProduct, ProductId};
    use crate::domain::requirement::{ConductorMaterial, InsulationMaterial};
    use crate::errors::DomainError;
    use crate::matching::MatchCategory;
    use crate::pricing::analysis::PriceCategory;

    fn ht_product(id: &str, cross_section: f64, unit_price: i64) -> CatalogProduct {
        CatalogProduct {
            id: ProductId(id.to_string()),
            name: format!("11kV 3C x {cross_section} sqmm Cu XLPE armoured"),
            category: "HT Power Cable".to_string(),
            voltage_volts: Some(11_000),
            cross_section_sqmm: Some(cross_section),
            core_count: Some(3),
            conductor: Some(ConductorMaterial::Copper),
            insulation: Some(InsulationMaterial::Xlpe),
            armour: Some("GI wire armoured".to_string()),
            temperature_c: Some(90),
            unit_price: Decimal::from(unit_price),
            unit_of_measure: "meter".to_string(),
            lead_time_weeks: 6,
        }
    }

    fn engine() -> RfqEngine {
        RfqEngine::new(Catalog::new(vec![
            ht_product("cbl-ht-095", 95.0, 2_720),
            ht_product("cbl-ht-120", 120.0, 3_280),
        ]))
    }

    fn request(quoted: Option<i64>) -> RfqRequest {
        RfqRequest::new(
            vec![LineItem {
                requirement_text: "3 core 95 sq mm copper XLPE cable 11kV armoured".to_string(),
                quoted_price: quoted.map(Decimal::from),
            }],
            Decimal::from(10_000_000),
            70.0,
        )
    }

    #[test]
    fn full_pipeline_on_exact_match() {
        let evaluation = engine().evaluate_rfp(&request(None)).unwrap();

        assert_eq!(evaluation.lines.len(), 1);
        let line = &evaluation.lines[0];
        assert_eq!(line.candidates[0].product_id.0, "cbl-ht-095");
        assert_eq!(line.candidates[0].overall_score, 100.0);
        assert_eq!(line.candidates[0].category, MatchCategory::Excellent);

        // List price 2720 equals the table benchmark avg: competitive
        let price = line.price.as_ref().unwrap();
        assert_eq!(price.category, PriceCategory::Competitive);
        assert!(!price.negotiation_needed);

        assert!(line.rubric.overall_score > 80.0);
        assert!(evaluation.overall.overall_score > 80.0);
    }

    #[test]
    fn explicit_quote_overrides_list_price() {
        // Way above the 3100 table max for 95 mm² copper HT
        let evaluation = engine().evaluate_rfp(&request(Some(4_200))).unwrap();
        let price = evaluation.lines[0].price.as_ref().unwrap();
        assert_eq!(price.quoted_price, Decimal::from(4_200));
        assert_eq!(price.category, PriceCategory::SignificantlyOverpriced);
        assert!(price.negotiation_needed);
    }

    #[test]
    fn empty_catalog_produces_no_candidates_and_no_price() {
        let engine = RfqEngine::new(Catalog::default());
        let evaluation = engine.evaluate_rfp(&request(None)).unwrap();

        let line = &evaluation.lines[0];
        assert!(line.candidates.is_empty());
        assert!(line.benchmark.is_none());
        assert!(line.price.is_none());
        assert_eq!(line.rubric.components.spec_match_score, 0.0);
        assert_eq!(line.rubric.components.price_competitiveness_score, 0.0);
    }

    #[test]
    fn empty_line_list_still_scales_tests() {
        let evaluation = engine()
            .evaluate_rfp(&RfqRequest::new(Vec::new(), Decimal::from(10_000_000), 70.0))
            .unwrap();
        assert!(evaluation.lines.is_empty());
        assert!(evaluation.test_costs.grand_total > Decimal::ZERO);
        assert_eq!(evaluation.overall.components.spec_match_score, 0.0);
    }

    #[test]
    fn negative_project_value_is_rejected() {
        let err = engine()
            .evaluate_rfp(&RfqRequest::new(Vec::new(), Decimal::from(-1), 70.0))
            .unwrap_err();
        assert!(matches!(err, DomainError::NegativeAmount { field: "project_value", .. }));
    }

    #[test]
    fn credibility_outside_range_is_clamped() {
        let mut request = request(None);
        request.credibility_score = 140.0;
        let evaluation = engine().evaluate_rfp(&request).unwrap();
        assert_eq!(evaluation.overall.components.credibility_score, 100.0);
    }

    #[test]
    fn low_credibility_marks_the_price_risky() {
        let mut request = request(None);
        request.credibility_score = 30.0;
        let evaluation = engine().evaluate_rfp(&request).unwrap();
        let price = evaluation.lines[0].price.as_ref().unwrap();
        assert_eq!(price.deal_quality, crate::pricing::analysis::DealQuality::Risky);
    }

    #[test]
    fn rfp_rubric_averages_across_lines() {
        let mut request = request(None);
        request.lines.push(LineItem {
            // Oversized 120 mm² is the only near match for this line
            requirement_text: "3 core 110 sqmm copper XLPE cable 11kV armoured".to_string(),
            quoted_price: None,
        });
        let evaluation = engine().evaluate_rfp(&request).unwrap();

        let expected_spec = (evaluation.lines[0].candidates[0].overall_score
            + evaluation.lines[1].candidates[0].overall_score)
            / 2.0;
        assert!((evaluation.overall.components.spec_match_score - expected_spec).abs() < 1e-9);
    }

    #[test]
    fn match_line_returns_parsed_spec_and_ranked_candidates() {
        let (requirement, candidates, compromise) =
            engine().match_line("3 core 95 sq mm copper XLPE cable 11kV armoured", 1);
        assert_eq!(requirement.voltage_volts, Some(11_000));
        assert_eq!(candidates.len(), 1);
        assert!(compromise.entries.is_empty());
    }
}
