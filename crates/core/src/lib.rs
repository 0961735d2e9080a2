//! Deterministic RFP-to-catalog matching and pricing recommendation engine.
//!
//! Everything here is a pure, synchronous computation over immutable inputs:
//! a parsed requirement, a read-only catalog, and literal rule tables. There
//! is no I/O and no shared mutable state; callers may evaluate any number of
//! (requirement, candidate) pairs concurrently without coordination.

pub mod catalog;
pub mod domain;
pub mod errors;
pub mod evaluation;
pub mod matching;
pub mod parser;
pub mod pricing;
pub mod rubric;
pub mod testcost;

pub use catalog::Catalog;
pub use domain::product::{CatalogProduct, ProductId};
pub use domain::requirement::{
    ApplicationClass, ConductorMaterial, InsulationMaterial, RequirementSpec,
};
pub use errors::{DomainError, DomainResult};
pub use evaluation::{
    LineEvaluation, LineItem, RfqEngine, RfqEvaluation, RfqRequest, DEFAULT_TOP_CANDIDATES,
};
pub use matching::{
    AttributeKind, CandidateMatch, CompromiseReport, MatchCategory, MatchStatus, SpecAttributeMatch,
    SpecMatcher, WeightProfile,
};
pub use parser::RequirementParser;
pub use pricing::{
    AnalysisContext, BenchmarkResolver, BenchmarkSource, DealQuality, MarketBenchmark,
    PriceAnalysis, PriceAnalyzer, PriceCategory, VoltageTier,
};
pub use rubric::{
    RiskLevel, RubricAggregator, RubricInputs, RubricScore, RubricWeights, Verdict,
};
pub use testcost::{
    default_test_set, ScaledTestCost, TestCategory, TestCostScaler, TestCostSummary,
    TestDefinition,
};
