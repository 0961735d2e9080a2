//! Market benchmarking and quoted-price analysis.

pub mod analysis;
pub mod benchmark;

pub use analysis::{AnalysisContext, DealQuality, PriceAnalysis, PriceAnalyzer, PriceCategory};
pub use benchmark::{BenchmarkResolver, BenchmarkSource, MarketBenchmark, VoltageTier};
