//! Quoted-price classification and counter-offer derivation.
//!
//! Classifies a quoted price against a market benchmark through an ordered
//! tier ladder (first match wins), derives the counter-offer to negotiate
//! toward, then applies context adjustments for test-cost burden and vendor
//! credibility. All tier comparisons are strict `>`: a quote exactly at
//! benchmark max is not "above market".

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{ensure_non_negative, DomainResult};
use crate::pricing::benchmark::MarketBenchmark;

/// Ordered price tiers, most expensive first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriceCategory {
    SignificantlyOverpriced,
    Overpriced,
    AboveMarket,
    AboveAverage,
    Competitive,
    BelowAverage,
    BelowMarket,
    SuspiciouslyLow,
}

/// Deal quality after price tiering and context adjustments. Declared worst
/// to best so `Ord` gives "cap at X" as a plain `min`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DealQuality {
    Risky,
    Poor,
    BelowAverage,
    Fair,
    Acceptable,
    Good,
    Excellent,
}

/// Auxiliary context that can only worsen a deal (with one explicit
/// credibility upgrade exception).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisContext {
    /// Total scaled test cost for the project, if known.
    pub test_cost_total: Option<Decimal>,
    /// Total project value; denominator for the test-burden check.
    pub project_value: Option<Decimal>,
    /// Externally supplied vendor credibility in [0, 100].
    pub credibility_score: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceAnalysis {
    pub quoted_price: Decimal,
    pub benchmark: MarketBenchmark,
    /// Signed percent deviation of the quote from benchmark avg.
    pub deviation_from_avg_pct: f64,
    /// Signed percent deviation of the quote from benchmark max.
    pub deviation_from_max_pct: f64,
    pub category: PriceCategory,
    /// The price to negotiate toward; equals the quote when no negotiation
    /// is warranted.
    pub counter_offer: Decimal,
    /// max(0, quoted - counter_offer).
    pub savings: Decimal,
    pub negotiation_needed: bool,
    pub deal_quality: DealQuality,
    pub risk_flags: Vec<String>,
}

// Tier thresholds as ratios of benchmark max/avg.
const SIGNIFICANTLY_OVER_MAX: Decimal = Decimal::from_parts(130, 0, 0, false, 2);
const OVER_MAX: Decimal = Decimal::from_parts(115, 0, 0, false, 2);
const ABOVE_AVG: Decimal = Decimal::from_parts(105, 0, 0, false, 2);
const COMPETITIVE_FLOOR: Decimal = Decimal::from_parts(95, 0, 0, false, 2);
const SUSPICIOUS_FLOOR: Decimal = Decimal::from_parts(85, 0, 0, false, 2);

// Counter-offer ratios.
const COUNTER_HARD: Decimal = Decimal::from_parts(95, 0, 0, false, 2);
const COUNTER_SOFT: Decimal = Decimal::from_parts(98, 0, 0, false, 2);

/// Test cost above this share of project value caps the deal quality.
const TEST_BURDEN_CAP_PCT: f64 = 5.0;
/// Credibility below this forces the deal RISKY regardless of price tier.
const LOW_CREDIBILITY: f64 = 40.0;
/// Credibility at or above this upgrades an ACCEPTABLE deal to GOOD.
const HIGH_CREDIBILITY: f64 = 80.0;

/// Stateless price analyzer.
#[derive(Clone, Debug, Default)]
pub struct PriceAnalyzer;

impl PriceAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(
        &self,
        quoted_price: Decimal,
        benchmark: &MarketBenchmark,
        context: Option<&AnalysisContext>,
    ) -> DomainResult<PriceAnalysis> {
        ensure_non_negative("quoted_price", quoted_price)?;

        let avg = benchmark.avg;
        let max = benchmark.max;
        let mut risk_flags = Vec::new();

        // Ordered tier ladder; first match wins.
        let (category, counter_offer, mut deal_quality) =
            if quoted_price > max * SIGNIFICANTLY_OVER_MAX {
                (PriceCategory::SignificantlyOverpriced, avg * COUNTER_HARD, DealQuality::Poor)
            } else if quoted_price > max * OVER_MAX {
                (PriceCategory::Overpriced, avg, DealQuality::BelowAverage)
            } else if quoted_price > max {
                (PriceCategory::AboveMarket, (avg + max) / Decimal::TWO, DealQuality::Fair)
            } else if quoted_price > avg * ABOVE_AVG {
                (PriceCategory::AboveAverage, avg * COUNTER_SOFT, DealQuality::Acceptable)
            } else if quoted_price >= avg * COMPETITIVE_FLOOR {
                // Within ±5% of avg: no negotiation needed.
                (PriceCategory::Competitive, quoted_price, DealQuality::Good)
            } else if quoted_price >= benchmark.min {
                // Below avg but still inside the band: accept as-is.
                (PriceCategory::BelowAverage, quoted_price, DealQuality::Excellent)
            } else if quoted_price < benchmark.min * SUSPICIOUS_FLOOR {
                risk_flags.push(
                    "quoted price is suspiciously below market; verify material grade and vendor viability"
                        .to_string(),
                );
                // Floor the counter at benchmark min; never negotiate lower.
                (PriceCategory::SuspiciouslyLow, benchmark.min, DealQuality::Risky)
            } else {
                (PriceCategory::BelowMarket, quoted_price, DealQuality::Good)
            };

        // Context adjustments, applied after tiering.
        if let Some(context) = context {
            if let Some(burden_pct) = test_burden_pct(context) {
                if burden_pct > TEST_BURDEN_CAP_PCT && deal_quality > DealQuality::Acceptable {
                    deal_quality = DealQuality::Acceptable;
                    risk_flags.push(format!(
                        "test costs are {burden_pct:.1}% of project value; deal quality capped"
                    ));
                }
            }
            if let Some(credibility) = context.credibility_score {
                if credibility < LOW_CREDIBILITY {
                    deal_quality = DealQuality::Risky;
                    risk_flags.push(format!(
                        "vendor credibility {credibility:.0} is below {LOW_CREDIBILITY:.0}; deal treated as risky"
                    ));
                } else if credibility >= HIGH_CREDIBILITY && deal_quality == DealQuality::Acceptable
                {
                    deal_quality = DealQuality::Good;
                }
            }
        }

        let savings = (quoted_price - counter_offer).max(Decimal::ZERO);

        Ok(PriceAnalysis {
            quoted_price,
            benchmark: benchmark.clone(),
            deviation_from_avg_pct: deviation_pct(quoted_price, avg),
            deviation_from_max_pct: deviation_pct(quoted_price, max),
            category,
            counter_offer,
            savings,
            negotiation_needed: counter_offer < quoted_price,
            deal_quality,
            risk_flags,
        })
    }
}

fn test_burden_pct(context: &AnalysisContext) -> Option<f64> {
    let test_cost = context.test_cost_total?;
    let project_value = context.project_value?;
    if project_value <= Decimal::ZERO {
        return None;
    }
    Some(decimal_to_f64(test_cost) / decimal_to_f64(project_value) * 100.0)
}

/// Signed percent deviation of `value` from `reference`; 0 when the
/// reference is 0.
fn deviation_pct(value: Decimal, reference: Decimal) -> f64 {
    if reference == Decimal::ZERO {
        return 0.0;
    }
    decimal_to_f64((value - reference) / reference) * 100.0
}

fn decimal_to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}
