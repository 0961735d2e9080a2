//! Market value benchmarking.
//!
//! Maps a catalog product's canonical specs to a {min, avg, max} price band.
//! Resolution keys on voltage tier, conductor material, and conductor size;
//! products the static table does not cover get a band synthesized from
//! their own list price. Pure, and independent of any quoted/RFP price.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::product::CatalogProduct;
use crate::domain::requirement::ConductorMaterial;

/// Voltage class used as the first benchmark key component.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VoltageTier {
    Eht,
    Ht,
    Lt,
    Control,
}

impl VoltageTier {
    /// Classify a product. Multicore low-voltage cable trades as control
    /// cable, not power cable.
    pub fn classify(voltage_volts: u32, core_count: Option<u32>) -> Self {
        if voltage_volts >= 33_000 {
            VoltageTier::Eht
        } else if voltage_volts > 1_100 {
            VoltageTier::Ht
        } else if core_count.is_some_and(|cores| cores >= 7) {
            VoltageTier::Control
        } else {
            VoltageTier::Lt
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VoltageTier::Eht => "EHT",
            VoltageTier::Ht => "HT",
            VoltageTier::Lt => "LT",
            VoltageTier::Control => "Control",
        }
    }
}

/// Where a benchmark came from; a synthesized band is a degraded-but-valid
/// result, not an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenchmarkSource {
    Table,
    ListPriceRatio,
}

/// A {min, avg, max} market price band per unit of measure.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarketBenchmark {
    pub min: Decimal,
    pub avg: Decimal,
    pub max: Decimal,
    pub source: BenchmarkSource,
}

struct BenchmarkEntry {
    tier: VoltageTier,
    conductor: ConductorMaterial,
    size_sqmm: f64,
    min: i64,
    avg: i64,
    max: i64,
}

/// Market bands per meter, keyed by tier, conductor, and conductor size.
const BENCHMARK_TABLE: &[BenchmarkEntry] = &[
    BenchmarkEntry { tier: VoltageTier::Ht, conductor: ConductorMaterial::Copper, size_sqmm: 95.0, min: 2_450, avg: 2_720, max: 3_100 },
    BenchmarkEntry { tier: VoltageTier::Ht, conductor: ConductorMaterial::Copper, size_sqmm: 120.0, min: 2_950, avg: 3_280, max: 3_720 },
    BenchmarkEntry { tier: VoltageTier::Ht, conductor: ConductorMaterial::Copper, size_sqmm: 185.0, min: 4_200, avg: 4_650, max: 5_300 },
    BenchmarkEntry { tier: VoltageTier::Ht, conductor: ConductorMaterial::Copper, size_sqmm: 240.0, min: 5_300, avg: 5_900, max: 6_700 },
    BenchmarkEntry { tier: VoltageTier::Ht, conductor: ConductorMaterial::Aluminium, size_sqmm: 95.0, min: 1_150, avg: 1_280, max: 1_460 },
    BenchmarkEntry { tier: VoltageTier::Ht, conductor: ConductorMaterial::Aluminium, size_sqmm: 120.0, min: 1_380, avg: 1_540, max: 1_750 },
    BenchmarkEntry { tier: VoltageTier::Ht, conductor: ConductorMaterial::Aluminium, size_sqmm: 185.0, min: 1_950, avg: 2_160, max: 2_450 },
    BenchmarkEntry { tier: VoltageTier::Ht, conductor: ConductorMaterial::Aluminium, size_sqmm: 240.0, min: 2_400, avg: 2_680, max: 3_050 },
    BenchmarkEntry { tier: VoltageTier::Eht, conductor: ConductorMaterial::Copper, size_sqmm: 300.0, min: 8_200, avg: 9_100, max: 10_400 },
    BenchmarkEntry { tier: VoltageTier::Eht, conductor: ConductorMaterial::Aluminium, size_sqmm: 300.0, min: 3_800, avg: 4_200, max: 4_800 },
    BenchmarkEntry { tier: VoltageTier::Lt, conductor: ConductorMaterial::Copper, size_sqmm: 2.5, min: 95, avg: 110, max: 128 },
    BenchmarkEntry { tier: VoltageTier::Lt, conductor: ConductorMaterial::Copper, size_sqmm: 4.0, min: 140, avg: 158, max: 180 },
    BenchmarkEntry { tier: VoltageTier::Lt, conductor: ConductorMaterial::Copper, size_sqmm: 6.0, min: 198, avg: 220, max: 250 },
    BenchmarkEntry { tier: VoltageTier::Lt, conductor: ConductorMaterial::Aluminium, size_sqmm: 16.0, min: 88, avg: 98, max: 112 },
    BenchmarkEntry { tier: VoltageTier::Lt, conductor: ConductorMaterial::Aluminium, size_sqmm: 25.0, min: 120, avg: 135, max: 155 },
    BenchmarkEntry { tier: VoltageTier::Control, conductor: ConductorMaterial::Copper, size_sqmm: 1.5, min: 185, avg: 210, max: 240 },
    BenchmarkEntry { tier: VoltageTier::Control, conductor: ConductorMaterial::Copper, size_sqmm: 2.5, min: 265, avg: 295, max: 340 },
];

/// Ratios used to synthesize a band from a list price when no table entry
/// covers the product: 0.90x, 1.00x, 1.15x.
const FALLBACK_MIN_RATIO: Decimal = Decimal::from_parts(90, 0, 0, false, 2);
const FALLBACK_MAX_RATIO: Decimal = Decimal::from_parts(115, 0, 0, false, 2);

/// Stateless benchmark resolver over the static market table.
#[derive(Clone, Debug, Default)]
pub struct BenchmarkResolver;

impl BenchmarkResolver {
    pub fn new() -> Self {
        Self
    }

    /// Resolve a product to its market band, synthesizing from the list
    /// price when the composite key has no table entry or the product lacks
    /// the attributes to build one.
    pub fn resolve(&self, product: &CatalogProduct) -> MarketBenchmark {
        if let (Some(voltage), Some(conductor), Some(size)) =
            (product.voltage_volts, product.conductor, product.cross_section_sqmm)
        {
            let tier = VoltageTier::classify(voltage, product.core_count);
            let entry = BENCHMARK_TABLE.iter().find(|entry| {
                entry.tier == tier && entry.conductor == conductor && entry.size_sqmm == size
            });
            if let Some(entry) = entry {
                return MarketBenchmark {
                    min: Decimal::from(entry.min),
                    avg: Decimal::from(entry.avg),
                    max: Decimal::from(entry.max),
                    source: BenchmarkSource::Table,
                };
            }
        }
        Self::from_list_price(product.unit_price)
    }

    fn from_list_price(list_price: Decimal) -> MarketBenchmark {
        MarketBenchmark {
            min: list_price * FALLBACK_MIN_RATIO,
            avg: list_price,
            max: list_price * FALLBACK_MAX_RATIO,
            source: BenchmarkSource::ListPriceRatio,
        }
    }
}
