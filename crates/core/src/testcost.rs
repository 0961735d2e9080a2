//! Proportional test/QA cost scaling.
//!
//! Ancillary test line items grow logarithmically with project value and are
//! then clamped twice: first to the category's absolute amount bounds, then
//! to a window expressed as a share of project value (max bound before min
//! bound). The clamp sequence is applied exactly in that order even though a
//! percentage floor larger than the absolute cap can push the final amount
//! back above the cap; see DESIGN.md before "fixing" it.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{ensure_non_negative, DomainResult};

/// Reference project value at which scaling starts: multiplier is
/// max(1, log10(project_value / 100 000)).
const SCALING_PIVOT: f64 = 100_000.0;

/// Window ratios around the category's base share of project value.
const WINDOW_FLOOR_RATIO: f64 = 0.3;
const WINDOW_CAP_RATIO: f64 = 1.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestCategory {
    Routine,
    Type,
    Acceptance,
    Special,
}

impl TestCategory {
    pub const ALL: [TestCategory; 4] =
        [TestCategory::Routine, TestCategory::Type, TestCategory::Acceptance, TestCategory::Special];

    pub fn label(&self) -> &'static str {
        match self {
            TestCategory::Routine => "Routine",
            TestCategory::Type => "Type",
            TestCategory::Acceptance => "Acceptance",
            TestCategory::Special => "Special",
        }
    }

    /// Typical share of project value this category should cost, in percent.
    pub fn base_percentage(&self) -> f64 {
        match self {
            TestCategory::Routine => 0.5,
            TestCategory::Type => 1.5,
            TestCategory::Acceptance => 0.8,
            TestCategory::Special => 1.0,
        }
    }

    /// Absolute per-test amount bounds, independent of project size.
    pub fn absolute_bounds(&self) -> (i64, i64) {
        match self {
            TestCategory::Routine => (15_000, 150_000),
            TestCategory::Type => (50_000, 600_000),
            TestCategory::Acceptance => (20_000, 250_000),
            TestCategory::Special => (30_000, 400_000),
        }
    }
}

/// A test to be priced for the project.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TestDefinition {
    pub id: String,
    pub name: String,
    pub category: TestCategory,
    pub base_price: Decimal,
}

/// One scaled test line item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScaledTestCost {
    pub test_id: String,
    pub test_name: String,
    pub category: TestCategory,
    pub base_price: Decimal,
    pub scaled_price: Decimal,
    pub scaling_factor: f64,
    pub pct_of_project: f64,
}

/// All scaled costs of one category with their subtotal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub category: TestCategory,
    pub costs: Vec<ScaledTestCost>,
    pub subtotal: Decimal,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TestCostSummary {
    pub categories: Vec<CategoryBreakdown>,
    pub grand_total: Decimal,
    pub pct_of_project: f64,
    pub scaling_factor: f64,
}

/// Representative fallback set used when the caller supplies no tests.
pub fn default_test_set() -> Vec<TestDefinition> {
    vec![
        TestDefinition {
            id: "tst-type-001".to_string(),
            name: "Full type test series".to_string(),
            category: TestCategory::Type,
            base_price: Decimal::from(180_000),
        },
        TestDefinition {
            id: "tst-routine-001".to_string(),
            name: "Conductor resistance verification".to_string(),
            category: TestCategory::Routine,
            base_price: Decimal::from(18_000),
        },
        TestDefinition {
            id: "tst-routine-002".to_string(),
            name: "High-voltage withstand".to_string(),
            category: TestCategory::Routine,
            base_price: Decimal::from(25_000),
        },
    ]
}

/// Stateless test-cost scaler.
#[derive(Clone, Debug, Default)]
pub struct TestCostScaler;

impl TestCostScaler {
    pub fn new() -> Self {
        Self
    }

    /// Scale the supplied tests (or the default set when empty) to the
    /// project value and group them by category.
    pub fn scale(
        &self,
        project_value: Decimal,
        tests: &[TestDefinition],
    ) -> DomainResult<TestCostSummary> {
        ensure_non_negative("project_value", project_value)?;

        let defaults;
        let tests = if tests.is_empty() {
            defaults = default_test_set();
            &defaults
        } else {
            tests
        };

        let project_value_f = decimal_to_f64(project_value);
        let scaling_factor = scaling_multiplier(project_value_f);

        let mut categories: Vec<CategoryBreakdown> = Vec::new();
        for category in TestCategory::ALL {
            let costs: Vec<ScaledTestCost> = tests
                .iter()
                .filter(|test| test.category == category)
                .map(|test| scale_one(test, project_value_f, scaling_factor))
                .collect();
            if costs.is_empty() {
                continue;
            }
            let subtotal = costs.iter().map(|cost| cost.scaled_price).sum();
            categories.push(CategoryBreakdown { category, costs, subtotal });
        }

        let grand_total: Decimal = categories.iter().map(|breakdown| breakdown.subtotal).sum();

        Ok(TestCostSummary {
            categories,
            grand_total,
            pct_of_project: pct_of(decimal_to_f64(grand_total), project_value_f),
            scaling_factor,
        })
    }
}

fn scale_one(test: &TestDefinition, project_value: f64, multiplier: f64) -> ScaledTestCost {
    let mut scaled = (decimal_to_f64(test.base_price) * multiplier).round();

    // Clamp 1: absolute category bounds.
    let (min_amount, max_amount) = test.category.absolute_bounds();
    scaled = scaled.clamp(min_amount as f64, max_amount as f64);

    // Clamp 2: percentage-of-project window, cap before floor. With no
    // project value there is no meaningful window.
    if project_value > 0.0 {
        let anchor = project_value * test.category.base_percentage() / 100.0;
        scaled = scaled.min(anchor * WINDOW_CAP_RATIO);
        scaled = scaled.max(anchor * WINDOW_FLOOR_RATIO);
    }

    let scaled_price = Decimal::from(scaled.round() as i64);
    ScaledTestCost {
        test_id: test.id.clone(),
        test_name: test.name.clone(),
        category: test.category,
        base_price: test.base_price,
        scaled_price,
        scaling_factor: multiplier,
        pct_of_project: pct_of(decimal_to_f64(scaled_price), project_value),
    }
}

fn scaling_multiplier(project_value: f64) -> f64 {
    if project_value <= 0.0 {
        return 1.0;
    }
    (project_value / SCALING_PIVOT).log10().max(1.0)
}

fn pct_of(amount: f64, project_value: f64) -> f64 {
    if project_value <= 0.0 {
        return 0.0;
    }
    amount / project_value * 100.0
}

fn decimal_to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}
