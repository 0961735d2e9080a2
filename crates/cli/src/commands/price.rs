use std::path::Path;

use rust_decimal::Decimal;
use serde_json::json;
use tendermatch_core::{BenchmarkResolver, PriceAnalyzer, RfqEngine};

use crate::commands::{load_catalog, CommandResult, EXIT_ENGINE, EXIT_INPUT};

pub fn run(text: &str, quoted: Option<Decimal>, catalog_path: Option<&Path>) -> CommandResult {
    let catalog = match load_catalog(catalog_path) {
        Ok(catalog) => catalog,
        Err((message, exit_code)) => {
            return CommandResult::failure("price", "catalog_load", message, exit_code);
        }
    };

    let engine = RfqEngine::new(catalog);
    let (_, candidates, _) = engine.match_line(text, 1);
    let Some(best) = candidates.first() else {
        return CommandResult::failure(
            "price",
            "no_candidates",
            "catalog produced no candidates for this requirement",
            EXIT_ENGINE,
        );
    };
    let Some(product) = engine.catalog().find(&best.product_id) else {
        return CommandResult::failure(
            "price",
            "no_candidates",
            format!("ranked product {} missing from catalog", best.product_id.0),
            EXIT_ENGINE,
        );
    };

    let benchmark = BenchmarkResolver::new().resolve(product);
    let quoted_price = quoted.unwrap_or(product.unit_price);
    let analysis = match PriceAnalyzer::new().analyze(quoted_price, &benchmark, None) {
        Ok(analysis) => analysis,
        Err(error) => {
            return CommandResult::failure("price", "input_validation", error.to_string(), EXIT_INPUT);
        }
    };

    let message = if analysis.negotiation_needed {
        format!(
            "{:?} at {} per {}; counter at {} to save {}",
            analysis.category,
            analysis.quoted_price,
            product.unit_of_measure,
            analysis.counter_offer,
            analysis.savings
        )
    } else {
        format!(
            "{:?} at {} per {}; no negotiation needed",
            analysis.category, analysis.quoted_price, product.unit_of_measure
        )
    };

    CommandResult::success(
        "price",
        message,
        json!({
            "product": product,
            "match_score": best.overall_score,
            "analysis": analysis,
        }),
    )
}
