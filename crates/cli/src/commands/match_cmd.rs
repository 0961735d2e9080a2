use std::path::Path;

use serde_json::json;
use tendermatch_core::RfqEngine;

use crate::commands::{load_catalog, CommandResult};

pub fn run(text: &str, catalog_path: Option<&Path>, top: usize) -> CommandResult {
    let catalog = match load_catalog(catalog_path) {
        Ok(catalog) => catalog,
        Err((message, exit_code)) => {
            return CommandResult::failure("match", "catalog_load", message, exit_code);
        }
    };

    let engine = RfqEngine::new(catalog);
    let (requirement, candidates, compromise) = engine.match_line(text, top);

    let message = match candidates.first() {
        Some(best) => format!(
            "{} candidate(s) ranked; best is {} at score {:.0} ({:?})",
            candidates.len(),
            best.product_id.0,
            best.overall_score,
            best.category
        ),
        None => "catalog produced no candidates".to_string(),
    };

    CommandResult::success(
        "match",
        message,
        json!({
            "requirement": requirement,
            "candidates": candidates,
            "compromise": compromise,
        }),
    )
}
