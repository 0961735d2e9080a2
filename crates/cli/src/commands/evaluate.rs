use std::path::Path;

use rust_decimal::Decimal;
use tendermatch_core::{DomainError, LineItem, RfqEngine, RfqRequest};

use crate::commands::{load_catalog, CommandResult, EXIT_ENGINE, EXIT_INPUT};

pub fn run(
    texts: &[String],
    quoted: &[Decimal],
    project_value: Decimal,
    credibility: f64,
    top: usize,
    catalog_path: Option<&Path>,
) -> CommandResult {
    if texts.is_empty() {
        return CommandResult::failure(
            "evaluate",
            "input_validation",
            "at least one requirement line is needed",
            EXIT_INPUT,
        );
    }
    if quoted.len() > texts.len() {
        return CommandResult::failure(
            "evaluate",
            "input_validation",
            format!("{} quoted prices for {} requirement lines", quoted.len(), texts.len()),
            EXIT_INPUT,
        );
    }

    let catalog = match load_catalog(catalog_path) {
        Ok(catalog) => catalog,
        Err((message, exit_code)) => {
            return CommandResult::failure("evaluate", "catalog_load", message, exit_code);
        }
    };

    // Quoted prices pair with requirement lines by position.
    let lines = texts
        .iter()
        .enumerate()
        .map(|(index, text)| LineItem {
            requirement_text: text.clone(),
            quoted_price: quoted.get(index).copied(),
        })
        .collect();

    let mut request = RfqRequest::new(lines, project_value, credibility);
    request.top_candidates = top;

    let evaluation = match RfqEngine::new(catalog).evaluate_rfp(&request) {
        Ok(evaluation) => evaluation,
        Err(error @ DomainError::NegativeAmount { .. }) => {
            return CommandResult::failure("evaluate", "input_validation", error.to_string(), EXIT_INPUT);
        }
        Err(error) => {
            return CommandResult::failure("evaluate", "engine", error.to_string(), EXIT_ENGINE);
        }
    };

    let message = format!(
        "{} line(s) evaluated: overall score {:.1}, {:?} verdict, {:?} risk",
        evaluation.lines.len(),
        evaluation.overall.overall_score,
        evaluation.overall.verdict,
        evaluation.overall.risk_level
    );
    CommandResult::success("evaluate", message, &evaluation)
}
