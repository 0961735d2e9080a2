use rust_decimal::Decimal;
use tendermatch_core::TestCostScaler;

use crate::commands::{CommandResult, EXIT_INPUT};

pub fn run(project_value: Decimal) -> CommandResult {
    let summary = match TestCostScaler::new().scale(project_value, &[]) {
        Ok(summary) => summary,
        Err(error) => {
            return CommandResult::failure("tests", "input_validation", error.to_string(), EXIT_INPUT);
        }
    };

    let message = format!(
        "default test set scales to {} total ({:.2}% of project value, factor {:.2})",
        summary.grand_total, summary.pct_of_project, summary.scaling_factor
    );
    CommandResult::success("tests", message, &summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_million_project_scales_default_set() {
        let result = run(Decimal::from(10_000_000));
        assert_eq!(result.exit_code, 0);

        let payload: serde_json::Value = serde_json::from_str(&result.output).unwrap();
        assert_eq!(payload["data"]["scaling_factor"], 2.0);
        let categories = payload["data"]["categories"].as_array().unwrap();
        assert_eq!(categories.len(), 2); // routine + type
    }

    #[test]
    fn negative_project_value_is_an_input_error() {
        let result = run(Decimal::from(-100));
        assert_eq!(result.exit_code, EXIT_INPUT);

        let payload: serde_json::Value = serde_json::from_str(&result.output).unwrap();
        assert_eq!(payload["error_class"], "input_validation");
    }
}
