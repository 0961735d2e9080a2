use tendermatch_core::RequirementParser;

use crate::commands::CommandResult;

pub fn run(text: &str) -> CommandResult {
    let spec = RequirementParser::new().parse(text);
    let message = if spec.is_unconstrained() {
        "no canonical attributes found; requirement is unconstrained".to_string()
    } else {
        format!("parsed requirement as a {} application", spec.application.label())
    };
    CommandResult::success("parse", message, &spec)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_reports_extracted_attributes() {
        let result = run("3 core 95 sq mm copper XLPE cable 11kV armoured");
        assert_eq!(result.exit_code, 0);

        let payload: serde_json::Value = serde_json::from_str(&result.output).unwrap();
        assert_eq!(payload["status"], "ok");
        assert_eq!(payload["data"]["voltage_volts"], 11_000);
        assert_eq!(payload["data"]["core_count"], 3);
        assert_eq!(payload["data"]["conductor"], "copper");
    }

    #[test]
    fn parse_flags_unconstrained_text() {
        let result = run("hello world");
        assert_eq!(result.exit_code, 0);
        let payload: serde_json::Value = serde_json::from_str(&result.output).unwrap();
        assert!(payload["message"].as_str().unwrap().contains("unconstrained"));
    }
}
