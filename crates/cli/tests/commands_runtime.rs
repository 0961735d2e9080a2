use std::io::Write;

use rust_decimal::Decimal;
use serde_json::Value;
use tendermatch_cli::commands::{evaluate, match_cmd, parse, price, testcosts};

fn parse_payload(output: &str) -> Value {
    serde_json::from_str(output).expect("command output is a JSON envelope")
}

#[test]
fn parse_command_extracts_canonical_spec() {
    let result = parse::run("12 core 2.5 sqmm copper PVC control cable 1.1kV");
    assert_eq!(result.exit_code, 0, "expected successful parse");

    let payload = parse_payload(&result.output);
    assert_eq!(payload["command"], "parse");
    assert_eq!(payload["status"], "ok");
    assert_eq!(payload["data"]["voltage_volts"], 1_100);
    assert_eq!(payload["data"]["core_count"], 12);
    assert_eq!(payload["data"]["application"], "control");
}

#[test]
fn match_command_ranks_against_demo_catalog() {
    let result = match_cmd::run("12 core 2.5 sqmm copper PVC control cable 1.1kV", None, 3);
    assert_eq!(result.exit_code, 0);

    let payload = parse_payload(&result.output);
    assert_eq!(payload["command"], "match");
    let candidates = payload["data"]["candidates"].as_array().unwrap();
    assert!(!candidates.is_empty());
    assert_eq!(candidates[0]["product_id"], "cbl-ctrl-cu-2p5");
}

#[test]
fn match_command_loads_catalog_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[[products]]
id = "cbl-custom-001"
name = "11kV 3C x 95 sqmm Cu XLPE armoured"
category = "HT Power Cable"
voltage_volts = 11000
cross_section_sqmm = 95.0
core_count = 3
conductor = "copper"
insulation = "xlpe"
armour = "GI wire armoured"
temperature_c = 90
unit_price = "2650"
unit_of_measure = "meter"
lead_time_weeks = 6
"#
    )
    .unwrap();

    let result = match_cmd::run("3 core 95 sqmm copper XLPE 11kV armoured", Some(file.path()), 5);
    assert_eq!(result.exit_code, 0);

    let payload = parse_payload(&result.output);
    let candidates = payload["data"]["candidates"].as_array().unwrap();
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0]["product_id"], "cbl-custom-001");
}

#[test]
fn match_command_rejects_malformed_catalog_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "products = \"not a table\"").unwrap();

    let result = match_cmd::run("3 core cable", Some(file.path()), 5);
    assert_ne!(result.exit_code, 0);

    let payload = parse_payload(&result.output);
    assert_eq!(payload["status"], "error");
    assert_eq!(payload["error_class"], "catalog_load");
}

#[test]
fn price_command_analyzes_quoted_price() {
    let result = price::run(
        "3 core 95 sq mm copper XLPE cable 11kV armoured",
        Some(Decimal::from(3_200)),
        None,
    );
    assert_eq!(result.exit_code, 0);

    let payload = parse_payload(&result.output);
    assert_eq!(payload["command"], "price");
    // 3200 > table max 3100 but below 1.15x max: above market
    assert_eq!(payload["data"]["analysis"]["category"], "ABOVE_MARKET");
    assert_eq!(payload["data"]["analysis"]["negotiation_needed"], true);
}

#[test]
fn tests_command_reports_grouped_summary() {
    let result = testcosts::run(Decimal::from(10_000_000));
    assert_eq!(result.exit_code, 0);

    let payload = parse_payload(&result.output);
    assert_eq!(payload["command"], "tests");
    assert_eq!(payload["data"]["scaling_factor"], 2.0);
    assert!(payload["data"]["categories"].as_array().unwrap().len() >= 2);
}

#[test]
fn evaluate_command_produces_overall_verdict() {
    let result = evaluate::run(
        &[
            "3 core 95 sq mm copper XLPE cable 11kV armoured".to_string(),
            "12 core 2.5 sqmm copper PVC control cable 1.1kV".to_string(),
        ],
        &[],
        Decimal::from(10_000_000),
        72.0,
        5,
        None,
    );
    assert_eq!(result.exit_code, 0);

    let payload = parse_payload(&result.output);
    assert_eq!(payload["command"], "evaluate");
    let lines = payload["data"]["lines"].as_array().unwrap();
    assert_eq!(lines.len(), 2);
    assert_eq!(payload["data"]["overall"]["verdict"], "GO");
    assert_eq!(payload["data"]["overall"]["risk_level"], "LOW");
}

#[test]
fn evaluate_command_validates_project_value() {
    let result = evaluate::run(
        &["3 core cable".to_string()],
        &[],
        Decimal::from(-5),
        50.0,
        5,
        None,
    );
    assert_eq!(result.exit_code, 2, "expected input validation failure code");

    let payload = parse_payload(&result.output);
    assert_eq!(payload["status"], "error");
    assert_eq!(payload["error_class"], "input_validation");
}
