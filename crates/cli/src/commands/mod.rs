pub mod evaluate;
pub mod match_cmd;
pub mod parse;
pub mod price;
pub mod testcosts;

use std::fs;
use std::path::Path;

use serde::Serialize;
use tendermatch_core::Catalog;

use crate::demo;

/// Exit codes shared across commands: 2 input validation, 3 catalog load,
/// 4 engine failure.
pub const EXIT_INPUT: u8 = 2;
pub const EXIT_CATALOG: u8 = 3;
pub const EXIT_ENGINE: u8 = 4;

#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}

#[derive(Debug, Serialize)]
struct CommandOutcome {
    command: String,
    status: String,
    error_class: Option<String>,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<serde_json::Value>,
}

impl CommandResult {
    pub fn success(command: &str, message: impl Into<String>, data: impl Serialize) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "ok".to_string(),
            error_class: None,
            message: message.into(),
            data: serde_json::to_value(data).ok(),
        };
        Self { exit_code: 0, output: serialize_payload(payload) }
    }

    pub fn failure(
        command: &str,
        error_class: &str,
        message: impl Into<String>,
        exit_code: u8,
    ) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "error".to_string(),
            error_class: Some(error_class.to_string()),
            message: message.into(),
            data: None,
        };
        Self { exit_code, output: serialize_payload(payload) }
    }
}

fn serialize_payload(payload: CommandOutcome) -> String {
    serde_json::to_string_pretty(&payload).unwrap_or_else(|error| {
        format!(
            "{{\"command\":\"unknown\",\"status\":\"error\",\"error_class\":\"serialization\",\"message\":\"{}\"}}",
            error.to_string().replace('\\', "\\\\").replace('"', "\\\"")
        )
    })
}

/// Load the catalog from a TOML file, or fall back to the built-in demo
/// catalog when no path is given.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog, (String, u8)> {
    let Some(path) = path else {
        return Ok(demo::demo_catalog());
    };
    let contents = fs::read_to_string(path)
        .map_err(|error| (format!("failed to read {}: {error}", path.display()), EXIT_CATALOG))?;
    Catalog::from_toml_str(&contents)
        .map_err(|error| (format!("failed to load {}: {error}", path.display()), EXIT_CATALOG))
}
