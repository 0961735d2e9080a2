pub mod commands;
pub mod demo;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;

#[derive(Debug, Parser)]
#[command(
    name = "tendermatch",
    about = "Tendermatch RFP evaluation CLI",
    long_about = "Match free-text tender requirements against a cable catalog, benchmark and analyze pricing, scale test costs, and produce weighted procurement recommendations.",
    after_help = "Examples:\n  tendermatch parse \"3 core 95 sq mm copper XLPE cable 11kV armoured\"\n  tendermatch match \"3C x 120 sqmm Al XLPE 11kV\" --top 3\n  tendermatch price \"3 core 95 sqmm Cu XLPE 11kV\" --quoted 3400\n  tendermatch tests --project-value 10000000\n  tendermatch evaluate \"3C 95 sqmm Cu XLPE 11kV armoured\" --project-value 10000000 --credibility 72"
)]
pub struct Cli {
    #[arg(long, global = true, default_value = "info", help = "Log level (trace..error)")]
    pub log_level: String,
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Extract canonical attributes from a free-text requirement")]
    Parse {
        text: String,
    },
    #[command(about = "Rank catalog candidates against a requirement with deviation detail")]
    Match {
        text: String,
        #[arg(long, help = "Catalog TOML file; built-in demo catalog when omitted")]
        catalog: Option<PathBuf>,
        #[arg(long, default_value_t = 5, help = "Number of candidates to return")]
        top: usize,
    },
    #[command(about = "Benchmark the best candidate and analyze a quoted price against it")]
    Price {
        text: String,
        #[arg(long, help = "Quoted price per unit; best candidate's list price when omitted")]
        quoted: Option<Decimal>,
        #[arg(long, help = "Catalog TOML file; built-in demo catalog when omitted")]
        catalog: Option<PathBuf>,
    },
    #[command(about = "Scale the default test set to a project value, grouped by category")]
    Tests {
        #[arg(long, help = "Total project value")]
        project_value: Decimal,
    },
    #[command(
        about = "Full evaluation: match, price, test costs, and one weighted verdict per line"
    )]
    Evaluate {
        #[arg(required = true, help = "One or more requirement lines")]
        texts: Vec<String>,
        #[arg(long, help = "Quoted prices paired with requirement lines by position")]
        quoted: Vec<Decimal>,
        #[arg(long, help = "Total project value")]
        project_value: Decimal,
        #[arg(long, default_value_t = 50.0, help = "Vendor credibility score in [0, 100]")]
        credibility: f64,
        #[arg(long, default_value_t = 5, help = "Number of candidates to keep per line")]
        top: usize,
        #[arg(long, help = "Catalog TOML file; built-in demo catalog when omitted")]
        catalog: Option<PathBuf>,
    },
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    run_with(cli)
}

pub fn run_with(cli: Cli) -> ExitCode {
    let result = match cli.command {
        Command::Parse { text } => commands::parse::run(&text),
        Command::Match { text, catalog, top } => {
            commands::match_cmd::run(&text, catalog.as_deref(), top)
        }
        Command::Price { text, quoted, catalog } => {
            commands::price::run(&text, quoted, catalog.as_deref())
        }
        Command::Tests { project_value } => commands::testcosts::run(project_value),
        Command::Evaluate { texts, quoted, project_value, credibility, top, catalog } => {
            commands::evaluate::run(
                &texts,
                &quoted,
                project_value,
                credibility,
                top,
                catalog.as_deref(),
            )
        }
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
