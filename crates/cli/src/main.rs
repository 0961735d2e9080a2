use std::process::ExitCode;

use clap::Parser;
use tendermatch_cli::{Cli, LogFormat};

fn init_logging(level: &str, format: LogFormat) {
    use tracing::Level;

    let log_level = level.parse::<Level>().unwrap_or(Level::INFO);

    match format {
        LogFormat::Compact => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).compact().init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).pretty().init();
        }
        LogFormat::Json => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).json().init();
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log_level, cli.log_format);

    tracing::debug!(event_name = "system.cli.started", "tendermatch CLI started");
    tendermatch_cli::run_with(cli)
}
