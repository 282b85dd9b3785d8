//! Delimited row rewriter CLI.
//!
//! Thin adapter around `rowfix-core`: wires stdin to the engine, sends
//! rewritten rows to stdout and per-row diagnostics to stderr, and maps
//! the fatal missing-header case to a non-zero exit status.

use std::io::{self, IsTerminal};
use std::process;

use clap::Parser;
use tracing::info;

mod cli;
mod logging;

use crate::cli::{Cli, LogFormatArg};
use crate::logging::{LogConfig, LogFormat, init_logging};

fn main() {
    let cli = Cli::parse();
    if let Err(error) = init_logging(&log_config_from_cli(&cli)) {
        eprintln!("error: failed to initialize logging: {error}");
        process::exit(1);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    let exit_code = match rowfix_core::engine::run(stdin.lock(), stdout.lock(), stderr.lock()) {
        Ok(summary) => {
            info!(rows = summary.rows, skipped = summary.skipped, "run complete");
            0
        }
        Err(error) => {
            eprintln!("{error}");
            1
        }
    };
    process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !cli.verbosity.is_present();
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = cli.log_file.is_none() && io::stderr().is_terminal();
    config
}
