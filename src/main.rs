//! Restyle: rewrite a sentence in a chosen voice
//!
//! Entry point for the restyle application.

use restyle::config::{
    Cli, Command, ConfigError, ReceiverConfig, ValidatedConfig, write_default_config,
};
use restyle::submit::SubmissionRequest;
use std::process::ExitCode;

mod app;
mod run;

use app::{exit_code, print_config_hint, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match &cli.command {
        Command::Init { output } => handle_init(output),
        Command::Submit {
            sentence,
            style,
            json,
        } => {
            let request = SubmissionRequest::styled(sentence.as_str(), (*style).into());
            handle_submit(&cli, &request, *json)
        }
        Command::Serve { .. } => handle_serve(&cli),
    }
}

/// Handles the `init` subcommand.
fn handle_init(output: &std::path::Path) -> ExitCode {
    match write_default_config(output) {
        Ok(()) => {
            println!("Configuration template written to: {}", output.display());
            exit_code::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code::CONFIG_ERROR
        }
    }
}

/// Handles the `submit` subcommand.
///
/// Excluded from coverage - requires async runtime and network access.
#[cfg(not(tarpaulin_include))]
fn handle_submit(cli: &Cli, request: &SubmissionRequest, json: bool) -> ExitCode {
    let config = match ValidatedConfig::load(cli) {
        Ok(config) => config,
        Err(e) => return config_failure(&e),
    };

    setup_tracing(config.verbose);
    tracing::debug!("{config}");

    let runtime = tokio::runtime::Runtime::new().expect("Failed to create Tokio runtime");
    let result = runtime.block_on(run::submit(&config, request));

    let rendered = match run::render(&result, json) {
        Ok(rendered) => rendered,
        Err(e) => {
            tracing::error!("Application error: {e}");
            return exit_code::runtime_error();
        }
    };

    if result.is_success() {
        println!("{rendered}");
        exit_code::SUCCESS
    } else {
        if json {
            println!("{rendered}");
        } else {
            eprintln!("{rendered}");
        }
        exit_code::runtime_error()
    }
}

/// Handles the `serve` subcommand.
///
/// Excluded from coverage - requires async runtime and signal handling.
#[cfg(not(tarpaulin_include))]
fn handle_serve(cli: &Cli) -> ExitCode {
    let config = match ReceiverConfig::load(cli) {
        Ok(config) => config,
        Err(e) => return config_failure(&e),
    };

    setup_tracing(config.verbose);
    tracing::info!("{config}");

    let runtime = tokio::runtime::Runtime::new().expect("Failed to create Tokio runtime");

    match runtime.block_on(run::serve(&config)) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::error!("Application error: {e}");
            exit_code::runtime_error()
        }
    }
}

fn config_failure(error: &ConfigError) -> ExitCode {
    eprintln!("Configuration error: {error}");
    print_config_hint(error);
    exit_code::CONFIG_ERROR
}
