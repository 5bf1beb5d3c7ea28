//! Tests for validated configuration.

use super::ConfigError;
use super::cli::Cli;
use super::toml::TomlConfig;
use super::validated::{ReceiverConfig, ValidatedConfig};

/// Helper to create `submit` CLI args with the given global options
fn submit(args: &[&str]) -> Cli {
    let mut full_args = vec!["restyle", "submit", "--sentence", "hello", "--style", "pirate"];
    full_args.extend(args);
    Cli::parse_from_iter(full_args)
}

/// Helper to create `serve` CLI args
fn serve(args: &[&str]) -> Cli {
    let mut full_args = vec!["restyle", "serve"];
    full_args.extend(args);
    Cli::parse_from_iter(full_args)
}

/// Helper to parse TOML config
fn toml(content: &str) -> TomlConfig {
    TomlConfig::parse(content).unwrap()
}

mod receiver_tests;
