//! Configuration layer for restyle.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`], [`ReceiverConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Values explicitly passed via command line
//! 2. **TOML config file** - Values from the configuration file
//! 3. **Built-in defaults** - Hardcoded default values
//!
//! The webhook `url` has no default; `submit` fails with
//! [`ConfigError::MissingRequired`] when neither source provides it.
//! `serve` and `init` never read it.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod validated_tests;

pub use cli::{Cli, Command, StyleArg};
pub use error::{ConfigError, field};
pub use toml::{ReceiverSection, TomlConfig, WebhookSection, default_config_template};
pub use validated::{ReceiverConfig, ValidatedConfig, write_default_config};
