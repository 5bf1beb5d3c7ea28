//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use url::Url;

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Fully validated configuration for the submit command.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
/// The function validates all inputs and returns errors for invalid configurations.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Webhook URL (required)
    pub url: Url,

    /// JSON field holding the styled sentence
    pub result_field: String,

    /// Webhook response deadline
    pub timeout: Duration,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ url: {}, result_field: {}, timeout: {}s }}",
            self.url,
            self.result_field,
            self.timeout.as_secs(),
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The URL is missing or invalid
    /// - The result field is blank
    /// - The timeout is zero
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let url = Self::resolve_url(cli, toml)?;
        let result_field = Self::resolve_result_field(cli, toml)?;
        let timeout = Self::resolve_timeout(cli, toml)?;

        Ok(Self {
            url,
            result_field,
            timeout,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = load_toml(cli)?;
        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_url(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Url, ConfigError> {
        let url_str = cli
            .url
            .as_deref()
            .or_else(|| toml.and_then(|t| t.webhook.url.as_deref()))
            .ok_or_else(|| {
                ConfigError::missing(field::URL, "Use --url or set webhook.url in config file")
            })?;

        let url = Url::parse(url_str).map_err(|e| ConfigError::InvalidUrl {
            url: url_str.to_string(),
            reason: e.to_string(),
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(ConfigError::InvalidUrl {
                url: url_str.to_string(),
                reason: format!("unsupported scheme '{scheme}', expected http or https"),
            }),
        }
    }

    fn resolve_result_field(cli: &Cli, toml: Option<&TomlConfig>) -> Result<String, ConfigError> {
        let name = cli
            .result_field
            .as_deref()
            .or_else(|| toml.and_then(|t| t.webhook.result_field.as_deref()))
            .unwrap_or(defaults::RESULT_FIELD);

        if name.trim().is_empty() {
            return Err(ConfigError::InvalidResultField(name.to_string()));
        }

        Ok(name.to_string())
    }

    fn resolve_timeout(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Duration, ConfigError> {
        // Priority: CLI explicit > TOML > default
        let seconds = cli
            .timeout
            .or_else(|| toml.and_then(|t| t.webhook.timeout))
            .unwrap_or(defaults::TIMEOUT_SECS);

        if seconds == 0 {
            return Err(ConfigError::InvalidDuration {
                field: field::TIMEOUT,
                reason: "must be greater than 0".to_string(),
            });
        }

        Ok(Duration::from_secs(seconds))
    }
}

/// Validated configuration for the serve command.
#[derive(Debug)]
pub struct ReceiverConfig {
    /// Socket address to bind
    pub listen: SocketAddr,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ReceiverConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Config {{ listen: {} }}", self.listen)
    }
}

impl ReceiverConfig {
    /// Creates a receiver configuration from CLI arguments and optional TOML config.
    ///
    /// # Errors
    ///
    /// Returns an error if the listen address is not a socket address.
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let value = cli
            .listen()
            .or_else(|| toml.and_then(|t| t.receiver.listen.as_deref()))
            .unwrap_or(defaults::LISTEN);

        let listen = value
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidListenAddress {
                value: value.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            listen,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be loaded or the merged
    /// configuration is invalid.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = load_toml(cli)?;
        Self::from_raw(cli, toml.as_ref())
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

fn load_toml(cli: &Cli) -> Result<Option<TomlConfig>, ConfigError> {
    cli.config.as_deref().map(TomlConfig::load).transpose()
}
