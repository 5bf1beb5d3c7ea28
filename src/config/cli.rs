//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::submit::Style;

/// Restyle: rewrite a sentence in a chosen voice
///
/// Sends a sentence and a style to a workflow webhook and prints the
/// styled result, or runs the endpoint that receives pushed results.
#[derive(Debug, Parser)]
#[command(name = "restyle")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Webhook URL (required for submit)
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// JSON field holding the styled sentence in webhook replies
    #[arg(long = "result-field", global = true)]
    pub result_field: Option<String>,

    /// Webhook response deadline in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Path to configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for restyle
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Submit a sentence for restyling
    Submit {
        /// Sentence to restyle
        #[arg(long, short)]
        sentence: String,

        /// Style to apply
        #[arg(long, short = 'S', value_enum)]
        style: StyleArg,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run the endpoint that receives pushed results
    Serve {
        /// Address to listen on
        #[arg(long, short)]
        listen: Option<String>,
    },

    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = "restyle.toml")]
        output: PathBuf,
    },
}

/// Style argument for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StyleArg {
    /// Gen Z
    #[value(name = "gen-z")]
    GenZ,
    /// Academic
    Academic,
    /// British slang
    #[value(name = "british-slang")]
    BritishSlang,
    /// Valley Girl
    #[value(name = "valley-girl")]
    ValleyGirl,
    /// Pirate
    Pirate,
    /// Caveman
    Caveman,
    /// Robot
    Robot,
    /// Overly Dramatic
    #[value(name = "overly-dramatic")]
    OverlyDramatic,
}

impl From<StyleArg> for Style {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::GenZ => Self::GenZ,
            StyleArg::Academic => Self::Academic,
            StyleArg::BritishSlang => Self::BritishSlang,
            StyleArg::ValleyGirl => Self::ValleyGirl,
            StyleArg::Pirate => Self::Pirate,
            StyleArg::Caveman => Self::Caveman,
            StyleArg::Robot => Self::Robot,
            StyleArg::OverlyDramatic => Self::OverlyDramatic,
        }
    }
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Parses CLI arguments from an iterator, returning clap's error
    /// instead of exiting.
    ///
    /// # Errors
    ///
    /// Returns the clap error for invalid or missing arguments.
    pub fn try_parse_from_iter<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(iter)
    }

    /// Returns the listen address given to `serve`, if any.
    #[must_use]
    pub fn listen(&self) -> Option<&str> {
        match &self.command {
            Command::Serve { listen } => listen.as_deref(),
            _ => None,
        }
    }
}
