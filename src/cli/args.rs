//! Command line argument parsing for Siren CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::uri::TokenizerKind;

/// Siren - URI-aware text analysis
#[derive(Parser, Debug, Clone)]
#[command(name = "siren")]
#[command(about = "Analyze and percent-decode URI tokens")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Siren Contributors")]
#[command(long_about = None)]
pub struct SirenArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SirenArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Tokenize text and decode URI tokens
    Analyze(AnalyzeArgs),

    /// Decode each argument as a single token
    Decode(DecodeArgs),

    /// List commonly used encoding labels
    Encodings,
}

/// Arguments for analyzing text
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Text to analyze (reads --input or stdin when omitted)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Read the text to analyze from a file
    #[arg(short, long, value_name = "FILE", conflicts_with = "text")]
    pub input: Option<PathBuf>,

    /// Analyzer configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "SIREN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Text encoding of the decoded bytes (overrides the config file)
    #[arg(short, long)]
    pub encoding: Option<String>,

    /// Tokenizer to use (overrides the config file)
    #[arg(short, long)]
    pub tokenizer: Option<TokenizerKind>,

    /// Regex pattern for the regex tokenizer (overrides the config file)
    #[arg(short, long)]
    pub pattern: Option<String>,
}

/// Arguments for decoding single tokens
#[derive(Parser, Debug, Clone)]
pub struct DecodeArgs {
    /// Tokens to decode
    #[arg(value_name = "TOKEN", required = true)]
    pub tokens: Vec<String>,

    /// Text encoding of the decoded bytes
    #[arg(short, long, default_value = "UTF-8")]
    pub encoding: String,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

impl clap::ValueEnum for TokenizerKind {
    fn value_variants<'a>() -> &'a [Self] {
        &[TokenizerKind::Whitespace, TokenizerKind::Regex]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(match self {
            TokenizerKind::Whitespace => clap::builder::PossibleValue::new("whitespace"),
            TokenizerKind::Regex => clap::builder::PossibleValue::new("regex"),
        })
    }
}
