//! Command implementations for Siren CLI.

use std::fs;
use std::io::{self, Read};

use anyhow::Context;
use log::{debug, info};

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::uri::{TokenizerKind, UriAnalyzer, UriAnalyzerConfig};
use crate::analysis::token::Token;
use crate::analysis::token_filter::uri_decoding::UriDecodingFilter;
use crate::analysis::token_filter::uri_decoding::charset::lookup_encoding;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;

/// Labels shown by the `encodings` command.
const COMMON_ENCODING_LABELS: &[&str] = &[
    "UTF-8",
    "UTF-16LE",
    "UTF-16BE",
    "ISO-8859-1",
    "ISO-8859-2",
    "ISO-8859-15",
    "windows-1251",
    "windows-1252",
    "KOI8-R",
    "Shift_JIS",
    "EUC-JP",
    "ISO-2022-JP",
    "GBK",
    "gb18030",
    "Big5",
    "EUC-KR",
];

/// Execute a CLI command.
pub fn execute_command(args: SirenArgs) -> Result<()> {
    match &args.command {
        Command::Analyze(analyze_args) => analyze(analyze_args, &args),
        Command::Decode(decode_args) => decode(decode_args, &args),
        Command::Encodings => list_encodings(&args),
    }
}

/// Execute a CLI command, naming the failed command in the error.
pub fn run(args: SirenArgs) -> anyhow::Result<()> {
    let name = match &args.command {
        Command::Analyze(_) => "analyze",
        Command::Decode(_) => "decode",
        Command::Encodings => "encodings",
    };
    execute_command(args).with_context(|| format!("{name} failed"))
}

/// Build the analyzer configuration from a config file and flag overrides.
pub fn resolve_config(args: &AnalyzeArgs) -> Result<UriAnalyzerConfig> {
    let mut config = match &args.config {
        Some(path) => {
            debug!("loading analyzer config from {}", path.display());
            UriAnalyzerConfig::from_file(path)?
        }
        None => UriAnalyzerConfig::default(),
    };

    if let Some(encoding) = &args.encoding {
        config.decoding.encoding = encoding.clone();
    }
    if let Some(pattern) = &args.pattern {
        config.pattern = Some(pattern.clone());
        config.tokenizer = TokenizerKind::Regex;
    }
    if let Some(tokenizer) = args.tokenizer {
        config.tokenizer = tokenizer;
        if tokenizer == TokenizerKind::Whitespace && args.pattern.is_none() {
            // A file pattern only applies to the regex tokenizer.
            config.pattern = None;
        }
    }

    Ok(config)
}

/// Tokenize and decode text.
fn analyze(args: &AnalyzeArgs, cli_args: &SirenArgs) -> Result<()> {
    let config = resolve_config(args)?;
    let analyzer = UriAnalyzer::from_config(&config)?;

    let text = match (&args.text, &args.input) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => fs::read_to_string(path)?,
        (None, None) => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let tokens: Vec<TokenRow> = analyzer
        .analyze(&text)?
        .map(|token| TokenRow::from(&token))
        .collect();
    info!("analyzed {} bytes into {} tokens", text.len(), tokens.len());

    output_result(
        "Analysis complete",
        &AnalysisResult {
            analyzer: analyzer.name().to_string(),
            encoding: analyzer.encoding_name().to_string(),
            tokens,
        },
        cli_args,
    )
}

/// Decode a single token, returning the decoded sibling if one was emitted.
pub fn decode_token(filter: &UriDecodingFilter, text: &str) -> DecodedToken {
    let mut stream = filter.stream(std::iter::once(Token::new(text, 0)));
    let original = stream.next().map(|t| t.text).unwrap_or_default();
    let decoded = stream.next().map(|t| t.text);

    DecodedToken { original, decoded }
}

/// Decode every argument as its own token.
fn decode(args: &DecodeArgs, cli_args: &SirenArgs) -> Result<()> {
    let filter = UriDecodingFilter::new(&args.encoding)?;
    let tokens = args
        .tokens
        .iter()
        .map(|text| decode_token(&filter, text))
        .collect();

    output_result(
        "Decoding complete",
        &DecodeResult {
            encoding: filter.encoding_name().to_string(),
            tokens,
        },
        cli_args,
    )
}

/// List common labels with the encoding they resolve to.
fn list_encodings(cli_args: &SirenArgs) -> Result<()> {
    let encodings = COMMON_ENCODING_LABELS
        .iter()
        .map(|label| -> Result<(String, String)> {
            let encoding = lookup_encoding(label)?;
            Ok((label.to_string(), encoding.name().to_string()))
        })
        .collect::<Result<Vec<_>>>()?;

    output_result("Supported encodings", &EncodingList { encodings }, cli_args)
}
