//! Analyzer for fields holding URIs.
//!
//! Tokenizes the input (whitespace by default) and decodes percent-escapes
//! with a [`UriDecodingFilter`]. Built from a serde [`UriAnalyzerConfig`] so
//! field definitions can carry their analysis settings as JSON:
//!
//! ```json
//! {
//!   "decoding": { "encoding": "UTF-8" },
//!   "tokenizer": "regex",
//!   "pattern": "<([^>]*)>|(\"[^\"]*\")"
//! }
//! ```
//!
//! # Examples
//!
//! ```
//! use siren::analysis::analyzer::analyzer::Analyzer;
//! use siren::analysis::analyzer::uri::{UriAnalyzer, UriAnalyzerConfig};
//!
//! let config = UriAnalyzerConfig::from_json_str(r#"{"decoding": {"encoding": "latin1"}}"#).unwrap();
//! let analyzer = UriAnalyzer::from_config(&config).unwrap();
//!
//! let tokens: Vec<_> = analyzer.analyze("caf%E9").unwrap().collect();
//! assert_eq!(tokens[1].text, "café");
//! ```

use std::fs;
use std::path::Path;
use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::uri_decoding::{UriDecodingConfig, UriDecodingFilter};
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::regex::RegexTokenizer;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::error::{Result, SirenError};

/// Which tokenizer feeds the decoding filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenizerKind {
    #[default]
    Whitespace,
    Regex,
}

/// Configuration for [`UriAnalyzer`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UriAnalyzerConfig {
    /// Settings of the decoding filter.
    pub decoding: UriDecodingConfig,

    /// Tokenizer used before decoding.
    pub tokenizer: TokenizerKind,

    /// Pattern for [`TokenizerKind::Regex`]; the regex tokenizer default when unset.
    pub pattern: Option<String>,
}

impl UriAnalyzerConfig {
    /// Parse a configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Set the encoding of the decoding filter.
    pub fn with_encoding<S: Into<String>>(mut self, encoding: S) -> Self {
        self.decoding.encoding = encoding.into();
        self
    }

    fn build_tokenizer(&self) -> Result<Arc<dyn Tokenizer>> {
        match (self.tokenizer, self.pattern.as_deref()) {
            (TokenizerKind::Whitespace, None) => Ok(Arc::new(WhitespaceTokenizer::new())),
            (TokenizerKind::Whitespace, Some(_)) => Err(SirenError::invalid_config(
                "a tokenizer pattern requires the regex tokenizer",
            )),
            (TokenizerKind::Regex, None) => Ok(Arc::new(RegexTokenizer::new()?)),
            (TokenizerKind::Regex, Some(pattern)) => {
                Ok(Arc::new(RegexTokenizer::with_pattern(pattern)?))
            }
        }
    }
}

/// An analyzer that tokenizes text and decodes percent-encoded URIs.
#[derive(Clone, Debug)]
pub struct UriAnalyzer {
    inner: PipelineAnalyzer,
    filter: UriDecodingFilter,
}

impl UriAnalyzer {
    /// Whitespace tokenization with UTF-8 decoding.
    pub fn new() -> Result<Self> {
        Self::from_config(&UriAnalyzerConfig::default())
    }

    /// Whitespace tokenization with the named encoding.
    pub fn with_encoding(encoding: &str) -> Result<Self> {
        Self::from_config(&UriAnalyzerConfig::default().with_encoding(encoding))
    }

    /// Build an analyzer from configuration.
    ///
    /// Fails before any text is analyzed if the encoding is unsupported or
    /// the tokenizer settings are invalid.
    pub fn from_config(config: &UriAnalyzerConfig) -> Result<Self> {
        let filter = UriDecodingFilter::from_config(&config.decoding)?;
        let tokenizer = config.build_tokenizer()?;
        debug!(
            "uri analyzer: tokenizer={} encoding={}",
            tokenizer.name(),
            filter.encoding_name()
        );

        let inner = PipelineAnalyzer::new(tokenizer)
            .add_filter(Arc::new(filter))
            .with_name("uri");
        Ok(UriAnalyzer { inner, filter })
    }

    /// The canonical name of the decoding encoding.
    pub fn encoding_name(&self) -> &'static str {
        self.filter.encoding_name()
    }

    /// Get the underlying pipeline.
    pub fn pipeline(&self) -> &PipelineAnalyzer {
        &self.inner
    }
}

impl Analyzer for UriAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "uri"
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
