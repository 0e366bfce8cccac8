//! Core analyzer trait definition.
//!
//! An [`Analyzer`] is the complete text processing pipeline for one field:
//!
//! ```text
//! Raw Text → Analyzer → Token Stream → Index
//!             ↓
//!         Tokenizer
//!             ↓
//!         Filter 1 … Filter N
//! ```
//!
//! # Available Implementations
//!
//! - [`PipelineAnalyzer`](super::pipeline::PipelineAnalyzer) - Custom tokenizer + filter chains
//! - [`UriAnalyzer`](super::uri::UriAnalyzer) - Tokenization with URI decoding
//!
//! # Examples
//!
//! ```
//! use siren::analysis::analyzer::analyzer::Analyzer;
//! use siren::analysis::analyzer::uri::UriAnalyzer;
//!
//! let analyzer = UriAnalyzer::new().unwrap();
//! let tokens: Vec<_> = analyzer.analyze("http://a.org/%7Ebob").unwrap().collect();
//!
//! assert_eq!(tokens[0].text, "http://a.org/%7Ebob");
//! assert_eq!(tokens[1].text, "http://a.org/~bob");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// The trait requires `Send + Sync` so analyzers can be shared across
/// indexing threads. Each call to [`analyze`](Self::analyze) returns an
/// independent stream.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;

    /// Enable downcasting to the concrete analyzer type.
    fn as_any(&self) -> &dyn std::any::Any;
}
