//! # Siren
//!
//! URI-aware text analysis for full-text search.
//!
//! ## Features
//!
//! - Streaming percent-decoding of URI tokens with a configurable text encoding
//! - Original and decoded forms indexed at the same position
//! - Lenient handling of malformed escapes: decoding never fails mid-token
//! - Tokenizer / filter / analyzer pipeline with JSON configuration

pub mod analysis;
pub mod cli;
pub mod error;

pub mod prelude {
    pub use crate::analysis::analyzer::{
        Analyzer, PipelineAnalyzer, UriAnalyzer, UriAnalyzerConfig,
    };
    pub use crate::analysis::token::{Token, TokenStream, TokenType};
    pub use crate::analysis::token_filter::{Filter, UriDecodingConfig, UriDecodingFilter};
    pub use crate::analysis::tokenizer::Tokenizer;
    pub use crate::error::{Result, SirenError};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
