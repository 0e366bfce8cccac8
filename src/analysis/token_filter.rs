//! Token filter implementations for token transformation.
//!
//! Filters receive the token stream produced by a tokenizer (or by an earlier
//! filter) and return a new stream. They can rewrite, drop, or add tokens.
//!
//! # Available Filters
//!
//! - [`uri_decoding::UriDecodingFilter`] - Decodes percent-escapes in URIs,
//!   keeping the original token alongside the decoded one
//!
//! # Examples
//!
//! ```
//! use siren::analysis::token::Token;
//! use siren::analysis::token_filter::Filter;
//! use siren::analysis::token_filter::uri_decoding::UriDecodingFilter;
//!
//! let filter = UriDecodingFilter::new("UTF-8").unwrap();
//! let tokens = vec![Token::new("a%2Fb", 0)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "a%2Fb");
//! assert_eq!(filtered[1].text, "a/b");
//! assert_eq!(filtered[1].position_increment, 0);
//! ```
//!
//! # Filter Chaining
//!
//! ```text
//! Tokenizer → URI decoding → Index
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// The trait requires `Send + Sync` so a configured filter can be shared by
/// analyzers running on different threads. Per-stream state belongs in the
/// returned [`TokenStream`], never in the filter itself.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod uri_decoding;

pub use uri_decoding::{UriDecodingConfig, UriDecodingFilter, UriDecodingStream};
