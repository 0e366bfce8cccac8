//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first step of the analysis pipeline: they split raw
//! text into typed tokens that filters then transform. Calling
//! [`Tokenizer::tokenize`] again on new text starts a fresh stream.
//!
//! # Available Tokenizers
//!
//! - [`whitespace::WhitespaceTokenizer`] - Splits on whitespace characters
//! - [`regex::RegexTokenizer`] - Custom regex-based tokenization
//!
//! # Examples
//!
//! ```
//! use siren::analysis::token::TokenType;
//! use siren::analysis::tokenizer::Tokenizer;
//! use siren::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("see http://a.org/%7E").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[1].token_type(), Some(TokenType::Uri));
//! ```

use crate::analysis::token::{TokenStream, TokenType};
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Classify a token by its content.
///
/// Text starting with a URI scheme (`http:`, `urn:`, `mailto:`...) is a
/// [`TokenType::Uri`]; text wrapped in double quotes is a
/// [`TokenType::Literal`].
pub fn detect_token_type(word: &str) -> TokenType {
    if word.is_empty() {
        return TokenType::Other;
    }

    if has_uri_scheme(word) {
        return TokenType::Uri;
    }

    if word.len() >= 2 && word.starts_with('"') && word.ends_with('"') {
        return TokenType::Literal;
    }

    if word.chars().all(|c| c.is_ascii_digit()) {
        return TokenType::Num;
    }

    if word
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return TokenType::Alphanum;
    }

    if word.chars().all(|c| c.is_ascii_punctuation()) {
        return TokenType::Punctuation;
    }

    TokenType::Other
}

/// `scheme ":"` where scheme is `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`.
fn has_uri_scheme(word: &str) -> bool {
    let Some((scheme, rest)) = word.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    let starts_alpha = chars.next().is_some_and(|c| c.is_ascii_alphabetic());

    starts_alpha
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        && !rest.is_empty()
}

pub mod regex;
pub mod whitespace;
