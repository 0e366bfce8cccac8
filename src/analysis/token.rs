//! Token types for text analysis.
//!
//! A [`Token`] is the unit that flows from a tokenizer through the filter
//! chain. Besides its text it carries positional data and an opaque type tag
//! that filters pass through unchanged.
//!
//! # Positions
//!
//! `position_increment` is the distance to the previous token. A value of
//! `0` stacks the token on the previous one, which is how alternative forms
//! of the same term are expressed:
//!
//! ```text
//! Input: "http://a.org/%7Euser"
//!
//!   Position 0: "http://a.org/%7Euser" (pos_inc=1)
//!   Position 0: "http://a.org/~user"   (pos_inc=0)  ← decoded sibling
//! ```
//!
//! # Examples
//!
//! ```
//! use siren::analysis::token::{Token, TokenType};
//!
//! let token = Token::with_offsets("http://a.org/", 0, 0, 13).with_token_type(TokenType::Uri);
//! assert_eq!(token.text, "http://a.org/");
//! assert_eq!(token.position_increment, 1);
//! assert_eq!(token.token_type(), Some(TokenType::Uri));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single unit of text after tokenization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the original token stream (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the original text
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text
    pub end_offset: usize,

    /// Whether this token has been marked as stopped (removed) by a filter
    pub stopped: bool,

    /// Additional metadata that can be attached to tokens
    pub metadata: Option<TokenMetadata>,

    /// Position increment from the previous token (default: 1).
    ///
    /// - 1: next position
    /// - 0: same position as the previous token
    /// - >1: skipped positions
    pub position_increment: usize,

    /// How many positions this token spans (default: 1).
    pub position_length: usize,
}

/// Token type classification.
///
/// Only tokenizers assign a type; filters treat it as opaque.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    /// URIs and IRIs (`http://...`, `urn:...`)
    Uri,
    /// Quoted literal values
    Literal,
    /// Alphanumeric text
    Alphanum,
    /// Numeric values
    Num,
    /// Punctuation marks
    Punctuation,
    /// Other/unknown token types
    Other,
}

impl TokenType {
    /// Lowercase name used in CLI output.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::Uri => "uri",
            TokenType::Literal => "literal",
            TokenType::Alphanum => "alphanum",
            TokenType::Num => "num",
            TokenType::Punctuation => "punctuation",
            TokenType::Other => "other",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Additional metadata that can be attached to tokens
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    /// The original text before filtering
    pub original_text: Option<String>,

    /// Token type classification
    pub token_type: Option<TokenType>,
}

impl TokenMetadata {
    /// Create a new empty metadata object.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Self::with_offsets(text, position, 0, 0)
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
            stopped: false,
            metadata: None,
            position_increment: 1,
            position_length: 1,
        }
    }

    /// Get the length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Mark this token as stopped.
    pub fn stop(mut self) -> Self {
        self.stopped = true;
        self
    }

    /// Check if this token is stopped.
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Get a reference to the metadata.
    pub fn metadata(&self) -> Option<&TokenMetadata> {
        self.metadata.as_ref()
    }

    /// Set the original text in metadata.
    pub fn with_original_text<S: Into<String>>(mut self, original: S) -> Self {
        let metadata = self.metadata.get_or_insert_with(TokenMetadata::new);
        metadata.original_text = Some(original.into());
        self
    }

    /// Set the token type in metadata.
    pub fn with_token_type(mut self, token_type: TokenType) -> Self {
        let metadata = self.metadata.get_or_insert_with(TokenMetadata::new);
        metadata.token_type = Some(token_type);
        self
    }

    /// The token type, if a tokenizer assigned one.
    pub fn token_type(&self) -> Option<TokenType> {
        self.metadata.as_ref().and_then(|m| m.token_type)
    }

    /// Clone this token with updated text.
    pub fn with_text<S: Into<String>>(&self, text: S) -> Self {
        let mut token = self.clone();
        token.text = text.into();
        token
    }

    /// Set the position increment.
    pub fn with_position_increment(mut self, increment: usize) -> Self {
        self.position_increment = increment;
        self
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a sequence of tokens from the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

/// Trait for types that can produce a token stream.
pub trait IntoTokenStream {
    /// Convert this type into a token stream.
    fn into_token_stream(self) -> TokenStream;
}

impl IntoTokenStream for Vec<Token> {
    fn into_token_stream(self) -> TokenStream {
        Box::new(self.into_iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("hello", 0);
        assert_eq!(token.text, "hello");
        assert_eq!(token.position, 0);
        assert_eq!(token.position_increment, 1);
        assert_eq!(token.position_length, 1);
        assert!(!token.stopped);
        assert!(token.metadata.is_none());
        assert_eq!(token.token_type(), None);
    }

    #[test]
    fn test_token_with_text_keeps_metadata() {
        let token = Token::with_offsets("a%2eb", 3, 10, 15)
            .with_token_type(TokenType::Uri)
            .with_position_increment(2);
        let sibling = token.with_text("a.b");

        assert_eq!(sibling.text, "a.b");
        assert_eq!(sibling.position, 3);
        assert_eq!(sibling.start_offset, 10);
        assert_eq!(sibling.end_offset, 15);
        assert_eq!(sibling.position_increment, 2);
        assert_eq!(sibling.token_type(), Some(TokenType::Uri));
    }

    #[test]
    fn test_token_original_text() {
        let token = Token::new("a.b", 0).with_original_text("a%2eb");
        assert_eq!(
            token.metadata().and_then(|m| m.original_text.as_deref()),
            Some("a%2eb")
        );
    }

    #[test]
    fn test_token_type_serde() {
        let json = serde_json::to_string(&TokenType::Uri).unwrap();
        assert_eq!(json, "\"uri\"");
        let parsed: TokenType = serde_json::from_str("\"literal\"").unwrap();
        assert_eq!(parsed, TokenType::Literal);
        assert_eq!(TokenType::Punctuation.to_string(), "punctuation");
    }

    #[test]
    fn test_token_stream() {
        let tokens = vec![Token::new("hello", 0), Token::new("world", 1)];

        let collected: Vec<_> = tokens.into_token_stream().collect();

        assert_eq!(collected.len(), 2);
        assert_eq!(collected[0].text, "hello");
        assert_eq!(collected[1].text, "world");
    }
}
