//! Regex-based tokenizer implementation.

use std::sync::Arc;

use regex::Regex;

use super::{Tokenizer, detect_token_type};
use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// Default pattern: maximal runs of non-whitespace.
pub const DEFAULT_PATTERN: &str = r"\S+";

/// A regex-based tokenizer that extracts tokens using regular expressions.
///
/// Each match (or each gap between matches, see [`RegexTokenizer::with_gaps`])
/// becomes a token. If the pattern has a capture group, the first group that
/// participated in the match is used as the token text, so a pattern such as
/// `<([^>]*)>|("[^"]*")` can strip URI brackets while keeping literals whole.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    /// The regex pattern used to extract tokens
    pattern: Arc<Regex>,
    /// Whether to extract gaps (text between matches) instead of matches
    gaps: bool,
}

impl RegexTokenizer {
    /// Create a new regex tokenizer with the default pattern.
    pub fn new() -> Result<Self> {
        Self::with_pattern(DEFAULT_PATTERN)
    }

    /// Create a new regex tokenizer with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)?;

        Ok(RegexTokenizer {
            pattern: Arc::new(regex),
            gaps: false,
        })
    }

    /// Create a tokenizer that extracts gaps (text between matches) instead of matches.
    pub fn with_gaps(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)?;

        Ok(RegexTokenizer {
            pattern: Arc::new(regex),
            gaps: true,
        })
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Check if this tokenizer extracts gaps.
    pub fn gaps(&self) -> bool {
        self.gaps
    }

    fn tokenize_gaps(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut last_end = 0;

        for mat in self.pattern.find_iter(text) {
            if mat.start() > last_end {
                tokens.push(make_token(text, tokens.len(), last_end, mat.start()));
            }
            last_end = mat.end();
        }

        if last_end < text.len() {
            tokens.push(make_token(text, tokens.len(), last_end, text.len()));
        }

        tokens
    }

    fn tokenize_matches(&self, text: &str) -> Vec<Token> {
        self.pattern
            .captures_iter(text)
            .filter_map(|caps| {
                // First participating group, or the whole match.
                caps.iter().skip(1).flatten().next().or_else(|| caps.get(0))
            })
            .filter(|m| !m.is_empty())
            .enumerate()
            .map(|(position, m)| make_token(text, position, m.start(), m.end()))
            .collect()
    }
}

impl Default for RegexTokenizer {
    fn default() -> Self {
        RegexTokenizer {
            pattern: Arc::new(Regex::new(DEFAULT_PATTERN).expect("default pattern is valid")),
            gaps: false,
        }
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens = if self.gaps {
            self.tokenize_gaps(text)
        } else {
            self.tokenize_matches(text)
        };

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}

fn make_token(text: &str, position: usize, start: usize, end: usize) -> Token {
    let word = &text[start..end];
    Token::with_offsets(word, position, start, end).with_token_type(detect_token_type(word))
}
