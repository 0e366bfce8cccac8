//! URI decoding filter.
//!
//! Decodes percent-escapes (`%xy`) found in token text. Every token that
//! contains a `%` is emitted twice at the same position: first unchanged, so
//! the raw form stays searchable, then decoded, with a position increment of
//! `0`. Tokens without a `%` pass through untouched.
//!
//! Runs of consecutive escapes are collected as raw bytes and reinterpreted
//! through the configured text encoding, so multi-byte characters such as
//! `%C3%A9` decode to `é` under UTF-8.
//!
//! Decoding never fails:
//!
//! - `%20` becomes `+`, so no whitespace is reintroduced into a term
//! - an escape with non-hex digits (`%G3`) is copied literally
//! - a trailing `%` or `%x` is copied literally
//! - byte sequences the encoding cannot map become U+FFFD
//!
//! # Examples
//!
//! ```
//! use siren::analysis::token::Token;
//! use siren::analysis::token_filter::Filter;
//! use siren::analysis::token_filter::uri_decoding::UriDecodingFilter;
//!
//! let filter = UriDecodingFilter::new("UTF-8").unwrap();
//! let tokens = vec![
//!     Token::new("http://stephane.net", 0),
//!     Token::new("http://stephane%3f%FGnet/", 1),
//! ];
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 3);
//! assert_eq!(result[0].text, "http://stephane.net");
//! assert_eq!(result[1].text, "http://stephane%3f%FGnet/");
//! assert_eq!(result[2].text, "http://stephane?%FGnet/");
//! assert_eq!(result[2].position_increment, 0);
//! ```

pub mod buffer;
pub mod charset;
pub mod hex;
pub mod pending;

use std::str::Chars;

use encoding_rs::Encoding;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

use self::buffer::TermBuffer;
use self::charset::{CharsetDecoder, lookup_encoding};
use self::pending::PendingBytes;

/// Byte value of `%20`.
const SPACE: i32 = 0x20;

/// Replacement written for `%20`.
const SPACE_REPLACEMENT: char = '+';

/// Default encoding name.
pub const DEFAULT_ENCODING: &str = "UTF-8";

/// Configuration for [`UriDecodingFilter`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UriDecodingConfig {
    /// Name of the text encoding used to interpret decoded bytes.
    pub encoding: String,
}

impl Default for UriDecodingConfig {
    fn default() -> Self {
        UriDecodingConfig {
            encoding: DEFAULT_ENCODING.to_string(),
        }
    }
}

/// A filter that decodes percent-encoded characters in URIs.
///
/// The filter itself only holds the resolved encoding. Each call to
/// [`Filter::filter`] creates a [`UriDecodingStream`] that owns its own
/// scratch buffers, so one filter can serve any number of fields.
#[derive(Clone, Copy)]
pub struct UriDecodingFilter {
    encoding: &'static Encoding,
}

impl UriDecodingFilter {
    /// Create a filter for the named encoding.
    ///
    /// Fails with [`SirenError::UnsupportedEncoding`](crate::error::SirenError::UnsupportedEncoding)
    /// if the name is not a known encoding label.
    pub fn new(encoding: &str) -> Result<Self> {
        let encoding = lookup_encoding(encoding)?;
        debug!("uri decoding filter using encoding {}", encoding.name());
        Ok(UriDecodingFilter { encoding })
    }

    /// Create a filter from configuration.
    pub fn from_config(config: &UriDecodingConfig) -> Result<Self> {
        Self::new(&config.encoding)
    }

    /// The canonical name of the resolved encoding.
    pub fn encoding_name(&self) -> &'static str {
        self.encoding.name()
    }

    /// Wrap any token iterator in a decoding stream.
    pub fn stream<I>(&self, input: I) -> UriDecodingStream<I>
    where
        I: Iterator<Item = Token>,
    {
        UriDecodingStream::new(input, self.encoding)
    }
}

impl Default for UriDecodingFilter {
    fn default() -> Self {
        UriDecodingFilter {
            encoding: encoding_rs::UTF_8,
        }
    }
}

impl std::fmt::Debug for UriDecodingFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UriDecodingFilter")
            .field("encoding", &self.encoding.name())
            .finish()
    }
}

impl Filter for UriDecodingFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(self.stream(tokens)))
    }

    fn name(&self) -> &'static str {
        "uri_decoding"
    }
}

/// Emission state of a [`UriDecodingStream`].
///
/// At most one token is ever held back.
#[derive(Debug)]
enum StreamState {
    /// The next call pulls from upstream.
    AwaitingInput,
    /// The next call emits this decoded token without pulling.
    PendingEmit(Token),
}

/// Pull-based decoding over an upstream token iterator.
pub struct UriDecodingStream<I> {
    input: I,
    state: StreamState,
    term: TermBuffer,
    pending: PendingBytes,
    decoder: CharsetDecoder,
}

impl<I> UriDecodingStream<I>
where
    I: Iterator<Item = Token>,
{
    pub fn new(input: I, encoding: &'static Encoding) -> Self {
        UriDecodingStream {
            input,
            state: StreamState::AwaitingInput,
            term: TermBuffer::new(),
            pending: PendingBytes::new(),
            decoder: CharsetDecoder::new(encoding),
        }
    }

    /// Whether a decoded token is queued for the next call.
    pub fn is_pending(&self) -> bool {
        matches!(self.state, StreamState::PendingEmit(_))
    }

    /// Current capacity of the output buffer in bytes.
    pub fn buffer_capacity(&self) -> usize {
        self.term.capacity()
    }

    /// Restart on a fresh upstream, discarding any queued token.
    ///
    /// Scratch buffers are kept.
    pub fn reset(&mut self, input: I) {
        self.input = input;
        self.state = StreamState::AwaitingInput;
        self.term.clear();
        self.pending.clear();
    }

    /// Give back the upstream iterator.
    pub fn into_inner(self) -> I {
        self.input
    }

    /// Decode `text` into the output buffer.
    ///
    /// Returns `false`, leaving the buffer untouched, when the text has no `%`.
    fn decode(&mut self, text: &str) -> bool {
        if !text.contains('%') {
            return false;
        }

        self.term.clear();
        self.term.ensure_capacity(text.len());
        self.pending.clear();

        let mut chars = text.chars();

        while let Some(c) = chars.next() {
            if c != '%' {
                self.term.push(c);
                continue;
            }

            let dangling = self.decode_escape_run(&mut chars);
            self.decoder.flush(&mut self.pending, &mut self.term);
            if dangling {
                // Fewer than two characters after this '%'.
                self.term.push('%');
            }
        }

        true
    }

    /// Process a run of escapes whose first `%` has just been consumed.
    ///
    /// Stops after the last escape of the run, leaving `chars` on the first
    /// character that does not start another escape. Returns `true` if the
    /// run ended on a `%` with fewer than two characters after it.
    fn decode_escape_run(&mut self, chars: &mut Chars<'_>) -> bool {
        loop {
            let mut lookahead = chars.clone();
            let (Some(c1), Some(c2)) = (lookahead.next(), lookahead.next()) else {
                return true;
            };
            *chars = lookahead;

            let value = hex::escape_value(c1, c2);
            if value == SPACE {
                self.decoder.flush(&mut self.pending, &mut self.term);
                self.term.push(SPACE_REPLACEMENT);
            } else if value >= 0 {
                if self.pending.is_full() {
                    self.decoder.flush(&mut self.pending, &mut self.term);
                }
                let pushed = self.pending.push(value as u8);
                debug_assert!(pushed, "accumulator is flushed before it overflows");
            } else {
                self.decoder.flush(&mut self.pending, &mut self.term);
                self.term.push('%');
                self.term.push(c1);
                self.term.push(c2);
            }

            if chars.as_str().starts_with('%') {
                chars.next();
            } else {
                return false;
            }
        }
    }
}

impl<I> Iterator for UriDecodingStream<I>
where
    I: Iterator<Item = Token>,
{
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if let StreamState::PendingEmit(decoded) =
            std::mem::replace(&mut self.state, StreamState::AwaitingInput)
        {
            return Some(decoded);
        }

        let token = self.input.next()?;
        if token.is_stopped() || !self.decode(&token.text) {
            return Some(token);
        }

        trace!("decoded uri {:?} -> {:?}", token.text, self.term.as_str());
        let decoded = token
            .with_text(self.term.as_str())
            .with_original_text(token.text.as_str())
            .with_position_increment(0);
        self.state = StreamState::PendingEmit(decoded);
        Some(token)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let queued = usize::from(self.is_pending());
        let (lower, upper) = self.input.size_hint();
        (
            lower.saturating_add(queued),
            upper.and_then(|u| u.checked_mul(2)?.checked_add(queued)),
        )
    }
}

impl<I> std::fmt::Debug for UriDecodingStream<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UriDecodingStream")
            .field("state", &self.state)
            .field("buffer_capacity", &self.term.capacity())
            .field("decoder", &self.decoder)
            .finish()
    }
}
