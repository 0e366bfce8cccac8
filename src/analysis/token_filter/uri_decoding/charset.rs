//! Reinterpretation of decoded escape bytes through a text encoding.
//!
//! Wraps an [`encoding_rs`] decoder configured to substitute U+FFFD for
//! malformed or unmappable input. Every flush is a complete decode of the
//! pending bytes: nothing is carried over to the next flush.

use encoding_rs::{CoderResult, Decoder, Encoding};
use log::debug;

use crate::analysis::token_filter::uri_decoding::buffer::TermBuffer;
use crate::analysis::token_filter::uri_decoding::pending::PendingBytes;
use crate::error::{Result, SirenError};

/// Resolve an encoding label such as `"UTF-8"` or `"latin1"`.
///
/// Labels are matched case-insensitively against the WHATWG registry. The
/// `replacement` pseudo-encoding is rejected because it cannot decode anything.
pub fn lookup_encoding(name: &str) -> Result<&'static Encoding> {
    Encoding::for_label_no_replacement(name.trim().as_bytes())
        .ok_or_else(|| SirenError::unsupported_encoding(name))
}

/// Stateful decoder that flushes [`PendingBytes`] into a [`TermBuffer`].
pub struct CharsetDecoder {
    encoding: &'static Encoding,
    decoder: Decoder,
}

impl CharsetDecoder {
    pub fn new(encoding: &'static Encoding) -> Self {
        CharsetDecoder {
            encoding,
            decoder: encoding.new_decoder_without_bom_handling(),
        }
    }

    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    /// Decode all pending bytes into `out` and clear `pending`.
    ///
    /// A no-op when nothing is pending.
    pub fn flush(&mut self, pending: &mut PendingBytes, out: &mut TermBuffer) {
        if pending.is_empty() {
            return;
        }

        let replaced = self.decode_into(pending.as_slice(), out.as_mut_string());
        if replaced {
            debug!(
                "replaced malformed {} sequence {:02x?}",
                self.encoding.name(),
                pending.as_slice()
            );
        }
        pending.clear();
    }

    /// Returns whether any replacement character was produced.
    fn decode_into(&mut self, bytes: &[u8], out: &mut String) -> bool {
        let mut input = bytes;
        let mut replaced = false;

        loop {
            let needed = self
                .decoder
                .max_utf8_buffer_length(input.len())
                .unwrap_or(input.len() * 3 + 4);
            out.reserve(needed);

            let (result, read, had_replacements) = self.decoder.decode_to_string(input, out, true);
            replaced |= had_replacements;
            input = &input[read..];

            match result {
                CoderResult::InputEmpty => break,
                CoderResult::OutputFull => continue,
            }
        }

        // A decoder that has seen `last = true` is finished.
        self.decoder = self.encoding.new_decoder_without_bom_handling();
        replaced
    }
}

impl std::fmt::Debug for CharsetDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CharsetDecoder")
            .field("encoding", &self.encoding.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flush_bytes(encoding: &str, bytes: &[u8]) -> String {
        let mut decoder = CharsetDecoder::new(lookup_encoding(encoding).unwrap());
        let mut pending = PendingBytes::new();
        let mut out = TermBuffer::new();
        for &b in bytes {
            assert!(pending.push(b));
        }
        decoder.flush(&mut pending, &mut out);
        assert!(pending.is_empty());
        out.as_str().to_string()
    }

    #[test]
    fn test_lookup_encoding() {
        assert_eq!(lookup_encoding("UTF-8").unwrap().name(), "UTF-8");
        assert_eq!(lookup_encoding("utf8").unwrap().name(), "UTF-8");
        assert_eq!(lookup_encoding(" Shift_JIS ").unwrap().name(), "Shift_JIS");
        assert_eq!(lookup_encoding("latin1").unwrap().name(), "windows-1252");

        assert!(lookup_encoding("FTU_8").unwrap_err().is_unsupported_encoding());
        assert!(lookup_encoding("replacement").is_err());
        assert!(lookup_encoding("").is_err());
    }

    #[test]
    fn test_flush_utf8_multibyte() {
        assert_eq!(flush_bytes("UTF-8", &[0xc3, 0xa9]), "é");
        assert_eq!(flush_bytes("UTF-8", &[0xe2, 0x82, 0xac]), "€");
    }

    #[test]
    fn test_flush_replaces_malformed() {
        assert_eq!(flush_bytes("UTF-8", &[0xff]), "\u{fffd}");
        // Truncated sequence at the end of a flush.
        assert_eq!(flush_bytes("UTF-8", &[b'a', 0xc3]), "a\u{fffd}");
    }

    #[test]
    fn test_flush_single_byte_encoding() {
        assert_eq!(flush_bytes("ISO-8859-1", &[0xe9]), "é");
        assert_eq!(flush_bytes("windows-1251", &[0xc0]), "А");
    }

    #[test]
    fn test_flush_appends() {
        let mut decoder = CharsetDecoder::new(encoding_rs::UTF_8);
        let mut pending = PendingBytes::new();
        let mut out = TermBuffer::new();
        out.push_str("prefix/");

        pending.push(b'o');
        pending.push(b'k');
        decoder.flush(&mut pending, &mut out);
        // Empty flush is a no-op.
        decoder.flush(&mut pending, &mut out);

        assert_eq!(out.as_str(), "prefix/ok");
    }

    #[test]
    fn test_decoder_reusable_after_flush() {
        let mut decoder = CharsetDecoder::new(encoding_rs::UTF_8);
        let mut pending = PendingBytes::new();
        let mut out = TermBuffer::new();

        pending.push(0xc3);
        decoder.flush(&mut pending, &mut out);
        pending.push(0xa9);
        decoder.flush(&mut pending, &mut out);
        pending.push(0xc3);
        pending.push(0xa9);
        decoder.flush(&mut pending, &mut out);

        assert_eq!(out.as_str(), "\u{fffd}\u{fffd}é");
    }
}
