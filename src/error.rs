//! Error types for the Siren library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`SirenError`] enum. In the analysis chain only construction can fail:
//! once a filter is built, malformed token text is absorbed locally and
//! never surfaces as an error.
//!
//! # Examples
//!
//! ```
//! use siren::analysis::token_filter::uri_decoding::UriDecodingFilter;
//! use siren::error::SirenError;
//!
//! match UriDecodingFilter::new("FTU_8") {
//!     Err(SirenError::UnsupportedEncoding(name)) => assert_eq!(name, "FTU_8"),
//!     _ => panic!("expected an unsupported encoding error"),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Siren operations.
#[derive(Error, Debug)]
pub enum SirenError {
    /// I/O errors (reading input or configuration files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The configured text encoding name does not resolve to a supported encoding.
    #[error("Unsupported encoding: {0}")]
    UnsupportedEncoding(String),

    /// Invalid configuration values
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Invalid regular expression in a tokenizer pattern
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with SirenError.
pub type Result<T> = std::result::Result<T, SirenError>;

impl SirenError {
    /// Create a new unsupported encoding error.
    pub fn unsupported_encoding<S: Into<String>>(name: S) -> Self {
        SirenError::UnsupportedEncoding(name.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        SirenError::InvalidConfig(msg.into())
    }

    /// Whether this error reports an unknown or unsupported encoding name.
    pub fn is_unsupported_encoding(&self) -> bool {
        matches!(self, SirenError::UnsupportedEncoding(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = SirenError::unsupported_encoding("FTU_8");
        assert_eq!(error.to_string(), "Unsupported encoding: FTU_8");
        assert!(error.is_unsupported_encoding());

        let error = SirenError::invalid_config("missing tokenizer pattern");
        assert_eq!(
            error.to_string(),
            "Invalid configuration: missing tokenizer pattern"
        );
        assert!(!error.is_unsupported_encoding());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let siren_error = SirenError::from(io_error);

        match siren_error {
            SirenError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
