//! Text analysis module for Siren.
//!
//! Tokenizers split raw text into typed tokens, token filters transform the
//! resulting streams, and analyzers bundle both into a per-field pipeline.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
