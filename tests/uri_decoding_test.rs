//! Integration tests for URI decoding through the public analysis API

use std::sync::Arc;

use siren::analysis::analyzer::uri::UriAnalyzerConfig;
use siren::analysis::token::IntoTokenStream;
use siren::analysis::tokenizer::regex::RegexTokenizer;
use siren::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use siren::prelude::*;

/// Every printable ASCII character, escaped.
fn escaped_ascii_table() -> (String, String) {
    let mut escaped = String::new();
    let mut decoded = String::new();
    for byte in 0x20u8..0x7f {
        escaped.push_str(&format!("%{byte:02X}"));
        decoded.push(if byte == b' ' { '+' } else { byte as char });
    }
    (escaped, decoded)
}

fn texts(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|t| t.text.as_str()).collect()
}

fn increments(tokens: &[Token]) -> Vec<usize> {
    tokens.iter().map(|t| t.position_increment).collect()
}

#[test]
fn test_uris_with_and_without_escapes() -> Result<()> {
    let analyzer = UriAnalyzer::new()?;
    let tokens: Vec<Token> = analyzer
        .analyze("http://stephane.net http://stephane%3Fnet/ http://porco%2erosso")?
        .collect();

    assert_eq!(
        texts(&tokens),
        vec![
            "http://stephane.net",
            "http://stephane%3Fnet/",
            "http://stephane?net/",
            "http://porco%2erosso",
            "http://porco.rosso",
        ]
    );
    assert_eq!(increments(&tokens), vec![1, 1, 0, 1, 0]);

    // Decoded siblings share the position and offsets of their original.
    assert_eq!(tokens[1].position, tokens[2].position);
    assert_eq!(tokens[1].start_offset, tokens[2].start_offset);
    assert_eq!(tokens[1].end_offset, tokens[2].end_offset);

    Ok(())
}

#[test]
fn test_malformed_escapes_are_kept() -> Result<()> {
    let filter = UriDecodingFilter::new("UTF-8")?;
    let cases = [
        ("%8", "%8"),
        ("%%3f", "%%3f"),
        ("%GGporco", "%GGporco"),
        ("%G3porco%2erosso", "%G3porco.rosso"),
        ("a%2e%", "a.%"),
        ("%%", "%%"),
        ("stephane%20net", "stephane+net"),
        ("%C3%20%A9", "\u{FFFD}+\u{FFFD}"),
    ];

    for (input, expected) in cases {
        let tokens: Vec<Token> = filter
            .filter(vec![Token::new(input, 0)].into_token_stream())?
            .collect();
        assert_eq!(texts(&tokens), vec![input, expected], "decoding {input:?}");
    }

    Ok(())
}

#[test]
fn test_long_escape_table_repeats() -> Result<()> {
    let (escaped, decoded) = escaped_ascii_table();
    let filter = UriDecodingFilter::default();

    for repeat in [4, 8] {
        let input = format!("http://looong/{}", escaped.repeat(repeat));
        let expected = format!("http://looong/{}", decoded.repeat(repeat));

        let tokens: Vec<Token> = filter
            .filter(vec![Token::new(input.as_str(), 0)].into_token_stream())?
            .collect();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, input);
        assert_eq!(tokens[1].text, expected);
    }

    Ok(())
}

#[test]
fn test_long_plain_token_passes_through() -> Result<()> {
    let plain = format!("http://{}", "a".repeat(300));
    let analyzer = UriAnalyzer::new()?;
    let tokens: Vec<Token> = analyzer.analyze(&plain)?.collect();

    assert_eq!(texts(&tokens), vec![plain.as_str()]);
    Ok(())
}

#[test]
fn test_multibyte_sequences() -> Result<()> {
    let utf8 = UriAnalyzer::with_encoding("UTF-8")?;
    let tokens: Vec<Token> = utf8.analyze("caf%C3%A9 %E2%82%AC")?.collect();
    assert_eq!(texts(&tokens), vec!["caf%C3%A9", "café", "%E2%82%AC", "€"]);

    let latin1 = UriAnalyzer::with_encoding("ISO-8859-1")?;
    let tokens: Vec<Token> = latin1.analyze("caf%E9")?.collect();
    assert_eq!(texts(&tokens), vec!["caf%E9", "café"]);

    Ok(())
}

#[test]
fn test_mixed_token_types() -> Result<()> {
    let tokenizer = Arc::new(RegexTokenizer::with_pattern(r#"<([^>]*)>|("[^"]*")"#)?);
    let analyzer =
        PipelineAnalyzer::new(tokenizer).add_filter(Arc::new(UriDecodingFilter::default()));

    let tokens: Vec<Token> = analyzer
        .analyze(r#"<http://a.org/%7Ebob> "100%25 literal" <http://b.org/%41>"#)?
        .collect();

    assert_eq!(
        texts(&tokens),
        vec![
            "http://a.org/%7Ebob",
            "http://a.org/~bob",
            "\"100%25 literal\"",
            "\"100% literal\"",
            "http://b.org/%41",
            "http://b.org/A",
        ]
    );
    assert_eq!(increments(&tokens), vec![1, 0, 1, 0, 1, 0]);

    let types: Vec<Option<TokenType>> = tokens.iter().map(|t| t.token_type()).collect();
    assert_eq!(
        types,
        vec![
            Some(TokenType::Uri),
            Some(TokenType::Uri),
            Some(TokenType::Literal),
            Some(TokenType::Literal),
            Some(TokenType::Uri),
            Some(TokenType::Uri),
        ]
    );

    Ok(())
}

#[test]
fn test_unsupported_encoding() {
    let err = UriDecodingFilter::new("FTU_8").unwrap_err();
    assert!(err.is_unsupported_encoding());

    let config = UriAnalyzerConfig::default().with_encoding("FTU_8");
    assert!(UriAnalyzer::from_config(&config).is_err());
}

#[test]
fn test_filter_is_reusable_across_streams() -> Result<()> {
    let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
        .add_filter(Arc::new(UriDecodingFilter::default()));

    let first: Vec<Token> = analyzer.analyze("a%2Fb")?.collect();
    let second: Vec<Token> = analyzer.analyze("c%2Fd")?.collect();

    assert_eq!(texts(&first), vec!["a%2Fb", "a/b"]);
    assert_eq!(texts(&second), vec!["c%2Fd", "c/d"]);
    Ok(())
}
