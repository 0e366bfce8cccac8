//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::cli::args::{OutputFormat, SirenArgs};
use crate::error::Result;

/// One emitted token as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRow {
    pub text: String,
    pub position: usize,
    pub position_increment: usize,
    pub start_offset: usize,
    pub end_offset: usize,
    pub token_type: Option<String>,
}

impl From<&Token> for TokenRow {
    fn from(token: &Token) -> Self {
        TokenRow {
            text: token.text.clone(),
            position: token.position,
            position_increment: token.position_increment,
            start_offset: token.start_offset,
            end_offset: token.end_offset,
            token_type: token.token_type().map(|t| t.to_string()),
        }
    }
}

/// Result structure for the analyze command.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub analyzer: String,
    pub encoding: String,
    pub tokens: Vec<TokenRow>,
}

/// Decoding outcome of one token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedToken {
    pub original: String,
    /// `None` when the token contained no `%`.
    pub decoded: Option<String>,
}

/// Result structure for the decode command.
#[derive(Debug, Serialize, Deserialize)]
pub struct DecodeResult {
    pub encoding: String,
    pub tokens: Vec<DecodedToken>,
}

/// Result structure for the encodings command.
#[derive(Debug, Serialize, Deserialize)]
pub struct EncodingList {
    /// (label, canonical name)
    pub encodings: Vec<(String, String)>,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + HumanOutput>(
    message: &str,
    result: &T,
    args: &SirenArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                println!("{message}");
                println!();
            }
            for line in result.human_lines() {
                println!("{line}");
            }
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &SirenArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Rendering of a result for the human output format.
pub trait HumanOutput {
    fn human_lines(&self) -> Vec<String>;
}

impl HumanOutput for AnalysisResult {
    fn human_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.tokens.len() + 2);
        lines.push(format!("{:<6} {:<4} {:<12} TEXT", "POS", "INC", "TYPE"));
        for row in &self.tokens {
            lines.push(format!(
                "{:<6} {:<4} {:<12} {}",
                row.position,
                row.position_increment,
                row.token_type.as_deref().unwrap_or("-"),
                row.text
            ));
        }
        lines
    }
}

impl HumanOutput for DecodeResult {
    fn human_lines(&self) -> Vec<String> {
        self.tokens
            .iter()
            .map(|t| match &t.decoded {
                Some(decoded) => format!("{} -> {}", t.original, decoded),
                None => format!("{} (unchanged)", t.original),
            })
            .collect()
    }
}

impl HumanOutput for EncodingList {
    fn human_lines(&self) -> Vec<String> {
        self.encodings
            .iter()
            .map(|(label, name)| format!("{label:<14} {name}"))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::TokenType;

    #[test]
    fn test_token_row_from_token() {
        let token = Token::with_offsets("a%2Fb", 2, 4, 9)
            .with_token_type(TokenType::Uri)
            .with_position_increment(0);
        let row = TokenRow::from(&token);

        assert_eq!(row.text, "a%2Fb");
        assert_eq!(row.position, 2);
        assert_eq!(row.position_increment, 0);
        assert_eq!((row.start_offset, row.end_offset), (4, 9));
        assert_eq!(row.token_type.as_deref(), Some("uri"));
    }

    #[test]
    fn test_decode_result_human_lines() {
        let result = DecodeResult {
            encoding: "UTF-8".to_string(),
            tokens: vec![
                DecodedToken {
                    original: "a%2Fb".to_string(),
                    decoded: Some("a/b".to_string()),
                },
                DecodedToken {
                    original: "plain".to_string(),
                    decoded: None,
                },
            ],
        };

        assert_eq!(
            result.human_lines(),
            vec!["a%2Fb -> a/b".to_string(), "plain (unchanged)".to_string()]
        );
    }

    #[test]
    fn test_analysis_result_json() {
        let result = AnalysisResult {
            analyzer: "uri".to_string(),
            encoding: "UTF-8".to_string(),
            tokens: vec![TokenRow::from(&Token::new("x", 0))],
        };
        let value = serde_json::to_value(&result).unwrap();

        assert_eq!(value["analyzer"], "uri");
        assert_eq!(value["tokens"][0]["text"], "x");
        assert_eq!(value["tokens"][0]["position_increment"], 1);
        assert!(value["tokens"][0]["token_type"].is_null());
        assert_eq!(result.human_lines().len(), 2);
    }
}
