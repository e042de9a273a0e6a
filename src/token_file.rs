//! Token files: the on-disk form of an already-lexed token list.
//!
//! Lexing is not this crate's job. The CLI instead reads token lists written one token per line:
//!
//! ```text
//! # A = (1 - 2) - - - 3;
//! ID A
//! EQ
//! LPAREN
//! NUMBER 1
//! ...
//! ```
//!
//! ## Notes
//! - `KIND` is a registry name from `minus_core::lang::tokens` (case-sensitive).
//! - The lexeme is optional for kinds with a fixed spelling and required for `ID` and `NUMBER`.
//! - Blank lines and lines starting with `#` are ignored.

use std::fs;
use std::path::Path;

use miette::Diagnostic;
use minus_core::lang::tokens;
use minus_syntax::token::{Token, TokenKind};
use thiserror::Error;

/// Token files larger than this are rejected outright.
pub const MAX_TOKEN_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// Errors that occur while reading a token file
#[derive(Debug, Error, Diagnostic)]
pub enum TokenFileError {
    #[error("line {line}: unknown token kind `{kind}`")]
    #[diagnostic(
        code(minus::tokens::unknown_kind),
        help("kinds are LPAREN, RPAREN, SEMICOLON, EQ, MINUS, ID and NUMBER")
    )]
    UnknownKind { line: usize, kind: String },

    #[error("line {line}: {kind} needs a lexeme")]
    #[diagnostic(code(minus::tokens::missing_lexeme))]
    MissingLexeme { line: usize, kind: TokenKind },

    #[error("line {line}: {kind} is always spelled `{expected}`, found `{found}`")]
    #[diagnostic(code(minus::tokens::wrong_spelling))]
    WrongSpelling {
        line: usize,
        kind: TokenKind,
        expected: &'static str,
        found: String,
    },

    #[error("line {line}: unexpected `{extra}` after the lexeme")]
    #[diagnostic(code(minus::tokens::extra_field))]
    ExtraField { line: usize, extra: String },

    #[error("token file '{path}' is too large ({size} bytes, max {max} bytes)", max = MAX_TOKEN_FILE_SIZE)]
    #[diagnostic(code(minus::tokens::too_large))]
    TooLarge { path: String, size: u64 },

    #[error("cannot read token file '{path}'")]
    #[diagnostic(code(minus::tokens::io))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Decode the text of a token file.
///
/// ## Errors
/// The first malformed line, as a [`TokenFileError`].
pub fn parse_token_list(text: &str) -> Result<Vec<Token>, TokenFileError> {
    let mut out = Vec::new();

    for (index, raw_line) in text.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw_line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut fields = trimmed.split_whitespace();
        let Some(name) = fields.next() else {
            continue;
        };
        let kind = tokens::from_name(name).ok_or_else(|| TokenFileError::UnknownKind {
            line,
            kind: name.to_string(),
        })?;

        let lexeme = match (fields.next(), tokens::spelling(kind)) {
            (Some(found), Some(expected)) if found != expected => {
                return Err(TokenFileError::WrongSpelling {
                    line,
                    kind,
                    expected,
                    found: found.to_string(),
                });
            }
            (Some(found), _) => found.to_string(),
            (None, Some(expected)) => expected.to_string(),
            (None, None) => return Err(TokenFileError::MissingLexeme { line, kind }),
        };

        if let Some(extra) = fields.next() {
            return Err(TokenFileError::ExtraField {
                line,
                extra: extra.to_string(),
            });
        }

        out.push(Token::new(kind, lexeme));
    }

    Ok(out)
}

/// Read and decode a token file.
///
/// ## Errors
/// - [`TokenFileError::Io`] if the file cannot be read.
/// - [`TokenFileError::TooLarge`] if it exceeds [`MAX_TOKEN_FILE_SIZE`].
/// - Any decoding error from [`parse_token_list`].
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn read_token_file(path: &Path) -> Result<Vec<Token>, TokenFileError> {
    let io_err = |source| TokenFileError::Io {
        path: path.display().to_string(),
        source,
    };

    let metadata = fs::metadata(path).map_err(io_err)?;
    if metadata.len() > MAX_TOKEN_FILE_SIZE {
        return Err(TokenFileError::TooLarge {
            path: path.display().to_string(),
            size: metadata.len(),
        });
    }

    let text = fs::read_to_string(path).map_err(io_err)?;
    let tokens = parse_token_list(&text)?;
    tracing::debug!(count = tokens.len(), "read token file");
    Ok(tokens)
}

/// Encode one token as a token-file line (the lexeme is omitted when it is the fixed spelling).
pub fn format_token(token: &Token) -> String {
    if tokens::spelling(token.kind) == Some(token.lexeme.as_str()) {
        token.kind.to_string()
    } else {
        format!("{} {}", token.kind, token.lexeme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_spellings_are_filled_in() {
        let tokens = parse_token_list("ID A\nEQ\nNUMBER 5\nSEMICOLON\n").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::id("A"),
                Token::symbol(TokenKind::Eq),
                Token::number("5"),
                Token::symbol(TokenKind::Semicolon),
            ]
        );
    }

    #[test]
    fn test_comments_and_blank_lines_are_skipped() {
        let text = "# header\n\n   \nMINUS\n  # indented comment\nNUMBER 1\n";
        let tokens = parse_token_list(text).unwrap();
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn test_explicit_fixed_spelling_is_accepted() {
        let tokens = parse_token_list("LPAREN (\n").unwrap();
        assert_eq!(tokens, vec![Token::symbol(TokenKind::LParen)]);
    }

    #[test]
    fn test_unknown_kind_reports_line() {
        let err = parse_token_list("ID A\nPLUS\n").unwrap_err();
        assert!(matches!(err, TokenFileError::UnknownKind { line: 2, ref kind } if kind == "PLUS"));
        assert_eq!(err.to_string(), "line 2: unknown token kind `PLUS`");
    }

    #[test]
    fn test_lowercase_kind_is_unknown() {
        let err = parse_token_list("id A\n").unwrap_err();
        assert!(matches!(err, TokenFileError::UnknownKind { line: 1, .. }));
    }

    #[test]
    fn test_missing_lexeme() {
        let err = parse_token_list("NUMBER\n").unwrap_err();
        assert!(matches!(
            err,
            TokenFileError::MissingLexeme {
                line: 1,
                kind: TokenKind::Number
            }
        ));
    }

    #[test]
    fn test_wrong_spelling() {
        let err = parse_token_list("MINUS +\n").unwrap_err();
        assert_eq!(err.to_string(), "line 1: MINUS is always spelled `-`, found `+`");
    }

    #[test]
    fn test_extra_field() {
        let err = parse_token_list("ID A B\n").unwrap_err();
        assert!(matches!(err, TokenFileError::ExtraField { line: 1, ref extra } if extra == "B"));
    }

    #[test]
    fn test_format_token_round_trips() {
        for token in [Token::id("A"), Token::symbol(TokenKind::RParen), Token::number("42")] {
            let line = format_token(&token);
            assert_eq!(parse_token_list(&line).unwrap(), vec![token]);
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = read_token_file(Path::new("does/not/exist.tokens")).unwrap_err();
        assert!(matches!(err, TokenFileError::Io { .. }));
    }
}
