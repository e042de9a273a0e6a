//! Integration tests for the minus token-file pipeline and CLI

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use minus::token_file::{self, TokenFileError};
use minus::{ParseError, ParseNode, TokenKind, parser};

/// Helper to run the full pipeline (decode, then parse one statement) on a token file
fn parse_fixture(path: &Path) -> Result<ParseNode, String> {
    let tokens = token_file::read_token_file(path).map_err(|e| e.to_string())?;
    parser::parse(&tokens).map_err(|e| e.to_string())
}

fn fixtures(dir: &str) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = fs::read_dir(Path::new("tests/fixtures").join(dir))
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().map(|e| e == "tokens").unwrap_or(false))
        .collect();
    paths.sort();
    paths
}

fn fixture(name: &str) -> PathBuf {
    Path::new("tests/fixtures").join(name)
}

/// Test that all valid fixtures parse and reproduce their tokens
#[test]
fn test_valid_fixtures() {
    let paths = fixtures("valid");
    assert!(!paths.is_empty());

    for path in paths {
        let tree = parse_fixture(&path)
            .unwrap_or_else(|err| panic!("Expected {} to parse, got: {err}", path.display()));
        let tokens = token_file::read_token_file(&path).unwrap();
        assert_eq!(tree.leaves().len(), tokens.len(), "{}", path.display());
    }
}

/// Test that invalid fixtures are rejected
#[test]
fn test_invalid_fixtures() {
    let paths = fixtures("invalid");
    assert!(!paths.is_empty());

    for path in paths {
        assert!(
            parse_fixture(&path).is_err(),
            "Expected {} to be rejected, but it parsed",
            path.display()
        );
    }
}

mod trees {
    use super::*;

    fn tree_of(name: &str) -> String {
        parse_fixture(&fixture(name)).unwrap().to_string()
    }

    #[test]
    fn test_nested_chain() {
        insta::assert_snapshot!(tree_of("valid/nested_chain.tokens"), @"[A = [( [1 [- [2]]] ) [- [- [- [3]]]]] ;]");
    }

    #[test]
    fn test_single_number() {
        insta::assert_snapshot!(tree_of("valid/single_number.tokens"), @"[X = [5] ;]");
    }

    #[test]
    fn test_unary_chain() {
        insta::assert_snapshot!(tree_of("valid/unary_chain.tokens"), @"[B = [- [1 [- [3 [- [2]]]]]] ;]");
    }

    #[test]
    fn test_double_parens() {
        insta::assert_snapshot!(tree_of("valid/double_parens.tokens"), @"[Y = [( [( [7] )] )] ;]");
    }
}

mod rejections {
    use super::*;
    use minus::Token;

    fn error_of(name: &str) -> ParseError {
        let tokens = token_file::read_token_file(&fixture(name)).unwrap();
        parser::parse(&tokens).unwrap_err()
    }

    #[test]
    fn test_missing_semicolon() {
        assert_eq!(
            error_of("invalid/missing_semicolon.tokens"),
            ParseError::EmptyStream {
                expected: TokenKind::Semicolon.into()
            }
        );
    }

    #[test]
    fn test_trailing_input() {
        assert_eq!(
            error_of("invalid/trailing_input.tokens"),
            ParseError::TrailingInput {
                remaining: 1,
                next: Token::id("Y"),
            }
        );
    }

    #[test]
    fn test_bad_expression_start() {
        assert!(matches!(
            error_of("invalid/bad_expression_start.tokens"),
            ParseError::TokenMismatch { ref found, .. } if found.kind == TokenKind::RParen
        ));
    }

    #[test]
    fn test_comment_only_file_is_empty_stream() {
        assert!(matches!(
            error_of("invalid/empty.tokens"),
            ParseError::EmptyStream { .. }
        ));
    }

    #[test]
    fn test_unclosed_paren() {
        assert_eq!(
            error_of("invalid/unclosed_paren.tokens"),
            ParseError::TokenMismatch {
                expected: TokenKind::RParen.into(),
                found: Token::symbol(TokenKind::Semicolon),
            }
        );
    }

    #[test]
    fn test_unknown_kind_is_a_token_file_error() {
        let err = token_file::read_token_file(&fixture("bad_kind.tokens")).unwrap_err();
        assert!(matches!(err, TokenFileError::UnknownKind { line: 2, .. }));
    }
}

mod programs {
    use super::*;

    #[test]
    fn test_two_statements() {
        let tokens = token_file::read_token_file(&fixture("programs/two_statements.tokens")).unwrap();
        let trees = parser::parse_program(&tokens).unwrap();
        let rendered: Vec<String> = trees.iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            vec!["[A = [( [1 [- [3]]] ) [- [3]]] ;]", "[B = [- [1 [- [3 [- [2]]]]]] ;]"]
        );
    }

    #[test]
    fn test_two_statements_are_trailing_input_in_statement_mode() {
        let tokens = token_file::read_token_file(&fixture("programs/two_statements.tokens")).unwrap();
        assert!(matches!(
            parser::parse(&tokens),
            Err(ParseError::TrailingInput { remaining: 10, .. })
        ));
    }

    #[test]
    fn test_recovery_reports_only_the_bad_statement() {
        let tokens = token_file::read_token_file(&fixture("programs/recovery.tokens")).unwrap();
        let errors = parser::parse_program(&tokens).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            ParseError::TokenMismatch { found, .. } if found.kind == TokenKind::Semicolon
        ));
    }
}

/// Run the built `minus` binary
mod cli {
    use super::*;

    fn minus(args: &[&str]) -> std::process::Output {
        Command::new(env!("CARGO_BIN_EXE_minus"))
            .args(args)
            .env_remove("RUST_LOG")
            .output()
            .unwrap()
    }

    #[test]
    fn test_parse_prints_tree() {
        let out = minus(&["parse", "tests/fixtures/valid/single_number.tokens"]);
        assert!(out.status.success());
        assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "[X = [5] ;]");
    }

    #[test]
    fn test_parse_failure_exits_nonzero() {
        let out = minus(&["parse", "tests/fixtures/invalid/trailing_input.tokens"]);
        assert_eq!(out.status.code(), Some(1));
        assert!(out.stdout.is_empty());
        assert!(String::from_utf8_lossy(&out.stderr).contains("after the assignment"));
    }

    #[test]
    fn test_program_flag() {
        let out = minus(&["parse", "--program", "tests/fixtures/programs/two_statements.tokens"]);
        assert!(out.status.success());
        assert_eq!(String::from_utf8_lossy(&out.stdout).lines().count(), 2);
    }

    #[test]
    fn test_tokens_echoes_file() {
        let out = minus(&["tokens", "tests/fixtures/valid/single_number.tokens"]);
        assert!(out.status.success());
        assert_eq!(
            String::from_utf8_lossy(&out.stdout),
            "ID X\nEQ\nNUMBER 5\nSEMICOLON\n"
        );
    }

    #[test]
    fn test_deep_nesting_is_a_diagnostic_not_a_crash() {
        let path = std::env::temp_dir().join(format!("minus-deep-{}.tokens", std::process::id()));
        let mut text = String::from("ID X\nEQ\n");
        text.push_str(&"MINUS\n".repeat(100_000));
        text.push_str("NUMBER 5\nSEMICOLON\n");
        fs::write(&path, text).unwrap();

        let out = minus(&["parse", path.to_str().unwrap()]);
        let _ = fs::remove_file(&path);

        assert_eq!(out.status.code(), Some(1));
        assert!(String::from_utf8_lossy(&out.stderr).contains("nesting exceeds the limit of 128"));

        let out = minus(&["parse", "--max-depth", "1", "tests/fixtures/valid/unary_chain.tokens"]);
        assert_eq!(out.status.code(), Some(1));
    }

    #[test]
    fn test_trace_logs_backtracking_to_stderr() {
        let out = minus(&["parse", "--trace", "tests/fixtures/valid/single_number.tokens"]);
        assert!(out.status.success());
        let stderr = String::from_utf8_lossy(&out.stderr);
        assert!(stderr.contains("E2"), "{stderr}");
    }
}
