//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::path::Path;

use minus_syntax::config::ParserConfig;
use minus_syntax::parser;
use minus_syntax::token::Token;
use minus_syntax::{ParseError, ParseNode};

use super::{CliError, CliResult, ExitCode};
use crate::token_file::{self, TokenFileError};

/// Read a token file, turning decode failures into a rendered CLI error.
pub fn load_tokens(path: &Path) -> CliResult<Vec<Token>> {
    token_file::read_token_file(path).map_err(|err| CliError::failure(render_token_file_error(err)))
}

/// Render a token-file error as a miette report.
pub fn render_token_file_error(err: TokenFileError) -> String {
    format!("{:?}", miette::Report::new(err))
}

/// Render parse errors as miette reports, one per rejected statement.
pub fn render_parse_errors(errors: Vec<ParseError>) -> String {
    let mut msg = String::new();
    for err in errors {
        msg.push_str(&format!("{:?}", miette::Report::new(err)));
        msg.push('\n');
    }
    msg.trim_end().to_string()
}

/// One bracketed tree per line.
pub fn render_trees(trees: &[ParseNode]) -> String {
    trees.iter().map(ParseNode::to_string).collect::<Vec<_>>().join("\n")
}

/// Parse a token file and print its tree(s).
pub fn parse_file(path: &Path, config: &ParserConfig) -> CliResult<ExitCode> {
    let tokens = load_tokens(path)?;

    match parser::parse_with(&tokens, config) {
        Ok(trees) => {
            let depth = trees.iter().map(ParseNode::depth).max().unwrap_or(0);
            tracing::debug!(statements = trees.len(), depth, "accepted");
            println!("{}", render_trees(&trees));
            Ok(ExitCode::SUCCESS)
        }
        Err(errors) => {
            tracing::debug!(errors = errors.len(), "rejected");
            Err(CliError::failure(render_parse_errors(errors)))
        }
    }
}

/// Decode a token file and print one token per line.
pub fn print_tokens(path: &Path) -> CliResult<ExitCode> {
    for token in load_tokens(path)? {
        println!("{}", token_file::format_token(&token));
    }
    Ok(ExitCode::SUCCESS)
}
