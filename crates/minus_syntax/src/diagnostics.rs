//! Parse errors.
//!
//! Every reason the token stream, the choice engine or the top-level driver can reject input is one variant of
//! [`ParseError`]. The first three are "recoverable": a choice point catches them, rolls the stream back and tries its
//! next alternative. [`ParseError::TrailingInput`] is only produced after the root rule has fully committed and is
//! never retried. Neither is [`ParseError::NestingTooDeep`].

use miette::Diagnostic;
use thiserror::Error;

use crate::token::{KindSet, Token};

/// Result type used by every parsing operation.
pub type ParseResult<T> = Result<T, ParseError>;

/// Why a parse (or one branch of it) failed.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ParseError {
    /// A token was required but none remain.
    #[error("unexpected end of input, expected {expected}")]
    #[diagnostic(
        code(minus::parse::empty_stream),
        help("the token list ends before the assignment is complete")
    )]
    EmptyStream { expected: KindSet },

    /// The next token's kind is not in the expected set.
    #[error("expected {expected}, found {found}")]
    #[diagnostic(code(minus::parse::token_mismatch))]
    TokenMismatch { expected: KindSet, found: Token },

    /// A choice point ran out of alternatives, or `consume` was asked for nothing.
    #[error("no viable alternative ({tried} tried)")]
    #[diagnostic(code(minus::parse::no_viable_alternative))]
    NoViableAlternative { tried: usize },

    /// The assignment parsed but tokens are left over.
    #[error("{remaining} unexpected token(s) after the assignment, starting with {next}")]
    #[diagnostic(
        code(minus::parse::trailing_input),
        help("an assignment ends at its `;`; parse in program mode to accept several")
    )]
    TrailingInput { remaining: usize, next: Token },

    /// Expressions are nested deeper than the parser's limit.
    #[error("expression nesting exceeds the limit of {limit}")]
    #[diagnostic(
        code(minus::parse::nesting_too_deep),
        help("raise the limit with `ParserConfig::with_max_depth` (CLI: `--max-depth`)")
    )]
    NestingTooDeep { limit: usize },
}

impl ParseError {
    /// Return `true` if an enclosing choice point may catch this error and try its next alternative.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            ParseError::TrailingInput { .. } | ParseError::NestingTooDeep { .. }
        )
    }
}
