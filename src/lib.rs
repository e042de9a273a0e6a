#![forbid(unsafe_code)]
//! minus: a backtracking recursive-descent parser for `id = expr ;` token lists
//!
//! The grammar lives in `minus_syntax`; this crate adds the token-file format and the command-line harness.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod token_file;

pub use minus_core::lang::tokens;
pub use minus_syntax::config::{ParseMode, ParserConfig};
pub use minus_syntax::token::{KindSet, Token, TokenKind};
pub use minus_syntax::{ParseError, ParseNode, ParseResult, parser};
