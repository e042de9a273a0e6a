//! Syntax frontend for the `minus` assignment language: token stream, choice engine, parser and parse tree.
//!
//! Tokens arrive already classified (lexing is the caller's job). The parser is recursive descent; the one production
//! that is resolved speculatively (`E2`) goes through the [`choice`] engine, which rolls the [`stream`] back to a
//! checkpoint whenever an alternative fails.
//!
//! ## Notes
//! - Trace output (which rule is active, when a choice point backtracks) is emitted through `tracing`; it is only
//!   visible when the caller installs a subscriber.
//! - Vocabulary identity (kind names/spellings) comes from `minus_core::lang::tokens`.
//!
//! ## Examples
//! ```rust
//! use minus_syntax::parser;
//! use minus_syntax::token::{Token, TokenKind};
//!
//! let tokens = vec![
//!     Token::id("X"),
//!     Token::symbol(TokenKind::Eq),
//!     Token::number("5"),
//!     Token::symbol(TokenKind::Semicolon),
//! ];
//! let tree = parser::parse(&tokens).unwrap();
//! assert_eq!(tree.to_string(), "[X = [5] ;]");
//! ```

pub mod choice;
pub mod config;
pub mod diagnostics;
pub mod parser;
pub mod stream;
pub mod token;
pub mod tree;

pub use diagnostics::{ParseError, ParseResult};
pub use tree::ParseNode;
