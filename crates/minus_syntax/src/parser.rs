//! Recursive-descent parser for the `minus` assignment language.
//!
//! ```text
//! S  ::= L L*
//! L  ::= id = E ;
//! E  ::= ( E ) E2 | - E | number E2
//! E2 ::= - E | ε
//! ```
//!
//! The grammar is LL(1), but `E2` is deliberately not decided by lookahead: its `- E` alternative is always tried
//! first through a [`Choice`], and the stream is rolled back to ε when that fails.
//!
//! ## Examples
//!
//! ```rust
//! use minus_syntax::parser;
//! use minus_syntax::token::{Token, TokenKind};
//!
//! let tokens = vec![
//!     Token::id("B"),
//!     Token::symbol(TokenKind::Eq),
//!     Token::symbol(TokenKind::Minus),
//!     Token::number("1"),
//!     Token::symbol(TokenKind::Semicolon),
//! ];
//! let tree = parser::parse(&tokens).unwrap();
//! assert_eq!(tree.source_text(), "B = - 1 ;");
//! ```

use crate::choice::{Backtrack, Choice};
use crate::config::{DEFAULT_MAX_DEPTH, ParseMode, ParserConfig};
use crate::diagnostics::{ParseError, ParseResult};
use crate::stream::{Checkpoint, TokenStream};
use crate::token::{KindSet, Token, TokenKind};
use crate::tree::ParseNode;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/grammar.rs");
include!("parser/program.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
