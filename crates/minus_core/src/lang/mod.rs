//! Language vocabulary registries.
//!
//! The goal is to avoid stringly-typed checks scattered across the parser and the CLI. Callers work with
//! **stable IDs** (e.g. `TokenKind`) and look up names/spellings via registry tables.
//!
//! ## Examples
//! ```rust
//! use minus_core::lang::tokens::{self, TokenKind};
//!
//! assert_eq!(tokens::from_name("LPAREN"), Some(TokenKind::LParen));
//! assert_eq!(tokens::spelling(TokenKind::LParen), Some("("));
//! ```

pub mod tokens;
