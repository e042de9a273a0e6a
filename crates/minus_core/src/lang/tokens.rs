//! Token-kind vocabulary.
//!
//! This module defines the canonical set of token kinds the parser understands: delimiters, the statement
//! terminator, the two operators, identifiers and numeric literals.
//!
//! ## Notes
//! - Lookup via [`from_name`] is **case-sensitive** (`"LPAREN"`, not `"lparen"`).
//! - This module is vocabulary only (names + spellings + metadata). It does not tokenize source text.
//!
//! ## Examples
//! ```rust
//! use minus_core::lang::tokens::{self, TokenKind};
//!
//! assert_eq!(tokens::from_name("SEMICOLON"), Some(TokenKind::Semicolon));
//! assert_eq!(tokens::as_name(TokenKind::Minus), "MINUS");
//! assert_eq!(tokens::spelling(TokenKind::Number), None);
//! ```

use std::fmt;

/// Stable identifier for token kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    LParen,
    RParen,
    Semicolon,
    Eq,
    Minus,
    Id,
    Number,
}

impl TokenKind {
    /// Every kind, in registry order.
    pub const ALL: [TokenKind; 7] = [
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::Semicolon,
        TokenKind::Eq,
        TokenKind::Minus,
        TokenKind::Id,
        TokenKind::Number,
    ];

    /// Dense index of this kind (its position in [`TokenKind::ALL`] and [`TOKEN_KINDS`]).
    pub const fn index(self) -> usize {
        match self {
            TokenKind::LParen => 0,
            TokenKind::RParen => 1,
            TokenKind::Semicolon => 2,
            TokenKind::Eq => 3,
            TokenKind::Minus => 4,
            TokenKind::Id => 5,
            TokenKind::Number => 6,
        }
    }

    /// Return `true` if tokens of this kind always have the same spelling.
    pub fn has_fixed_spelling(self) -> bool {
        spelling(self).is_some()
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(as_name(*self))
    }
}

/// Metadata for a token kind.
#[derive(Debug, Clone, Copy)]
pub struct TokenKindInfo {
    pub id: TokenKind,
    /// Upper-case name used in token listings and diagnostics.
    pub name: &'static str,
    /// Fixed source spelling; `None` for kinds whose lexeme varies.
    pub spelling: Option<&'static str>,
    pub description: &'static str,
}

/// Registry of all token kinds, indexed by [`TokenKind::index`].
pub const TOKEN_KINDS: &[TokenKindInfo] = &[
    info(
        TokenKind::LParen,
        "LPAREN",
        Some("("),
        "opens a parenthesized expression",
    ),
    info(
        TokenKind::RParen,
        "RPAREN",
        Some(")"),
        "closes a parenthesized expression",
    ),
    info(
        TokenKind::Semicolon,
        "SEMICOLON",
        Some(";"),
        "ends an assignment",
    ),
    info(
        TokenKind::Eq,
        "EQ",
        Some("="),
        "separates the target from the assigned expression",
    ),
    info(
        TokenKind::Minus,
        "MINUS",
        Some("-"),
        "unary negation or binary subtraction",
    ),
    info(
        TokenKind::Id,
        "ID",
        None,
        "assignment target",
    ),
    info(
        TokenKind::Number,
        "NUMBER",
        None,
        "numeric literal",
    ),
];

/// Return the canonical name for a token kind.
pub fn as_name(id: TokenKind) -> &'static str {
    info_for(id).name
}

/// Return the fixed spelling for a token kind, if it has one.
pub fn spelling(id: TokenKind) -> Option<&'static str> {
    info_for(id).spelling
}

/// Return the full metadata entry for a token kind.
pub fn info_for(id: TokenKind) -> &'static TokenKindInfo {
    &TOKEN_KINDS[id.index()]
}

/// Resolve a kind name to its identifier.
///
/// ## Notes
/// - Matching is **case-sensitive**.
pub fn from_name(s: &str) -> Option<TokenKind> {
    TOKEN_KINDS.iter().find(|k| k.name == s).map(|k| k.id)
}

/// Resolve a fixed spelling (e.g. `"("`) to its identifier.
pub fn from_spelling(s: &str) -> Option<TokenKind> {
    TOKEN_KINDS.iter().find(|k| k.spelling == Some(s)).map(|k| k.id)
}

const fn info(
    id: TokenKind,
    name: &'static str,
    spelling: Option<&'static str>,
    description: &'static str,
) -> TokenKindInfo {
    TokenKindInfo {
        id,
        name,
        spelling,
        description,
    }
}
