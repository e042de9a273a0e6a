//! Tokens and kind sets.
//!
//! A [`Token`] is an immutable `(kind, lexeme)` pair handed to the parser by an external lexer. A [`KindSet`] is the
//! `expected` argument of `consume`: one kind, several kinds, or none at all.

use std::fmt;

pub use minus_core::lang::tokens::TokenKind;
use minus_core::lang::tokens;

// ============================================================================
// TOKENS
// ============================================================================

/// A classified lexical unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
        }
    }

    /// An `ID` token.
    pub fn id(name: impl Into<String>) -> Self {
        Self::new(TokenKind::Id, name)
    }

    /// A `NUMBER` token.
    pub fn number(digits: impl Into<String>) -> Self {
        Self::new(TokenKind::Number, digits)
    }

    /// A token whose lexeme is the kind's fixed spelling.
    ///
    /// ## Notes
    /// - `ID` and `NUMBER` have no fixed spelling; for them the lexeme is empty. Use [`Token::id`] or
    ///   [`Token::number`] instead.
    pub fn symbol(kind: TokenKind) -> Self {
        Self::new(kind, tokens::spelling(kind).unwrap_or_default())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind.has_fixed_spelling() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{}({})", self.kind, self.lexeme)
        }
    }
}

// ============================================================================
// KIND SETS
// ============================================================================

/// A set of token kinds, stored as a bitmask over [`TokenKind::index`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KindSet(u8);

impl KindSet {
    const ALL_BITS: u8 = (1 << TokenKind::ALL.len()) - 1;

    /// The empty set; `consume` with it never succeeds.
    pub const fn none() -> Self {
        KindSet(0)
    }

    /// Every kind.
    pub const fn all() -> Self {
        KindSet(Self::ALL_BITS)
    }

    pub const fn single(kind: TokenKind) -> Self {
        KindSet(1 << kind.index())
    }

    /// Return a copy of this set that also contains `kind`.
    pub const fn with(self, kind: TokenKind) -> Self {
        KindSet(self.0 | (1 << kind.index()))
    }

    pub const fn contains(self, kind: TokenKind) -> bool {
        self.0 & (1 << kind.index()) != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterate the members in registry order.
    pub fn iter(self) -> impl Iterator<Item = TokenKind> {
        TokenKind::ALL.into_iter().filter(move |kind| self.contains(*kind))
    }
}

impl From<TokenKind> for KindSet {
    fn from(kind: TokenKind) -> Self {
        KindSet::single(kind)
    }
}

impl<const N: usize> From<[TokenKind; N]> for KindSet {
    fn from(kinds: [TokenKind; N]) -> Self {
        kinds.into_iter().collect()
    }
}

impl FromIterator<TokenKind> for KindSet {
    fn from_iter<I: IntoIterator<Item = TokenKind>>(iter: I) -> Self {
        iter.into_iter().fold(KindSet::none(), KindSet::with)
    }
}

impl fmt::Debug for KindSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for KindSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("nothing");
        }
        if *self == KindSet::all() {
            return f.write_str("any token");
        }
        if self.len() == 1 {
            return self.iter().try_for_each(|kind| write!(f, "{kind}"));
        }

        f.write_str("one of ")?;
        for (i, kind) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{kind}")?;
        }
        Ok(())
    }
}
