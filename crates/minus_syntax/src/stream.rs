//! The token stream consumed by the parser.
//!
//! The stream is a read cursor over an immutable slice of tokens. "Removing" the front token advances the cursor, a
//! [`Checkpoint`] is a saved cursor, and restoring one resets it. Nothing is ever copied, so a backtracking branch can
//! never duplicate or lose a token.

use crate::choice::Backtrack;
use crate::diagnostics::{ParseError, ParseResult};
use crate::token::{KindSet, Token, TokenKind};

/// A saved stream position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Checkpoint(usize);

/// Remaining tokens of one parse.
#[derive(Debug, Clone)]
pub struct TokenStream<'a> {
    tokens: &'a [Token],
    pos: usize,
    rollbacks: usize,
}

impl<'a> TokenStream<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            rollbacks: 0,
        }
    }

    /// Return the front token without removing it.
    ///
    /// ## Errors
    /// [`ParseError::EmptyStream`] if every token has been consumed.
    pub fn peek(&self) -> ParseResult<&'a Token> {
        self.peek_for(KindSet::all())
    }

    fn peek_for(&self, expected: KindSet) -> ParseResult<&'a Token> {
        self.tokens.get(self.pos).ok_or(ParseError::EmptyStream { expected })
    }

    /// Remove the front token and check that its kind is one of `expected`.
    ///
    /// ## Notes
    /// - The token is removed *before* the kind is checked: a mismatch still advances the stream. The enclosing choice
    ///   point (if any) restores it.
    /// - An empty `expected` set fails immediately without touching the stream.
    ///
    /// ## Errors
    /// - [`ParseError::NoViableAlternative`] if `expected` is empty.
    /// - [`ParseError::EmptyStream`] if no token remains.
    /// - [`ParseError::TokenMismatch`] if the removed token has another kind.
    pub fn consume(&mut self, expected: impl Into<KindSet>) -> ParseResult<&'a Token> {
        let expected = expected.into();
        if expected.is_empty() {
            return Err(ParseError::NoViableAlternative { tried: 0 });
        }

        let token = self.peek_for(expected)?;
        self.pos += 1;

        if expected.contains(token.kind) {
            Ok(token)
        } else {
            Err(ParseError::TokenMismatch {
                expected,
                found: token.clone(),
            })
        }
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.pos)
    }

    /// Reset the stream to `checkpoint`, giving back every token consumed since it was taken.
    pub fn restore(&mut self, checkpoint: Checkpoint) {
        debug_assert!(checkpoint.0 <= self.tokens.len(), "checkpoint from another stream");
        self.pos = checkpoint.0.min(self.tokens.len());
        self.rollbacks += 1;
    }

    /// Skip tokens up to and including the next `kind`, or to the end.
    ///
    /// Returns the number of tokens skipped.
    pub fn skip_past(&mut self, kind: TokenKind) -> usize {
        let start = self.pos;
        while let Some(token) = self.tokens.get(self.pos) {
            self.pos += 1;
            if token.kind == kind {
                break;
            }
        }
        self.pos - start
    }

    pub fn is_empty(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Tokens not yet consumed.
    pub fn remaining(&self) -> &'a [Token] {
        &self.tokens[self.pos.min(self.tokens.len())..]
    }

    /// Number of tokens consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of times the stream has been restored to a checkpoint.
    pub fn rollbacks(&self) -> usize {
        self.rollbacks
    }
}

impl Backtrack for TokenStream<'_> {
    type Checkpoint = Checkpoint;

    fn checkpoint(&self) -> Checkpoint {
        TokenStream::checkpoint(self)
    }

    fn restore(&mut self, checkpoint: Checkpoint) {
        TokenStream::restore(self, checkpoint)
    }
}
