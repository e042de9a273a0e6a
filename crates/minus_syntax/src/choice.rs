//! The choice engine: ordered alternatives with automatic backtracking.
//!
//! A [`Choice`] is a choice point. Creating one records a checkpoint of the state it guards. Alternatives are then
//! offered left to right with [`Choice::or`]; each one runs eagerly against the shared state, so by the time it fails
//! it may already have consumed tokens. Before the next alternative runs, the state is restored to the checkpoint.
//! The first alternative that succeeds wins and every later one is skipped.
//!
//! ## Notes
//! - Search is depth-first and leftmost-first. Nested choice points live on the Rust call stack; a failure inside a
//!   nested rule simply returns `Err` until it reaches the nearest enclosing `Choice`.
//! - Only recoverable errors (see [`ParseError::is_recoverable`]) are retried. Anything else passes through untouched.
//! - A choice point with no alternatives is an unconditional failure: `Choice::new(state).resolve()` is the
//!   zero-argument `choose()` every other failure reduces to.
//!
//! ## Examples
//! ```rust
//! use minus_syntax::choice::Choice;
//! use minus_syntax::stream::TokenStream;
//! use minus_syntax::token::{Token, TokenKind};
//!
//! let tokens = vec![Token::number("1")];
//! let mut stream = TokenStream::new(&tokens);
//!
//! let picked = Choice::new(&mut stream)
//!     .or(|s| s.consume(TokenKind::Minus).map(|_| "minus"))
//!     .or(|s| s.consume(TokenKind::Number).map(|_| "number"))
//!     .resolve();
//! assert_eq!(picked, Ok("number"));
//! assert_eq!(stream.rollbacks(), 1);
//! ```

use std::fmt;

use crate::diagnostics::{ParseError, ParseResult};

/// State that a choice point can roll back.
pub trait Backtrack {
    type Checkpoint: Copy + fmt::Debug;

    /// Capture the current state.
    fn checkpoint(&self) -> Self::Checkpoint;

    /// Return to a previously captured state.
    fn restore(&mut self, checkpoint: Self::Checkpoint);
}

/// A boxed alternative, for building choice points from a list (see [`choose`]).
pub type Alternative<'a, S, T> = Box<dyn FnOnce(&mut S) -> ParseResult<T> + 'a>;

/// One choice point.
#[must_use = "a choice point does nothing until `resolve` is called"]
pub struct Choice<'s, S: Backtrack, T> {
    state: &'s mut S,
    checkpoint: S::Checkpoint,
    tried: usize,
    outcome: Option<ParseResult<T>>,
}

impl<'s, S: Backtrack, T> Choice<'s, S, T> {
    /// Open a choice point, recording a checkpoint of `state`.
    pub fn new(state: &'s mut S) -> Self {
        let checkpoint = state.checkpoint();
        Self {
            state,
            checkpoint,
            tried: 0,
            outcome: None,
        }
    }

    /// Offer the next alternative.
    ///
    /// The alternative runs only if nothing before it has succeeded (and nothing before it failed fatally). If an
    /// earlier alternative failed, the state is restored to the choice point's checkpoint first.
    pub fn or(mut self, alternative: impl FnOnce(&mut S) -> ParseResult<T>) -> Self {
        let settled = match &self.outcome {
            None => false,
            Some(Ok(_)) => true,
            Some(Err(err)) => !err.is_recoverable(),
        };
        if settled {
            return self;
        }
        if self.outcome.is_some() {
            self.state.restore(self.checkpoint);
        }

        self.tried += 1;
        tracing::trace!(alternative = self.tried, checkpoint = ?self.checkpoint, "trying alternative");

        let outcome = alternative(self.state);
        if let Err(err) = &outcome {
            tracing::debug!(alternative = self.tried, checkpoint = ?self.checkpoint, %err, "alternative failed");
        }
        self.outcome = Some(outcome);
        self
    }

    /// Commit to the first successful alternative.
    ///
    /// ## Errors
    /// - [`ParseError::NoViableAlternative`] if every alternative failed (the state is restored to the checkpoint) or
    ///   none was offered.
    /// - The original error, unchanged, if an alternative failed with a non-recoverable error.
    pub fn resolve(self) -> ParseResult<T> {
        match self.outcome {
            Some(Ok(value)) => Ok(value),
            Some(Err(err)) if !err.is_recoverable() => Err(err),
            Some(Err(_)) => {
                self.state.restore(self.checkpoint);
                tracing::debug!(tried = self.tried, "choice point exhausted");
                Err(ParseError::NoViableAlternative { tried: self.tried })
            }
            None => Err(ParseError::NoViableAlternative { tried: 0 }),
        }
    }
}

/// Try `alternatives` in order against `state`, backtracking between them.
///
/// Equivalent to chaining [`Choice::or`] over the list; an empty list fails unconditionally.
pub fn choose<'a, S, T, I>(state: &mut S, alternatives: I) -> ParseResult<T>
where
    S: Backtrack,
    I: IntoIterator<Item = Alternative<'a, S, T>>,
{
    alternatives
        .into_iter()
        .fold(Choice::new(state), |choice, alternative| choice.or(alternative))
        .resolve()
}
