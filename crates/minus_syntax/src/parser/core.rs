/// Parser core type and statement entrypoint.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module while avoiding a single "god file".
/// - The parser owns the only cursor into the token slice. Choice points checkpoint and restore it through the
///   [`Backtrack`] impl below.
pub struct Parser<'a> {
    stream: TokenStream<'a>,
    /// Current `E` nesting.
    depth: usize,
    max_depth: usize,
}

/// Kinds that can start an expression.
const EXPR_START: KindSet = KindSet::single(TokenKind::LParen)
    .with(TokenKind::Minus)
    .with(TokenKind::Number);

impl<'a> Parser<'a> {
    /// Create a new parser for a token list, with the default nesting limit.
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            stream: TokenStream::new(tokens),
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Create a parser that takes its nesting limit from `config`.
    pub fn with_config(tokens: &'a [Token], config: &ParserConfig) -> Self {
        Self {
            max_depth: config.max_depth,
            ..Self::new(tokens)
        }
    }

    /// The underlying stream (position, rollback count, remaining tokens).
    pub fn stream(&self) -> &TokenStream<'a> {
        &self.stream
    }

    /// Parse exactly one assignment and require the stream to be empty afterwards.
    ///
    /// ## Errors
    /// - Any error from the root rule that no choice point recovered from.
    /// - [`ParseError::TrailingInput`] if the assignment parsed but tokens remain. This check runs after the root rule
    ///   has committed and is never retried.
    pub fn parse(&mut self) -> ParseResult<ParseNode> {
        let tree = self.statement()?;

        if let Some(next) = self.stream.remaining().first() {
            return Err(ParseError::TrailingInput {
                remaining: self.stream.remaining().len(),
                next: next.clone(),
            });
        }

        tracing::debug!(rollbacks = self.stream.rollbacks(), "accepted");
        Ok(tree)
    }
}

impl Backtrack for Parser<'_> {
    type Checkpoint = Checkpoint;

    fn checkpoint(&self) -> Checkpoint {
        self.stream.checkpoint()
    }

    fn restore(&mut self, checkpoint: Checkpoint) {
        self.stream.restore(checkpoint)
    }
}
