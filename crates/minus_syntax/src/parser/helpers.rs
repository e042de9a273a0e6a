/// Token-stream helpers.
///
/// Thin wrappers so grammar rules read as `self.consume(...)`; tokens come back as owned leaves.
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Consume the next token against `expected` and wrap it as a leaf.
    fn consume(&mut self, expected: impl Into<KindSet>) -> ParseResult<ParseNode> {
        self.stream.consume(expected).map(ParseNode::from)
    }

    /// Enter one more level of `E` nesting.
    ///
    /// ## Errors
    /// [`ParseError::NestingTooDeep`] once the configured limit is reached; the level is not entered.
    fn descend(&mut self) -> ParseResult<()> {
        if self.depth >= self.max_depth {
            tracing::debug!(limit = self.max_depth, position = self.stream.position(), "nesting limit reached");
            return Err(ParseError::NestingTooDeep { limit: self.max_depth });
        }
        self.depth += 1;
        Ok(())
    }

    fn ascend(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Log rule entry for the caller's trace subscriber.
    fn enter(&self, rule: &'static str) {
        tracing::trace!(rule, position = self.stream.position(), "enter");
    }
}
