/// Grammar rules.
///
/// One method per nonterminal. Every rule builds its node inline from the leaves it consumed and the subtrees its
/// callees returned, in source order.
impl<'a> Parser<'a> {
    // ========================================================================
    // Rules
    // ========================================================================

    /// `L ::= id = E ;`
    fn statement(&mut self) -> ParseResult<ParseNode> {
        self.enter("L");
        let target = self.consume(TokenKind::Id)?;
        let eq = self.consume(TokenKind::Eq)?;
        let value = self.expr()?;
        let semicolon = self.consume(TokenKind::Semicolon)?;
        Ok(ParseNode::branch(vec![target, eq, value, semicolon]))
    }

    /// `E ::= ( E ) E2 | - E | number E2`, bounded by the nesting limit.
    fn expr(&mut self) -> ParseResult<ParseNode> {
        self.descend()?;
        let node = self.expr_body();
        self.ascend();
        node
    }

    /// Decided by the token `consume` returns; no choice point needed.
    fn expr_body(&mut self) -> ParseResult<ParseNode> {
        self.enter("E");
        let lead = self.stream.consume(EXPR_START)?;

        match lead.kind {
            TokenKind::LParen => {
                let inner = self.expr()?;
                let close = self.consume(TokenKind::RParen)?;
                let tail = self.expr_tail()?;

                let mut children = vec![ParseNode::from(lead), inner, close];
                if !tail.is_empty() {
                    children.push(tail);
                }
                Ok(ParseNode::branch(children))
            }
            TokenKind::Minus => {
                let operand = self.expr()?;
                Ok(ParseNode::branch(vec![ParseNode::from(lead), operand]))
            }
            TokenKind::Number => {
                let tail = self.expr_tail()?;

                let mut children = vec![ParseNode::from(lead)];
                if !tail.is_empty() {
                    children.push(tail);
                }
                Ok(ParseNode::branch(children))
            }
            // Not admitted by `consume(EXPR_START)`: a choice with no alternatives.
            _ => Choice::new(self).resolve(),
        }
    }

    /// `E2 ::= - E | ε`
    ///
    /// `- E` is attempted eagerly even when the next token is not `-`; ε is what the choice point falls back to.
    fn expr_tail(&mut self) -> ParseResult<ParseNode> {
        self.enter("E2");
        Choice::new(self)
            .or(|p| {
                let minus = p.consume(TokenKind::Minus)?;
                let operand = p.expr()?;
                Ok(ParseNode::branch(vec![minus, operand]))
            })
            .or(|_| {
                tracing::trace!(rule = "E2", "epsilon");
                Ok(ParseNode::empty())
            })
            .resolve()
    }
}
