/// Program mode: `S ::= L L*`.
///
/// Statements are parsed until the stream runs out. With recovery on, a bad statement is recorded, the stream skips
/// to the next statement boundary and parsing continues.
impl<'a> Parser<'a> {
    /// Parse one or more assignments.
    ///
    /// ## Errors
    /// Returns every recorded error if any statement failed (or just the first one when `recover` is off). An empty
    /// token list fails with [`ParseError::EmptyStream`].
    pub fn parse_program(&mut self, recover: bool) -> Result<Vec<ParseNode>, Vec<ParseError>> {
        let mut statements = Vec::new();
        let mut errors = Vec::new();

        loop {
            match self.statement() {
                Ok(statement) => statements.push(statement),
                Err(err) => {
                    let done = !recover;
                    self.synchronize(&err);
                    errors.push(err);
                    if done {
                        break;
                    }
                }
            }
            if self.stream.is_empty() {
                break;
            }
        }

        if errors.is_empty() {
            Ok(statements)
        } else {
            Err(errors)
        }
    }

    /// Move the stream past the statement that produced `err`.
    fn synchronize(&mut self, err: &ParseError) {
        match err {
            // The failing `consume` already removed the terminator (e.g. `X = ;`).
            ParseError::TokenMismatch { found, .. } if found.kind == TokenKind::Semicolon => {}
            ParseError::EmptyStream { .. } => {}
            _ => {
                let skipped = self.stream.skip_past(TokenKind::Semicolon);
                tracing::debug!(skipped, "synchronized after statement error");
            }
        }
    }
}
