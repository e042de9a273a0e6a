/// Parse a token list holding exactly one assignment.
///
/// This is the main public entrypoint for parsing.
///
/// ## Errors
/// Returns the [`ParseError`] that rejected the input; rejection is total (no partial tree).
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: &[Token]) -> ParseResult<ParseNode> {
    Parser::new(tokens).parse()
}

/// Parse a token list holding one or more assignments, recovering after bad statements.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse_program(tokens: &[Token]) -> Result<Vec<ParseNode>, Vec<ParseError>> {
    Parser::new(tokens).parse_program(true)
}

/// Parse according to `config`.
///
/// Statement mode yields a single tree (or a single error) wrapped in a `Vec` so both modes share one signature.
#[tracing::instrument(skip_all, fields(token_count = tokens.len(), mode = ?config.mode, max_depth = config.max_depth))]
pub fn parse_with(tokens: &[Token], config: &ParserConfig) -> Result<Vec<ParseNode>, Vec<ParseError>> {
    let mut parser = Parser::with_config(tokens, config);
    match config.mode {
        ParseMode::Statement => parser.parse().map(|tree| vec![tree]).map_err(|err| vec![err]),
        ParseMode::Program => parser.parse_program(config.recover),
    }
}
