/// Parse a token stream into a [`SyntaxTree`] using the default [`ParseConfig`].
///
/// This is the main public entrypoint for parsing.
///
/// ## Parameters
/// - `tokens`: Token stream produced by `ppmanifest_syntax::lexer`; must end with `Eof`.
pub fn parse(tokens: &[Token]) -> ParseOutput {
    parse_with(tokens, &ParseConfig::default())
}

/// Parse a token stream with an explicit configuration.
#[tracing::instrument(skip_all, fields(token_count = tokens.len(), max_depth = config.max_depth))]
pub fn parse_with(tokens: &[Token], config: &ParseConfig) -> ParseOutput {
    Parser::new(tokens, config.clone()).parse()
}
