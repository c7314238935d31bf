/// Parser core types and entrypoint.
///
/// This chunk defines the [`Parser`] type and its top-level `parse()` entrypoint.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module while avoiding a single “god file”.

/// Tree and structural diagnostics produced by one parser run.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutput {
    pub tree: SyntaxTree,
    pub errors: Vec<SyntaxError>,
}

/// Parser state.
///
/// ## Notes
/// - The parser is single-pass and never fails: every construct that does not parse is skipped
///   with a diagnostic and parsing resumes at the next statement boundary.
/// - Nodes are allocated bottom-up, so a node is only created once all of its children exist.
/// - Most parsing helpers are implemented on `Parser` but split across multiple files.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    tree: SyntaxTree,
    errors: Vec<SyntaxError>,
    config: ParseConfig,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser for a token stream.
    ///
    /// ## Parameters
    /// - `tokens`: Token stream produced by `ppmanifest_syntax::lexer`.
    /// - `config`: nesting limit and diagnostic collection settings.
    ///
    /// ## Panics
    /// - If `tokens` does not end with [`TokenKind::Eof`]. The lexer always appends one, so this
    ///   only fires for hand-built token streams.
    pub fn new(tokens: &'a [Token], config: ParseConfig) -> Self {
        assert!(
            matches!(tokens.last().map(|t| &t.kind), Some(TokenKind::Eof)),
            "token stream must end with an Eof token"
        );
        Self {
            tokens,
            pos: 0,
            tree: SyntaxTree::new(),
            errors: Vec::new(),
            config,
            depth: 0,
        }
    }

    /// Parse the entire token stream into a tree rooted at [`NodeId::ROOT`].
    ///
    /// The root span always runs from offset 0 to the end of the source.
    pub fn parse(mut self) -> ParseOutput {
        while !self.is_at_end() {
            let before = self.pos;

            // A `}` at the top level closes nothing.
            if self.check_punct(PunctuationId::RBrace) {
                let span = self.advance().span;
                self.report(
                    SyntaxError::new(
                        SyntaxErrorKind::UnexpectedToken {
                            found: "`}`".to_string(),
                        },
                        span,
                    )
                    .with_help("this brace does not close any block"),
                );
                continue;
            }

            if let Some(stmt) = self.statement() {
                self.tree.attach(NodeId::ROOT, stmt);
            }
            if self.pos == before {
                self.advance();
            }
        }

        let end = self.peek().span.end;
        self.tree.set_span(NodeId::ROOT, Span::new(0, end));
        tracing::debug!(nodes = self.tree.len(), errors = self.errors.len(), "parsed manifest");
        ParseOutput {
            tree: self.tree,
            errors: self.errors,
        }
    }
}
