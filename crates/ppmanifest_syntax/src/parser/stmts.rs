/// Statement parsing.
///
/// A statement is a class, an include, a variable assignment or reference, a resource, a
/// function call or an anonymous `{ ... }` block. Anything else is skipped up to the next token
/// that can start a statement, with a single diagnostic for the skipped run.
impl<'a> Parser<'a> {
    /// Parse one statement. Returns `None` when nothing usable was found; tokens may still have
    /// been consumed (and reported).
    fn statement(&mut self) -> Option<NodeId> {
        tracing::trace!(offset = self.peek().span.start, token = %self.peek().kind, "statement");
        match &self.peek().kind {
            TokenKind::Keyword(KeywordId::Class) => self.class_decl(),
            TokenKind::Keyword(KeywordId::Include) => self.include_stmt(),
            TokenKind::Variable(name) => {
                let name = name.clone();
                Some(self.variable_stmt(name))
            }
            TokenKind::Ident(_) if self.resource_ahead() => self.resource_decl(),
            TokenKind::Ident(_) if self.call_ahead() => self.function_call(),
            TokenKind::Punctuation(PunctuationId::LBrace) => self.anonymous_block(),
            _ => {
                self.skip_unexpected();
                None
            }
        }
    }

    /// Statements up to the matching `}`, which is consumed.
    ///
    /// Returns the statements and whether the closing brace was found before the end of input.
    fn block_statements(&mut self) -> (Vec<NodeId>, bool) {
        let mut statements = Vec::new();
        loop {
            if self.is_at_end() {
                return (statements, false);
            }
            if self.match_punct(PunctuationId::RBrace) {
                return (statements, true);
            }
            let before = self.pos;
            if let Some(stmt) = self.statement() {
                statements.push(stmt);
            }
            if self.pos == before {
                self.advance();
            }
        }
    }

    /// `$name = value` becomes a definition; a lone `$name` is a reference.
    fn variable_stmt(&mut self, name: String) -> NodeId {
        let variable_span = self.advance().span;
        if !self.match_punct(PunctuationId::Eq) {
            return self.tree.add(
                NodeData::VariableReference(VariableReference { name }),
                variable_span,
                Vec::new(),
            );
        }

        let value = self.expect_expression("value after `=`");
        self.tree.add(
            NodeData::VariableDefinition(VariableDefinition { name, value }),
            Span::new(variable_span.start, self.prev_end()),
            value.into_iter().collect(),
        )
    }

    /// `{ statements }` outside of any class or resource.
    fn anonymous_block(&mut self) -> Option<NodeId> {
        let open = self.advance().span;
        if !self.enter_nested(open) {
            return None;
        }
        let (statements, closed) = self.block_statements();
        self.leave_nested();
        if !closed {
            self.report(SyntaxError::unclosed("block", "}", open));
        }
        Some(self.tree.add(
            NodeData::AnonymousBlock,
            Span::new(open.start, self.prev_end()),
            statements,
        ))
    }
}
