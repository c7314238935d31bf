/// Expression parsing.
///
/// Expressions are the values of assignments, attributes, parameters, arguments and aggregate
/// elements: literals, variable references, bare words, function calls, hashes and arrays.
/// There are no operators.
impl<'a> Parser<'a> {
    /// Parse one expression, or return `None` without consuming anything.
    ///
    /// Aggregates and calls past the nesting limit are skipped entirely and also yield `None`,
    /// but after consuming their tokens.
    fn expression(&mut self) -> Option<NodeId> {
        let token = self.peek();
        let data = match &token.kind {
            TokenKind::String {
                value,
                quote,
                terminated,
            } => NodeData::StringLiteral(StringLiteral {
                value: value.clone(),
                quote: *quote,
                terminated: *terminated,
            }),
            TokenKind::Regex { pattern, terminated } => NodeData::RegexLiteral(RegexLiteral {
                pattern: pattern.clone(),
                terminated: *terminated,
            }),
            TokenKind::Number(text) => NodeData::NumberLiteral(NumberLiteral {
                text: text.clone(),
                value: NumberValue::parse(text),
            }),
            TokenKind::Variable(name) => NodeData::VariableReference(VariableReference { name: name.clone() }),
            TokenKind::Ident(_) if self.call_ahead() => return self.function_call(),
            TokenKind::Ident(name) => NodeData::BareWord(BareWord { name: name.clone() }),
            TokenKind::Punctuation(PunctuationId::LBrace) => return self.hash_literal(),
            TokenKind::Punctuation(PunctuationId::LBracket) => return self.array_literal(),
            _ => return None,
        };
        self.advance();
        Some(self.tree.add(data, token.span, Vec::new()))
    }

    /// Like [`Self::expression`], but reports `what` as missing when nothing was consumed.
    fn expect_expression(&mut self, what: &'static str) -> Option<NodeId> {
        let before = self.pos;
        let expr = self.expression();
        if expr.is_none() && self.pos == before {
            let err = self.expected_here(what);
            self.report(err);
        }
        expr
    }

    /// `name ( args )`, both as a statement and as a value.
    fn function_call(&mut self) -> Option<NodeId> {
        let name = match &self.peek().kind {
            TokenKind::Ident(name) => name.clone(),
            _ => return None,
        };
        let name_span = self.advance().span;
        let open = self.advance().span;
        if !self.enter_nested(open) {
            return None;
        }
        let arguments = self.comma_list(open, PunctuationId::RParen, "argument list", &[], |p| {
            p.expect_expression("argument")
        });
        self.leave_nested();

        Some(self.tree.add(
            NodeData::Function(FunctionCall {
                name,
                name_span,
                arguments: arguments.clone(),
            }),
            Span::new(name_span.start, self.prev_end()),
            arguments,
        ))
    }

    /// `{ key => value, ... }`
    fn hash_literal(&mut self) -> Option<NodeId> {
        let open = self.advance().span;
        if !self.enter_nested(open) {
            return None;
        }
        let entries = self.comma_list(open, PunctuationId::RBrace, "hash", &[], |p| p.hash_entry());
        self.leave_nested();

        let children = entries
            .iter()
            .flat_map(|entry| std::iter::once(entry.key).chain(entry.value))
            .collect();
        Some(self.tree.add(
            NodeData::HashLiteral(HashLiteral { entries }),
            Span::new(open.start, self.prev_end()),
            children,
        ))
    }

    fn hash_entry(&mut self) -> Option<HashEntry> {
        let key = self.expect_expression("hash key")?;
        let value = if self.match_punct(PunctuationId::FatArrow) {
            self.expect_expression("hash value")
        } else {
            let err = self.expected_here("`=>` after hash key");
            self.report(err);
            None
        };
        Some(HashEntry { key, value })
    }

    /// `[ element, ... ]`
    fn array_literal(&mut self) -> Option<NodeId> {
        let open = self.advance().span;
        if !self.enter_nested(open) {
            return None;
        }
        let elements = self.comma_list(open, PunctuationId::RBracket, "array", &[], |p| {
            p.expect_expression("array element")
        });
        self.leave_nested();

        Some(self.tree.add(
            NodeData::ArrayLiteral(ArrayLiteral {
                elements: elements.clone(),
            }),
            Span::new(open.start, self.prev_end()),
            elements,
        ))
    }
}
