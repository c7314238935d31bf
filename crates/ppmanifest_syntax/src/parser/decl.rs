/// Declaration parsing: classes, includes and resources.
///
/// ## Notes
/// - A class node is only created once its name is known; `class` without a name is skipped
///   with a diagnostic.
/// - A class's `includes` are computed after its body is built and stop at nested classes.
impl<'a> Parser<'a> {
    // ========================================================================
    // Classes
    // ========================================================================

    /// `class name [( params )] [inherits parent] { body }`
    fn class_decl(&mut self) -> Option<NodeId> {
        let keyword_span = self.advance().span;
        let name = match &self.peek().kind {
            TokenKind::Ident(name) => name.clone(),
            _ => {
                let err = self.expected_here("class name");
                self.report(err);
                return None;
            }
        };
        let name_span = self.advance().span;
        tracing::trace!(class = %name, "class declaration");

        let mut children = Vec::new();
        let mut params = Vec::new();
        if self.check_punct(PunctuationId::LParen) {
            params = self.class_params();
            children.extend(params.iter().copied());
        }

        let mut inherits = None;
        if self.check_keyword(KeywordId::Inherits) {
            let keyword = self.advance().span;
            match &self.peek().kind {
                TokenKind::Ident(parent) => {
                    let parent = parent.clone();
                    let parent_span = self.advance().span;
                    let reference = self.tree.add(
                        NodeData::ClassReference(ClassReference {
                            name: parent,
                            name_span: parent_span,
                            role: ReferenceRole::Inherits,
                        }),
                        keyword.merge(parent_span),
                        Vec::new(),
                    );
                    inherits = Some(reference);
                    children.push(reference);
                }
                _ => {
                    let err = self.expected_here("parent class name after `inherits`");
                    self.report(err);
                }
            }
        }

        if self.check_punct(PunctuationId::LBrace) {
            let open = self.advance().span;
            if self.enter_nested(open) {
                let (body, closed) = self.block_statements();
                self.leave_nested();
                children.extend(body);
                if !closed {
                    self.report(SyntaxError::unclosed("class body", "}", open));
                }
            }
        } else {
            let err = self.expected_here("`{` to open the class body");
            self.report(err);
        }

        let span = Span::new(keyword_span.start, self.prev_end());
        let id = self.tree.add(
            NodeData::Class(ClassDecl {
                name,
                name_span,
                params,
                inherits,
                includes: Vec::new(),
            }),
            span,
            children,
        );
        let includes = self.tree.collect_includes(id);
        if let NodeData::Class(class) = self.tree.data_mut(id) {
            class.includes = includes;
        }
        Some(id)
    }

    /// `( param, ... )`. Stops at a `{` so a missing `)` does not swallow the class body.
    fn class_params(&mut self) -> Vec<NodeId> {
        let open = self.advance().span;
        self.comma_list(
            open,
            PunctuationId::RParen,
            "parameter list",
            &[PunctuationId::LBrace],
            |p| p.class_param(),
        )
    }

    /// `[Type] $name [= default]`
    fn class_param(&mut self) -> Option<NodeId> {
        let start = self.peek().span.start;
        let (type_name, type_span) = if matches!(self.peek().kind, TokenKind::Ident(_)) {
            let type_name = self.type_expression();
            (type_name, Some(Span::new(start, self.prev_end())))
        } else {
            (types::ANY.to_string(), None)
        };

        let name = match &self.peek().kind {
            TokenKind::Variable(name) => name.clone(),
            _ => {
                let err = self.expected_here("parameter variable");
                self.report(err);
                return None;
            }
        };
        let variable_span = self.advance().span;
        let variable = self.tree.add(
            NodeData::VariableDefinition(VariableDefinition { name, value: None }),
            variable_span,
            Vec::new(),
        );

        let mut children = vec![variable];
        let mut default = None;
        if self.match_punct(PunctuationId::Eq) {
            default = self.expect_expression("default value");
            children.extend(default);
        }

        Some(self.tree.add(
            NodeData::ClassParam(ClassParam {
                type_name,
                type_span,
                variable,
                default,
            }),
            Span::new(start, self.prev_end()),
            children,
        ))
    }

    /// A type name with optional bracketed arguments, rendered back to text: `Optional[String]`.
    fn type_expression(&mut self) -> String {
        let mut text = self.advance().kind.spelling();
        if !self.check_punct(PunctuationId::LBracket) {
            return text;
        }
        let mut level = 0usize;
        loop {
            let kind = &self.peek().kind;
            let stop = matches!(kind, TokenKind::Eof | TokenKind::Variable(_))
                || kind.is_punctuation(PunctuationId::LBrace)
                || kind.is_punctuation(PunctuationId::RBrace)
                || kind.is_punctuation(PunctuationId::RParen);
            if stop {
                return text;
            }
            self.advance();
            text.push_str(&kind.spelling());
            if kind.is_punctuation(PunctuationId::Comma) {
                text.push(' ');
            } else if kind.is_opening_delimiter() {
                level += 1;
            } else if kind.is_closing_delimiter() {
                level = level.saturating_sub(1);
                if level == 0 {
                    return text;
                }
            }
        }
    }

    // ========================================================================
    // Includes
    // ========================================================================

    /// `include name`
    fn include_stmt(&mut self) -> Option<NodeId> {
        let keyword_span = self.advance().span;
        match &self.peek().kind {
            TokenKind::Ident(name) => {
                let name = name.clone();
                let name_span = self.advance().span;
                Some(self.tree.add(
                    NodeData::ClassReference(ClassReference {
                        name,
                        name_span,
                        role: ReferenceRole::Include,
                    }),
                    keyword_span.merge(name_span),
                    Vec::new(),
                ))
            }
            _ => {
                let err = self.expected_here("class name after `include`");
                self.report(err);
                None
            }
        }
    }

    // ========================================================================
    // Resources
    // ========================================================================

    /// `type { title : attr => value, ... }`. Only called when [`Self::resource_ahead`] holds.
    fn resource_decl(&mut self) -> Option<NodeId> {
        let resource_type = match &self.peek().kind {
            TokenKind::Ident(name) => name.clone(),
            _ => return None,
        };
        let type_span = self.advance().span;
        let open = self.advance().span;
        if !self.enter_nested(open) {
            return None;
        }

        let Some(title) = self.expression() else {
            self.leave_nested();
            return None;
        };
        self.match_punct(PunctuationId::Colon);
        let attributes = self.comma_list(open, PunctuationId::RBrace, "resource body", &[], |p| {
            let attribute = p.resource_attribute();
            if matches!(p.peek().kind, TokenKind::Error(';')) {
                p.skip_extra_resource_bodies();
            }
            attribute
        });
        self.leave_nested();

        let mut children = Vec::with_capacity(attributes.len() + 1);
        children.push(title);
        children.extend(attributes.iter().copied());
        Some(self.tree.add(
            NodeData::Resource(ResourceDecl {
                resource_type,
                type_span,
                title,
                attributes,
            }),
            Span::new(type_span.start, self.prev_end()),
            children,
        ))
    }

    /// Skip `; title: attrs` bodies after the first one, stopping before the resource's `}`.
    fn skip_extra_resource_bodies(&mut self) {
        let start = self.peek().span.start;
        let mut level = 0usize;
        loop {
            let kind = &self.peek().kind;
            if matches!(kind, TokenKind::Eof | TokenKind::Keyword(_)) && level == 0 {
                break;
            }
            if kind.is_closing_delimiter() {
                if level == 0 {
                    break;
                }
                level -= 1;
            } else if kind.is_opening_delimiter() {
                level += 1;
            }
            self.advance();
        }
        let span = Span::new(start, self.prev_end());
        tracing::debug!(start = span.start, end = span.end, "skipped extra resource bodies");
        self.report(
            SyntaxError::new(SyntaxErrorKind::ExtraResourceBodies, span)
                .with_help("declare each title in its own resource block"),
        );
    }

    /// `name => value`
    fn resource_attribute(&mut self) -> Option<NodeId> {
        let name = match &self.peek().kind {
            TokenKind::Ident(name) => name.clone(),
            _ => {
                let err = self.expected_here("attribute name");
                self.report(err);
                return None;
            }
        };
        let name_span = self.advance().span;

        let value = if self.match_punct(PunctuationId::FatArrow) {
            self.expect_expression("attribute value")
        } else {
            let err = self.expected_here("`=>` after attribute name");
            self.report(err);
            None
        };

        Some(self.tree.add(
            NodeData::ResourceAttribute(ResourceAttribute::new(name, name_span, value)),
            Span::new(name_span.start, self.prev_end()),
            value.into_iter().collect(),
        ))
    }
}
