/// Token-stream helpers and error recovery.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking/consuming tokens (`peek`, `advance`)
/// - Matching keywords and punctuation
/// - Nesting limits (`enter_nested`, `leave_nested`)
/// - Error recovery (`skip_unexpected`, `recover_in_list`, `skip_to_matching_close`)
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return `true` if the current token is [`TokenKind::Eof`].
    fn is_at_end(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Eof)
    }

    /// Return the current token without consuming it.
    fn peek(&self) -> &'a Token {
        let tokens = self.tokens;
        &tokens[self.pos]
    }

    /// Return the token `n` positions ahead, clamped to the trailing `Eof`.
    fn peek_nth(&self, n: usize) -> &'a Token {
        let tokens = self.tokens;
        tokens.get(self.pos + n).unwrap_or(&tokens[tokens.len() - 1])
    }

    /// Consume the current token and return it. `Eof` is never consumed.
    fn advance(&mut self) -> &'a Token {
        let tokens = self.tokens;
        let token = &tokens[self.pos];
        if !matches!(token.kind, TokenKind::Eof) {
            self.pos += 1;
        }
        token
    }

    /// End offset of the last consumed token (0 before the first one).
    fn prev_end(&self) -> usize {
        match self.pos {
            0 => 0,
            pos => self.tokens[pos - 1].span.end,
        }
    }

    fn check_keyword(&self, id: KeywordId) -> bool {
        self.peek().kind.is_keyword(id)
    }

    fn check_punct(&self, id: PunctuationId) -> bool {
        self.peek().kind.is_punctuation(id)
    }

    fn match_punct(&mut self, id: PunctuationId) -> bool {
        if self.check_punct(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn report(&mut self, error: SyntaxError) {
        tracing::trace!(start = error.span.start, error = %error, "syntax problem");
        if self.config.collect_diagnostics {
            self.errors.push(error);
        }
    }

    /// An "expected X" diagnostic pointing at the current token.
    fn expected_here(&self, expected: &'static str) -> SyntaxError {
        let token = self.peek();
        SyntaxError::expected(expected, token.kind.to_string(), token.span)
    }

    /// Return `true` if the current token can begin a statement.
    fn at_statement_boundary(&self) -> bool {
        match &self.peek().kind {
            TokenKind::Keyword(KeywordId::Class | KeywordId::Include) | TokenKind::Variable(_) => true,
            TokenKind::Punctuation(PunctuationId::LBrace | PunctuationId::RBrace) => true,
            TokenKind::Ident(_) => self.resource_ahead() || self.call_ahead(),
            _ => false,
        }
    }

    /// `type { title :` starts a resource declaration.
    fn resource_ahead(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Ident(_))
            && self.peek_nth(1).kind.is_punctuation(PunctuationId::LBrace)
            && matches!(self.peek_nth(2).kind, TokenKind::String { .. } | TokenKind::Variable(_))
            && self.peek_nth(3).kind.is_punctuation(PunctuationId::Colon)
    }

    /// `name (` starts a function call.
    fn call_ahead(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Ident(_)) && self.peek_nth(1).kind.is_punctuation(PunctuationId::LParen)
    }

    // ========================================================================
    // Nesting
    // ========================================================================

    /// Account for one more level of nesting after consuming the opening delimiter at `open`.
    ///
    /// Past the configured limit the whole construct is skipped (up to its matching closer) and
    /// `false` is returned; the caller must then not build a node for it.
    fn enter_nested(&mut self, open: Span) -> bool {
        let limit = self.config.depth_limit();
        if self.depth >= limit {
            tracing::debug!(depth = self.depth, offset = open.start, "nesting limit reached");
            self.report(SyntaxError::new(SyntaxErrorKind::NestingTooDeep { limit }, open));
            self.skip_to_matching_close();
            return false;
        }
        self.depth += 1;
        true
    }

    fn leave_nested(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    // ========================================================================
    // Recovery
    // ========================================================================

    /// Skip a run of tokens that cannot start a statement, reporting it once.
    ///
    /// Always consumes at least one token (unless at `Eof`). A run made only of characters the
    /// lexer already rejected is not reported again.
    fn skip_unexpected(&mut self) {
        let first = self.advance();
        let mut span = first.span;
        let mut only_lexical = matches!(first.kind, TokenKind::Error(_));
        while !self.is_at_end() && !self.at_statement_boundary() {
            let token = self.advance();
            only_lexical &= matches!(token.kind, TokenKind::Error(_));
            span = span.merge(token.span);
        }
        tracing::debug!(start = span.start, end = span.end, "skipped unexpected tokens");
        if only_lexical {
            return;
        }
        self.report(SyntaxError::new(
            SyntaxErrorKind::UnexpectedToken {
                found: first.kind.to_string(),
            },
            span,
        ));
    }

    /// Skip to the next `,` (consumed) or `close` (left in place) at the current nesting level.
    ///
    /// Returns `false` when the end of input, a keyword or a closing delimiter that belongs to an
    /// enclosing construct is reached first.
    fn recover_in_list(&mut self, close: PunctuationId) -> bool {
        let mut level = 0usize;
        loop {
            let kind = &self.peek().kind;
            if matches!(kind, TokenKind::Eof) {
                return false;
            }
            if level == 0 {
                if kind.is_punctuation(PunctuationId::Comma) {
                    self.advance();
                    return true;
                }
                if kind.is_punctuation(close) {
                    return true;
                }
                if kind.is_closing_delimiter() || matches!(kind, TokenKind::Keyword(_)) {
                    return false;
                }
            }
            if kind.is_opening_delimiter() {
                level += 1;
            } else if kind.is_closing_delimiter() {
                level -= 1;
            }
            self.advance();
        }
    }

    /// After an opening delimiter, skip up to and including its matching closer.
    fn skip_to_matching_close(&mut self) {
        let mut level = 1usize;
        while !self.is_at_end() {
            let kind = &self.advance().kind;
            if kind.is_opening_delimiter() {
                level += 1;
            } else if kind.is_closing_delimiter() {
                level -= 1;
                if level == 0 {
                    return;
                }
            }
        }
    }

    // ========================================================================
    // Lists
    // ========================================================================

    /// Parse `item (, item)* [,] close` after the opening delimiter at `open` was consumed.
    ///
    /// A trailing comma is accepted. Stops early (reporting the construct as unclosed) at the end
    /// of input, at any of `hard_stops`, or at anything that belongs to an enclosing construct.
    fn comma_list<T>(
        &mut self,
        open: Span,
        close: PunctuationId,
        construct: &'static str,
        hard_stops: &[PunctuationId],
        mut item: impl FnMut(&mut Self) -> Option<T>,
    ) -> Vec<T> {
        let mut items = Vec::new();
        loop {
            if self.match_punct(close) {
                return items;
            }
            if self.is_at_end() || hard_stops.iter().any(|&p| self.check_punct(p)) {
                self.report(SyntaxError::unclosed(construct, punctuation::as_str(close), open));
                return items;
            }
            if self.check_punct(PunctuationId::Comma) {
                let span = self.advance().span;
                self.report(SyntaxError::new(
                    SyntaxErrorKind::UnexpectedToken {
                        found: "`,`".to_string(),
                    },
                    span,
                ));
                continue;
            }

            if let Some(value) = item(self) {
                items.push(value);
                if self.match_punct(PunctuationId::Comma) || self.check_punct(close) {
                    continue;
                }
                if self.is_at_end() || hard_stops.iter().any(|&p| self.check_punct(p)) {
                    self.report(SyntaxError::unclosed(construct, punctuation::as_str(close), open));
                    return items;
                }
                let err = self.expected_here(separator_or(close));
                self.report(err);
            }

            if !self.recover_in_list(close) {
                self.report(SyntaxError::unclosed(construct, punctuation::as_str(close), open));
                return items;
            }
        }
    }
}

/// What may follow a list item.
fn separator_or(close: PunctuationId) -> &'static str {
    match close {
        PunctuationId::RParen => "`,` or `)`",
        PunctuationId::RBracket => "`,` or `]`",
        PunctuationId::RBrace => "`,` or `}`",
        _ => "`,`",
    }
}
