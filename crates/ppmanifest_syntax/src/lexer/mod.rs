//! Lexer for manifests
//!
//! Handles tokenization including:
//! - Keywords (`class`, `inherits`, `include`)
//! - Bare and qualified words (`file`, `aaa::params`) and variables (`$aaa::fff`)
//! - String, regex and number literals
//! - Punctuation (`{ } ( ) [ ] , = => : ::`)
//!
//! ## Notes
//! - The lexer never fails. Unterminated literals produce a token flagged `terminated: false`,
//!   unknown characters produce [`TokenKind::Error`] tokens, and both are reported through
//!   [`Lexer::errors`].
//! - [`Lexer`] is a lazy iterator that yields exactly one trailing [`TokenKind::Eof`]. Cloning it
//!   (or calling [`Lexer::new`] again) restarts from the same position.
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)
//! - `literals` - String/regex/number/comment scanning

mod literals;
pub mod tokens;

pub use tokens::{Token, TokenKind, keyword_id};

use std::iter::FusedIterator;

use crate::ast::Span;
use crate::diagnostics::SyntaxError;
use ppmanifest_core::lang::punctuation::PunctuationId;

/// Lexer for manifest source code.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    finished: bool,
    errors: Vec<SyntaxError>,
}

/// Outcome of scanning at the current position.
enum Scan {
    Token(Token),
    /// Whitespace or a comment was consumed.
    Trivia,
    End,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            finished: false,
            errors: Vec::new(),
        }
    }

    /// Lexical problems found so far.
    pub fn errors(&self) -> &[SyntaxError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<SyntaxError> {
        self.errors
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    /// Character `n` positions after the current one (`peek_nth(0) == peek()`).
    fn peek_nth(&self, n: usize) -> Option<char> {
        self.source[self.current_pos..].chars().nth(n)
    }

    fn advance(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.current_pos = pos + c.len_utf8();
            Some(c)
        } else {
            None
        }
    }

    /// Consume characters until the byte position reaches `limit`.
    fn advance_to(&mut self, limit: usize) {
        while self.current_pos < limit && self.advance().is_some() {}
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn token(&self, kind: TokenKind, start: usize) -> Scan {
        Scan::Token(Token::new(kind, Span::new(start, self.current_pos)))
    }

    fn punct(&self, id: PunctuationId, start: usize) -> Scan {
        self.token(TokenKind::Punctuation(id), start)
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) -> Scan {
        let start = self.current_pos;
        let Some(c) = self.advance() else {
            return Scan::End;
        };

        match c {
            _ if c.is_whitespace() => Scan::Trivia,

            '#' => {
                while let Some(c) = self.peek() {
                    if c == '\n' {
                        break;
                    }
                    self.advance();
                }
                Scan::Trivia
            }
            '/' if self.peek() == Some('*') => {
                self.scan_block_comment(start);
                Scan::Trivia
            }
            '/' => self.scan_regex(start),

            ',' => self.punct(PunctuationId::Comma, start),
            '(' => self.punct(PunctuationId::LParen, start),
            ')' => self.punct(PunctuationId::RParen, start),
            '[' => self.punct(PunctuationId::LBracket, start),
            ']' => self.punct(PunctuationId::RBracket, start),
            '{' => self.punct(PunctuationId::LBrace, start),
            '}' => self.punct(PunctuationId::RBrace, start),
            ':' if self.peek() == Some(':') && self.peek_nth(1).is_some_and(is_ident_start) => {
                self.advance();
                self.scan_identifier(start)
            }
            ':' => {
                if self.match_char(':') {
                    self.punct(PunctuationId::ColonColon, start)
                } else {
                    self.punct(PunctuationId::Colon, start)
                }
            }
            '=' => {
                if self.match_char('>') {
                    self.punct(PunctuationId::FatArrow, start)
                } else {
                    self.punct(PunctuationId::Eq, start)
                }
            }

            '"' | '\'' => self.scan_string(start, c),
            '$' => self.scan_variable(start),

            '0'..='9' => self.scan_number(start, c),
            '-' if self.peek().is_some_and(|d| d.is_ascii_digit()) => self.scan_number(start, c),

            _ if is_ident_start(c) => self.scan_identifier(start),

            _ => {
                let span = Span::new(start, self.current_pos);
                self.errors.push(SyntaxError::unexpected_char(c, span));
                Scan::Token(Token::new(TokenKind::Error(c), span))
            }
        }
    }

    // ========================================================================
    // Names
    // ========================================================================

    /// Consume identifier characters, then any `::segment` continuations.
    fn consume_qualified(&mut self, continues: fn(char) -> bool) {
        loop {
            while self.peek().is_some_and(continues) {
                self.advance();
            }
            if self.peek() == Some(':') && self.peek_nth(1) == Some(':') && self.peek_nth(2).is_some_and(continues) {
                self.advance();
                self.advance();
            } else {
                break;
            }
        }
    }

    fn scan_identifier(&mut self, start: usize) -> Scan {
        self.consume_qualified(is_ident_continue);
        let spelling = &self.source[start..self.current_pos];

        // Look up identifier spelling in the reserved-word registry (no allocation for keywords).
        if let Some(id) = keyword_id(spelling) {
            self.token(TokenKind::Keyword(id), start)
        } else {
            self.token(TokenKind::Ident(spelling.to_string()), start)
        }
    }

    fn scan_variable(&mut self, start: usize) -> Scan {
        if self.peek() == Some(':') && self.peek_nth(1) == Some(':') && self.peek_nth(2).is_some_and(is_ident_continue)
        {
            self.advance();
            self.advance();
        }
        if !self.peek().is_some_and(is_ident_continue) {
            let span = Span::new(start, self.current_pos);
            self.errors.push(
                SyntaxError::unexpected_char('$', span).with_help("a variable name must follow `$`"),
            );
            return Scan::Token(Token::new(TokenKind::Error('$'), span));
        }
        self.consume_qualified(is_ident_continue);
        let name = self.source[start..self.current_pos].to_string();
        self.token(TokenKind::Variable(name), start)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        loop {
            match self.scan_token() {
                Scan::Token(token) => return Some(token),
                Scan::Trivia => continue,
                Scan::End => {
                    self.finished = true;
                    let end = self.source.len();
                    return Some(Token::new(TokenKind::Eof, Span::new(end, end)));
                }
            }
        }
    }
}

impl FusedIterator for Lexer<'_> {}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a character can start an identifier (ASCII-only).
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier (ASCII-only).
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Tokens and lexical diagnostics for one source text.
#[derive(Debug, Clone, PartialEq)]
pub struct LexOutput {
    /// Always ends with [`TokenKind::Eof`].
    pub tokens: Vec<Token>,
    pub errors: Vec<SyntaxError>,
}

/// Convenience function to lex a whole source string.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> LexOutput {
    let mut lexer = Lexer::new(source);
    let tokens: Vec<Token> = lexer.by_ref().collect();
    let errors = lexer.into_errors();
    if !errors.is_empty() {
        tracing::debug!(count = errors.len(), "lexical problems");
    }
    LexOutput { tokens, errors }
}

// ============================================================================
// TESTS
// ============================================================================
