//! Token types for the manifest lexer.
//!
//! The lexer uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words
//! - `Punctuation(PunctuationId)` for punctuation tokens
//!
//! ## Notes
//! - ID-bearing tokens avoid stringly-typed checks in the parser.
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use std::fmt;

use crate::ast::{QuoteStyle, Span};
use ppmanifest_core::lang::keywords::{self, KeywordId};
use ppmanifest_core::lang::punctuation::{self, PunctuationId};

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // ========== Keyword / punctuation (ID-based) ==========
    Keyword(KeywordId),
    Punctuation(PunctuationId),

    // ========== Names ==========
    /// Bare or qualified word: `file`, `aaa::params`, `::top`.
    Ident(String),
    /// Variable with its sigil: `$x`, `$aaa::fff`, `$::fqdn`.
    Variable(String),

    // ========== Literals ==========
    String {
        value: String,
        quote: QuoteStyle,
        terminated: bool,
    },
    Regex {
        pattern: String,
        terminated: bool,
    },
    /// Numeric literal text; interpretation is left to the parser.
    Number(String),

    // ========== Special ==========
    /// A character the lexer does not recognize.
    Error(char),
    Eof,
}

impl TokenKind {
    /// Source-like spelling, used to render type expressions and diagnostics.
    pub fn spelling(&self) -> String {
        match self {
            TokenKind::Keyword(id) => keywords::as_str(*id).to_string(),
            TokenKind::Punctuation(id) => punctuation::as_str(*id).to_string(),
            TokenKind::Ident(s) | TokenKind::Variable(s) | TokenKind::Number(s) => s.clone(),
            TokenKind::String { value, quote, .. } => {
                let q = quote.delimiter();
                format!("{q}{value}{q}")
            }
            TokenKind::Regex { pattern, .. } => format!("/{pattern}/"),
            TokenKind::Error(c) => c.to_string(),
            TokenKind::Eof => String::new(),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Keyword(id) => write!(f, "keyword `{}`", keywords::as_str(*id)),
            TokenKind::Punctuation(id) => write!(f, "`{}`", punctuation::as_str(*id)),
            TokenKind::Ident(s) => write!(f, "identifier `{s}`"),
            TokenKind::Variable(s) => write!(f, "variable `{s}`"),
            TokenKind::String { .. } => write!(f, "string literal"),
            TokenKind::Regex { .. } => write!(f, "regular expression"),
            TokenKind::Number(s) => write!(f, "number `{s}`"),
            TokenKind::Error(c) => write!(f, "character `{c}`"),
            TokenKind::Eof => write!(f, "end of input"),
        }
    }
}

/// A token with its kind and source span.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Resolve an identifier spelling to a keyword id, if reserved.
pub fn keyword_id(name: &str) -> Option<KeywordId> {
    keywords::from_str(name)
}
