//! Syntax diagnostics.
//!
//! Errors carry source locations ([`Span`]) for precise reporting and integrate with
//! [`miette`] for rendering. None of them are fatal: the lexer and parser record them and keep
//! going, so a caller always receives a tree.

// Spurious warnings from miette derive macro expansion
#![allow(unused_assignments)]

use miette::Diagnostic;
use thiserror::Error;

use crate::ast::Span;

/// A lexical or structural problem found while reading a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{kind}")]
#[diagnostic(code(ppmanifest::syntax))]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    #[label("here")]
    pub span: Span,
    #[help]
    pub help: Option<String>,
}

impl SyntaxError {
    pub fn new(kind: SyntaxErrorKind, span: Span) -> Self {
        Self { kind, span, help: None }
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn unexpected_char(c: char, span: Span) -> Self {
        Self::new(SyntaxErrorKind::UnexpectedCharacter(c), span)
    }

    pub fn expected(expected: &'static str, found: impl Into<String>, span: Span) -> Self {
        Self::new(
            SyntaxErrorKind::Expected {
                expected,
                found: found.into(),
            },
            span,
        )
    }

    pub fn unclosed(construct: &'static str, delimiter: &'static str, span: Span) -> Self {
        Self::new(SyntaxErrorKind::Unclosed { construct, delimiter }, span)
    }

    /// Return `true` for problems reported by the lexer.
    pub fn is_lexical(&self) -> bool {
        matches!(
            self.kind,
            SyntaxErrorKind::UnexpectedCharacter(_)
                | SyntaxErrorKind::UnterminatedString
                | SyntaxErrorKind::UnterminatedRegex
                | SyntaxErrorKind::UnterminatedComment
        )
    }
}

/// The kind of syntax problem.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxErrorKind {
    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),

    #[error("unterminated string literal")]
    UnterminatedString,

    #[error("unterminated regular expression")]
    UnterminatedRegex,

    #[error("unterminated block comment")]
    UnterminatedComment,

    /// A run of tokens that does not start any statement.
    #[error("unexpected {found}")]
    UnexpectedToken { found: String },

    #[error("expected {expected}, found {found}")]
    Expected { expected: &'static str, found: String },

    #[error("unclosed {construct}: missing `{delimiter}`")]
    Unclosed {
        construct: &'static str,
        delimiter: &'static str,
    },

    /// `;`-separated bodies after the first one in a resource declaration.
    #[error("only the first resource body is read; the bodies after `;` were skipped")]
    ExtraResourceBodies,

    #[error("nesting deeper than {limit} levels; the rest of this construct was skipped")]
    NestingTooDeep { limit: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_read_naturally() {
        let err = SyntaxError::expected("class name", "`{`", Span::new(6, 7));
        assert_eq!(err.to_string(), "expected class name, found `{`");

        let err = SyntaxError::unclosed("class body", "}", Span::new(0, 3));
        assert_eq!(err.to_string(), "unclosed class body: missing `}`");
    }

    #[test]
    fn help_is_attached() {
        let err = SyntaxError::unexpected_char(';', Span::new(1, 2)).with_help("statements are not terminated");
        assert_eq!(err.help.as_deref(), Some("statements are not terminated"));
        assert!(err.is_lexical());
    }
}
