//! Small helper APIs for working with `TokenKind`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites and to make it easy
//! to work with ID-based tokens.

use crate::lexer::TokenKind;
use ppmanifest_core::lang::keywords::KeywordId;
use ppmanifest_core::lang::punctuation::{self, PunctuationId};

impl TokenKind {
    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    /// Return the punctuation id, if this is a punctuation token.
    pub fn punctuation_id(&self) -> Option<PunctuationId> {
        match self {
            TokenKind::Punctuation(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given punctuation.
    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        matches!(self, TokenKind::Punctuation(p) if *p == id)
    }

    /// Return `true` for `(`, `[` and `{`.
    pub fn is_opening_delimiter(&self) -> bool {
        self.punctuation_id().is_some_and(punctuation::is_opening)
    }

    /// Return `true` for `)`, `]` and `}`.
    pub fn is_closing_delimiter(&self) -> bool {
        self.punctuation_id().is_some_and(punctuation::is_closing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delimiter_classification() {
        assert!(TokenKind::Punctuation(PunctuationId::LBrace).is_opening_delimiter());
        assert!(TokenKind::Punctuation(PunctuationId::RBracket).is_closing_delimiter());
        assert!(!TokenKind::Punctuation(PunctuationId::Comma).is_closing_delimiter());
        assert!(!TokenKind::Eof.is_opening_delimiter());
    }
}
