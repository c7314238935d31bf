//! Literal and comment scanning for the manifest lexer
//!
//! Handles quoted strings, `/regex/` literals, numbers and `/* */` comments. Every scanner here
//! tolerates a missing terminator: it stops at a sensible boundary, flags the token and records a
//! diagnostic instead of failing.

use super::tokens::TokenKind;
use super::{Lexer, Scan};
use crate::ast::{QuoteStyle, Span};
use crate::diagnostics::{SyntaxError, SyntaxErrorKind};

/// Byte index of the first unescaped `delimiter` in `rest`.
///
/// With `single_line`, a newline before the delimiter means there is none.
fn find_closing(rest: &str, delimiter: char, single_line: bool) -> Option<usize> {
    let mut iter = rest.char_indices();
    while let Some((i, c)) = iter.next() {
        match c {
            '\\' => {
                iter.next();
            }
            '\n' if single_line => return None,
            _ if c == delimiter => return Some(i),
            _ => {}
        }
    }
    None
}

/// Byte index of the end of the current line in `rest`.
fn line_end(rest: &str) -> usize {
    rest.find('\n').unwrap_or(rest.len())
}

impl<'a> Lexer<'a> {
    // ========================================================================
    // Strings
    // ========================================================================

    /// Scan a quoted string. Called after consuming the opening quote.
    ///
    /// A string may span lines when it is closed; an unclosed one ends at the end of the line it
    /// started on.
    pub(super) fn scan_string(&mut self, start: usize, delimiter: char) -> Scan {
        let quote = if delimiter == '"' {
            QuoteStyle::Double
        } else {
            QuoteStyle::Single
        };
        let rest = &self.source[self.current_pos..];
        let closing = find_closing(rest, delimiter, false);
        let limit = self.current_pos + closing.unwrap_or_else(|| line_end(rest));

        let mut value = String::new();
        while self.current_pos < limit {
            let Some(c) = self.advance() else { break };
            if c != '\\' || self.current_pos >= limit {
                value.push(c);
                continue;
            }
            let Some(escaped) = self.advance() else { break };
            match (quote, escaped) {
                (_, '\\') => value.push('\\'),
                (_, q) if q == delimiter => value.push(q),
                (QuoteStyle::Double, 'n') => value.push('\n'),
                (QuoteStyle::Double, 't') => value.push('\t'),
                (QuoteStyle::Double, 'r') => value.push('\r'),
                (QuoteStyle::Double, '$') => value.push('$'),
                (_, other) => {
                    value.push('\\');
                    value.push(other);
                }
            }
        }

        let terminated = closing.is_some();
        if terminated {
            self.advance();
        } else {
            self.errors.push(SyntaxError::new(
                SyntaxErrorKind::UnterminatedString,
                Span::new(start, self.current_pos),
            ));
        }
        self.token(
            TokenKind::String {
                value,
                quote,
                terminated,
            },
            start,
        )
    }

    // ========================================================================
    // Regexes
    // ========================================================================

    /// Scan `/pattern/`. Called after consuming the opening slash. Regexes never span lines.
    pub(super) fn scan_regex(&mut self, start: usize) -> Scan {
        let rest = &self.source[self.current_pos..];
        let closing = find_closing(rest, '/', true);
        let len = closing.unwrap_or_else(|| line_end(rest));
        let pattern = rest[..len].to_string();
        self.advance_to(self.current_pos + len);

        let terminated = closing.is_some();
        if terminated {
            self.advance();
        } else {
            self.errors.push(SyntaxError::new(
                SyntaxErrorKind::UnterminatedRegex,
                Span::new(start, self.current_pos),
            ));
        }
        self.token(TokenKind::Regex { pattern, terminated }, start)
    }

    // ========================================================================
    // Comments
    // ========================================================================

    /// Skip `/* ... */`. Called after consuming the slash, with `*` peeked.
    pub(super) fn scan_block_comment(&mut self, start: usize) {
        self.advance();
        let rest = &self.source[self.current_pos..];
        match rest.find("*/") {
            Some(i) => self.advance_to(self.current_pos + i + 2),
            None => {
                self.advance_to(self.source.len());
                self.errors.push(SyntaxError::new(
                    SyntaxErrorKind::UnterminatedComment,
                    Span::new(start, self.current_pos),
                ));
            }
        }
    }

    // ========================================================================
    // Numbers
    // ========================================================================

    /// Scan an integer, float or `0x` hex literal. `first` is a digit or a leading `-`.
    pub(super) fn scan_number(&mut self, start: usize, first: char) -> Scan {
        let leading_zero = first == '0' || (first == '-' && self.peek() == Some('0'));
        if leading_zero {
            if first == '-' {
                self.advance();
            }
            if matches!(self.peek(), Some('x' | 'X')) && self.peek_nth(1).is_some_and(|c| c.is_ascii_hexdigit()) {
                self.advance();
                while self.peek().is_some_and(|c| c.is_ascii_hexdigit()) {
                    self.advance();
                }
                return self.number_token(start);
            }
        }

        // Integer part
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        // Decimal part
        if self.peek() == Some('.') && self.peek_nth(1).is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        // Exponent part
        if matches!(self.peek(), Some('e' | 'E')) {
            let digit_at = if matches!(self.peek_nth(1), Some('+' | '-')) { 2 } else { 1 };
            if self.peek_nth(digit_at).is_some_and(|c| c.is_ascii_digit()) {
                for _ in 0..digit_at {
                    self.advance();
                }
                while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                    self.advance();
                }
            }
        }

        self.number_token(start)
    }

    fn number_token(&self, start: usize) -> Scan {
        let text = self.source[start..self.current_pos].to_string();
        self.token(TokenKind::Number(text), start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closing_skips_escapes() {
        assert_eq!(find_closing(r#"a\"b""#, '"', false), Some(4));
        assert_eq!(find_closing("abc", '"', false), None);
        assert_eq!(find_closing("ab\nc/", '/', true), None);
        assert_eq!(find_closing("ab\nc/", '/', false), Some(4));
    }

    #[test]
    fn line_end_without_newline_is_len() {
        assert_eq!(line_end("abc"), 3);
        assert_eq!(line_end("a\nb"), 1);
    }
}
