//! Property tests for the lexer's token stream.

use ppmanifest_syntax::lexer::{TokenKind, lex};
use proptest::prelude::*;

proptest! {
    /// Property: tokens are ordered, non-overlapping, on char boundaries, and end with one `Eof`
    #[test]
    fn token_stream_is_well_formed(source in "\\PC{0,200}") {
        let output = lex(&source);
        let tokens = &output.tokens;

        let eofs = tokens.iter().filter(|t| t.kind == TokenKind::Eof).count();
        prop_assert_eq!(eofs, 1);
        prop_assert_eq!(tokens.last().map(|t| &t.kind), Some(&TokenKind::Eof));

        let mut previous_end = 0;
        for token in tokens {
            prop_assert!(token.span.start >= previous_end, "overlapping token {:?}", token);
            prop_assert!(token.span.start <= token.span.end);
            prop_assert!(source.is_char_boundary(token.span.start));
            prop_assert!(source.is_char_boundary(token.span.end));
            previous_end = token.span.end;
        }
        prop_assert_eq!(previous_end, source.len());
    }

    /// Property: every lexical diagnostic points inside the source
    #[test]
    fn lexical_errors_are_in_bounds(source in "[\"'/$a-z{}()\\[\\],:=> \n#*;]{0,120}") {
        let output = lex(&source);
        for err in &output.errors {
            prop_assert!(err.span.end <= source.len());
            prop_assert!(err.is_lexical());
        }
    }
}
