//! Source-to-tree entry points.
//!
//! [`parse_source`] runs the lexer and parser over a whole buffer and bundles the tree, the token
//! stream and every diagnostic into a read-only [`ParseResult`].

use crate::ast::{Node, NodeId, NodeKind, SyntaxTree};
use crate::config::ParseConfig;
use crate::diagnostics::SyntaxError;
use crate::lexer::{self, LexOutput, Token};
use crate::parser::{self, ParseOutput};

/// Everything produced by one parse of a buffer.
///
/// The result exclusively owns its tree; collaborators hold shared references into it.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseResult {
    tree: SyntaxTree,
    tokens: Vec<Token>,
    errors: Vec<SyntaxError>,
    source_len: usize,
}

impl ParseResult {
    /// The root node id. Always [`NodeId::ROOT`].
    pub fn root(&self) -> NodeId {
        self.tree.root()
    }

    pub fn root_node(&self) -> &Node {
        self.tree.node(self.tree.root())
    }

    pub fn tree(&self) -> &SyntaxTree {
        &self.tree
    }

    /// Tokens of the buffer, ending with `Eof`.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Lexical and structural diagnostics, ordered by start offset.
    pub fn errors(&self) -> &[SyntaxError] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Length in bytes of the parsed source.
    pub fn source_len(&self) -> usize {
        self.source_len
    }

    /// Nodes of `kind` below the root; see [`SyntaxTree::nodes_of_kind`].
    pub fn nodes_of_kind(&self, kind: NodeKind, recursive: bool) -> Vec<NodeId> {
        self.tree.nodes_of_kind(self.tree.root(), kind, recursive)
    }
}

/// Parse a whole buffer with the default configuration.
pub fn parse_source(source: &str) -> ParseResult {
    parse_source_with(source, &ParseConfig::default())
}

/// Parse a whole buffer with an explicit configuration.
///
/// Never fails: an empty or malformed buffer still produces a root node spanning the input.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse_source_with(source: &str, config: &ParseConfig) -> ParseResult {
    let LexOutput {
        tokens,
        errors: lex_errors,
    } = lexer::lex(source);
    let ParseOutput {
        tree,
        errors: parse_errors,
    } = parser::parse_with(&tokens, config);

    let mut errors = if config.collect_diagnostics {
        lex_errors
    } else {
        Vec::new()
    };
    errors.extend(parse_errors);
    // Stable: a lexical problem stays ahead of a structural one at the same offset.
    errors.sort_by_key(|e| e.span.start);

    ParseResult {
        tree,
        tokens,
        errors,
        source_len: source.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::SyntaxErrorKind;

    #[test]
    fn test_empty_source_yields_root() {
        let result = parse_source("");
        assert_eq!(result.root(), NodeId::ROOT);
        assert_eq!(result.root_node().kind(), NodeKind::Root);
        assert_eq!(result.root_node().length(), 0);
        assert!(!result.has_errors());
        assert_eq!(result.tokens().len(), 1);
    }

    #[test]
    fn test_errors_are_merged_in_source_order() {
        let result = parse_source("= class a { $x = 'open\n}");
        let kinds: Vec<&SyntaxErrorKind> = result.errors().iter().map(|e| &e.kind).collect();
        assert!(matches!(kinds[0], SyntaxErrorKind::UnexpectedToken { .. }));
        assert!(matches!(kinds[1], SyntaxErrorKind::UnterminatedString));
        assert_eq!(kinds.len(), 2);
    }

    #[test]
    fn test_lexical_errors_respect_diagnostics_switch() {
        let config = ParseConfig::new().with_diagnostics(false);
        let result = parse_source_with("$x = 'open", &config);
        assert!(!result.has_errors());
        assert_eq!(result.source_len(), 10);
    }
}
