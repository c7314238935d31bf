//! Parser for manifests
//!
//! Converts a token stream into a [`SyntaxTree`]. The grammar is deliberately permissive: an editor
//! asks for a tree on every keystroke, so malformed input yields a best-effort tree plus diagnostics
//! rather than an error.
//!
//! ## Examples
//!
//! ```rust
//! use ppmanifest_syntax::ast::NodeKind;
//! use ppmanifest_syntax::{lexer, parser};
//!
//! let lexed = lexer::lex("class aaa inherits aaa::params { }");
//! let output = parser::parse(&lexed.tokens);
//! let classes = output.tree.nodes_of_kind(output.tree.root(), NodeKind::Class, false);
//! assert_eq!(classes.len(), 1);
//! assert!(output.errors.is_empty());
//! ```

use crate::ast::*;
use crate::config::ParseConfig;
use crate::diagnostics::{SyntaxError, SyntaxErrorKind};
use crate::lexer::{Token, TokenKind};
use ppmanifest_core::lang::keywords::KeywordId;
use ppmanifest_core::lang::punctuation::{self, PunctuationId};
use ppmanifest_core::lang::types;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
