//! Error-tolerant syntax frontend for manifests: lexer, parser, arena AST, diagnostics.
//!
//! This crate is built for editor integrations that re-parse on every keystroke: parsing never
//! fails, malformed input yields a best-effort tree, and every node carries exact byte offsets so
//! collaborators (outline, highlighting, navigation) can map nodes back to the buffer.
//!
//! ## Notes
//! - This crate is “syntax-only”: class references are textual and nothing is evaluated.
//! - Vocabulary identity (keywords/punctuation/metaparameters) comes from `ppmanifest_core::lang`
//!   registries.
//!
//! ## Examples
//! ```rust
//! use ppmanifest_syntax::ast::NodeKind;
//! use ppmanifest_syntax::parse_source;
//!
//! let result = parse_source("class aaa { include bbb }");
//! let classes = result.nodes_of_kind(NodeKind::Class, true);
//! assert_eq!(classes.len(), 1);
//! assert!(!result.has_errors());
//! ```
//!
//! ## See also
//! - `ppmanifest_core::lang` for registry-backed language vocabulary.

pub mod ast;
pub mod config;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod result;
pub mod token_helpers;

pub use config::ParseConfig;
pub use result::{ParseResult, parse_source, parse_source_with};
