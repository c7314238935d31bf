#![forbid(unsafe_code)]
//! Error-tolerant parsing for declarative infrastructure manifests.
//!
//! This crate bundles the syntax frontend (`ppmanifest_syntax`) with the shared vocabulary
//! registries (`ppmanifest_core`) and a small command-line tool for inspecting manifests.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module
//!   enforces `#![deny(clippy::unwrap_used)]`.
//! - **Malformed manifests** never panic: they yield a tree plus diagnostics.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//! - **True invariants**: If a panic represents a bug (logic error), use `.expect("INVARIANT: reason")` with a
//!   clear explanation.

pub mod cli;

pub use ppmanifest_core::lang;
pub use ppmanifest_syntax as syntax;

pub use ppmanifest_syntax::ast;
pub use ppmanifest_syntax::diagnostics;
pub use ppmanifest_syntax::lexer;
pub use ppmanifest_syntax::parser;
pub use ppmanifest_syntax::{ParseConfig, ParseResult, parse_source, parse_source_with};
