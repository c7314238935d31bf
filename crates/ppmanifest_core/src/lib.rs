//! Provide the canonical manifest vocabulary shared by the syntax frontend and editor tooling.
//!
//! This crate is intentionally small and dependency-free. It holds the reserved words, punctuation spellings,
//! metaparameter names and parameter type names that the lexer, parser and highlighting collaborators must agree on.
//!
//! ## Notes
//!
//! - This is a "vocabulary" crate: **no IO**, no global mutable state, and no AST types.
//! - Lookups are case-sensitive, matching the manifest language.

pub mod lang;
