//! Manifest language vocabulary registries.
//!
//! This module is the "front door" for language-level vocabulary: reserved keywords, punctuation,
//! metaparameters and the untyped-parameter marker.
//!
//! The design goal is to avoid stringly-typed checks scattered across the parser and tooling.
//! Instead, callers work with **stable IDs** (e.g. `KeywordId`, `PunctuationId`) and look up
//! spellings/metadata via registry tables.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no AST types, no IO, no side effects.
//! - The lexer/parser enforce syntax; registries provide spellings and metadata for shared use (diagnostics,
//!   highlighting, outlines).
//!
//! ## Examples
//! ```rust
//! use ppmanifest_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("include"), Some(KeywordId::Include));
//! assert_eq!(keywords::as_str(KeywordId::Include), "include");
//! ```

pub mod keywords;
pub mod metaparameters;
pub mod punctuation;
pub mod types;
