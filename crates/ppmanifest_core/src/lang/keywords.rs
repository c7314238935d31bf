//! Define the reserved keyword vocabulary for manifests.
//!
//! This module is the single source of truth for reserved words: a stable identifier
//! ([`KeywordId`]) plus a const metadata table ([`KEYWORDS`]) that records canonical spellings,
//! categories and usage hints.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - Only the words the parser gives structural meaning to are reserved. Everything else
//!   (`if`, `true`, `undef`, ...) lexes as an identifier and is handled as a bare word.
//!
//! ## Examples
//! ```rust
//! use ppmanifest_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("class"), Some(KeywordId::Class));
//! assert_eq!(keywords::from_str("Class"), None);
//! assert_eq!(keywords::as_str(KeywordId::Inherits), "inherits");
//! ```

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    Class,
    Inherits,
    Include,
}

/// High-level grouping for documentation and tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    /// Introduces a declaration (`class`).
    Definition,
    /// Links a declaration to another class (`inherits`, `include`).
    Reference,
}

/// Usage context hints (not enforced here; parser/lexer own context).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordUsage {
    /// Starts a statement.
    Statement,
    /// Appears inside a class header.
    ClassHeader,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
    pub usage: &'static [KeywordUsage],
    pub description: &'static str,
}

/// Registry of all keywords.
pub const KEYWORDS: &[KeywordInfo] = &[
    info(
        KeywordId::Class,
        "class",
        KeywordCategory::Definition,
        &[KeywordUsage::Statement],
        "Declares a named class with optional parameters and parent class.",
    ),
    info(
        KeywordId::Inherits,
        "inherits",
        KeywordCategory::Reference,
        &[KeywordUsage::ClassHeader],
        "Names the parent of a class declaration.",
    ),
    info(
        KeywordId::Include,
        "include",
        KeywordCategory::Reference,
        &[KeywordUsage::Statement],
        "Declares that the enclosing class pulls in another class.",
    ),
];

/// Canonical spelling.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Usage hints.
pub fn usage(id: KeywordId) -> &'static [KeywordUsage] {
    info_for(id).usage
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Lookup by spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling is reserved, `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(
    id: KeywordId,
    canonical: &'static str,
    category: KeywordCategory,
    usage: &'static [KeywordUsage],
    description: &'static str,
) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        category,
        usage,
        description,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_keyword_round_trips() {
        for k in KEYWORDS {
            assert_eq!(from_str(k.canonical), Some(k.id));
            assert_eq!(as_str(k.id), k.canonical);
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(from_str("CLASS"), None);
        assert_eq!(from_str("Include"), None);
    }

    #[test]
    fn inherits_is_header_only() {
        assert_eq!(usage(KeywordId::Inherits), &[KeywordUsage::ClassHeader]);
        assert_eq!(category(KeywordId::Include), KeywordCategory::Reference);
    }
}
