//! Metaparameter vocabulary.
//!
//! Metaparameters are attribute names that every resource type accepts and that carry
//! special meaning to the manifest runtime (ordering, notification, tagging). The parser does not
//! treat them differently; the list exists so highlighting and outline tooling can mark them.
//!
//! ## Examples
//! ```rust
//! use ppmanifest_core::lang::metaparameters;
//!
//! assert!(metaparameters::is_metaparameter("notify"));
//! assert!(!metaparameters::is_metaparameter("ensure"));
//! ```

/// Every reserved metaparameter name, alphabetically.
pub const METAPARAMETERS: &[&str] = &[
    "alias",
    "audit",
    "before",
    "loglevel",
    "noop",
    "notify",
    "require",
    "schedule",
    "stage",
    "subscribe",
    "tag",
];

/// Return `true` if `name` is a reserved metaparameter.
pub fn is_metaparameter(name: &str) -> bool {
    METAPARAMETERS.binary_search(&name).is_ok()
}
