//! Parameter type vocabulary.
//!
//! Class parameters may be prefixed with a type name (`Regexp $pattern = /x/`). The parser accepts any
//! identifier there and records it verbatim.

/// Marker recorded for a parameter declared without a type.
pub const ANY: &str = "Any";
