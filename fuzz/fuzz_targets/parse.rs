#![no_main]

use libfuzzer_sys::fuzz_target;
use ppmanifest::syntax::{lexer, parse_source};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Fuzz the lexer on its own, then the full pipeline
        let _ = lexer::lex(s);
        let result = parse_source(s);
        for node in result.tree().nodes() {
            assert!(node.span.end <= s.len());
        }
    }
});
