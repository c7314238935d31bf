//! Property-based tests for the manifest parser
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use ppmanifest::ast::{NodeData, NodeId, NodeKind};
use ppmanifest::{ParseConfig, parse_source, parse_source_with};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

/// Plain or qualified class names that are not reserved words.
fn class_name_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,8}(::[a-z][a-z0-9_]{0,8}){0,2}".prop_filter("Not a keyword", |s| {
        !matches!(s.as_str(), "class" | "inherits" | "include")
    })
}

/// Token soup built from manifest vocabulary, so the parser's recovery paths get exercised far
/// more often than with arbitrary characters.
fn fragment_soup_strategy() -> impl Strategy<Value = String> {
    let fragment = prop_oneof![
        Just("class"),
        Just("include"),
        Just("inherits"),
        Just("aaa::bbb"),
        Just("file"),
        Just("$x"),
        Just("$aaa::fff"),
        Just("{"),
        Just("}"),
        Just("("),
        Just(")"),
        Just("["),
        Just("]"),
        Just(","),
        Just(":"),
        Just("="),
        Just("=>"),
        Just("'str'"),
        Just("\"open"),
        Just("/re/"),
        Just("42"),
        Just(";"),
        Just("\n"),
    ];
    prop::collection::vec(fragment, 0..80).prop_map(|parts| parts.join(" "))
}

/// Assert the structural invariants every parse must satisfy.
fn check_tree(source: &str, config: &ParseConfig) -> Result<(), TestCaseError> {
    let result = parse_source_with(source, config);
    let tree = result.tree();

    prop_assert_eq!(tree.span(NodeId::ROOT).start, 0);
    prop_assert_eq!(tree.span(NodeId::ROOT).end, source.len());
    prop_assert_eq!(tree.kind(NodeId::ROOT), NodeKind::Root);

    for id in tree.descendants(NodeId::ROOT) {
        let span = tree.span(id);
        prop_assert!(span.start <= span.end, "{:?} has an inverted span", tree.kind(id));
        prop_assert!(span.end <= source.len());

        let parent = tree.parent(id);
        prop_assert!(parent.is_some(), "non-root node without a parent");
        if let Some(parent) = parent {
            let outer = tree.span(parent);
            prop_assert!(outer.start <= span.start && span.end <= outer.end);
        }
        if let NodeData::Class(class) = tree.data(id) {
            prop_assert!(!class.name.is_empty());
        }
    }

    for err in result.errors() {
        prop_assert!(err.span.start <= err.span.end && err.span.end <= source.len());
    }
    Ok(())
}

// =============================================================================
// Parser Properties
// =============================================================================

proptest! {
    /// Property: parsing arbitrary text never panics and keeps every span inside the source
    #[test]
    fn arbitrary_text_parses(source in "\\PC{0,200}") {
        check_tree(&source, &ParseConfig::default())?;
    }

    /// Property: vocabulary soup exercises recovery without breaking tree invariants
    #[test]
    fn fragment_soup_parses(source in fragment_soup_strategy()) {
        check_tree(&source, &ParseConfig::default())?;
        check_tree(&source, &ParseConfig::new().with_max_depth(2))?;
    }

    /// Property: the parser is a pure function of its input
    #[test]
    fn parsing_is_idempotent(source in fragment_soup_strategy()) {
        prop_assert_eq!(parse_source(&source), parse_source(&source));
    }

    /// Property: generated class names round-trip verbatim
    #[test]
    fn class_names_round_trip(name in class_name_strategy()) {
        let source = format!("class {name} {{ }}");
        let result = parse_source(&source);
        prop_assert!(!result.has_errors(), "{:?}", result.errors());

        let classes = result.nodes_of_kind(NodeKind::Class, false);
        prop_assert_eq!(classes.len(), 1);
        prop_assert_eq!(result.tree().name(classes[0]), Some(name.as_str()));
    }

    /// Property: a parameter list of N variables yields exactly N parameters, trailing comma or not
    #[test]
    fn parameter_count_matches(count in 1usize..8, trailing in any::<bool>()) {
        let params: Vec<String> = (0..count).map(|i| format!("$p{i} = {i}")).collect();
        let comma = if trailing { "," } else { "" };
        let source = format!("class a ({}{comma}) {{ }}", params.join(", "));
        let result = parse_source(&source);
        prop_assert!(!result.has_errors(), "{:?}", result.errors());

        let classes = result.nodes_of_kind(NodeKind::Class, false);
        match result.tree().data(classes[0]) {
            NodeData::Class(class) => {
                prop_assert_eq!(class.params.len(), count);
            }
            other => {
                prop_assert!(false, "expected a class, got {:?}", other);
            }
        }
    }
}
