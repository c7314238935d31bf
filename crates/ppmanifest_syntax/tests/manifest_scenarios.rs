//! Manifest scenarios that editor features rely on: class headers, parameters, includes,
//! resources and variables, plus the guarantee that malformed text still yields a tree.

use ppmanifest_syntax::ast::{ClassDecl, NodeData, NodeId, NodeKind, ResourceDecl};
use ppmanifest_syntax::{ParseResult, parse_source};

fn clean(source: &str) -> ParseResult {
    let result = parse_source(source);
    assert!(!result.has_errors(), "unexpected problems in {source:?}: {:?}", result.errors());
    result
}

fn first_class(result: &ParseResult) -> &ClassDecl {
    let classes = result.nodes_of_kind(NodeKind::Class, false);
    match result.tree().data(classes[0]) {
        NodeData::Class(class) => class,
        other => panic!("Expected class, got {other:?}"),
    }
}

fn first_resource(result: &ParseResult) -> &ResourceDecl {
    let resources = result.nodes_of_kind(NodeKind::Resource, true);
    match result.tree().data(resources[0]) {
        NodeData::Resource(resource) => resource,
        other => panic!("Expected resource, got {other:?}"),
    }
}

/// `(variable name, type name)` for every parameter of a class.
fn params(result: &ParseResult, class: &ClassDecl) -> Vec<(String, String)> {
    class
        .params
        .iter()
        .map(|&id| match result.tree().data(id) {
            NodeData::ClassParam(p) => (
                result.tree().name(p.variable).unwrap_or_default().to_string(),
                p.type_name.clone(),
            ),
            other => panic!("Expected param, got {other:?}"),
        })
        .collect()
}

fn names(result: &ParseResult, ids: &[NodeId]) -> Vec<String> {
    ids.iter()
        .filter_map(|&id| result.tree().name(id))
        .map(str::to_string)
        .collect()
}

#[test]
fn empty_class_is_the_only_root_child() {
    let result = clean("class aaa { }");
    let children = result.tree().children(result.root());
    assert_eq!(children.len(), 1);
    assert_eq!(result.tree().kind(children[0]), NodeKind::Class);
    assert_eq!(first_class(&result).name, "aaa");
}

#[test]
fn qualified_class_name_is_kept_verbatim() {
    let result = clean("class aaa::param { }");
    assert_eq!(first_class(&result).name, "aaa::param");
}

#[test]
fn inherits_with_and_without_params() {
    for source in [
        "class aaa inherits aaa::params { }",
        "class aaa ( $x = 1 ) inherits aaa::params { }",
    ] {
        let result = clean(source);
        let class = first_class(&result);
        let parent = class.inherits.expect("inherits reference");
        assert_eq!(result.tree().name(parent), Some("aaa::params"), "{source}");
    }
}

#[test]
fn untyped_param_defaults_to_any() {
    let result = clean("class aaa ( $bb = '' ) { }");
    let class = first_class(&result);
    assert_eq!(params(&result, class), vec![("$bb".to_string(), "Any".to_string())]);
}

#[test]
fn mixed_params_with_trailing_comma() {
    let result = clean("class aaa ( $bb = '', Regexp $cc = /aaa/, $dd=$aa::aa,) { }");
    let class = first_class(&result);
    assert_eq!(
        params(&result, class),
        vec![
            ("$bb".to_string(), "Any".to_string()),
            ("$cc".to_string(), "Regexp".to_string()),
            ("$dd".to_string(), "Any".to_string()),
        ]
    );
}

#[test]
fn includes_are_ordered_and_scoped_to_the_class() {
    let source = "class aaa {\n  include bbb\n  { }\n  include ccc\n  { { } }\n}\ninclude ddd\n";
    let result = clean(source);
    let class = first_class(&result);
    assert_eq!(names(&result, &class.includes), vec!["bbb", "ccc"]);
}

#[test]
fn resource_with_string_title() {
    let result = clean("file { \"fff\": ensure => present, path => 'aaaa', }");
    let resource = first_resource(&result);
    assert_eq!(resource.resource_type, "file");
    assert_eq!(result.tree().kind(resource.title), NodeKind::StringLiteral);
    assert_eq!(names(&result, &resource.attributes), vec!["ensure", "path"]);
}

#[test]
fn resource_with_variable_title() {
    let result = clean("file { $aaa::params::fff : ensure => present, path => 'aaaa', foo => 644 }");
    let resource = first_resource(&result);
    assert_eq!(result.tree().kind(resource.title), NodeKind::VariableReference);
    assert_eq!(result.tree().name(resource.title), Some("$aaa::params::fff"));
    assert_eq!(names(&result, &resource.attributes), vec!["ensure", "path", "foo"]);
}

#[test]
fn definitions_and_references() {
    let result = clean("$aaa::fff::ss = $bbb\n$aaa::fff = 666\n");
    let refs = result.nodes_of_kind(NodeKind::VariableReference, true);
    assert_eq!(names(&result, &refs), vec!["$bbb"]);
    let defs = result.nodes_of_kind(NodeKind::VariableDefinition, true);
    assert_eq!(names(&result, &defs), vec!["$aaa::fff::ss", "$aaa::fff"]);
}

#[test]
fn parsing_twice_gives_equal_trees() {
    let source = "class aaa ( $bb = '' ) inherits ccc {\n  include ddd\n  file { 'x': ensure => present }\n}\n";
    assert_eq!(parse_source(source), parse_source(source));
}

#[test]
fn malformed_input_still_has_a_root() {
    for source in ["class aaa {", "class", "}", "file { 'x': ensure =>", "$x = [1, {", "/* open"] {
        let result = parse_source(source);
        assert_eq!(result.root_node().kind(), NodeKind::Root, "{source}");
        assert_eq!(result.root_node().span.end, source.len(), "{source}");
        assert!(result.has_errors(), "{source}");
    }
}

#[test]
fn parse_result_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ParseResult>();
}

#[test]
fn includes_inside_nested_blocks_belong_to_the_class() {
    let result = clean("class aaa {\n  {\n    { include deep }\n  }\n}\n");
    assert_eq!(names(&result, &first_class(&result).includes), vec!["deep"]);
}
