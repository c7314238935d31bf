//! Snapshot tests for the CLI renderers.

use ppmanifest::cli::render;
use ppmanifest::parse_source;

const SITE: &str = "class aaa($bb = 'x') inherits base {\n  include ccc\n  file { '/tmp/a':\n    ensure => present,\n    require => $dep,\n  }\n}\n";

#[test]
fn outline_of_class_with_resource() {
    let result = parse_source(SITE);
    insta::assert_snapshot!(render::outline(&result, SITE), @r"
    class aaa inherits base (line 1)
      param Any $bb
      include ccc
      file '/tmp/a' (line 3)
        ensure
        require [meta]
    ");
}

#[test]
fn outline_nests_inner_classes() {
    let source = "class outer {\n  class inner { }\n}\nfile { $t: }\n";
    let result = parse_source(source);
    insta::assert_snapshot!(render::outline(&result, source), @r"
    class outer (line 1)
      class inner (line 2)
    file $t (line 4)
    ");
}

#[test]
fn parse_tree_json_is_valid() {
    let result = parse_source(SITE);
    let value = render::tree_json(result.tree(), result.root());
    let text = serde_json::to_string(&value).expect("tree serializes");
    let back: serde_json::Value = serde_json::from_str(&text).expect("round-trips");
    assert_eq!(back["children"][0]["name"], "aaa");
    assert_eq!(back["children"][0]["children"][0]["type"], "Any");
}
