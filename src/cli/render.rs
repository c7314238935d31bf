//! Pure renderers used by the CLI commands.
//!
//! Everything here turns parse output into text or JSON without touching the filesystem, so the
//! formats can be tested directly.

use std::fmt::Write as _;

use miette::{NamedSource, Report};
use serde_json::{Value, json};

use ppmanifest_syntax::ParseResult;
use ppmanifest_syntax::ast::{NodeData, NodeId, NodeKind, SyntaxTree};
use ppmanifest_syntax::diagnostics::SyntaxError;
use ppmanifest_syntax::lexer::Token;

/// Render diagnostics with source context, one report per problem.
pub fn diagnostics(path: &str, source: &str, errors: &[SyntaxError]) -> String {
    let mut out = String::new();
    for err in errors {
        let report = Report::new(err.clone()).with_source_code(NamedSource::new(path, source.to_string()));
        let _ = writeln!(out, "{report:?}");
    }
    out
}

/// One line per token: `start..end kind`.
pub fn tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        let _ = writeln!(out, "{}..{}\t{}", token.span.start, token.span.end, token.kind);
    }
    out
}

/// The subtree rooted at `id` as a JSON object.
pub fn tree_json(tree: &SyntaxTree, id: NodeId) -> Value {
    let node = tree.node(id);
    let mut value = json!({
        "kind": format!("{:?}", node.kind()),
        "span": [node.span.start, node.span.end],
    });
    if let Some(name) = node.name() {
        value["name"] = json!(name);
    }

    match &node.data {
        NodeData::Class(class) => {
            let includes: Vec<&str> = class.includes.iter().filter_map(|&i| tree.name(i)).collect();
            value["includes"] = json!(includes);
            if let Some(parent) = class.inherits.and_then(|p| tree.name(p)) {
                value["inherits"] = json!(parent);
            }
        }
        NodeData::ClassParam(param) => value["type"] = json!(param.type_name),
        NodeData::ClassReference(reference) => value["role"] = json!(reference.role.to_string()),
        NodeData::ResourceAttribute(attr) => value["metaparameter"] = json!(attr.is_metaparameter),
        NodeData::StringLiteral(s) => {
            value["value"] = json!(s.value);
            value["terminated"] = json!(s.terminated);
        }
        NodeData::RegexLiteral(r) => {
            value["pattern"] = json!(r.pattern);
            value["terminated"] = json!(r.terminated);
        }
        NodeData::NumberLiteral(n) => value["text"] = json!(n.text),
        _ => {}
    }

    if !node.children.is_empty() {
        let children: Vec<Value> = node.children.iter().map(|&c| tree_json(tree, c)).collect();
        value["children"] = Value::Array(children);
    }
    value
}

/// Classes and resources in document order, nested by containment.
pub fn outline(result: &ParseResult, source: &str) -> String {
    let tree = result.tree();
    let mut out = String::new();
    for id in tree.descendants(tree.root()) {
        let depth = tree
            .ancestors(id)
            .filter(|&a| matches!(tree.kind(a), NodeKind::Class | NodeKind::Resource))
            .count();
        let indent = "  ".repeat(depth);
        let line = line_of(source, tree.span(id).start);

        match tree.data(id) {
            NodeData::Class(class) => {
                let _ = write!(out, "{indent}class {}", class.name);
                if let Some(parent) = class.inherits.and_then(|p| tree.name(p)) {
                    let _ = write!(out, " inherits {parent}");
                }
                let _ = writeln!(out, " (line {line})");
                for &param in &class.params {
                    if let NodeData::ClassParam(p) = tree.data(param) {
                        let name = tree.name(p.variable).unwrap_or_default();
                        let _ = writeln!(out, "{indent}  param {} {name}", p.type_name);
                    }
                }
                for &include in &class.includes {
                    let _ = writeln!(out, "{indent}  include {}", tree.name(include).unwrap_or_default());
                }
            }
            NodeData::Resource(resource) => {
                let _ = writeln!(
                    out,
                    "{indent}{} {} (line {line})",
                    resource.resource_type,
                    title_text(tree, resource.title)
                );
                for &attr in &resource.attributes {
                    if let NodeData::ResourceAttribute(a) = tree.data(attr) {
                        let marker = if a.is_metaparameter { " [meta]" } else { "" };
                        let _ = writeln!(out, "{indent}  {}{marker}", a.name);
                    }
                }
            }
            _ => {}
        }
    }
    out
}

fn title_text(tree: &SyntaxTree, title: NodeId) -> String {
    match tree.data(title) {
        NodeData::StringLiteral(s) => format!("'{}'", s.value),
        NodeData::VariableReference(v) => v.name.clone(),
        _ => "?".to_string(),
    }
}

/// 1-based line number of a byte offset.
fn line_of(source: &str, offset: usize) -> usize {
    source.get(..offset).map_or(1, |before| before.matches('\n').count() + 1)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use ppmanifest_syntax::parse_source;

    #[test]
    fn test_tree_json_carries_names_and_children() {
        let result = parse_source("class a inherits b { include c }");
        let value = tree_json(result.tree(), result.root());
        assert_eq!(value["kind"], "Root");
        let class = &value["children"][0];
        assert_eq!(class["kind"], "Class");
        assert_eq!(class["name"], "a");
        assert_eq!(class["inherits"], "b");
        assert_eq!(class["includes"], json!(["c"]));
        assert_eq!(class["span"], json!([0, 32]));
    }

    #[test]
    fn test_tree_json_flags_metaparameters() {
        let result = parse_source("file { 'x': before => $y }");
        let value = tree_json(result.tree(), result.root());
        let attr = &value["children"][0]["children"][1];
        assert_eq!(attr["name"], "before");
        assert_eq!(attr["metaparameter"], true);
    }

    #[test]
    fn test_tokens_one_per_line() {
        let lexed = ppmanifest_syntax::lexer::lex("include a");
        let text = tokens(&lexed.tokens);
        assert_eq!(text.lines().count(), 3);
        assert!(text.starts_with("0..7\tkeyword `include`"));
    }

    #[test]
    fn test_line_of() {
        assert_eq!(line_of("a\nb\nc", 0), 1);
        assert_eq!(line_of("a\nb\nc", 2), 2);
        assert_eq!(line_of("a\nb\nc", 4), 3);
    }

    #[test]
    fn test_diagnostics_name_the_file() {
        let result = parse_source("class { }");
        let text = diagnostics("site.pp", "class { }", result.errors());
        assert!(text.contains("site.pp"));
        assert!(text.contains("expected class name"));
    }
}
