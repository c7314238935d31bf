//! Abstract Syntax Tree definitions for manifests
//!
//! The tree lives in an arena ([`SyntaxTree`]) and nodes refer to each other through [`NodeId`]s:
//! a parent owns its children (by id, in source order) and every node keeps a non-owning `parent`
//! id for upward queries such as "which class contains this attribute".
//!
//! ## Notes
//! - Node kinds form a closed set ([`NodeKind`]); the payload for each kind lives in [`NodeData`].
//! - Spans are byte offsets into the original source and always lie within `[0, source.len()]`.
//! - Trees are built once by the parser and are read-only afterwards; the mutation helpers are
//!   crate-private.

use std::fmt::{self, Write as _};

use ppmanifest_core::lang::metaparameters;

/// Source location span (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return `true` if `offset` falls inside the span (end-exclusive).
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        (span.start, span.len()).into()
    }
}

/// Index of a node inside its [`SyntaxTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    /// The root node of every tree.
    pub const ROOT: NodeId = NodeId(0);

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Payload-free tag for every node kind, used to filter traversal queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Root,
    Class,
    ClassParam,
    ClassReference,
    Resource,
    ResourceAttribute,
    VariableDefinition,
    VariableReference,
    Function,
    StringLiteral,
    RegexLiteral,
    NumberLiteral,
    BareWord,
    HashLiteral,
    ArrayLiteral,
    AnonymousBlock,
}

/// Kind-specific node payload.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeData {
    Root,
    Class(ClassDecl),
    ClassParam(ClassParam),
    ClassReference(ClassReference),
    Resource(ResourceDecl),
    ResourceAttribute(ResourceAttribute),
    VariableDefinition(VariableDefinition),
    VariableReference(VariableReference),
    Function(FunctionCall),
    StringLiteral(StringLiteral),
    RegexLiteral(RegexLiteral),
    NumberLiteral(NumberLiteral),
    BareWord(BareWord),
    HashLiteral(HashLiteral),
    ArrayLiteral(ArrayLiteral),
    AnonymousBlock,
}

impl NodeData {
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeData::Root => NodeKind::Root,
            NodeData::Class(_) => NodeKind::Class,
            NodeData::ClassParam(_) => NodeKind::ClassParam,
            NodeData::ClassReference(_) => NodeKind::ClassReference,
            NodeData::Resource(_) => NodeKind::Resource,
            NodeData::ResourceAttribute(_) => NodeKind::ResourceAttribute,
            NodeData::VariableDefinition(_) => NodeKind::VariableDefinition,
            NodeData::VariableReference(_) => NodeKind::VariableReference,
            NodeData::Function(_) => NodeKind::Function,
            NodeData::StringLiteral(_) => NodeKind::StringLiteral,
            NodeData::RegexLiteral(_) => NodeKind::RegexLiteral,
            NodeData::NumberLiteral(_) => NodeKind::NumberLiteral,
            NodeData::BareWord(_) => NodeKind::BareWord,
            NodeData::HashLiteral(_) => NodeKind::HashLiteral,
            NodeData::ArrayLiteral(_) => NodeKind::ArrayLiteral,
            NodeData::AnonymousBlock => NodeKind::AnonymousBlock,
        }
    }

    /// The user-visible name carried by named nodes.
    pub fn name(&self) -> Option<&str> {
        match self {
            NodeData::Class(c) => Some(&c.name),
            NodeData::ClassReference(r) => Some(&r.name),
            NodeData::Resource(r) => Some(&r.resource_type),
            NodeData::ResourceAttribute(a) => Some(&a.name),
            NodeData::VariableDefinition(v) => Some(&v.name),
            NodeData::VariableReference(v) => Some(&v.name),
            NodeData::Function(f) => Some(&f.name),
            NodeData::BareWord(w) => Some(&w.name),
            _ => None,
        }
    }
}

// ============================================================================
// Declarations
// ============================================================================

/// `class name (params) inherits parent { body }`
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDecl {
    /// Qualified name, separators kept verbatim (`aaa::params`).
    pub name: String,
    pub name_span: Span,
    /// Owned [`ClassParam`] children, in source order.
    pub params: Vec<NodeId>,
    /// Owned [`ClassReference`] child with [`ReferenceRole::Inherits`].
    pub inherits: Option<NodeId>,
    /// Include references found anywhere in the body, excluding nested classes.
    pub includes: Vec<NodeId>,
}

/// One entry of a class parameter list.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassParam {
    /// Declared type, or [`ppmanifest_core::lang::types::ANY`] when omitted.
    pub type_name: String,
    pub type_span: Option<Span>,
    /// Owned [`VariableDefinition`] child.
    pub variable: NodeId,
    /// Owned default value expression.
    pub default: Option<NodeId>,
}

/// How a [`ClassReference`] links to the named class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceRole {
    Include,
    Inherits,
}

impl fmt::Display for ReferenceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceRole::Include => write!(f, "include"),
            ReferenceRole::Inherits => write!(f, "inherits"),
        }
    }
}

/// A textual reference to a class; no symbol resolution happens here.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassReference {
    pub name: String,
    pub name_span: Span,
    pub role: ReferenceRole,
}

/// `type { title: attr => value, ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceDecl {
    pub resource_type: String,
    pub type_span: Span,
    /// Owned title expression: a string literal or a variable reference.
    pub title: NodeId,
    /// Owned [`ResourceAttribute`] children, in source order.
    pub attributes: Vec<NodeId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResourceAttribute {
    pub name: String,
    pub name_span: Span,
    pub value: Option<NodeId>,
    pub is_metaparameter: bool,
}

impl ResourceAttribute {
    pub fn new(name: String, name_span: Span, value: Option<NodeId>) -> Self {
        let is_metaparameter = metaparameters::is_metaparameter(&name);
        Self {
            name,
            name_span,
            value,
            is_metaparameter,
        }
    }
}

/// Left-hand side of an assignment, or the variable of a class parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDefinition {
    /// Full name including the sigil (`$aaa::fff`).
    pub name: String,
    /// Assigned expression; `None` for class parameters and truncated assignments.
    pub value: Option<NodeId>,
}

/// Any use of a variable that is not the target of an assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableReference {
    pub name: String,
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    pub name: String,
    pub name_span: Span,
    pub arguments: Vec<NodeId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuoteStyle {
    Single,
    Double,
}

impl QuoteStyle {
    pub fn delimiter(self) -> char {
        match self {
            QuoteStyle::Single => '\'',
            QuoteStyle::Double => '"',
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StringLiteral {
    /// Content with escapes decoded.
    pub value: String,
    pub quote: QuoteStyle,
    pub terminated: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegexLiteral {
    /// Raw text between the slashes.
    pub pattern: String,
    pub terminated: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberValue {
    Int(i64),
    Float(f64),
}

impl NumberValue {
    /// Interpret numeric literal text: `0x` hex, leading-zero octal, decimal integer, then float.
    pub fn parse(text: &str) -> Option<NumberValue> {
        let (negative, digits) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        let sign = if negative { -1 } else { 1 };

        if let Some(hex) = digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X")) {
            return i64::from_str_radix(hex, 16).ok().map(|v| NumberValue::Int(sign * v));
        }
        if digits.len() > 1 && digits.starts_with('0') && digits.bytes().all(|b| (b'0'..=b'7').contains(&b)) {
            return i64::from_str_radix(digits, 8).ok().map(|v| NumberValue::Int(sign * v));
        }
        if let Ok(v) = text.parse::<i64>() {
            return Some(NumberValue::Int(v));
        }
        text.parse::<f64>().ok().map(NumberValue::Float)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NumberLiteral {
    /// Literal text as written.
    pub text: String,
    pub value: Option<NumberValue>,
}

/// An unquoted word in value position (`present`, `true`, `undef`).
#[derive(Debug, Clone, PartialEq)]
pub struct BareWord {
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashEntry {
    pub key: NodeId,
    pub value: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HashLiteral {
    pub entries: Vec<HashEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrayLiteral {
    pub elements: Vec<NodeId>,
}

// ============================================================================
// Tree
// ============================================================================

/// A single node: payload, source range, and its place in the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub data: NodeData,
    pub span: Span,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        self.data.kind()
    }

    pub fn name(&self) -> Option<&str> {
        self.data.name()
    }

    pub fn offset(&self) -> usize {
        self.span.start
    }

    pub fn length(&self) -> usize {
        self.span.len()
    }
}

/// Arena holding every node of one parse. [`NodeId::ROOT`] is always the root.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxTree {
    nodes: Vec<Node>,
}

impl Default for SyntaxTree {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxTree {
    /// Create a tree containing only an empty root.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                data: NodeData::Root,
                span: Span::default(),
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Look up a node.
    ///
    /// ## Panics
    /// - If `id` does not belong to this tree (a programming error).
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub fn kind(&self, id: NodeId) -> NodeKind {
        self.node(id).kind()
    }

    pub fn data(&self, id: NodeId) -> &NodeData {
        &self.node(id).data
    }

    pub fn span(&self, id: NodeId) -> Span {
        self.node(id).span
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.node(id).name()
    }

    /// Every node in arena order (not document order).
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1 && self.nodes[0].children.is_empty()
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    /// All descendants of `from` (excluding `from`) in document order.
    pub fn descendants(&self, from: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(from).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }
        out
    }

    /// Nodes of `kind` below `from`: direct children only, or the whole subtree when `recursive`.
    ///
    /// Results are in document order.
    pub fn nodes_of_kind(&self, from: NodeId, kind: NodeKind, recursive: bool) -> Vec<NodeId> {
        if recursive {
            self.descendants(from)
                .into_iter()
                .filter(|&id| self.kind(id) == kind)
                .collect()
        } else {
            self.children(from)
                .iter()
                .copied()
                .filter(|&id| self.kind(id) == kind)
                .collect()
        }
    }

    /// Parents of `id`, nearest first, ending at the root.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), move |&p| self.parent(p))
    }

    /// Nearest ancestor of `kind`.
    pub fn enclosing(&self, id: NodeId, kind: NodeKind) -> Option<NodeId> {
        self.ancestors(id).find(|&p| self.kind(p) == kind)
    }

    /// Deepest node whose span covers `offset`. Falls back to the root.
    pub fn node_at_offset(&self, offset: usize) -> NodeId {
        let mut current = NodeId::ROOT;
        'descend: loop {
            for &child in self.children(current) {
                if self.span(child).contains(offset) {
                    current = child;
                    continue 'descend;
                }
            }
            return current;
        }
    }

    /// The range highlighting collaborators paint for a node: its identifier, not its whole body.
    pub fn name_span(&self, id: NodeId) -> Span {
        let node = self.node(id);
        match &node.data {
            NodeData::Class(c) => c.name_span,
            NodeData::ClassReference(r) => r.name_span,
            NodeData::Resource(r) => r.type_span,
            NodeData::ResourceAttribute(a) => a.name_span,
            NodeData::Function(f) => f.name_span,
            NodeData::VariableDefinition(VariableDefinition { name, .. })
            | NodeData::VariableReference(VariableReference { name }) => {
                Span::new(node.span.start, (node.span.start + name.len()).min(node.span.end))
            }
            _ => node.span,
        }
    }

    /// Statements of a class body: its children minus parameters and the inherits reference.
    pub fn class_body(&self, id: NodeId) -> Vec<NodeId> {
        match self.data(id) {
            NodeData::Class(c) => self
                .children(id)
                .iter()
                .copied()
                .filter(|child| !c.params.contains(child) && c.inherits != Some(*child))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Include references in the body of `class`, stopping at nested classes.
    pub fn collect_includes(&self, class: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(class).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            match self.data(id) {
                NodeData::Class(_) => continue,
                NodeData::ClassReference(r) if r.role == ReferenceRole::Include => out.push(id),
                _ => {}
            }
            stack.extend(self.children(id).iter().rev().copied());
        }
        out
    }

    /// Variable references below `from` whose name is defined somewhere in the same subtree.
    pub fn local_references(&self, from: NodeId) -> Vec<NodeId> {
        let defined: std::collections::HashSet<&str> = self
            .nodes_of_kind(from, NodeKind::VariableDefinition, true)
            .into_iter()
            .filter_map(|id| self.name(id))
            .collect();
        self.nodes_of_kind(from, NodeKind::VariableReference, true)
            .into_iter()
            .filter(|&id| self.name(id).is_some_and(|n| defined.contains(n)))
            .collect()
    }

    /// Render the tree as indented text, one node per line.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        let mut stack = vec![(NodeId::ROOT, 0usize)];
        while let Some((id, depth)) = stack.pop() {
            let node = self.node(id);
            let _ = write!(out, "{}{:?}@{}..{}", "  ".repeat(depth), node.kind(), node.span.start, node.span.end);
            if let Some(detail) = describe(&node.data) {
                let _ = write!(out, " {detail}");
            }
            out.push('\n');
            stack.extend(node.children.iter().rev().map(|&c| (c, depth + 1)));
        }
        out
    }

    // ------------------------------------------------------------------------
    // Construction (parser only)
    // ------------------------------------------------------------------------

    /// Allocate a node and adopt `children`.
    pub(crate) fn add(&mut self, data: NodeData, span: Span, children: Vec<NodeId>) -> NodeId {
        let id = NodeId(u32::try_from(self.nodes.len()).expect("INVARIANT: node count fits in u32"));
        for &child in &children {
            self.nodes[child.index()].parent = Some(id);
        }
        self.nodes.push(Node {
            data,
            span,
            parent: None,
            children,
        });
        id
    }

    /// Append `child` to `parent`'s children.
    pub(crate) fn attach(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[child.index()].parent = Some(parent);
        self.nodes[parent.index()].children.push(child);
    }

    pub(crate) fn data_mut(&mut self, id: NodeId) -> &mut NodeData {
        &mut self.nodes[id.index()].data
    }

    pub(crate) fn set_span(&mut self, id: NodeId, span: Span) {
        self.nodes[id.index()].span = span;
    }
}

fn describe(data: &NodeData) -> Option<String> {
    match data {
        NodeData::Root | NodeData::AnonymousBlock | NodeData::HashLiteral(_) | NodeData::ArrayLiteral(_) => None,
        NodeData::Class(c) => Some(format!("name={:?}", c.name)),
        NodeData::ClassParam(p) => Some(format!("type={:?}", p.type_name)),
        NodeData::ClassReference(r) => Some(format!("{} {:?}", r.role, r.name)),
        NodeData::Resource(r) => Some(format!("type={:?}", r.resource_type)),
        NodeData::ResourceAttribute(a) if a.is_metaparameter => Some(format!("name={:?} meta", a.name)),
        NodeData::ResourceAttribute(a) => Some(format!("name={:?}", a.name)),
        NodeData::VariableDefinition(v) => Some(format!("name={:?}", v.name)),
        NodeData::VariableReference(v) => Some(format!("name={:?}", v.name)),
        NodeData::Function(f) => Some(format!("name={:?}", f.name)),
        NodeData::StringLiteral(s) if !s.terminated => Some(format!("{:?} unterminated", s.value)),
        NodeData::StringLiteral(s) => Some(format!("{:?}", s.value)),
        NodeData::RegexLiteral(r) if !r.terminated => Some(format!("/{}/ unterminated", r.pattern)),
        NodeData::RegexLiteral(r) => Some(format!("/{}/", r.pattern)),
        NodeData::NumberLiteral(n) => Some(n.text.clone()),
        NodeData::BareWord(w) => Some(w.name.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(tree: &mut SyntaxTree, name: &str, start: usize) -> NodeId {
        tree.add(
            NodeData::BareWord(BareWord { name: name.to_string() }),
            Span::new(start, start + name.len()),
            Vec::new(),
        )
    }

    #[test]
    fn add_sets_parent_links() {
        let mut tree = SyntaxTree::new();
        let a = word(&mut tree, "a", 1);
        let b = word(&mut tree, "b", 3);
        let array = tree.add(
            NodeData::ArrayLiteral(ArrayLiteral { elements: vec![a, b] }),
            Span::new(0, 5),
            vec![a, b],
        );
        tree.attach(NodeId::ROOT, array);

        assert_eq!(tree.parent(a), Some(array));
        assert_eq!(tree.parent(array), Some(NodeId::ROOT));
        assert_eq!(tree.ancestors(b).collect::<Vec<_>>(), vec![array, NodeId::ROOT]);
    }

    #[test]
    fn nodes_of_kind_respects_recursion_flag() {
        let mut tree = SyntaxTree::new();
        let inner = word(&mut tree, "inner", 2);
        let block = tree.add(NodeData::AnonymousBlock, Span::new(0, 10), vec![inner]);
        let outer = word(&mut tree, "outer", 11);
        tree.attach(NodeId::ROOT, block);
        tree.attach(NodeId::ROOT, outer);

        assert_eq!(tree.nodes_of_kind(NodeId::ROOT, NodeKind::BareWord, false), vec![outer]);
        assert_eq!(
            tree.nodes_of_kind(NodeId::ROOT, NodeKind::BareWord, true),
            vec![inner, outer]
        );
    }

    #[test]
    fn node_at_offset_finds_deepest() {
        let mut tree = SyntaxTree::new();
        let inner = word(&mut tree, "x", 4);
        let block = tree.add(NodeData::AnonymousBlock, Span::new(2, 8), vec![inner]);
        tree.attach(NodeId::ROOT, block);
        tree.set_span(NodeId::ROOT, Span::new(0, 9));

        assert_eq!(tree.node_at_offset(4), inner);
        assert_eq!(tree.node_at_offset(6), block);
        assert_eq!(tree.node_at_offset(0), NodeId::ROOT);
    }

    #[test]
    fn number_values() {
        assert_eq!(NumberValue::parse("644"), Some(NumberValue::Int(644)));
        assert_eq!(NumberValue::parse("0644"), Some(NumberValue::Int(0o644)));
        assert_eq!(NumberValue::parse("0x1F"), Some(NumberValue::Int(31)));
        assert_eq!(NumberValue::parse("-12"), Some(NumberValue::Int(-12)));
        assert_eq!(NumberValue::parse("1.5"), Some(NumberValue::Float(1.5)));
        assert_eq!(NumberValue::parse("0"), Some(NumberValue::Int(0)));
        assert_eq!(NumberValue::parse("0x"), None);
    }

    #[test]
    fn variable_name_span_covers_only_the_name() {
        let mut tree = SyntaxTree::new();
        let value = word(&mut tree, "x", 6);
        let def = tree.add(
            NodeData::VariableDefinition(VariableDefinition {
                name: "$a".to_string(),
                value: Some(value),
            }),
            Span::new(0, 7),
            vec![value],
        );
        assert_eq!(tree.name_span(def), Span::new(0, 2));
    }
}
