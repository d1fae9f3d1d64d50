//! Generic syntax tree
//!
//! The engine tree is copied once into an index arena. Children are owned by
//! the arena and addressed by [`NodeId`]; the parent link is just another id,
//! so upward walks never extend lifetimes and cycles cannot be built.
//! [`Node`] is a borrowed handle used for all read access.
//!
//! The arena keeps the caller's bytes unchanged, so ranges always address
//! the input. Text is decoded per node; invalid UTF-8 inside a node's range
//! shows up as U+FFFD in that node's text only.

use super::node_type::{NodeType, classify};
use crate::types::Range;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Index of a node inside its [`SyntaxTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, PartialEq)]
struct NodeData {
    node_type: NodeType,
    /// Original tree-sitter kind (e.g. "lexical_declaration")
    kind: Box<str>,
    range: Range,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    is_error: bool,
}

/// Immutable tree of generic nodes plus the source they address
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxTree {
    source: Vec<u8>,
    nodes: Vec<NodeData>,
    root: NodeId,
}

impl SyntaxTree {
    pub fn root(&self) -> Node<'_> {
        Node {
            tree: self,
            id: self.root,
        }
    }

    pub fn node(&self, id: NodeId) -> Option<Node<'_>> {
        (id.index() < self.nodes.len()).then_some(Node { tree: self, id })
    }

    /// The bytes every node range points into, exactly as parsed.
    pub fn source(&self) -> &[u8] {
        &self.source
    }

    /// Whether the source decodes as UTF-8 without replacement.
    pub fn is_valid_utf8(&self) -> bool {
        std::str::from_utf8(&self.source).is_ok()
    }

    /// Number of nodes in the tree, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A tree always has a root, so this is only true for a hand-built
    /// tree that was never given one.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in arena order (parents before their children).
    pub fn nodes(&self) -> impl Iterator<Item = Node<'_>> + '_ {
        (0..self.nodes.len() as u32).map(move |idx| Node {
            tree: self,
            id: NodeId(idx),
        })
    }

    /// Count of ERROR and MISSING nodes the engine produced.
    pub fn error_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_error).count()
    }

    pub fn has_errors(&self) -> bool {
        self.nodes.iter().any(|n| n.is_error)
    }

    fn data(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.index()]
    }
}

/// Borrowed view of one node
#[derive(Clone, Copy)]
pub struct Node<'t> {
    tree: &'t SyntaxTree,
    id: NodeId,
}

impl<'t> Node<'t> {
    fn data(&self) -> &'t NodeData {
        self.tree.data(self.id)
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn tree(&self) -> &'t SyntaxTree {
        self.tree
    }

    /// Taxonomy tag assigned during conversion
    pub fn node_type(&self) -> NodeType {
        self.data().node_type
    }

    /// Raw engine kind
    pub fn kind(&self) -> &'t str {
        &self.data().kind
    }

    /// Source text covered by this node.
    ///
    /// Borrowed when the slice is valid UTF-8; otherwise invalid sequences
    /// are replaced with U+FFFD. Empty when the range lies outside the
    /// source, which can only happen for hand-built trees.
    pub fn text(&self) -> Cow<'t, str> {
        match self.tree.source.get(self.data().range.byte_range()) {
            Some(bytes) => String::from_utf8_lossy(bytes),
            None => Cow::Borrowed(""),
        }
    }

    pub fn range(&self) -> Range {
        self.data().range
    }

    pub fn byte_range(&self) -> std::ops::Range<usize> {
        self.data().range.byte_range()
    }

    pub fn is_error(&self) -> bool {
        self.data().is_error
    }

    pub fn is_root(&self) -> bool {
        self.id == self.tree.root
    }

    pub fn child_count(&self) -> usize {
        self.data().children.len()
    }

    pub fn child(&self, index: usize) -> Option<Node<'t>> {
        let tree = self.tree;
        self.data()
            .children
            .get(index)
            .map(|&id| Node { tree, id })
    }

    pub fn children(&self) -> impl ExactSizeIterator<Item = Node<'t>> + use<'t> {
        let tree = self.tree;
        self.data().children.iter().map(move |&id| Node { tree, id })
    }

    pub fn parent(&self) -> Option<Node<'t>> {
        let tree = self.tree;
        self.data().parent.map(|id| Node { tree, id })
    }

    /// Parents from the nearest upward, stopping at the root or at a node
    /// that names itself as its own parent.
    pub fn ancestors(&self) -> Ancestors<'t> {
        Ancestors {
            next: self.parent(),
        }
    }

    /// Whether the declared parent is this very node.
    ///
    /// [`TreeBuilder`] always links a child to an earlier node, so this only
    /// holds for trees assembled some other way. [`Node::ancestors`] stops
    /// there instead of looping.
    pub fn is_self_parented(&self) -> bool {
        self.data().parent == Some(self.id)
    }
}

impl PartialEq for Node<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for Node<'_> {}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id.0)
            .field("type", &self.node_type())
            .field("kind", &self.kind())
            .field("bytes", &self.byte_range())
            .finish()
    }
}

/// Iterator returned by [`Node::ancestors`]
pub struct Ancestors<'t> {
    next: Option<Node<'t>>,
}

impl<'t> Iterator for Ancestors<'t> {
    type Item = Node<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        if !current.is_self_parented() {
            self.next = current.parent();
        }
        Some(current)
    }
}

/// Builds a [`SyntaxTree`] node by node.
///
/// Nodes must be added parent-first; children keep insertion order.
/// Taxonomy tags are assigned here from the raw kind.
pub struct TreeBuilder {
    source: Vec<u8>,
    nodes: Vec<NodeData>,
    root: Option<NodeId>,
}

impl TreeBuilder {
    pub fn new(source: impl Into<Vec<u8>>) -> Self {
        Self {
            source: source.into(),
            nodes: Vec::new(),
            root: None,
        }
    }

    pub fn source(&self) -> &[u8] {
        &self.source
    }

    fn push(&mut self, parent: Option<NodeId>, kind: &str, range: Range) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(NodeData {
            node_type: classify(kind),
            kind: kind.into(),
            range,
            parent,
            children: Vec::new(),
            is_error: kind == "ERROR",
        });
        if let Some(parent) = parent {
            self.nodes[parent.index()].children.push(id);
        }
        id
    }

    /// Add the root node. A later call replaces the root.
    pub fn root(&mut self, kind: &str, range: Range) -> NodeId {
        let id = self.push(None, kind, range);
        self.root = Some(id);
        id
    }

    /// Add a child under `parent`.
    pub fn child(&mut self, parent: NodeId, kind: &str, range: Range) -> NodeId {
        self.push(Some(parent), kind, range)
    }

    /// Add the root node from a byte span; rows and columns are derived.
    pub fn root_span(&mut self, kind: &str, span: std::ops::Range<usize>) -> NodeId {
        let range = Range::from_span(&self.source, span.start, span.end);
        self.root(kind, range)
    }

    /// Add a child from a byte span; rows and columns are derived.
    pub fn child_span(
        &mut self,
        parent: NodeId,
        kind: &str,
        span: std::ops::Range<usize>,
    ) -> NodeId {
        let range = Range::from_span(&self.source, span.start, span.end);
        self.child(parent, kind, range)
    }

    /// Flag a node as an engine ERROR/MISSING node.
    pub fn mark_error(&mut self, id: NodeId) {
        if let Some(node) = self.nodes.get_mut(id.index()) {
            node.is_error = true;
        }
    }

    /// Finish the tree. Without an explicit root, an empty `program` node
    /// spanning the whole source becomes the root.
    pub fn finish(mut self) -> SyntaxTree {
        let root = match self.root {
            Some(root) => root,
            None => {
                let len = self.source.len();
                self.root_span("program", 0..len)
            }
        };

        SyntaxTree {
            source: self.source,
            nodes: self.nodes,
            root,
        }
    }
}
