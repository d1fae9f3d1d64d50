//! Query layer over a [`SyntaxTree`](crate::ast::SyntaxTree)
//!
//! [`Analyzer`] walks a subtree depth-first, pre-order. The finders in the
//! submodules are thin compositions of [`Analyzer::find_nodes`]; the free
//! functions are per-node predicates.

mod expression;
mod function;
mod types;

pub use function::{
    MAX_ARROW_NAME_DEPTH, MAX_EXPORT_ANCESTORS, count_parameters, get_function_name,
    has_parameters, is_async, is_exported, is_generator,
};
pub use types::{
    count_properties, get_interface_name, get_type_alias_name, has_extends, is_generic_type,
    is_optional_property, is_readonly,
};
pub use expression::{get_identifier_name, get_literal_value};

pub(crate) use function::identifier_child;

use crate::ast::{Node, NodeType};

/// What a visitor wants after seeing a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitControl {
    /// Descend into the node's children
    Continue,
    /// Skip this node's subtree; siblings are still visited
    Stop,
}

impl From<bool> for VisitControl {
    fn from(descend: bool) -> Self {
        if descend {
            VisitControl::Continue
        } else {
            VisitControl::Stop
        }
    }
}

/// Traversal entry point over an optional root
#[derive(Debug, Clone, Copy)]
pub struct Analyzer<'t> {
    root: Option<Node<'t>>,
}

impl<'t> Analyzer<'t> {
    /// A `None` root is allowed and yields no visits.
    pub fn new(root: impl Into<Option<Node<'t>>>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> Option<Node<'t>> {
        self.root
    }

    /// Depth-first, pre-order walk.
    ///
    /// Returning [`VisitControl::Stop`] prunes only the current node's
    /// subtree.
    pub fn visit<F>(&self, mut visitor: F)
    where
        F: FnMut(Node<'t>) -> VisitControl,
    {
        if let Some(root) = self.root {
            visit_node(root, &mut visitor);
        }
    }

    /// Every node matching `predicate`, in visitation order.
    pub fn find_nodes<P>(&self, mut predicate: P) -> Vec<Node<'t>>
    where
        P: FnMut(Node<'t>) -> bool,
    {
        let mut results = Vec::new();
        self.visit(|node| {
            if predicate(node) {
                results.push(node);
            }
            VisitControl::Continue
        });
        results
    }

    pub fn find_nodes_by_type(&self, node_type: NodeType) -> Vec<Node<'t>> {
        self.find_nodes(|node| node.node_type() == node_type)
    }

    pub fn count_nodes<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(Node<'t>) -> bool,
    {
        let mut count = 0;
        self.visit(|node| {
            if predicate(node) {
                count += 1;
            }
            VisitControl::Continue
        });
        count
    }

    pub fn count_nodes_by_type(&self, node_type: NodeType) -> usize {
        self.count_nodes(|node| node.node_type() == node_type)
    }

    /// Function declarations and arrow functions.
    pub fn find_functions(&self) -> Vec<Node<'t>> {
        self.find_nodes(|node| {
            matches!(
                node.node_type(),
                NodeType::Function | NodeType::ArrowFunction
            )
        })
    }

    pub fn find_methods(&self) -> Vec<Node<'t>> {
        self.find_nodes_by_type(NodeType::Method)
    }

    pub fn find_interfaces(&self) -> Vec<Node<'t>> {
        self.find_nodes_by_type(NodeType::Interface)
    }

    pub fn find_type_aliases(&self) -> Vec<Node<'t>> {
        self.find_nodes_by_type(NodeType::TypeAlias)
    }

    pub fn find_expressions(&self) -> Vec<Node<'t>> {
        self.find_nodes_by_type(NodeType::Expression)
    }

    pub fn find_identifiers(&self) -> Vec<Node<'t>> {
        self.find_nodes_by_type(NodeType::Identifier)
    }

    pub fn find_literals(&self) -> Vec<Node<'t>> {
        self.find_nodes_by_type(NodeType::Literal)
    }
}

fn visit_node<'t, F>(node: Node<'t>, visitor: &mut F)
where
    F: FnMut(Node<'t>) -> VisitControl,
{
    if visitor(node) == VisitControl::Stop {
        return;
    }
    for child in node.children() {
        visit_node(child, visitor);
    }
}
