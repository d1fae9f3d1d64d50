//! Interface and type alias helpers
//!
//! All checks are textual and approximate: `is_generic_type` only looks for
//! both angle brackets, `is_readonly` for the keyword followed by a space.

use super::function::identifier_child;
use crate::ast::{Node, NodeType};

/// Interface name, if the node is an interface with an identifier child.
pub fn get_interface_name(node: Node<'_>) -> String {
    if node.node_type() != NodeType::Interface {
        return String::new();
    }
    identifier_child(node).unwrap_or_default()
}

pub fn get_type_alias_name(node: Node<'_>) -> String {
    if node.node_type() != NodeType::TypeAlias {
        return String::new();
    }
    identifier_child(node).unwrap_or_default()
}

pub fn has_extends(node: Node<'_>) -> bool {
    node.node_type() == NodeType::Interface && node.text().contains(" extends ")
}

pub fn is_readonly(node: Node<'_>) -> bool {
    node.text().contains("readonly ")
}

pub fn is_optional_property(node: Node<'_>) -> bool {
    node.text().contains("?:")
}

/// Property children directly under `node`; nested bodies are not counted.
pub fn count_properties(node: Node<'_>) -> usize {
    node.children()
        .filter(|child| child.node_type() == NodeType::Property)
        .count()
}

pub fn is_generic_type(node: Node<'_>) -> bool {
    matches!(node.node_type(), NodeType::Interface | NodeType::TypeAlias)
        && node.text().contains('<')
        && node.text().contains('>')
}
