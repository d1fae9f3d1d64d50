use crate::ast::{Node, NodeType};
use std::borrow::Cow;

pub fn get_identifier_name<'t>(node: Node<'t>) -> Cow<'t, str> {
    match node.node_type() {
        NodeType::Identifier => node.text(),
        _ => Cow::Borrowed(""),
    }
}

/// Literal source text, quotes included for strings.
pub fn get_literal_value<'t>(node: Node<'t>) -> Cow<'t, str> {
    match node.node_type() {
        NodeType::Literal => node.text(),
        _ => Cow::Borrowed(""),
    }
}
