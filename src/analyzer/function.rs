//! Function predicates and name recovery

use crate::ast::{Node, NodeType};

/// How many ancestors [`is_exported`] inspects above the node itself.
///
/// Covers `export_statement > lexical_declaration > variable_declarator >
/// arrow_function`.
pub const MAX_EXPORT_ANCESTORS: usize = 3;

/// Upper bound on ancestors inspected while naming an arrow function.
pub const MAX_ARROW_NAME_DEPTH: usize = 32;

/// True for async functions, arrows and methods (text contains `async `).
pub fn is_async(node: Node<'_>) -> bool {
    node.node_type().is_callable() && node.text().contains("async ")
}

/// True when the node or one of its nearest ancestors starts with `export `.
pub fn is_exported(node: Node<'_>) -> bool {
    fn starts_with_export(node: Node<'_>) -> bool {
        node.text().trim().starts_with("export ")
    }

    starts_with_export(node)
        || node
            .ancestors()
            .take(MAX_EXPORT_ANCESTORS)
            .any(starts_with_export)
}

pub fn is_generator(node: Node<'_>) -> bool {
    node.node_type() == NodeType::Function && node.text().contains("function*")
}

/// Name of a function, method or arrow function.
///
/// Functions and methods use their first identifier child. Arrow functions
/// have no name of their own, so the nearest ancestor binding that appears
/// before the arrow is used instead. For an arrow stored as an object
/// property value this is the enclosing variable, not the property key.
///
/// Returns an empty string when nothing fits.
pub fn get_function_name(node: Node<'_>) -> String {
    match node.node_type() {
        NodeType::Function | NodeType::Method => identifier_child(node).unwrap_or_default(),
        NodeType::ArrowFunction => arrow_function_name(node).unwrap_or_default(),
        _ => String::new(),
    }
}

pub(crate) fn identifier_child(node: Node<'_>) -> Option<String> {
    node.children()
        .find(|child| child.node_type() == NodeType::Identifier)
        .map(|child| child.text().to_string())
}

fn arrow_function_name(arrow: Node<'_>) -> Option<String> {
    for ancestor in arrow.ancestors().take(MAX_ARROW_NAME_DEPTH) {
        let binding = ancestor.children().find(|child| {
            child.node_type() == NodeType::Identifier && precedes(ancestor, *child, arrow)
        });
        if let Some(binding) = binding {
            return Some(binding.text().to_string());
        }
    }
    None
}

/// Whether `identifier` occurs before `arrow` in `parent`'s text.
///
/// Positions are first substring occurrences, so a repeated identifier is
/// found at its first use.
fn precedes(parent: Node<'_>, identifier: Node<'_>, arrow: Node<'_>) -> bool {
    let text = parent.text();
    match (
        text.find(&*identifier.text()),
        text.find(&*arrow.text()),
    ) {
        (Some(ident_pos), Some(arrow_pos)) => ident_pos < arrow_pos,
        _ => false,
    }
}

/// Whether the node has a direct parameter child.
pub fn has_parameters(node: Node<'_>) -> bool {
    node.children()
        .any(|child| child.node_type() == NodeType::Parameter)
}

/// Number of parameters anywhere below `node`.
///
/// The `formal_parameters` container is tagged as a parameter too; it is
/// skipped because its text starts with `(`.
pub fn count_parameters(node: Node<'_>) -> usize {
    let own = usize::from(is_real_parameter(node));
    own + node.children().map(count_parameters).sum::<usize>()
}

fn is_real_parameter(node: Node<'_>) -> bool {
    if node.node_type() != NodeType::Parameter {
        return false;
    }
    let text = node.text();
    let text = text.trim();
    !text.is_empty() && !text.starts_with('(')
}
