//! Coarse semantic taxonomy over raw tree-sitter kinds
//!
//! tree-sitter only tells us a kind string per node. `classify` folds the
//! handful of kinds we care about into a closed enum and sends everything
//! else to [`NodeType::Unknown`].

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
    Function,
    ArrowFunction,
    Method,
    Interface,
    TypeAlias,
    Expression,
    Identifier,
    Literal,
    Property,
    Parameter,
    Unknown,
}

impl NodeType {
    pub const ALL: [NodeType; 11] = [
        NodeType::Function,
        NodeType::ArrowFunction,
        NodeType::Method,
        NodeType::Interface,
        NodeType::TypeAlias,
        NodeType::Expression,
        NodeType::Identifier,
        NodeType::Literal,
        NodeType::Property,
        NodeType::Parameter,
        NodeType::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Function => "function",
            NodeType::ArrowFunction => "arrow_function",
            NodeType::Method => "method",
            NodeType::Interface => "interface",
            NodeType::TypeAlias => "type_alias",
            NodeType::Expression => "expression",
            NodeType::Identifier => "identifier",
            NodeType::Literal => "literal",
            NodeType::Property => "property",
            NodeType::Parameter => "parameter",
            NodeType::Unknown => "unknown",
        }
    }

    /// Function-like tags (declarations, arrows and methods)
    pub fn is_callable(&self) -> bool {
        matches!(
            self,
            NodeType::Function | NodeType::ArrowFunction | NodeType::Method
        )
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw kinds that classify as [`NodeType::Expression`].
const EXPRESSION_KINDS: &[&str] = &[
    "binary_expression",
    "unary_expression",
    "call_expression",
    "member_expression",
    "assignment_expression",
    "ternary_expression",
    "new_expression",
    "await_expression",
];

/// Map a raw tree-sitter kind to its taxonomy tag.
///
/// Pure and total: unmapped kinds (including `ERROR`) yield `Unknown`.
pub fn classify(raw_kind: &str) -> NodeType {
    match raw_kind {
        "function_declaration" => NodeType::Function,
        "arrow_function" => NodeType::ArrowFunction,
        "method_definition" => NodeType::Method,
        "interface_declaration" => NodeType::Interface,
        "type_alias_declaration" => NodeType::TypeAlias,
        "identifier" => NodeType::Identifier,
        "property_signature" => NodeType::Property,
        "formal_parameters" | "required_parameter" | "optional_parameter" => NodeType::Parameter,
        "string" | "number" | "true" | "false" | "null" | "undefined" => NodeType::Literal,
        other if is_expression_kind(other) => NodeType::Expression,
        _ => NodeType::Unknown,
    }
}

/// Whether a raw kind belongs to the expression family.
pub fn is_expression_kind(raw_kind: &str) -> bool {
    EXPRESSION_KINDS.contains(&raw_kind)
}
