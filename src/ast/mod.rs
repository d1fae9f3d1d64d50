//! Generic node model, taxonomy and typed statements

pub mod node;
pub mod node_type;
pub mod statement;

pub use node::{Ancestors, Node, NodeId, SyntaxTree, TreeBuilder};
pub use node_type::{NodeType, classify, is_expression_kind};
pub use statement::{
    ClassDeclaration, EnumDeclaration, ExportDeclaration, FunctionDeclaration, ImportDeclaration,
    NamespaceDeclaration, Statement, VariableKind, VariableStatement,
};
