//! Typed statements reconstructed from top-level syntax nodes
//!
//! Every variant keeps the [`NodeId`] of the node it came from; resolve it
//! through [`Tree::node_of`](crate::parsing::Tree::node_of).

use super::node::NodeId;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableKind {
    Var,
    Let,
    Const,
}

impl VariableKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            VariableKind::Var => "var",
            VariableKind::Let => "let",
            VariableKind::Const => "const",
        }
    }
}

impl fmt::Display for VariableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariableStatement {
    pub node: NodeId,
    pub kind: VariableKind,
    /// Declared binding names, in source order
    pub names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionDeclaration {
    pub node: NodeId,
    /// Empty when no name could be recovered
    pub name: String,
    pub is_async: bool,
    pub is_exported: bool,
    pub is_generator: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassDeclaration {
    pub node: NodeId,
    pub name: String,
    pub is_abstract: bool,
    pub is_exported: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportDeclaration {
    pub node: NodeId,
    /// Module specifier without quotes, empty if none was found
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportDeclaration {
    pub node: NodeId,
    pub is_default: bool,
    /// Re-export module specifier (`export * from "x"`), if any
    pub source: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumDeclaration {
    pub node: NodeId,
    pub name: String,
    pub is_const: bool,
    pub is_exported: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamespaceDeclaration {
    pub node: NodeId,
    pub name: String,
    pub is_exported: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Statement {
    VariableStatement(VariableStatement),
    FunctionDeclaration(FunctionDeclaration),
    ClassDeclaration(ClassDeclaration),
    IfStatement { node: NodeId },
    WhileStatement { node: NodeId },
    ForStatement { node: NodeId },
    ForInStatement { node: NodeId },
    ForOfStatement { node: NodeId, is_await: bool },
    SwitchStatement { node: NodeId },
    TryStatement { node: NodeId },
    ReturnStatement { node: NodeId },
    ThrowStatement { node: NodeId },
    BreakStatement { node: NodeId, label: Option<String> },
    ContinueStatement { node: NodeId, label: Option<String> },
    BlockStatement { node: NodeId },
    EmptyStatement { node: NodeId },
    LabeledStatement { node: NodeId, label: String },
    WithStatement { node: NodeId },
    DebuggerStatement { node: NodeId },
    ImportDeclaration(ImportDeclaration),
    ExportDeclaration(ExportDeclaration),
    EnumDeclaration(EnumDeclaration),
    NamespaceDeclaration(NamespaceDeclaration),
    ExpressionStatement { node: NodeId },
}

impl Statement {
    /// Id of the node this statement was built from
    pub fn node_id(&self) -> NodeId {
        match self {
            Statement::VariableStatement(s) => s.node,
            Statement::FunctionDeclaration(s) => s.node,
            Statement::ClassDeclaration(s) => s.node,
            Statement::ImportDeclaration(s) => s.node,
            Statement::ExportDeclaration(s) => s.node,
            Statement::EnumDeclaration(s) => s.node,
            Statement::NamespaceDeclaration(s) => s.node,
            Statement::IfStatement { node }
            | Statement::WhileStatement { node }
            | Statement::ForStatement { node }
            | Statement::ForInStatement { node }
            | Statement::ForOfStatement { node, .. }
            | Statement::SwitchStatement { node }
            | Statement::TryStatement { node }
            | Statement::ReturnStatement { node }
            | Statement::ThrowStatement { node }
            | Statement::BreakStatement { node, .. }
            | Statement::ContinueStatement { node, .. }
            | Statement::BlockStatement { node }
            | Statement::EmptyStatement { node }
            | Statement::LabeledStatement { node, .. }
            | Statement::WithStatement { node }
            | Statement::DebuggerStatement { node }
            | Statement::ExpressionStatement { node } => *node,
        }
    }

    /// Variant name, e.g. `"ForOfStatement"`
    pub fn kind_name(&self) -> &'static str {
        match self {
            Statement::VariableStatement(_) => "VariableStatement",
            Statement::FunctionDeclaration(_) => "FunctionDeclaration",
            Statement::ClassDeclaration(_) => "ClassDeclaration",
            Statement::IfStatement { .. } => "IfStatement",
            Statement::WhileStatement { .. } => "WhileStatement",
            Statement::ForStatement { .. } => "ForStatement",
            Statement::ForInStatement { .. } => "ForInStatement",
            Statement::ForOfStatement { .. } => "ForOfStatement",
            Statement::SwitchStatement { .. } => "SwitchStatement",
            Statement::TryStatement { .. } => "TryStatement",
            Statement::ReturnStatement { .. } => "ReturnStatement",
            Statement::ThrowStatement { .. } => "ThrowStatement",
            Statement::BreakStatement { .. } => "BreakStatement",
            Statement::ContinueStatement { .. } => "ContinueStatement",
            Statement::BlockStatement { .. } => "BlockStatement",
            Statement::EmptyStatement { .. } => "EmptyStatement",
            Statement::LabeledStatement { .. } => "LabeledStatement",
            Statement::WithStatement { .. } => "WithStatement",
            Statement::DebuggerStatement { .. } => "DebuggerStatement",
            Statement::ImportDeclaration(_) => "ImportDeclaration",
            Statement::ExportDeclaration(_) => "ExportDeclaration",
            Statement::EnumDeclaration(_) => "EnumDeclaration",
            Statement::NamespaceDeclaration(_) => "NamespaceDeclaration",
            Statement::ExpressionStatement { .. } => "ExpressionStatement",
        }
    }

    /// Declared name for named declarations
    pub fn name(&self) -> Option<&str> {
        match self {
            Statement::FunctionDeclaration(s) => Some(&s.name),
            Statement::ClassDeclaration(s) => Some(&s.name),
            Statement::EnumDeclaration(s) => Some(&s.name),
            Statement::NamespaceDeclaration(s) => Some(&s.name),
            _ => None,
        }
    }

    /// Declarations introduce a binding at module level.
    pub fn is_declaration(&self) -> bool {
        matches!(
            self,
            Statement::FunctionDeclaration(_)
                | Statement::ClassDeclaration(_)
                | Statement::ImportDeclaration(_)
                | Statement::ExportDeclaration(_)
                | Statement::EnumDeclaration(_)
                | Statement::NamespaceDeclaration(_)
        )
    }

    pub fn as_function(&self) -> Option<&FunctionDeclaration> {
        match self {
            Statement::FunctionDeclaration(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_class(&self) -> Option<&ClassDeclaration> {
        match self {
            Statement::ClassDeclaration(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_variable(&self) -> Option<&VariableStatement> {
        match self {
            Statement::VariableStatement(v) => Some(v),
            _ => None,
        }
    }
}
