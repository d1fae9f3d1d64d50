use super::statements::reconstruct_statements;
use crate::ast::{Node, Statement, SyntaxTree};

/// A parsed file: the node arena plus the statements reconstructed from the
/// root's direct children.
///
/// Statements are computed once, in [`Tree::new`], and never recomputed.
#[derive(Debug)]
pub struct Tree {
    syntax: SyntaxTree,
    statements: Vec<Statement>,
}

impl Tree {
    pub fn new(syntax: SyntaxTree) -> Self {
        let statements = reconstruct_statements(syntax.root());
        Self { syntax, statements }
    }

    pub fn root(&self) -> Node<'_> {
        self.syntax.root()
    }

    pub fn syntax(&self) -> &SyntaxTree {
        &self.syntax
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// The node a statement was reconstructed from.
    pub fn node_of(&self, statement: &Statement) -> Option<Node<'_>> {
        self.syntax.node(statement.node_id())
    }

    pub fn into_parts(self) -> (SyntaxTree, Vec<Statement>) {
        (self.syntax, self.statements)
    }
}
