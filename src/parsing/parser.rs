//! tree-sitter binding
//!
//! Owns one `tree_sitter::Parser` and converts each concrete tree into a
//! [`SyntaxTree`]. The engine is error tolerant: malformed input still
//! yields a complete tree with `ERROR`/`MISSING` nodes, which are kept and
//! flagged rather than reported as failures.

use super::tree::Tree;
use crate::ast::{NodeId, SyntaxTree, TreeBuilder};
use crate::config::{Dialect, Settings};
use crate::error::{ParseError, ParseResult};
use crate::types::{Position, Range};
use std::path::Path;
use tree_sitter::Parser;

/// TypeScript parser over a single tree-sitter engine instance.
///
/// Not shareable across threads while parsing; use one parser per thread.
pub struct TypeScriptParser {
    parser: Option<Parser>,
    dialect: Dialect,
}

impl TypeScriptParser {
    /// Parser for plain TypeScript.
    pub fn new() -> ParseResult<Self> {
        Self::with_dialect(Dialect::TypeScript)
    }

    pub fn with_dialect(dialect: Dialect) -> ParseResult<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(&dialect.language())
            .map_err(|e| ParseError::engine(format!("Failed to set {dialect} language: {e}")))?;

        tracing::debug!(%dialect, "parser ready");
        Ok(Self {
            parser: Some(parser),
            dialect,
        })
    }

    pub fn from_settings(settings: &Settings) -> ParseResult<Self> {
        Self::with_dialect(settings.parser.dialect)
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn is_closed(&self) -> bool {
        self.parser.is_none()
    }

    /// Release the engine. Calling it again is a no-op.
    pub fn close(&mut self) {
        if self.parser.take().is_some() {
            tracing::debug!(dialect = %self.dialect, "parser closed");
        }
    }

    /// Parse `source` into a generic node tree.
    ///
    /// The tree keeps `source` byte for byte and every range addresses it.
    /// Invalid UTF-8 is tolerated: the engine reads past it and node text
    /// decodes it as U+FFFD.
    pub fn parse(&mut self, source: &[u8]) -> ParseResult<SyntaxTree> {
        if source.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let Some(parser) = self.parser.as_mut() else {
            tracing::warn!("parse called on a closed parser");
            return Err(ParseError::engine("parser has been closed"));
        };

        if let Err(e) = std::str::from_utf8(source) {
            tracing::warn!(
                bytes = source.len(),
                valid_up_to = e.valid_up_to(),
                "source is not valid UTF-8, node text will be decoded lossily"
            );
        }

        let ts_tree = parser
            .parse(source, None)
            .ok_or_else(|| ParseError::engine("tree-sitter returned no tree"))?;

        let syntax = convert(ts_tree.root_node(), source.to_vec());
        tracing::debug!(
            bytes = syntax.source().len(),
            nodes = syntax.len(),
            errors = syntax.error_count(),
            "parsed source"
        );
        Ok(syntax)
    }

    pub fn parse_file(&mut self, path: impl AsRef<Path>) -> ParseResult<SyntaxTree> {
        let path = path.as_ref();
        let source = std::fs::read(path).map_err(|source| ParseError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        self.parse(&source)
    }

    /// Parse and reconstruct the top-level statements.
    pub fn build_typed_tree(&mut self, source: &[u8]) -> ParseResult<Tree> {
        self.parse(source).map(Tree::new)
    }

    pub fn build_typed_tree_from_file(&mut self, path: impl AsRef<Path>) -> ParseResult<Tree> {
        self.parse_file(path).map(Tree::new)
    }
}

impl std::fmt::Debug for TypeScriptParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeScriptParser")
            .field("dialect", &self.dialect)
            .field("closed", &self.is_closed())
            .finish()
    }
}

/// The root is widened to the whole buffer; tree-sitter starts it after
/// leading whitespace and comments.
fn convert(root: tree_sitter::Node<'_>, source: Vec<u8>) -> SyntaxTree {
    let len = source.len();
    let mut builder = TreeBuilder::new(source);
    let id = builder.root_span(root.kind(), 0..len);
    flag_errors(&mut builder, id, &root);
    convert_children(&mut builder, id, root);
    builder.finish()
}

fn convert_children(builder: &mut TreeBuilder, parent: NodeId, node: tree_sitter::Node<'_>) {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        let id = builder.child(parent, child.kind(), range_of(&child));
        flag_errors(builder, id, &child);
        convert_children(builder, id, child);
    }
}

fn flag_errors(builder: &mut TreeBuilder, id: NodeId, node: &tree_sitter::Node<'_>) {
    if node.is_error() || node.is_missing() {
        builder.mark_error(id);
    }
}

fn range_of(node: &tree_sitter::Node<'_>) -> Range {
    let start = node.start_position();
    let end = node.end_position();
    Range::new(
        Position::new(start.row as u32, start.column as u32, node.start_byte() as u32),
        Position::new(end.row as u32, end.column as u32, node.end_byte() as u32),
    )
}
