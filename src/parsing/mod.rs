//! Parsing layer
//!
//! [`TypeScriptParser`] drives tree-sitter and converts its output into the
//! generic node model; [`Tree`] adds the reconstructed top-level
//! statements.

mod parser;
mod statements;
mod tree;

pub use parser::TypeScriptParser;
pub use statements::{build_statement, reconstruct_statements};
pub use tree::Tree;
