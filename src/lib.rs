//! TypeScript syntax analysis on top of tree-sitter
//!
//! Source text is parsed into a language-neutral node tree
//! ([`ast::SyntaxTree`]) whose nodes carry a coarse [`NodeType`] tag, the
//! raw grammar kind and a source range. On top of that:
//!
//! - [`Analyzer`] walks and queries subtrees,
//! - [`Tree`] holds the top-level [`Statement`]s reconstructed from text,
//! - free helpers in [`analyzer`] answer per-node questions such as
//!   [`analyzer::get_function_name`] or [`analyzer::is_exported`].
//!
//! ```no_run
//! use tsast::{Analyzer, TypeScriptParser};
//!
//! let mut parser = TypeScriptParser::new()?;
//! let tree = parser.build_typed_tree(b"const add = (a, b) => a + b;")?;
//! for function in Analyzer::new(tree.root()).find_functions() {
//!     println!("{}", tsast::analyzer::get_function_name(function));
//! }
//! # Ok::<(), tsast::ParseError>(())
//! ```

pub mod analyzer;
pub mod ast;
pub mod config;
pub mod error;
pub mod logging;
pub mod parsing;
pub mod types;

pub use analyzer::{Analyzer, VisitControl};
pub use ast::{Node, NodeId, NodeType, Statement, SyntaxTree};
pub use config::{Dialect, Settings};
pub use error::{ConfigError, ConfigResult, ParseError, ParseResult};
pub use logging::{init_from_settings, init_logging};
pub use parsing::{Tree, TypeScriptParser};
pub use types::{Position, Range};
