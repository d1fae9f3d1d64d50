//! Error types for parsing and configuration
//!
//! Only three things can fail a parse: an empty buffer, an unreadable file,
//! or the tree-sitter engine refusing to produce a tree. Everything else
//! (unknown syntax, unrecoverable names, unmapped node kinds) degrades to
//! `Unknown` tags or empty names instead of an error.

use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by [`TypeScriptParser`](crate::parsing::TypeScriptParser)
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Source code is empty")]
    EmptyInput,

    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Parser engine failure: {reason}")]
    EngineFailure { reason: String },
}

impl ParseError {
    pub(crate) fn engine(reason: impl Into<String>) -> Self {
        Self::EngineFailure {
            reason: reason.into(),
        }
    }

    /// Get a stable status code for this error type.
    pub fn status_code(&self) -> &'static str {
        match self {
            Self::EmptyInput => "EMPTY_INPUT",
            Self::FileRead { .. } => "FILE_READ_ERROR",
            Self::EngineFailure { .. } => "ENGINE_FAILURE",
        }
    }

    /// Get recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            Self::EmptyInput => vec!["Pass at least one byte of TypeScript source"],
            Self::FileRead { .. } => vec![
                "Check that the file exists and you have read permissions",
                "Ensure the file is not locked by another process",
            ],
            Self::EngineFailure { .. } => vec![
                "Create a new parser if this one was closed",
                "Check that the grammar version matches the tree-sitter runtime",
            ],
        }
    }
}

/// Errors from loading or saving [`Settings`](crate::config::Settings)
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Extract(#[from] Box<figment::Error>),

    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Failed to write configuration to '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type alias for parse operations
pub type ParseResult<T> = Result<T, ParseError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
