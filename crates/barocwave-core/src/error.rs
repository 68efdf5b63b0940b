//! Error types for configuration generation.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("Cannot create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write {}: {source}", path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Template {template} references unknown placeholder ${{{name}}}")]
    UnresolvedPlaceholder { template: &'static str, name: String },

    #[error("Template {template} has an unterminated placeholder at byte {offset}")]
    UnterminatedPlaceholder { template: &'static str, offset: usize },

    #[error("Invalid double-precision literal: {0:?}")]
    InvalidLiteral(String),

    #[error("Unknown {dimension} tag: {tag}")]
    UnknownTag { dimension: &'static str, tag: String },

    #[error("Config parse error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for generation operations
pub type Result<T> = std::result::Result<T, GenError>;
