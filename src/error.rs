// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for json-combine
//!
//! The merge core never fails; every variant here is raised at the file
//! boundary (reading, parsing, resolving or writing) or by the CLI layer.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for json-combine operations
#[derive(Error, Debug)]
pub enum CombineError {
    /// IO errors (read, write, directory creation, rename)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A document failed to parse as JSON
    #[error("Failed to parse {what}: {message}")]
    Parse { what: String, message: String },

    /// A document parsed, but its root is not a JSON object
    #[error("{what} is not a JSON object")]
    NotAnObject { what: String },

    /// Resolved target lies outside the workspace root
    #[error("Path escapes workspace: {}", .0.display())]
    PathOutsideWorkspace(PathBuf),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Name validation reported an error-level message
    #[error("Validation failed: {0}")]
    Validation(String),
}

impl CombineError {
    /// Build a parse error for the named document.
    pub fn parse(what: impl Into<String>, err: serde_json::Error) -> Self {
        CombineError::Parse {
            what: what.into(),
            message: err.to_string(),
        }
    }

    /// True for failures caused by malformed or non-object JSON input.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            CombineError::Parse { .. } | CombineError::NotAnObject { .. }
        )
    }
}

/// Result type alias for json-combine operations
pub type Result<T> = std::result::Result<T, CombineError>;

impl From<toml::de::Error> for CombineError {
    fn from(err: toml::de::Error) -> Self {
        CombineError::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for CombineError {
    fn from(err: toml::ser::Error) -> Self {
        CombineError::Toml(err.to_string())
    }
}
