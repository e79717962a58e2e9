//! Shared error types for lotmap operations.
//!
//! Input bounds are enforced at the boundary and violations are rejected,
//! never clamped. Store errors carry path context and propagate to the
//! caller unmodified.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for lotmap operations
#[derive(Debug, Error)]
pub enum Error {
    /// A numeric input outside its documented bounds
    #[error("Invalid parameter `{name}` = {value}: {constraint}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        constraint: &'static str,
    },

    /// Structural problems in a project definition
    #[error("Invalid project: {0}")]
    InvalidProject(String),

    /// Project file errors (unreadable, unparsable)
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// A record with this name already exists in the store
    #[error("Project `{name}` already exists in the store")]
    DuplicateName { name: String },

    /// No record with this name exists in the store
    #[error("Project `{name}` not found in the store")]
    NotFound { name: String },

    /// Storage backend failures
    #[error("Storage error: {message}")]
    Store {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an invalid parameter error.
    pub fn invalid_parameter(name: &'static str, value: f64, constraint: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value,
            constraint,
        }
    }

    /// Create an invalid project error.
    pub fn invalid_project(message: impl Into<String>) -> Self {
        Self::InvalidProject(message.into())
    }

    /// Create a configuration error with path context.
    pub fn config(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Config {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Create a configuration error without path context.
    pub fn config_message(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            path: None,
        }
    }

    /// Create a duplicate name error.
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName { name: name.into() }
    }

    /// Create a not found error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    /// Create a storage error with path context.
    pub fn store(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Store {
            message: message.into(),
            path: Some(path.into()),
            source: None,
        }
    }

    /// Create a storage error wrapping the underlying IO failure.
    pub fn store_with_source(
        message: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::Store {
            message: message.into(),
            path: Some(path.into()),
            source: Some(source),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
