//! Typed error hierarchy for the Kanban data layer.
//!
//! Two kinds of failure reach callers:
//! - `ValidationError`: a domain rule rejected the input before anything
//!   was written (empty names, missing parent entity, bad color format)
//! - `StorageError`: SQLite itself failed, carried through uninterpreted
//!
//! `KanbanError` is the union returned by every service operation.

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used throughout the repositories and services.
pub type Result<T> = std::result::Result<T, KanbanError>;

/// Top-level error returned by services and repositories.
#[derive(Debug, Error)]
pub enum KanbanError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl KanbanError {
    /// Returns the validation message if this is a domain rule violation.
    pub fn validation_message(&self) -> Option<&str> {
        match self {
            KanbanError::Validation(e) => Some(e.message()),
            KanbanError::Storage(_) => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, KanbanError::Validation(_))
    }
}

/// A domain rule violation. The message is shown to the end user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn board_not_found(id: i64) -> Self {
        Self::new(format!("Board not found with ID: {}", id))
    }

    pub fn column_not_found(id: i64) -> Self {
        Self::new(format!("Column not found with ID: {}", id))
    }

    pub fn task_not_found(id: i64) -> Self {
        Self::new(format!("Task not found with ID: {}", id))
    }

    pub fn tag_not_found(id: i64) -> Self {
        Self::new(format!("Tag not found with ID: {}", id))
    }
}

/// Failures of the underlying SQLite store.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to open database at {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Failed to run migrations: {0}")]
    Migration(#[source] rusqlite::Error),

    #[error("{context}: {source}")]
    Query {
        context: &'static str,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Failed to close database: {0}")]
    Close(#[source] rusqlite::Error),
}

impl StorageError {
    /// The SQLite error underneath, whatever stage it came from.
    pub fn sqlite(&self) -> &rusqlite::Error {
        match self {
            StorageError::Open { source, .. } => source,
            StorageError::Migration(source) => source,
            StorageError::Query { source, .. } => source,
            StorageError::Close(source) => source,
        }
    }
}

/// Attaches a short description of the failed statement to a SQLite error,
/// the way `anyhow::Context` does for the rest of the codebase.
pub(crate) trait StorageContext<T> {
    fn storage(self, context: &'static str) -> std::result::Result<T, StorageError>;
}

impl<T> StorageContext<T> for std::result::Result<T, rusqlite::Error> {
    fn storage(self, context: &'static str) -> std::result::Result<T, StorageError> {
        self.map_err(|source| StorageError::Query { context, source })
    }
}
