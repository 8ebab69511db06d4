//! Error types for the approval workflow library.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::DocumentStatus;

/// Comprehensive error type for all workflow operations.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Document not found for the given ID
    #[error("Document with ID {id} not found")]
    DocumentNotFound { id: u64 },
    /// The acting identity has no step that may act right now: it is not a
    /// participant, its step was already processed, or an earlier step in
    /// the chain is still waiting
    #[error("Approver '{approver}' may not act on document {document} at this point")]
    InvalidTurn { document: u64, approver: String },
    /// Operation attempted on a document already in a terminal status
    #[error("Document {id} is already finalized as {status}")]
    AlreadyFinalized { id: u64, status: DocumentStatus },
    /// A concurrent caller won the race for the same step transition
    #[error("Step {step} was modified concurrently")]
    ConcurrentModification { step: u64 },
    /// The store failed to durably create or update a record
    #[error("Record was not persisted: {message}")]
    NotPersisted { message: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl EngineError {
    /// Creates a new database error with additional context.
    pub fn database_error(message: &str, source: rusqlite::Error) -> Self {
        Self::Database {
            message: message.into(),
            source,
        }
    }

    /// Creates an input validation error for a field.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| EngineError::database_error(message, e))
    }
}

/// Result type alias for workflow operations
pub type Result<T> = std::result::Result<T, EngineError>;
