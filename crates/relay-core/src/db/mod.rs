//! Database operations and SQLite management for the approval store.
//!
//! This module provides the low-level, blocking query layer behind
//! [`crate::store::SqliteStore`]. It handles SQLite connections, schema
//! management, and specialized query interfaces for documents, steps, and
//! test results. The async store wraps every call in
//! `tokio::task::spawn_blocking`.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod document_queries;
pub mod migrations;
pub mod step_queries;
pub mod test_result_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
