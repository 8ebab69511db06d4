//! Document CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{OptionalExtension, params, types::Type};

use crate::{
    error::{DatabaseResultExt, EngineError, Result},
    models::{Document, DocumentStatus, NewDocument},
};

// Optimized SQL queries as const strings for compile-time optimization
const INSERT_DOCUMENT_SQL: &str = "INSERT INTO documents (title, writer_id, writer_name, status, current_approver_id, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const DOCUMENT_COLUMNS: &str =
    "id, title, writer_id, writer_name, status, current_approver_id, created_at, updated_at";
const UPDATE_DOCUMENT_STATUS_SQL: &str =
    "UPDATE documents SET status = ?1, updated_at = ?2 WHERE id = ?3";
const UPDATE_CURRENT_APPROVER_SQL: &str =
    "UPDATE documents SET current_approver_id = ?1, updated_at = ?2 WHERE id = ?3";

impl super::Database {
    /// Helper function to construct a Document from a database row.
    /// Steps and test results are loaded separately.
    fn build_document_from_row(row: &rusqlite::Row) -> rusqlite::Result<Document> {
        let status_str: String = row.get(4)?;
        let status = status_str.parse::<DocumentStatus>().map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                4,
                Type::Text,
                format!("Invalid document status: {status_str}").into(),
            )
        })?;

        Ok(Document {
            id: row.get::<_, i64>(0)? as u64,
            title: row.get(1)?,
            writer_id: row.get(2)?,
            writer_name: row.get(3)?,
            status,
            current_approver_id: row.get(5)?,
            created_at: row.get::<_, String>(6)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(6, Type::Text, Box::new(e))
            })?,
            updated_at: row
                .get::<_, Option<String>>(7)?
                .map(|s| s.parse::<Timestamp>())
                .transpose()
                .map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(7, Type::Text, Box::new(e))
                })?,
            steps: Vec::new(),
            test_results: Vec::new(),
        })
    }

    /// Creates a new document row. Steps are added separately and the
    /// returned document carries none.
    pub fn create_document(&mut self, request: &NewDocument) -> Result<Document> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();
        let now_str = now.to_string();

        let rows = tx
            .execute(
                INSERT_DOCUMENT_SQL,
                params![
                    &request.title,
                    &request.writer_id,
                    &request.writer_name,
                    request.status.as_str(),
                    request.current_approver_id.as_deref(),
                    &now_str,
                ],
            )
            .map_err(|e| EngineError::database_error("Failed to insert document", e))?;

        if rows != 1 {
            return Err(EngineError::NotPersisted {
                message: "Document row was not created".to_string(),
            });
        }

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Document {
            id,
            title: request.title.clone(),
            writer_id: request.writer_id.clone(),
            writer_name: request.writer_name.clone(),
            status: request.status,
            current_approver_id: request.current_approver_id.clone(),
            created_at: now,
            updated_at: None,
            steps: Vec::new(),
            test_results: Vec::new(),
        })
    }

    /// Retrieves a document by its ID with steps and test results loaded.
    pub fn get_document(&self, id: u64) -> Result<Option<Document>> {
        let sql = format!("SELECT {DOCUMENT_COLUMNS} FROM documents WHERE id = ?1");
        let mut stmt = self
            .connection
            .prepare(&sql)
            .map_err(|e| EngineError::database_error("Failed to prepare query", e))?;

        let mut document = stmt
            .query_row(params![id as i64], Self::build_document_from_row)
            .optional()
            .map_err(|e| EngineError::database_error("Failed to query document", e))?;

        if let Some(ref mut document) = document {
            document.steps = self.get_steps(document.id)?;
            document.test_results = self.get_test_results(document.id)?;
        }

        Ok(document)
    }

    /// Updates the lifecycle status of a document, stamping `updated_at`.
    pub fn update_document_status(&mut self, id: u64, status: DocumentStatus) -> Result<()> {
        let now_str = Timestamp::now().to_string();

        let rows = self
            .connection
            .execute(
                UPDATE_DOCUMENT_STATUS_SQL,
                params![status.as_str(), &now_str, id as i64],
            )
            .map_err(|e| EngineError::database_error("Failed to update document status", e))?;

        if rows == 0 {
            return Err(EngineError::DocumentNotFound { id });
        }

        Ok(())
    }

    /// Records whose turn it is on a document. `None` clears the pointer,
    /// used when the document reaches a terminal status.
    pub fn set_current_approver(&mut self, id: u64, approver_id: Option<&str>) -> Result<()> {
        let now_str = Timestamp::now().to_string();

        let rows = self
            .connection
            .execute(
                UPDATE_CURRENT_APPROVER_SQL,
                params![approver_id, &now_str, id as i64],
            )
            .map_err(|e| EngineError::database_error("Failed to update current approver", e))?;

        if rows == 0 {
            return Err(EngineError::DocumentNotFound { id });
        }

        Ok(())
    }

    /// Lists the documents authored by one writer, newest first.
    pub fn documents_by_writer(&self, writer_id: &str) -> Result<Vec<Document>> {
        let sql = format!(
            "SELECT {DOCUMENT_COLUMNS} FROM documents WHERE writer_id = ?1 ORDER BY created_at DESC, id DESC"
        );
        self.query_documents(&sql, params![writer_id])
    }

    /// Lists the pending documents currently waiting on one approver,
    /// oldest first so the queue drains in submission order.
    ///
    /// Timestamps are RFC 3339 text with variable-length fractional
    /// seconds, so the id tiebreaker keeps same-second documents in
    /// insertion order.
    pub fn pending_for_approver(&self, approver_id: &str) -> Result<Vec<Document>> {
        let sql = format!(
            "SELECT {DOCUMENT_COLUMNS} FROM documents WHERE current_approver_id = ?1 AND status = 'pending' ORDER BY created_at ASC, id ASC"
        );
        self.query_documents(&sql, params![approver_id])
    }

    fn query_documents(&self, sql: &str, params: impl rusqlite::Params) -> Result<Vec<Document>> {
        let mut stmt = self
            .connection
            .prepare(sql)
            .map_err(|e| EngineError::database_error("Failed to prepare query", e))?;

        let mut documents: Vec<Document> = stmt
            .query_map(params, Self::build_document_from_row)
            .map_err(|e| EngineError::database_error("Failed to query documents", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| EngineError::database_error("Failed to fetch documents", e))?;

        // Eagerly load steps for each document
        for document in &mut documents {
            document.steps = self.get_steps(document.id)?;
            document.test_results = self.get_test_results(document.id)?;
        }

        Ok(documents)
    }
}
