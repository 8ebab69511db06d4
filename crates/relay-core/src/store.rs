//! Persistence seam for documents, steps, and test results.
//!
//! The engine only ever talks to a [`DocumentStore`]. The shipped
//! implementation, [`SqliteStore`], opens a fresh [`Database`] per call on
//! a blocking thread so the async engine never holds a SQLite connection
//! across an await point.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::task;

use crate::{
    db::Database,
    error::{EngineError, Result},
    models::{Document, DocumentStatus, NewDocument, NewStep, NewTestResult, Step, StepStatus, TestResult},
};

/// Storage contract for the approval workflow.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Persists a new document row and returns it with its assigned ID.
    async fn create_document(&self, request: NewDocument) -> Result<Document>;

    /// Retrieves a document with its steps and test results.
    async fn get_document(&self, id: u64) -> Result<Option<Document>>;

    /// Updates a document's lifecycle status.
    async fn update_document_status(&self, id: u64, status: DocumentStatus) -> Result<()>;

    /// Records whose turn it is, or clears the pointer with `None`.
    async fn set_current_approver(&self, id: u64, approver_id: Option<String>) -> Result<()>;

    /// Lists the documents authored by one writer, newest first.
    async fn documents_by_writer(&self, writer_id: String) -> Result<Vec<Document>>;

    /// Lists the pending documents waiting on one approver, oldest first.
    async fn pending_for_approver(&self, approver_id: String) -> Result<Vec<Document>>;

    /// Appends one approval step to a document.
    async fn add_step(&self, request: NewStep) -> Result<Step>;

    /// Transitions a waiting step to a processed status. Returns false
    /// when another caller already processed the step.
    async fn complete_step(
        &self,
        step_id: u64,
        status: StepStatus,
        comment: Option<String>,
    ) -> Result<bool>;

    /// Attaches one test-result record to a document.
    async fn add_test_result(&self, request: NewTestResult) -> Result<TestResult>;

    /// Retrieves the test results attached to a document.
    async fn test_results(&self, document_id: u64) -> Result<Vec<TestResult>>;
}

/// SQLite-backed document store.
pub struct SqliteStore {
    db_path: PathBuf,
}

impl SqliteStore {
    /// Creates a store over an already initialized database file.
    pub fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }
}

fn join_error(e: task::JoinError) -> EngineError {
    EngineError::Configuration {
        message: format!("Task join error: {e}"),
    }
}

#[async_trait]
impl DocumentStore for SqliteStore {
    async fn create_document(&self, request: NewDocument) -> Result<Document> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.create_document(&request)
        })
        .await
        .map_err(join_error)?
    }

    async fn get_document(&self, id: u64) -> Result<Option<Document>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_document(id)
        })
        .await
        .map_err(join_error)?
    }

    async fn update_document_status(&self, id: u64, status: DocumentStatus) -> Result<()> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.update_document_status(id, status)
        })
        .await
        .map_err(join_error)?
    }

    async fn set_current_approver(&self, id: u64, approver_id: Option<String>) -> Result<()> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.set_current_approver(id, approver_id.as_deref())
        })
        .await
        .map_err(join_error)?
    }

    async fn documents_by_writer(&self, writer_id: String) -> Result<Vec<Document>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.documents_by_writer(&writer_id)
        })
        .await
        .map_err(join_error)?
    }

    async fn pending_for_approver(&self, approver_id: String) -> Result<Vec<Document>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.pending_for_approver(&approver_id)
        })
        .await
        .map_err(join_error)?
    }

    async fn add_step(&self, request: NewStep) -> Result<Step> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.add_step(&request)
        })
        .await
        .map_err(join_error)?
    }

    async fn complete_step(
        &self,
        step_id: u64,
        status: StepStatus,
        comment: Option<String>,
    ) -> Result<bool> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.complete_step(step_id, status, comment.as_deref())
        })
        .await
        .map_err(join_error)?
    }

    async fn add_test_result(&self, request: NewTestResult) -> Result<TestResult> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.add_test_result(&request)
        })
        .await
        .map_err(join_error)?
    }

    async fn test_results(&self, document_id: u64) -> Result<Vec<TestResult>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_test_results(document_id)
        })
        .await
        .map_err(join_error)?
    }
}
