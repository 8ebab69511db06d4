//! Test-result attachment operations.
//!
//! Test results are opaque to the workflow engine. They are written once
//! at submission and only ever read back for display.

use jiff::Timestamp;
use rusqlite::{params, types::Type};

use crate::{
    error::{DatabaseResultExt, EngineError, Result},
    models::{NewTestResult, TestResult},
};

const INSERT_TEST_RESULT_SQL: &str = "INSERT INTO test_results (document_id, project, version, tested_at, case_name, passed, failure_reason, details) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";
const SELECT_TEST_RESULTS_SQL: &str = "SELECT id, document_id, project, version, tested_at, case_name, passed, failure_reason, details FROM test_results WHERE document_id = ?1 ORDER BY id";

impl super::Database {
    fn build_test_result_from_row(row: &rusqlite::Row) -> rusqlite::Result<TestResult> {
        Ok(TestResult {
            id: row.get::<_, i64>(0)? as u64,
            document_id: row.get::<_, i64>(1)? as u64,
            project: row.get(2)?,
            version: row.get(3)?,
            tested_at: row.get::<_, String>(4)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e))
            })?,
            case_name: row.get(5)?,
            passed: row.get(6)?,
            failure_reason: row.get(7)?,
            details: row.get(8)?,
        })
    }

    /// Attaches one test-result record to a document.
    pub fn add_test_result(&mut self, request: &NewTestResult) -> Result<TestResult> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(
            INSERT_TEST_RESULT_SQL,
            params![
                request.document_id as i64,
                &request.project,
                &request.version,
                request.tested_at.to_string(),
                &request.case_name,
                request.passed,
                request.failure_reason.as_deref(),
                request.details.as_deref(),
            ],
        )
        .map_err(|e| EngineError::database_error("Failed to insert test result", e))?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(TestResult {
            id,
            document_id: request.document_id,
            project: request.project.clone(),
            version: request.version.clone(),
            tested_at: request.tested_at,
            case_name: request.case_name.clone(),
            passed: request.passed,
            failure_reason: request.failure_reason.clone(),
            details: request.details.clone(),
        })
    }

    /// Retrieves the test results attached to a document.
    pub fn get_test_results(&self, document_id: u64) -> Result<Vec<TestResult>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_TEST_RESULTS_SQL)
            .map_err(|e| EngineError::database_error("Failed to prepare query", e))?;

        let results = stmt
            .query_map(
                params![document_id as i64],
                Self::build_test_result_from_row,
            )
            .map_err(|e| EngineError::database_error("Failed to query test results", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| EngineError::database_error("Failed to fetch test results", e))?;

        Ok(results)
    }
}
