//! Approval step operations and queries.

use jiff::Timestamp;
use rusqlite::{params, types::Type};

use crate::{
    error::{DatabaseResultExt, EngineError, Result},
    models::{NewStep, Step, StepStatus},
};

// Optimized SQL queries as const strings for compile-time optimization
const CHECK_DOCUMENT_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM documents WHERE id = ?1)";
const INSERT_STEP_SQL: &str = "INSERT INTO steps (document_id, approver_id, approver_name, sequence, status) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_STEPS_BY_DOCUMENT_SQL: &str = "SELECT id, document_id, approver_id, approver_name, sequence, status, acted_at, comment FROM steps WHERE document_id = ?1 ORDER BY sequence";
const COMPLETE_STEP_CLAIMED_SQL: &str =
    "UPDATE steps SET status = ?1, acted_at = ?2, comment = ?3 WHERE id = ?4 AND status = 'waiting'";

impl super::Database {
    /// Helper function to construct a Step from a database row
    fn build_step_from_row(row: &rusqlite::Row) -> rusqlite::Result<Step> {
        let status_str: String = row.get(5)?;
        let status = status_str.parse::<StepStatus>().map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                5,
                Type::Text,
                format!("Invalid step status: {status_str}").into(),
            )
        })?;

        Ok(Step {
            id: row.get::<_, i64>(0)? as u64,
            document_id: row.get::<_, i64>(1)? as u64,
            approver_id: row.get(2)?,
            approver_name: row.get(3)?,
            sequence: row.get::<_, i64>(4)? as u32,
            status,
            acted_at: row
                .get::<_, Option<String>>(6)?
                .map(|s| s.parse::<Timestamp>())
                .transpose()
                .map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(6, Type::Text, Box::new(e))
                })?,
            comment: row.get(7)?,
        })
    }

    /// Appends one approval step to an existing document.
    pub fn add_step(&mut self, request: &NewStep) -> Result<Step> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let document_exists: bool = tx
            .query_row(
                CHECK_DOCUMENT_EXISTS_SQL,
                params![request.document_id as i64],
                |row| row.get(0),
            )
            .map_err(|e| EngineError::database_error("Failed to check document existence", e))?;

        if !document_exists {
            return Err(EngineError::DocumentNotFound {
                id: request.document_id,
            });
        }

        let status = NewStep::initial_status();

        tx.execute(
            INSERT_STEP_SQL,
            params![
                request.document_id as i64,
                &request.approver_id,
                &request.approver_name,
                request.sequence as i64,
                status.as_str(),
            ],
        )
        .map_err(|e| EngineError::database_error("Failed to insert step", e))?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Step {
            id,
            document_id: request.document_id,
            approver_id: request.approver_id.clone(),
            approver_name: request.approver_name.clone(),
            sequence: request.sequence,
            status,
            acted_at: None,
            comment: None,
        })
    }

    /// Retrieves all steps for a document, ordered by sequence.
    pub fn get_steps(&self, document_id: u64) -> Result<Vec<Step>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_STEPS_BY_DOCUMENT_SQL)
            .map_err(|e| EngineError::database_error("Failed to prepare query", e))?;

        let steps = stmt
            .query_map(params![document_id as i64], Self::build_step_from_row)
            .map_err(|e| EngineError::database_error("Failed to query steps", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| EngineError::database_error("Failed to fetch steps", e))?;

        Ok(steps)
    }

    /// Moves a waiting step to a processed status, recording the action
    /// time and optional comment.
    ///
    /// The update only matches rows still in the waiting status, so a
    /// concurrent caller that already processed the step makes this a
    /// no-op. Returns whether this caller won the transition.
    pub fn complete_step(
        &mut self,
        step_id: u64,
        status: StepStatus,
        comment: Option<&str>,
    ) -> Result<bool> {
        let now_str = Timestamp::now().to_string();

        let rows = self
            .connection
            .execute(
                COMPLETE_STEP_CLAIMED_SQL,
                params![status.as_str(), &now_str, comment, step_id as i64],
            )
            .map_err(|e| EngineError::database_error("Failed to complete step", e))?;

        Ok(rows > 0)
    }
}
