//! Row-level insert types consumed by the document store.

use jiff::Timestamp;

use super::{DocumentStatus, StepStatus};
use crate::params::TestResultPayload;

/// Fields for creating a document row. The store assigns the id.
#[derive(Debug, Clone)]
pub struct NewDocument {
    pub title: String,
    pub writer_id: String,
    pub writer_name: String,
    pub status: DocumentStatus,
    pub current_approver_id: Option<String>,
}

/// Fields for appending one approval step to a document.
///
/// New steps always start Waiting; status is not a caller choice.
#[derive(Debug, Clone)]
pub struct NewStep {
    pub document_id: u64,
    pub approver_id: String,
    pub approver_name: String,
    pub sequence: u32,
}

impl NewStep {
    /// Status every freshly inserted step carries.
    pub fn initial_status() -> StepStatus {
        StepStatus::Waiting
    }
}

/// Fields for attaching one test-result record to a document.
#[derive(Debug, Clone)]
pub struct NewTestResult {
    pub document_id: u64,
    pub project: String,
    pub version: String,
    pub tested_at: Timestamp,
    pub case_name: String,
    pub passed: bool,
    pub failure_reason: Option<String>,
    pub details: Option<String>,
}

impl NewTestResult {
    /// Stamp an opaque submission payload with its owning document id.
    pub fn from_payload(document_id: u64, payload: &TestResultPayload) -> Self {
        Self {
            document_id,
            project: payload.project.clone(),
            version: payload.version.clone(),
            tested_at: payload.tested_at,
            case_name: payload.case_name.clone(),
            passed: payload.passed,
            failure_reason: payload.failure_reason.clone(),
            details: payload.details.clone(),
        }
    }
}
