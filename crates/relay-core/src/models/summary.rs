//! Document summary types for list views.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Document, DocumentStatus, StepStatus};

/// Summary information about a document with chain progress statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentSummary {
    /// Document ID
    pub id: u64,
    /// Title of the document
    pub title: String,
    /// Display name of the writer
    pub writer_name: String,
    /// Document status
    pub status: DocumentStatus,
    /// Identity whose action is expected next, if any
    pub current_approver_id: Option<String>,
    /// Submission timestamp
    pub created_at: Timestamp,
    /// Total number of steps in the chain
    pub total_steps: u32,
    /// Number of approved steps
    pub approved_steps: u32,
    /// Number of steps still waiting
    pub waiting_steps: u32,
}

impl From<&Document> for DocumentSummary {
    fn from(doc: &Document) -> Self {
        let total_steps = doc.steps.len() as u32;
        let approved_steps = doc
            .steps
            .iter()
            .filter(|step| step.status == StepStatus::Approved)
            .count() as u32;
        let waiting_steps = doc
            .steps
            .iter()
            .filter(|step| step.status == StepStatus::Waiting)
            .count() as u32;

        Self {
            id: doc.id,
            title: doc.title.clone(),
            writer_name: doc.writer_name.clone(),
            status: doc.status,
            current_approver_id: doc.current_approver_id.clone(),
            created_at: doc.created_at,
            total_steps,
            approved_steps,
            waiting_steps,
        }
    }
}
