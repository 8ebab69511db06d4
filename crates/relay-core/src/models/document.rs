//! Document model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{DocumentStatus, Step, TestResult};

/// Represents a document routed through an ordered approval chain.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    /// Unique identifier for the document
    pub id: u64,

    /// Title of the document
    pub title: String,

    /// Identity of the user who submitted the document
    pub writer_id: String,

    /// Display name of the writer, denormalized at submission time
    pub writer_name: String,

    /// Lifecycle status of the document
    pub status: DocumentStatus,

    /// Identity of the approver whose turn it currently is.
    /// None once the document is terminal.
    pub current_approver_id: Option<String>,

    /// Timestamp when the document was submitted (UTC)
    pub created_at: Timestamp,

    /// Timestamp of the last status change (UTC)
    pub updated_at: Option<Timestamp>,

    /// Approval steps, ordered by sequence ascending
    #[serde(default)]
    pub steps: Vec<Step>,

    /// Attached test-result records (opaque to the engine)
    #[serde(default)]
    pub test_results: Vec<TestResult>,
}

impl Document {
    /// The lowest-sequence step still waiting, if any.
    ///
    /// The document invariant ties `current_approver_id` to this step's
    /// approver while the document is pending.
    pub fn current_step(&self) -> Option<&Step> {
        self.steps
            .iter()
            .filter(|s| s.status == super::StepStatus::Waiting)
            .min_by_key(|s| s.sequence)
    }
}
