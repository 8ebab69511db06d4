//! Approval step model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::StepStatus;

/// One approver's position and outcome within a document's chain.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Step {
    /// Unique identifier for the step
    pub id: u64,

    /// ID of the owning document
    pub document_id: u64,

    /// Identity of the approver for this step
    pub approver_id: String,

    /// Display name of the approver, denormalized at submission time so the
    /// audit trail survives later directory changes
    pub approver_name: String,

    /// Position in the chain (1-based, contiguous per document)
    pub sequence: u32,

    /// Current status of the step
    pub status: StepStatus,

    /// Timestamp when the approver acted (UTC)
    pub acted_at: Option<Timestamp>,

    /// Free-text comment recorded when the approver acted
    pub comment: Option<String>,
}
