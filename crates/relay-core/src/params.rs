//! Parameter structures for relay operations.
//!
//! Shared parameter structures used across interfaces (CLI and any future
//! front end) without framework-specific derives. Interface layers wrap
//! these with their own derives and convert via `From`/`Into`.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Generic parameters for operations requiring just a document ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the document to operate on
    pub id: u64,
}

/// Parameters for submitting a document into an approval chain.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmitDocument {
    /// Title of the document (required)
    pub title: String,
    /// Identity of the submitting writer
    pub writer_id: String,
    /// Display name of the submitting writer
    pub writer_name: String,
    /// Ordered approver identities; order fixes the chain. Duplicates are
    /// accepted, an empty list is not.
    pub approvers: Vec<String>,
    /// Opaque test-result payloads to attach to the document
    #[serde(default)]
    pub test_results: Vec<TestResultPayload>,
}

/// An attached test-result payload, persisted as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestResultPayload {
    pub project: String,
    pub version: String,
    pub tested_at: Timestamp,
    pub case_name: String,
    pub passed: bool,
    #[serde(default)]
    pub failure_reason: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
}

/// Parameters for an approve or reject call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Decision {
    /// ID of the document being acted on
    pub document_id: u64,
    /// Identity of the acting approver
    pub approver_id: String,
    /// Optional free-text comment recorded on the step
    pub comment: Option<String>,
}

/// Parameters for listing the documents waiting on one approver.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inbox {
    /// Identity whose pending queue to fetch
    pub approver_id: String,
}

/// Parameters for listing the documents a writer has authored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Drafts {
    /// Writer identity whose documents to fetch
    pub writer_id: String,
}

impl SubmitDocument {
    /// Validate submission parameters.
    ///
    /// An empty chain would leave the document pending forever with nobody
    /// able to act, so it is rejected up front.
    pub fn validate(&self) -> crate::Result<()> {
        if self.title.trim().is_empty() {
            return Err(crate::EngineError::invalid_input(
                "title",
                "Document title must not be empty",
            ));
        }
        if self.approvers.is_empty() {
            return Err(crate::EngineError::invalid_input(
                "approvers",
                "At least one approver is required to submit a document",
            ));
        }
        Ok(())
    }
}
