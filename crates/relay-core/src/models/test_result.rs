//! Test-result attachment model.
//!
//! Test results ride along with a document. The engine persists and returns
//! them verbatim; it never interprets their contents.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// An opaque test-result record attached to a document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TestResult {
    /// Unique identifier for the record
    pub id: u64,

    /// ID of the owning document
    pub document_id: u64,

    /// Project the test run belongs to
    pub project: String,

    /// Version under test
    pub version: String,

    /// When the test was executed (UTC)
    pub tested_at: Timestamp,

    /// Name of the test case
    pub case_name: String,

    /// Whether the test passed
    pub passed: bool,

    /// Failure reason, when the test did not pass
    pub failure_reason: Option<String>,

    /// Free-form details
    pub details: Option<String>,
}
