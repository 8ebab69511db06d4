//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::Document;

/// Wrapper type for displaying the result of a submission.
///
/// Formats a success line with the assigned ID followed by the full
/// document detail, so the writer immediately sees the chain that was
/// created.
pub struct SubmitResult {
    pub document: Document,
}

impl SubmitResult {
    /// Create a new SubmitResult wrapper.
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl fmt::Display for SubmitResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Submitted document with ID: {}", self.document.id)?;
        writeln!(f)?;
        write!(f, "{}", self.document)
    }
}

/// Wrapper type for displaying the result of an approve or reject call.
pub struct DecisionResult {
    pub document: Document,
    action: &'static str,
}

impl DecisionResult {
    /// Result of an approval decision.
    pub fn approved(document: Document) -> Self {
        Self {
            document,
            action: "Approved",
        }
    }

    /// Result of a rejection decision.
    pub fn rejected(document: Document) -> Self {
        Self {
            document,
            action: "Rejected",
        }
    }
}

impl fmt::Display for DecisionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} step on document {}", self.action, self.document.id)?;
        writeln!(f)?;
        write!(f, "{}", self.document)
    }
}
