//! Status enumerations for documents and approval steps.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of document lifecycle statuses.
///
/// `TempSaved` is a pre-submission draft state produced by external save
/// paths; `Canceled` exists for the same reason. Neither is produced by the
/// engine's own transitions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    /// Draft saved but not yet submitted for approval
    TempSaved,

    /// Submitted and waiting on the approval chain
    Pending,

    /// Every step in the chain approved (terminal)
    Approved,

    /// Rejected by an approver (terminal)
    Rejected,

    /// Withdrawn outside the approval flow
    Canceled,
}

impl FromStr for DocumentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tempsaved" | "temp_saved" => Ok(DocumentStatus::TempSaved),
            "pending" => Ok(DocumentStatus::Pending),
            "approved" => Ok(DocumentStatus::Approved),
            "rejected" => Ok(DocumentStatus::Rejected),
            "canceled" => Ok(DocumentStatus::Canceled),
            _ => Err(format!("Invalid document status: {s}")),
        }
    }
}

impl DocumentStatus {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentStatus::TempSaved => "tempsaved",
            DocumentStatus::Pending => "pending",
            DocumentStatus::Approved => "approved",
            DocumentStatus::Rejected => "rejected",
            DocumentStatus::Canceled => "canceled",
        }
    }

    /// Whether no further transition is permitted from this status.
    pub fn is_terminal(&self) -> bool {
        matches!(self, DocumentStatus::Approved | DocumentStatus::Rejected)
    }
}

/// Type-safe enumeration of approval step statuses.
///
/// Approved and Rejected steps are immutable; the only legal transition is
/// out of Waiting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    /// Step has not been acted on yet
    Waiting,

    /// Approver signed off on this step
    Approved,

    /// Approver rejected at this step
    Rejected,
}

impl FromStr for StepStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "waiting" => Ok(StepStatus::Waiting),
            "approved" => Ok(StepStatus::Approved),
            "rejected" => Ok(StepStatus::Rejected),
            _ => Err(format!("Invalid step status: {s}")),
        }
    }
}

impl StepStatus {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            StepStatus::Waiting => "waiting",
            StepStatus::Approved => "approved",
            StepStatus::Rejected => "rejected",
        }
    }

    /// Get status with consistent icon formatting for display.
    pub fn with_icon(&self) -> &'static str {
        match self {
            StepStatus::Approved => "✓ Approved",
            StepStatus::Rejected => "✗ Rejected",
            StepStatus::Waiting => "○ Waiting",
        }
    }
}
