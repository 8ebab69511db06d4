//! Display implementations for domain models.
//!
//! Separated from the model definitions to keep presentation out of the
//! data layer. All output is markdown for rich terminal rendering, with
//! status icons on approval steps.

use std::fmt;

use super::datetime::{LocalDateTime, OptionalDateTime};
use crate::models::{Document, DocumentStatus, DocumentSummary, Step, StepStatus, TestResult};

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.title)?;
        writeln!(f)?;

        // Metadata section
        writeln!(f, "- Status: {}", self.status.as_str())?;
        writeln!(f, "- Writer: {}", self.writer_name)?;
        if let Some(approver) = &self.current_approver_id {
            writeln!(f, "- Waiting on: {approver}")?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", OptionalDateTime(&self.updated_at))?;

        if !self.steps.is_empty() {
            writeln!(f, "\n## Approval chain")?;
            writeln!(f)?;
            for step in &self.steps {
                write!(f, "{}", step)?;
            }
        } else {
            writeln!(f, "\nNo approval steps on this document.")?;
        }

        if !self.test_results.is_empty() {
            writeln!(f, "\n## Test results")?;
            writeln!(f)?;
            for result in &self.test_results {
                write!(f, "{}", result)?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {}. {} ({})",
            self.sequence,
            self.approver_name,
            self.status.with_icon()
        )?;
        writeln!(f)?;

        if let Some(acted_at) = &self.acted_at {
            writeln!(f, "- Acted: {}", LocalDateTime(acted_at))?;
        }

        if let Some(comment) = &self.comment {
            writeln!(f, "- Comment: {comment}")?;
        }

        if self.acted_at.is_some() || self.comment.is_some() {
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.passed { "passed" } else { "failed" };
        writeln!(
            f,
            "- {} {} / {} ({verdict}, {})",
            self.project,
            self.version,
            self.case_name,
            LocalDateTime(&self.tested_at)
        )?;

        if let Some(reason) = &self.failure_reason {
            writeln!(f, "  - Reason: {reason}")?;
        }
        if let Some(details) = &self.details {
            writeln!(f, "  - Details: {details}")?;
        }

        Ok(())
    }
}

impl fmt::Display for DocumentSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let progress = if self.total_steps > 0 {
            format!(" ({}/{})", self.approved_steps, self.total_steps)
        } else {
            String::new()
        };

        writeln!(f, "## {} (ID: {}){progress}", self.title, self.id)?;
        writeln!(f)?;

        writeln!(f, "- **Status**: {}", self.status.as_str())?;
        writeln!(f, "- **Writer**: {}", self.writer_name)?;

        if let Some(approver) = &self.current_approver_id {
            writeln!(f, "- **Waiting on**: {approver}")?;
        }

        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)?; // Add blank line after each document

        Ok(())
    }
}
