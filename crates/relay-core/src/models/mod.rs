//! Data models for documents, approval steps, and their attachments.
//!
//! This module contains the core domain models of the relay approval
//! workflow. Display implementations live in [`crate::display::models`] to
//! keep data structures separate from presentation logic.

pub mod document;
pub mod requests;
pub mod status;
pub mod step;
pub mod summary;
pub mod test_result;
pub mod user;


// Re-export all public types at the models level
pub use document::Document;
pub use requests::{NewDocument, NewStep, NewTestResult};
pub use status::{DocumentStatus, StepStatus};
pub use step::Step;
pub use summary::DocumentSummary;
pub use test_result::TestResult;
pub use user::{User, UserRole};
