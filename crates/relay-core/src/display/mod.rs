//! Display formatting functions and result types.
//!
//! This module provides wrapper types for formatting collections and
//! operation results, enabling consistent markdown output across different
//! contexts (document detail, inbox listings, operation feedback).
//!
//! Display implementations live on the domain models themselves; the
//! wrappers here add collection handling (including the empty case) and
//! operation result framing on top.
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (DocumentSummaries, Steps)
//! - [`results`]: Operation result types (SubmitResult, DecisionResult)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`datetime`]: Date/time formatting utilities
//! - [`models`]: Display implementations for domain models

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

// Re-export commonly used types for convenience
pub use collections::{DocumentSummaries, Steps};
pub use datetime::{LocalDateTime, OptionalDateTime};
pub use results::{DecisionResult, SubmitResult};
pub use status::OperationStatus;
