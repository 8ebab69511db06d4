//! Core library for the Relay approval workflow application.
//!
//! This crate provides the business logic for routing documents through
//! ordered approval chains, including database operations, data models,
//! pluggable collaborator seams, and error handling.
//!
//! # Architecture
//!
//! The [`Engine`] coordinates three seams:
//!
//! - [`store::DocumentStore`]: persistence for documents, steps, and test
//!   results (shipped: [`store::SqliteStore`])
//! - [`directory::UserDirectory`]: resolves account identities to display
//!   names (shipped: [`directory::StaticDirectory`])
//! - [`notify::Notifier`]: tells the next actor it is their turn
//!   (shipped: [`notify::LogNotifier`])
//!
//! Domain models implement [`std::fmt::Display`] directly, with wrapper
//! types in [`display`] for collections and operation results. This keeps
//! the same data formattable differently depending on context while
//! staying consistent across all output.
//!
//! # Quick Start
//!
//! ```rust
//! use relay_core::{EngineBuilder, params::SubmitDocument};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create an engine instance
//! let engine = EngineBuilder::new()
//!     .with_database_path(Some("relay.db"))
//!     .build()
//!     .await?;
//!
//! // Submit a document into a two-step approval chain
//! let params = SubmitDocument {
//!     title: "Release 1.2".to_string(),
//!     writer_id: "hkim".to_string(),
//!     writer_name: "Hana Kim".to_string(),
//!     approvers: vec!["jlee".to_string(), "mpark".to_string()],
//!     test_results: vec![],
//! };
//!
//! let id = engine.submit(&params).await?;
//! println!("Submitted document {id}");
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod directory;
pub mod display;
pub mod engine;
pub mod error;
pub mod models;
pub mod notify;
pub mod params;
pub mod store;

// Re-export commonly used types
pub use db::Database;
pub use directory::{StaticDirectory, UserDirectory};
pub use display::{
    DecisionResult, DocumentSummaries, LocalDateTime, OperationStatus, Steps, SubmitResult,
};
pub use engine::{Engine, EngineBuilder};
pub use error::{EngineError, Result};
pub use models::{
    Document, DocumentStatus, DocumentSummary, NewDocument, NewStep, NewTestResult, Step,
    StepStatus, TestResult, User, UserRole,
};
pub use notify::{LogNotifier, Notifier};
pub use params::{Decision, Drafts, Id, Inbox, SubmitDocument, TestResultPayload};
pub use store::{DocumentStore, SqliteStore};
