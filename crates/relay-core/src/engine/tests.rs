//! Tests for the engine module.

use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use tempfile::TempDir;

use super::*;
use crate::{
    directory::StaticDirectory,
    error::EngineError,
    models::{DocumentStatus, StepStatus},
    notify::Notifier,
    params::{Decision, Drafts, Id, Inbox, SubmitDocument, TestResultPayload},
    store::SqliteStore,
};

/// Notifier that records every message for later assertions.
#[derive(Default)]
struct RecordingNotifier {
    sent: Mutex<Vec<(String, String)>>,
}

impl RecordingNotifier {
    fn sent(&self) -> Vec<(String, String)> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, recipient: &str, message: &str) -> Result<(), String> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((recipient.to_string(), message.to_string()));
        Ok(())
    }
}

/// Notifier whose delivery always fails.
struct FailingNotifier;

#[async_trait]
impl Notifier for FailingNotifier {
    async fn send(&self, _recipient: &str, _message: &str) -> Result<(), String> {
        Err("delivery channel unavailable".to_string())
    }
}

type TestEngine = Engine<SqliteStore, StaticDirectory, RecordingNotifier>;

/// Helper function to create a test engine over a temp database
async fn create_test_engine() -> (TempDir, TestEngine, Arc<RecordingNotifier>) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");

    // Initialize the schema through the builder, then rebuild with the
    // recording notifier
    EngineBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to initialize database");

    let notifier = Arc::new(RecordingNotifier::default());
    let engine = Engine::new(
        Arc::new(SqliteStore::new(db_path)),
        Arc::new(StaticDirectory::with_sample_users()),
        notifier.clone(),
    );
    (temp_dir, engine, notifier)
}

fn submit_params(approvers: &[&str]) -> SubmitDocument {
    SubmitDocument {
        title: "Release 1.2".to_string(),
        writer_id: "hkim".to_string(),
        writer_name: "Hana Kim".to_string(),
        approvers: approvers.iter().map(|a| a.to_string()).collect(),
        test_results: Vec::new(),
    }
}

fn decision(document_id: u64, approver: &str) -> Decision {
    Decision {
        document_id,
        approver_id: approver.to_string(),
        comment: None,
    }
}

#[tokio::test]
async fn test_submit_creates_pending_chain() {
    let (_temp_dir, engine, notifier) = create_test_engine().await;

    let id = engine
        .submit(&submit_params(&["jlee", "mpark"]))
        .await
        .expect("Failed to submit document");

    let document = engine.detail(&Id { id }).await.expect("Failed to fetch");
    assert_eq!(document.status, DocumentStatus::Pending);
    assert_eq!(document.current_approver_id.as_deref(), Some("jlee"));
    assert_eq!(document.steps.len(), 2);
    assert_eq!(document.steps[0].sequence, 1);
    assert_eq!(document.steps[0].status, StepStatus::Waiting);
    assert_eq!(document.steps[1].sequence, 2);

    // Names resolved through the directory
    assert_eq!(document.steps[0].approver_name, "Jun Lee");
    assert_eq!(document.steps[1].approver_name, "Min Park");

    let sent = notifier.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, "jlee");
    assert!(sent[0].1.contains("[Approval request] Release 1.2"));
    assert!(sent[0].1.contains("Hana Kim"));
}

#[tokio::test]
async fn test_submit_unknown_approver_keeps_account_as_name() {
    let (_temp_dir, engine, _notifier) = create_test_engine().await;

    let id = engine
        .submit(&submit_params(&["contractor9"]))
        .await
        .expect("Failed to submit document");

    let document = engine.detail(&Id { id }).await.expect("Failed to fetch");
    assert_eq!(document.steps[0].approver_name, "contractor9");
}

#[tokio::test]
async fn test_submit_rejects_empty_chain() {
    let (_temp_dir, engine, _notifier) = create_test_engine().await;

    let result = engine.submit(&submit_params(&[])).await;
    assert!(matches!(
        result.unwrap_err(),
        EngineError::InvalidInput { .. }
    ));
}

#[tokio::test]
async fn test_submit_persists_test_results() {
    let (_temp_dir, engine, _notifier) = create_test_engine().await;

    let mut params = submit_params(&["jlee"]);
    params.test_results = vec![TestResultPayload {
        project: "relay".to_string(),
        version: "1.2.0".to_string(),
        tested_at: jiff::Timestamp::now(),
        case_name: "smoke".to_string(),
        passed: true,
        failure_reason: None,
        details: Some("42 cases".to_string()),
    }];

    let id = engine.submit(&params).await.expect("Failed to submit");

    let document = engine.detail(&Id { id }).await.expect("Failed to fetch");
    assert_eq!(document.test_results.len(), 1);
    assert_eq!(document.test_results[0].case_name, "smoke");
    assert!(document.test_results[0].passed);
}

#[tokio::test]
async fn test_approve_advances_to_next_step() {
    let (_temp_dir, engine, notifier) = create_test_engine().await;

    let id = engine
        .submit(&submit_params(&["jlee", "mpark"]))
        .await
        .expect("Failed to submit");

    engine
        .approve(&decision(id, "jlee"))
        .await
        .expect("Failed to approve");

    let document = engine.detail(&Id { id }).await.expect("Failed to fetch");
    assert_eq!(document.status, DocumentStatus::Pending);
    assert_eq!(document.current_approver_id.as_deref(), Some("mpark"));
    assert_eq!(document.steps[0].status, StepStatus::Approved);
    assert!(document.steps[0].acted_at.is_some());
    assert_eq!(document.steps[1].status, StepStatus::Waiting);

    let sent = notifier.sent();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[1].0, "mpark");
    assert!(sent[1].1.contains("previous step approved"));
}

#[tokio::test]
async fn test_approve_last_step_finalizes() {
    let (_temp_dir, engine, notifier) = create_test_engine().await;

    let id = engine
        .submit(&submit_params(&["jlee"]))
        .await
        .expect("Failed to submit");

    engine
        .approve(&decision(id, "jlee"))
        .await
        .expect("Failed to approve");

    let document = engine.detail(&Id { id }).await.expect("Failed to fetch");
    assert_eq!(document.status, DocumentStatus::Approved);
    assert_eq!(document.current_approver_id, None);
    assert!(document.updated_at.is_some());

    let sent = notifier.sent();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[1].0, "hkim");
    assert!(sent[1].1.contains("[Approved] Release 1.2"));
}

#[tokio::test]
async fn test_approve_out_of_turn() {
    let (_temp_dir, engine, _notifier) = create_test_engine().await;

    let id = engine
        .submit(&submit_params(&["jlee", "mpark"]))
        .await
        .expect("Failed to submit");

    // Second approver tries to act before the first
    let result = engine.approve(&decision(id, "mpark")).await;
    match result.unwrap_err() {
        EngineError::InvalidTurn { document, approver } => {
            assert_eq!(document, id);
            assert_eq!(approver, "mpark");
        }
        other => panic!("Expected InvalidTurn error, got {other:?}"),
    }

    // Nothing moved
    let document = engine.detail(&Id { id }).await.expect("Failed to fetch");
    assert_eq!(document.current_approver_id.as_deref(), Some("jlee"));
    assert_eq!(document.steps[1].status, StepStatus::Waiting);
}

#[tokio::test]
async fn test_approve_by_non_participant() {
    let (_temp_dir, engine, _notifier) = create_test_engine().await;

    let id = engine
        .submit(&submit_params(&["jlee"]))
        .await
        .expect("Failed to submit");

    let result = engine.approve(&decision(id, "schoi")).await;
    assert!(matches!(
        result.unwrap_err(),
        EngineError::InvalidTurn { .. }
    ));
}

#[tokio::test]
async fn test_approve_twice_is_out_of_turn() {
    let (_temp_dir, engine, _notifier) = create_test_engine().await;

    let id = engine
        .submit(&submit_params(&["jlee", "mpark"]))
        .await
        .expect("Failed to submit");

    engine
        .approve(&decision(id, "jlee"))
        .await
        .expect("Failed to approve");

    let result = engine.approve(&decision(id, "jlee")).await;
    assert!(matches!(
        result.unwrap_err(),
        EngineError::InvalidTurn { .. }
    ));
}

#[tokio::test]
async fn test_approve_missing_document() {
    let (_temp_dir, engine, _notifier) = create_test_engine().await;

    let result = engine.approve(&decision(999, "jlee")).await;
    assert!(matches!(
        result.unwrap_err(),
        EngineError::DocumentNotFound { id: 999 }
    ));
}

#[tokio::test]
async fn test_reject_is_terminal() {
    let (_temp_dir, engine, notifier) = create_test_engine().await;

    let id = engine
        .submit(&submit_params(&["jlee", "mpark"]))
        .await
        .expect("Failed to submit");

    let params = Decision {
        document_id: id,
        approver_id: "jlee".to_string(),
        comment: Some("numbers do not add up".to_string()),
    };
    engine.reject(&params).await.expect("Failed to reject");

    let document = engine.detail(&Id { id }).await.expect("Failed to fetch");
    assert_eq!(document.status, DocumentStatus::Rejected);
    assert_eq!(document.current_approver_id, None);
    assert_eq!(document.steps[0].status, StepStatus::Rejected);
    assert_eq!(
        document.steps[0].comment.as_deref(),
        Some("numbers do not add up")
    );
    // Later steps keep their waiting record
    assert_eq!(document.steps[1].status, StepStatus::Waiting);

    let sent = notifier.sent();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[1].0, "hkim");
    assert!(sent[1].1.contains("[Rejected] Release 1.2"));
    assert!(sent[1].1.contains("numbers do not add up"));
}

#[tokio::test]
async fn test_reject_out_of_turn() {
    let (_temp_dir, engine, _notifier) = create_test_engine().await;

    let id = engine
        .submit(&submit_params(&["jlee", "mpark"]))
        .await
        .expect("Failed to submit");

    let result = engine.reject(&decision(id, "mpark")).await;
    assert!(matches!(
        result.unwrap_err(),
        EngineError::InvalidTurn { .. }
    ));
}

#[tokio::test]
async fn test_decide_on_finalized_document() {
    let (_temp_dir, engine, _notifier) = create_test_engine().await;

    let id = engine
        .submit(&submit_params(&["jlee"]))
        .await
        .expect("Failed to submit");
    engine
        .reject(&decision(id, "jlee"))
        .await
        .expect("Failed to reject");

    let result = engine.approve(&decision(id, "jlee")).await;
    match result.unwrap_err() {
        EngineError::AlreadyFinalized { status, .. } => {
            assert_eq!(status, DocumentStatus::Rejected);
        }
        other => panic!("Expected AlreadyFinalized error, got {other:?}"),
    }

    let result = engine.reject(&decision(id, "jlee")).await;
    assert!(matches!(
        result.unwrap_err(),
        EngineError::AlreadyFinalized { .. }
    ));
}

#[tokio::test]
async fn test_detail_missing_document() {
    let (_temp_dir, engine, _notifier) = create_test_engine().await;

    let result = engine.detail(&Id { id: 7 }).await;
    assert!(matches!(
        result.unwrap_err(),
        EngineError::DocumentNotFound { id: 7 }
    ));
}

#[tokio::test]
async fn test_inbox_tracks_current_turn() {
    let (_temp_dir, engine, _notifier) = create_test_engine().await;

    let first = engine
        .submit(&submit_params(&["jlee", "mpark"]))
        .await
        .expect("Failed to submit");
    let second = engine
        .submit(&submit_params(&["jlee"]))
        .await
        .expect("Failed to submit");

    let inbox = engine
        .inbox(&Inbox {
            approver_id: "jlee".to_string(),
        })
        .await
        .expect("Failed to fetch inbox");
    let ids: Vec<u64> = inbox.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![first, second]);

    // Approving moves the first document out of jlee's queue and into mpark's
    engine
        .approve(&decision(first, "jlee"))
        .await
        .expect("Failed to approve");

    let inbox = engine
        .inbox(&Inbox {
            approver_id: "jlee".to_string(),
        })
        .await
        .expect("Failed to fetch inbox");
    assert_eq!(inbox.len(), 1);
    assert_eq!(inbox[0].id, second);

    let inbox = engine
        .inbox(&Inbox {
            approver_id: "mpark".to_string(),
        })
        .await
        .expect("Failed to fetch inbox");
    assert_eq!(inbox.len(), 1);
    assert_eq!(inbox[0].id, first);
}

#[tokio::test]
async fn test_drafts_lists_writer_documents() {
    let (_temp_dir, engine, _notifier) = create_test_engine().await;

    engine
        .submit(&submit_params(&["jlee"]))
        .await
        .expect("Failed to submit");

    let mut other = submit_params(&["jlee"]);
    other.writer_id = "schoi".to_string();
    other.writer_name = "Seo Choi".to_string();
    engine.submit(&other).await.expect("Failed to submit");

    let drafts = engine
        .drafts(&Drafts {
            writer_id: "hkim".to_string(),
        })
        .await
        .expect("Failed to fetch drafts");
    assert_eq!(drafts.len(), 1);
    assert_eq!(drafts[0].writer_id, "hkim");
}

#[tokio::test]
async fn test_failing_notifier_never_fails_the_operation() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");

    EngineBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to initialize database");

    let engine = Engine::new(
        Arc::new(SqliteStore::new(db_path)),
        Arc::new(StaticDirectory::with_sample_users()),
        Arc::new(FailingNotifier),
    );

    // Submit succeeds even though the first-approver notification fails
    let id = engine
        .submit(&submit_params(&["jlee", "mpark"]))
        .await
        .expect("Submit should succeed despite notifier failure");

    // Approve advances the chain; the next-approver notification fails
    engine
        .approve(&decision(id, "jlee"))
        .await
        .expect("Approve should succeed despite notifier failure");
    let document = engine.detail(&Id { id }).await.expect("Failed to fetch");
    assert_eq!(document.current_approver_id.as_deref(), Some("mpark"));
    assert_eq!(document.steps[0].status, StepStatus::Approved);

    // Reject finalizes; the writer notification fails
    engine
        .reject(&decision(id, "mpark"))
        .await
        .expect("Reject should succeed despite notifier failure");
    let document = engine.detail(&Id { id }).await.expect("Failed to fetch");
    assert_eq!(document.status, DocumentStatus::Rejected);
    assert_eq!(document.current_approver_id, None);
}

#[test]
fn test_document_locks_evict_unheld_entries() {
    let locks = DocumentLocks::default();

    let held = locks.acquire(1);
    drop(locks.acquire(2));
    let _other = locks.acquire(3);

    let table = locks.inner.lock().unwrap_or_else(PoisonError::into_inner);
    assert!(table.contains_key(&1));
    assert!(!table.contains_key(&2));
    assert!(table.contains_key(&3));
    drop(held);
}

#[tokio::test]
async fn test_duplicate_approver_acts_once_per_step() {
    let (_temp_dir, engine, _notifier) = create_test_engine().await;

    let id = engine
        .submit(&submit_params(&["jlee", "mpark", "jlee"]))
        .await
        .expect("Failed to submit");

    engine
        .approve(&decision(id, "jlee"))
        .await
        .expect("Failed to approve step 1");
    engine
        .approve(&decision(id, "mpark"))
        .await
        .expect("Failed to approve step 2");
    engine
        .approve(&decision(id, "jlee"))
        .await
        .expect("Failed to approve step 3");

    let document = engine.detail(&Id { id }).await.expect("Failed to fetch");
    assert_eq!(document.status, DocumentStatus::Approved);
}
