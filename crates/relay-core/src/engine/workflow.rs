//! State transitions: submit, approve, reject.
//!
//! Approve and reject share the same turn rule. The acting approver must
//! own the lowest-sequence waiting step; anything else is out of turn.
//! Both transitions go through the store's conditional step write, which
//! only matches a step still in the waiting status, so two racing callers
//! cannot both claim the same step.

use crate::{
    error::{EngineError, Result},
    models::{Document, DocumentStatus, NewDocument, NewStep, NewTestResult, Step, StepStatus},
    params::{Decision, SubmitDocument},
};

use super::Engine;
use crate::{directory::UserDirectory, notify::Notifier, store::DocumentStore};

impl<S, D, N> Engine<S, D, N>
where
    S: DocumentStore,
    D: UserDirectory,
    N: Notifier,
{
    /// Submits a document into an approval chain.
    ///
    /// The approver list fixes the chain order; display names are resolved
    /// through the directory with the raw account as fallback. The first
    /// approver is notified that the document is waiting on them.
    ///
    /// Returns the ID of the created document.
    pub async fn submit(&self, params: &SubmitDocument) -> Result<u64> {
        params.validate()?;

        let first_approver = params.approvers[0].clone();

        let document = self
            .store
            .create_document(NewDocument {
                title: params.title.clone(),
                writer_id: params.writer_id.clone(),
                writer_name: params.writer_name.clone(),
                status: DocumentStatus::Pending,
                current_approver_id: Some(first_approver.clone()),
            })
            .await?;

        for (index, account) in params.approvers.iter().enumerate() {
            let approver_name = self.resolve_name(account).await;
            self.store
                .add_step(NewStep {
                    document_id: document.id,
                    approver_id: account.clone(),
                    approver_name,
                    sequence: index as u32 + 1,
                })
                .await?;
        }

        for payload in &params.test_results {
            self.store
                .add_test_result(NewTestResult::from_payload(document.id, payload))
                .await?;
        }

        self.notify(
            &first_approver,
            &format!(
                "[Approval request] {} (writer: {})",
                params.title, params.writer_name
            ),
        )
        .await;

        Ok(document.id)
    }

    /// Approves the acting approver's step on a pending document.
    ///
    /// When a later step remains the turn advances to it and that approver
    /// is notified; otherwise the document becomes Approved and the writer
    /// is notified. Exactly one notification per call.
    pub async fn approve(&self, params: &Decision) -> Result<()> {
        let lock = self.lock_for(params.document_id);
        let _guard = lock.lock().await;

        let document = self.fetch_pending(params.document_id).await?;
        let step = Self::turn_step(&document, &params.approver_id)?;

        let claimed = self
            .store
            .complete_step(step.id, StepStatus::Approved, params.comment.clone())
            .await?;
        if !claimed {
            return Err(EngineError::ConcurrentModification { step: step.id });
        }

        let next = document
            .steps
            .iter()
            .find(|s| s.sequence == step.sequence + 1);

        match next {
            Some(next_step) => {
                self.store
                    .set_current_approver(document.id, Some(next_step.approver_id.clone()))
                    .await?;
                self.notify(
                    &next_step.approver_id,
                    &format!(
                        "[Approval request] {} (writer: {}) - previous step approved",
                        document.title, document.writer_name
                    ),
                )
                .await;
            }
            None => {
                self.store
                    .update_document_status(document.id, DocumentStatus::Approved)
                    .await?;
                self.store.set_current_approver(document.id, None).await?;
                self.notify(
                    &document.writer_id,
                    &format!("[Approved] {} has been fully approved.", document.title),
                )
                .await;
            }
        }

        Ok(())
    }

    /// Rejects a pending document at the acting approver's step.
    ///
    /// The turn rule matches approve. Rejection is terminal for the whole
    /// document; later steps stay waiting as a record of where the chain
    /// stopped, and the writer is notified with the comment embedded.
    pub async fn reject(&self, params: &Decision) -> Result<()> {
        let lock = self.lock_for(params.document_id);
        let _guard = lock.lock().await;

        let document = self.fetch_pending(params.document_id).await?;
        let step = Self::turn_step(&document, &params.approver_id)?;

        let claimed = self
            .store
            .complete_step(step.id, StepStatus::Rejected, params.comment.clone())
            .await?;
        if !claimed {
            return Err(EngineError::ConcurrentModification { step: step.id });
        }

        self.store
            .update_document_status(document.id, DocumentStatus::Rejected)
            .await?;
        self.store.set_current_approver(document.id, None).await?;

        self.notify(
            &document.writer_id,
            &format!(
                "[Rejected] {} was rejected. (reason: {})",
                document.title,
                params.comment.as_deref().unwrap_or("")
            ),
        )
        .await;

        Ok(())
    }

    /// Loads a document and enforces the shared guards: it must exist and
    /// must still be pending.
    async fn fetch_pending(&self, document_id: u64) -> Result<Document> {
        let document = self
            .store
            .get_document(document_id)
            .await?
            .ok_or(EngineError::DocumentNotFound { id: document_id })?;

        if document.status != DocumentStatus::Pending {
            return Err(EngineError::AlreadyFinalized {
                id: document.id,
                status: document.status,
            });
        }

        Ok(document)
    }

    /// The step the acting approver may decide right now.
    ///
    /// That is the lowest-sequence waiting step, and only if it belongs to
    /// the actor. A waiting step later in the chain is not enough.
    fn turn_step<'a>(document: &'a Document, approver_id: &str) -> Result<&'a Step> {
        match document.current_step() {
            Some(step) if step.approver_id == approver_id => Ok(step),
            _ => Err(EngineError::InvalidTurn {
                document: document.id,
                approver: approver_id.to_string(),
            }),
        }
    }

    pub(crate) async fn resolve_name(&self, account: &str) -> String {
        match self.directory.lookup(account).await {
            Some(user) => user.name,
            None => account.to_string(),
        }
    }
}
