//! Read operations: detail, inbox, drafts.

use crate::{
    display::DocumentSummaries,
    error::{EngineError, Result},
    models::{Document, DocumentSummary},
    params::{Drafts, Id, Inbox},
};

use super::Engine;
use crate::{directory::UserDirectory, notify::Notifier, store::DocumentStore};

impl<S, D, N> Engine<S, D, N>
where
    S: DocumentStore,
    D: UserDirectory,
    N: Notifier,
{
    /// Retrieves one document with steps ordered ascending and test
    /// results included.
    pub async fn detail(&self, params: &Id) -> Result<Document> {
        self.store
            .get_document(params.id)
            .await?
            .ok_or(EngineError::DocumentNotFound { id: params.id })
    }

    /// The pending documents currently waiting on one approver, oldest
    /// first.
    pub async fn inbox(&self, params: &Inbox) -> Result<Vec<Document>> {
        self.store
            .pending_for_approver(params.approver_id.clone())
            .await
    }

    /// Every document one writer has submitted, newest first.
    pub async fn drafts(&self, params: &Drafts) -> Result<Vec<Document>> {
        self.store.documents_by_writer(params.writer_id.clone()).await
    }

    /// Inbox as summary rows, for consistent list display across
    /// interfaces.
    pub async fn inbox_summary(&self, params: &Inbox) -> Result<DocumentSummaries> {
        let documents = self.inbox(params).await?;
        let summaries: Vec<DocumentSummary> = documents.iter().map(Into::into).collect();
        Ok(DocumentSummaries(summaries))
    }

    /// Drafts as summary rows.
    pub async fn drafts_summary(&self, params: &Drafts) -> Result<DocumentSummaries> {
        let documents = self.drafts(params).await?;
        let summaries: Vec<DocumentSummary> = documents.iter().map(Into::into).collect();
        Ok(DocumentSummaries(summaries))
    }
}
