//! High-level workflow engine for routing documents through approval chains.
//!
//! This module provides the main [`Engine`] interface of the relay system.
//! The engine coordinates three seams, all shared via `Arc`:
//!
//! - a [`DocumentStore`](crate::store::DocumentStore) for persistence
//! - a [`UserDirectory`](crate::directory::UserDirectory) for resolving
//!   display names
//! - a [`Notifier`](crate::notify::Notifier) for telling the next actor
//!   it is their turn
//!
//! Approve and reject decisions on the same document are serialized
//! through a per-document async lock table, and the store's conditional
//! step write catches races the lock cannot see (a second process on the
//! same database file).
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Engine`] instances with configuration
//! - [`workflow`]: State transitions (submit, approve, reject)
//! - [`queries`]: Read operations (detail, inbox, drafts)

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, PoisonError},
};

use crate::{directory::UserDirectory, notify::Notifier, store::DocumentStore};

pub mod builder;
pub mod queries;
pub mod workflow;

#[cfg(test)]
mod tests;

pub use builder::EngineBuilder;

/// Main engine interface for routing documents through approval chains.
pub struct Engine<S, D, N> {
    pub(crate) store: Arc<S>,
    pub(crate) directory: Arc<D>,
    pub(crate) notifier: Arc<N>,
    locks: DocumentLocks,
}

impl<S, D, N> Engine<S, D, N>
where
    S: DocumentStore,
    D: UserDirectory,
    N: Notifier,
{
    /// Creates an engine over explicit collaborators. Most callers go
    /// through [`EngineBuilder`] instead.
    pub fn new(store: Arc<S>, directory: Arc<D>, notifier: Arc<N>) -> Self {
        Self {
            store,
            directory,
            notifier,
            locks: DocumentLocks::default(),
        }
    }

    /// The async mutex serializing decisions on one document.
    pub(crate) fn lock_for(&self, document_id: u64) -> Arc<tokio::sync::Mutex<()>> {
        self.locks.acquire(document_id)
    }

    /// Best-effort notification. Delivery failures are logged and never
    /// fail the workflow operation that triggered them.
    pub(crate) async fn notify(&self, recipient: &str, message: &str) {
        if let Err(e) = self.notifier.send(recipient, message).await {
            log::warn!("Failed to notify '{recipient}': {e}");
        }
    }
}

/// Lazily populated table of per-document async mutexes.
#[derive(Default)]
struct DocumentLocks {
    inner: Mutex<HashMap<u64, Arc<tokio::sync::Mutex<()>>>>,
}

impl DocumentLocks {
    fn acquire(&self, document_id: u64) -> Arc<tokio::sync::Mutex<()>> {
        let mut table = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        // An entry whose only Arc is the table's own is held by nobody;
        // evict those so the table stays bounded by in-flight decisions
        table.retain(|_, lock| Arc::strong_count(lock) > 1);
        table.entry(document_id).or_default().clone()
    }
}
