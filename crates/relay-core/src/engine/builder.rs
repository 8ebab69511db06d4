//! Builder for creating and configuring Engine instances.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::task;

use super::Engine;
use crate::{
    db::Database,
    directory::StaticDirectory,
    error::{EngineError, Result},
    notify::LogNotifier,
    store::SqliteStore,
};

/// Builder for creating and configuring Engine instances.
#[derive(Debug, Clone)]
pub struct EngineBuilder {
    database_path: Option<PathBuf>,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/relay/relay.db` or `~/.local/share/relay/relay.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds an engine over the SQLite store with the default directory
    /// and log notifier.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::FileSystem` if the database path is invalid
    /// Returns `EngineError::Database` if database initialization fails
    pub async fn build(self) -> Result<Engine<SqliteStore, StaticDirectory, LogNotifier>> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| EngineError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        // Initialize the schema once up front so later per-call opens are cheap
        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), EngineError>(())
        })
        .await
        .map_err(|e| EngineError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        Ok(Engine::new(
            Arc::new(SqliteStore::new(db_path)),
            Arc::new(StaticDirectory::with_sample_users()),
            Arc::new(LogNotifier),
        ))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("relay")
            .place_data_file("relay.db")
            .map_err(|e| EngineError::XdgDirectory(e.to_string()))
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
