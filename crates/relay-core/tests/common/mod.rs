use relay_core::{
    EngineBuilder, engine::Engine, directory::StaticDirectory, notify::LogNotifier,
    store::SqliteStore,
};
use tempfile::TempDir;

/// Helper function to create a test engine over a temp database
pub async fn create_test_engine() -> (TempDir, Engine<SqliteStore, StaticDirectory, LogNotifier>) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let engine = EngineBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create engine");
    (temp_dir, engine)
}
