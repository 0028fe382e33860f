use db::{DBService, DbConfig};
use uuid::Uuid;

use crate::AppState;

/// Builds an [`AppState`] backed by a throwaway file-based SQLite
/// database. A file (rather than `sqlite::memory:`) keeps every pooled
/// connection on the same schema.
pub async fn test_state() -> AppState {
    let db_path =
        std::env::temp_dir().join(format!("task-server-test-{}.sqlite", Uuid::new_v4()));
    let db_url = format!("sqlite://{}?mode=rwc", db_path.to_string_lossy());

    let config = DbConfig {
        url: Some(db_url),
        ..DbConfig::default()
    };
    let db = DBService::new(&config).await.unwrap();

    AppState::new(db)
}
