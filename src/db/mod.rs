mod slots;

use std::str::FromStr;
use std::time::Duration;

use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;

pub use slots::SlotStore;

static MIGRATOR: Migrator = sqlx::migrate!("./src/db/migrations");

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Invalid database url")]
    InvalidUrl(#[source] sqlx::Error),

    #[error("Failed to apply migrations")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("Database error")]
    Database(#[from] sqlx::Error),
}

/// Open the SQLite pool backing the slot table.
///
/// Writers wait on the busy timeout instead of failing immediately, so
/// concurrent reservations against the same file queue up inside SQLite.
pub async fn connect(database_url: &str) -> Result<SqlitePool, StoreError> {
    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(StoreError::InvalidUrl)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    tracing::info!("Database connection established ({})", database_url);
    Ok(pool)
}

#[cfg(test)]
pub(crate) async fn test_store(seeds: &[(&str, i64)]) -> (tempfile::TempDir, SlotStore) {
    use crate::models::slot::SlotSeed;

    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("slots.db").display());
    let store = SlotStore::new(connect(&url).await.unwrap());

    let seeds: Vec<SlotSeed> = seeds
        .iter()
        .map(|(name, capacity)| SlotSeed::new(*name, *capacity))
        .collect();
    store.initialize(&seeds).await.unwrap();

    (dir, store)
}
