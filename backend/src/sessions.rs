use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tokio::task::JoinHandle;
use tower_sessions::ExpiredDeletion;
use tower_sessions_sqlx_store::SqliteStore;
use tracing::{debug, warn};

pub const IN_MEMORY_URL: &str = "sqlite::memory:";

/// Open the session database. An in-memory database lives on a single
/// connection that is never recycled, since each connection gets its own copy.
pub async fn connect(url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
    let in_memory = url.contains(":memory:") || url.contains("mode=memory");

    let pool = if in_memory {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new()
    };
    pool.connect_with(options).await
}

/// Connect and create the session table if needed
pub async fn open_store(url: &str) -> Result<SqliteStore, sqlx::Error> {
    let store = SqliteStore::new(connect(url).await?);
    store.migrate().await?;
    Ok(store)
}

/// Delete expired sessions every `period`. Failures are logged and retried next tick.
pub fn spawn_expired_session_reaper(store: SqliteStore, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        // First tick is immediate
        interval.tick().await;
        loop {
            interval.tick().await;
            match store.delete_expired().await {
                Ok(()) => debug!("Expired sessions deleted"),
                Err(err) => warn!(%err, "Failed to delete expired sessions"),
            }
        }
    })
}
