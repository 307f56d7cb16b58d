use std::path::Path;

use sqlx::{sqlite::SqliteConnectOptions, ConnectOptions, Connection, SqliteConnection};
use tracing::{debug, error, info};

use crate::error::PipelineError;

/// Open a single connection to the database file at `path`, creating the file if missing.
///
/// The `posts.user_id` foreign key is declared but not enforced, so enforcement is switched off.
pub async fn connect(path: &Path) -> Result<SqliteConnection, PipelineError> {
    let conn = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .foreign_keys(false)
        .connect()
        .await
        .map_err(|e| {
            error!(error = %e, path = %path.display(), "connect failed");
            PipelineError::Connection(e)
        })?;
    info!(path = %path.display(), "connected to database");
    Ok(conn)
}

/// Close the handle. A failure here is logged and otherwise ignored.
pub async fn close(conn: SqliteConnection) {
    match conn.close().await {
        Ok(()) => debug!("database connection closed"),
        Err(e) => error!(error = %e, "closing database connection failed"),
    }
}
