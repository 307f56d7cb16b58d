use sqlx::{Connection, SqliteConnection};
use tracing::{error, info};

use crate::error::PipelineError;

const CREATE_USERS: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL,
    email TEXT UNIQUE,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)
"#;

const CREATE_POSTS: &str = r#"
CREATE TABLE IF NOT EXISTS posts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER,
    title TEXT NOT NULL,
    content TEXT,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    FOREIGN KEY (user_id) REFERENCES users (id)
)
"#;

/// Create `users` and `posts` if they do not exist yet. Safe to run repeatedly.
pub async fn init_schema(conn: &mut SqliteConnection) -> Result<(), PipelineError> {
    create_tables(conn).await.map_err(|e| {
        error!(error = %e, "schema creation failed");
        PipelineError::Schema(e)
    })?;
    info!("schema ready");
    Ok(())
}

async fn create_tables(conn: &mut SqliteConnection) -> sqlx::Result<()> {
    let mut tx = conn.begin().await?;
    sqlx::query(CREATE_USERS).execute(&mut *tx).await?;
    sqlx::query(CREATE_POSTS).execute(&mut *tx).await?;
    tx.commit().await
}
