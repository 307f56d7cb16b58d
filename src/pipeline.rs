use std::io::Write;

use sqlx::SqliteConnection;
use tracing::{debug, info, instrument};

use crate::{config::AppConfig, db, error::PipelineError, report, schema, seed};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub users: usize,
    pub posts: usize,
}

/// Connect, create the schema, reseed, and print the report to `out`.
///
/// Stops at the first failing stage. The connection is closed whenever it was opened.
#[instrument(skip_all, fields(path = %config.database_path.display()))]
pub async fn run<W: Write>(config: &AppConfig, out: &mut W) -> Result<RunSummary, PipelineError> {
    let mut conn = db::connect(&config.database_path).await?;
    let result = run_stages(&mut conn, out).await;
    db::close(conn).await;

    match &result {
        Ok(summary) => info!(users = summary.users, posts = summary.posts, "run complete"),
        Err(e) => debug!(stage = e.stage(), "run aborted"),
    }
    result
}

async fn run_stages<W: Write>(
    conn: &mut SqliteConnection,
    out: &mut W,
) -> Result<RunSummary, PipelineError> {
    schema::init_schema(conn).await?;
    seed::seed(conn).await?;
    let report = report::report(conn, out).await?;
    Ok(RunSummary {
        users: report.users.len(),
        posts: report.posts.len(),
    })
}
