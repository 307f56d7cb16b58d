use thiserror::Error;

/// Failure of one pipeline stage. Each variant carries the driver or I/O error behind it.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to connect to database: {0}")]
    Connection(#[source] sqlx::Error),

    #[error("failed to create schema: {0}")]
    Schema(#[source] sqlx::Error),

    #[error("failed to seed data: {0}")]
    Seed(#[source] sqlx::Error),

    #[error("failed to query data: {0}")]
    Query(#[source] sqlx::Error),

    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

impl PipelineError {
    /// Short name of the stage that failed, used as a log field.
    pub fn stage(&self) -> &'static str {
        match self {
            PipelineError::Connection(_) => "connect",
            PipelineError::Schema(_) => "schema",
            PipelineError::Seed(_) => "seed",
            PipelineError::Query(_) | PipelineError::Output(_) => "report",
        }
    }
}
