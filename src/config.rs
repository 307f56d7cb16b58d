use std::path::PathBuf;

use anyhow::Context;

pub const DEFAULT_DB_FILE: &str = "blog.db";

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub filter: String,
    pub json: bool,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_path: PathBuf,
    pub log: LogConfig,
}

impl AppConfig {
    /// Config for a given database file with default logging.
    pub fn new(database_path: impl Into<PathBuf>) -> Self {
        Self {
            database_path: database_path.into(),
            log: LogConfig {
                filter: "blogseed=debug,sqlx=warn".into(),
                json: false,
            },
        }
    }

    pub fn from_env() -> anyhow::Result<Self> {
        let database_path = match std::env::var("DATABASE_PATH") {
            Ok(p) => PathBuf::from(p),
            Err(_) => default_database_path()?,
        };
        let log = LogConfig {
            filter: std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "blogseed=debug,sqlx=warn".into()),
            json: std::env::var("LOG_FORMAT")
                .map(|v| v == "json")
                .unwrap_or(false),
        };
        Ok(Self { database_path, log })
    }
}

/// `blog.db` next to the running executable.
fn default_database_path() -> anyhow::Result<PathBuf> {
    let exe = std::env::current_exe().context("resolve executable path")?;
    let dir = exe
        .parent()
        .context("executable has no parent directory")?;
    Ok(dir.join(DEFAULT_DB_FILE))
}
