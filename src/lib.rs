//! Seeds a local SQLite file with demonstration users and posts and prints them back.
//!
//! Stages run in order: [`db::connect`], [`schema::init_schema`], [`seed::seed`],
//! [`report::report`]. [`pipeline::run`] chains them and closes the connection.

pub mod config;
pub mod db;
pub mod error;
pub mod pipeline;
pub mod repo;
pub mod repo_types;
pub mod report;
pub mod schema;
pub mod seed;

pub use config::AppConfig;
pub use error::PipelineError;
pub use pipeline::{run, RunSummary};
