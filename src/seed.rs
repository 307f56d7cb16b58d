use sqlx::{Connection, SqliteConnection};
use tracing::{debug, error, info};

use crate::{
    error::PipelineError,
    repo,
    repo_types::{Post, User},
};

pub struct SeedPost {
    pub title: &'static str,
    pub content: Option<&'static str>,
}

pub struct SeedUser {
    pub username: &'static str,
    pub email: Option<&'static str>,
    pub posts: &'static [SeedPost],
}

/// Demonstration rows written on every run.
pub const SEED_USERS: &[SeedUser] = &[
    SeedUser {
        username: "user1",
        email: Some("user1@example.com"),
        posts: &[
            SeedPost {
                title: "First Post",
                content: Some("This is the content of the first post."),
            },
            SeedPost {
                title: "Second Post",
                content: Some("Another post written by user1."),
            },
        ],
    },
    SeedUser {
        username: "user2",
        email: Some("user2@example.com"),
        posts: &[SeedPost {
            title: "Hello World",
            content: Some("Hello from user2!"),
        }],
    },
];

#[derive(Debug, Default)]
pub struct SeedSummary {
    pub users: Vec<User>,
    pub posts: Vec<Post>,
}

/// Replace the contents of both tables with [`SEED_USERS`] in one transaction.
///
/// Each post is linked through the id returned by its author's insert. On any failure the
/// whole batch is rolled back and nothing from this run remains.
pub async fn seed(conn: &mut SqliteConnection) -> Result<SeedSummary, PipelineError> {
    seed_with(conn, SEED_USERS).await
}

pub async fn seed_with(
    conn: &mut SqliteConnection,
    users: &[SeedUser],
) -> Result<SeedSummary, PipelineError> {
    let mut tx = conn.begin().await.map_err(seed_failed)?;

    let summary = match write_rows(&mut tx, users).await {
        Ok(summary) => summary,
        Err(e) => {
            error!(error = %e, "seeding failed; rolling back");
            if let Err(rb) = tx.rollback().await {
                error!(error = %rb, "rollback failed");
            }
            return Err(PipelineError::Seed(e));
        }
    };

    tx.commit().await.map_err(seed_failed)?;
    info!(
        users = summary.users.len(),
        posts = summary.posts.len(),
        "sample data seeded"
    );
    Ok(summary)
}

async fn write_rows(
    conn: &mut SqliteConnection,
    users: &[SeedUser],
) -> sqlx::Result<SeedSummary> {
    let (old_posts, old_users) = repo::delete_all(conn).await?;
    debug!(old_posts, old_users, "cleared previous rows");

    let mut summary = SeedSummary::default();
    for seed_user in users {
        let user = repo::insert_user(conn, seed_user.username, seed_user.email).await?;
        for seed_post in seed_user.posts {
            let post = repo::insert_post(conn, user.id, seed_post.title, seed_post.content).await?;
            summary.posts.push(post);
        }
        summary.users.push(user);
    }
    Ok(summary)
}

fn seed_failed(e: sqlx::Error) -> PipelineError {
    error!(error = %e, "seeding failed");
    PipelineError::Seed(e)
}
