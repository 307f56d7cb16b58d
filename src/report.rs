use std::io::Write;

use sqlx::SqliteConnection;
use tracing::{error, info};

use crate::{
    error::PipelineError,
    repo,
    repo_types::{PostWithAuthor, User},
};

pub const SEPARATOR_WIDTH: usize = 40;

/// Rows printed by [`report`].
#[derive(Debug, Default)]
pub struct Report {
    pub users: Vec<User>,
    pub posts: Vec<PostWithAuthor>,
}

/// Print every user, then every post with its author, to `out`.
///
/// Read-only. Text already written stays written if a later query fails.
pub async fn report<W: Write>(
    conn: &mut SqliteConnection,
    out: &mut W,
) -> Result<Report, PipelineError> {
    let users = repo::list_users(conn).await.map_err(query_failed)?;
    write_users(out, &users)?;

    let posts = repo::list_posts_with_authors(conn)
        .await
        .map_err(query_failed)?;
    write_posts(out, &posts)?;
    out.flush()?;

    info!(users = users.len(), posts = posts.len(), "report written");
    Ok(Report { users, posts })
}

pub fn write_users<W: Write>(out: &mut W, users: &[User]) -> std::io::Result<()> {
    writeln!(out, "Users:")?;
    for u in users {
        writeln!(
            out,
            "ID: {}, Name: {}, Email: {}",
            u.id,
            u.username,
            u.email.as_deref().unwrap_or("None")
        )?;
    }
    Ok(())
}

pub fn write_posts<W: Write>(out: &mut W, posts: &[PostWithAuthor]) -> std::io::Result<()> {
    writeln!(out, "\nPosts:")?;
    for p in posts {
        writeln!(out, "ID: {}", p.id)?;
        writeln!(out, "Author: {}", p.author)?;
        writeln!(out, "Title: {}", p.title)?;
        writeln!(out, "Content: {}", p.content.as_deref().unwrap_or(""))?;
        writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))?;
    }
    Ok(())
}

fn query_failed(e: sqlx::Error) -> PipelineError {
    error!(error = %e, "query failed");
    PipelineError::Query(e)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{db, schema, seed};

    #[tokio::test]
    async fn posts_come_out_in_id_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut conn = db::connect(&dir.path().join("r.db")).await.unwrap();
        schema::init_schema(&mut conn).await.unwrap();
        seed::seed(&mut conn).await.unwrap();

        let mut out = Vec::new();
        let report = report(&mut conn, &mut out).await.expect("report");
        db::close(conn).await;

        let titles: Vec<&str> = report.posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["First Post", "Second Post", "Hello World"]);
        let authors: Vec<&str> = report.posts.iter().map(|p| p.author.as_str()).collect();
        assert_eq!(authors, vec!["user1", "user1", "user2"]);
        assert!(report.posts.windows(2).all(|w| w[0].id < w[1].id));

        let text = String::from_utf8(out).unwrap();
        let first = text.find("Title: First Post").unwrap();
        let second = text.find("Title: Second Post").unwrap();
        let hello = text.find("Title: Hello World").unwrap();
        assert!(first < second && second < hello);
        assert!(text.starts_with("Users:\n"));
        assert!(text.contains("Name: user1, Email: user1@example.com"));
    }

    #[test]
    fn separator_follows_each_post() {
        let posts = vec![
            PostWithAuthor {
                id: 1,
                author: "a".into(),
                title: "t1".into(),
                content: Some("body".into()),
            },
            PostWithAuthor {
                id: 2,
                author: "b".into(),
                title: "t2".into(),
                content: None,
            },
        ];
        let mut out = Vec::new();
        write_posts(&mut out, &posts).unwrap();
        let text = String::from_utf8(out).unwrap();

        let line = "-".repeat(SEPARATOR_WIDTH);
        assert_eq!(text.lines().filter(|l| *l == line).count(), 2);
        assert!(text.contains("ID: 2\nAuthor: b\nTitle: t2\nContent: \n"));
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn write_failure_is_an_output_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut conn = db::connect(&dir.path().join("r.db")).await.unwrap();
        schema::init_schema(&mut conn).await.unwrap();
        seed::seed(&mut conn).await.unwrap();

        let err = report(&mut conn, &mut BrokenPipe).await.unwrap_err();
        match err {
            PipelineError::Output(io) => assert_eq!(io.kind(), std::io::ErrorKind::BrokenPipe),
            other => panic!("expected output error, got {other:?}"),
        }
        db::close(conn).await;
    }

    #[tokio::test]
    async fn users_stay_printed_when_posts_query_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut conn = db::connect(&dir.path().join("r.db")).await.unwrap();
        sqlx::query(
            "CREATE TABLE users (id INTEGER PRIMARY KEY, username TEXT NOT NULL, email TEXT, created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP)",
        )
        .execute(&mut conn)
        .await
        .unwrap();

        let mut out = Vec::new();
        let err = report(&mut conn, &mut out).await.unwrap_err();
        assert!(matches!(err, PipelineError::Query(_)));
        assert_eq!(String::from_utf8(out).unwrap(), "Users:\n");
        db::close(conn).await;
    }

    #[tokio::test]
    async fn missing_tables_are_a_query_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut conn = db::connect(&dir.path().join("r.db")).await.unwrap();

        let mut out = Vec::new();
        let err = report(&mut conn, &mut out).await.unwrap_err();
        assert!(matches!(err, PipelineError::Query(_)));
        assert!(out.is_empty());
        db::close(conn).await;
    }
}
