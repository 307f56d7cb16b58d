use sqlx::SqliteConnection;

use crate::repo_types::{Post, PostWithAuthor, User};

// ---- Writes ----

/// Remove every post, then every user.
pub async fn delete_all(conn: &mut SqliteConnection) -> sqlx::Result<(u64, u64)> {
    let posts = sqlx::query("DELETE FROM posts")
        .execute(&mut *conn)
        .await?
        .rows_affected();
    let users = sqlx::query("DELETE FROM users")
        .execute(&mut *conn)
        .await?
        .rows_affected();
    Ok((posts, users))
}

/// Insert a user and return the stored row, generated id included.
pub async fn insert_user(
    conn: &mut SqliteConnection,
    username: &str,
    email: Option<&str>,
) -> sqlx::Result<User> {
    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (username, email)
        VALUES (?1, ?2)
        RETURNING id, username, email, created_at
        "#,
    )
    .bind(username)
    .bind(email)
    .fetch_one(&mut *conn)
    .await
}

pub async fn insert_post(
    conn: &mut SqliteConnection,
    user_id: i64,
    title: &str,
    content: Option<&str>,
) -> sqlx::Result<Post> {
    sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (user_id, title, content)
        VALUES (?1, ?2, ?3)
        RETURNING id, user_id, title, content, created_at
        "#,
    )
    .bind(user_id)
    .bind(title)
    .bind(content)
    .fetch_one(&mut *conn)
    .await
}

// ---- Queries ----

/// All users in storage order.
pub async fn list_users(conn: &mut SqliteConnection) -> sqlx::Result<Vec<User>> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, email, created_at
          FROM users
        "#,
    )
    .fetch_all(&mut *conn)
    .await
}

/// All posts with their author's username, oldest id first.
pub async fn list_posts_with_authors(
    conn: &mut SqliteConnection,
) -> sqlx::Result<Vec<PostWithAuthor>> {
    sqlx::query_as::<_, PostWithAuthor>(
        r#"
        SELECT p.id, u.username AS author, p.title, p.content
          FROM posts p
          JOIN users u ON p.user_id = u.id
         ORDER BY p.id ASC
        "#,
    )
    .fetch_all(&mut *conn)
    .await
}
