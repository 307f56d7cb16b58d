use sqlx::FromRow;
use time::PrimitiveDateTime;

/// Row of the `users` table.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: Option<String>,
    pub created_at: PrimitiveDateTime, // CURRENT_TIMESTAMP is UTC without offset
}

/// Row of the `posts` table.
#[derive(Debug, Clone, FromRow)]
pub struct Post {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub content: Option<String>,
    pub created_at: PrimitiveDateTime,
}

/// A post joined to its author's username.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct PostWithAuthor {
    pub id: i64,
    pub author: String,
    pub title: String,
    pub content: Option<String>,
}
