//! Credential store over the users table

use sqlx::SqlitePool;

/// One stored credential row. The username is the unique key; the hash is
/// a PHC-format Argon2id string.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRow {
    pub username: String,
    pub password_hash: String,
}

/// Outcome of an insert that tolerates an existing row.
#[derive(Debug, PartialEq, Eq)]
pub enum InsertOutcome {
    Created,
    AlreadyExists,
}

pub async fn find_by_username(
    pool: &SqlitePool,
    username: &str,
) -> sqlx::Result<Option<UserRow>> {
    sqlx::query_as::<_, UserRow>(
        "SELECT username, password_hash FROM users WHERE username = ?1",
    )
    .bind(username)
    .fetch_optional(pool)
    .await
}

/// Insert a credential row unless the username is already taken.
///
/// The primary key on `username` makes this atomic against concurrent
/// inserts; the unique-violation error from the losing insert is
/// translated into `AlreadyExists` rather than surfaced as a failure.
pub async fn insert_if_absent(
    pool: &SqlitePool,
    username: &str,
    password_hash: &str,
) -> sqlx::Result<InsertOutcome> {
    let result = sqlx::query("INSERT INTO users (username, password_hash) VALUES (?1, ?2)")
        .bind(username)
        .bind(password_hash)
        .execute(pool)
        .await;

    match result {
        Ok(_) => Ok(InsertOutcome::Created),
        Err(sqlx::Error::Database(err)) if err.is_unique_violation() => {
            Ok(InsertOutcome::AlreadyExists)
        }
        Err(err) => Err(err),
    }
}
