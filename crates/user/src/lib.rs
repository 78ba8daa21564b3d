//! User accounts: credential storage, password hashing and session tokens.

pub mod command;
pub mod error;
pub mod jwt;
pub mod password;
pub mod repository;

pub use command::{Command, LoginInput, RegisterInput};
pub use error::{Error, Result};

/// Run this crate's migrations, creating the users table if missing.
pub async fn migrate(
    pool: &sqlx::SqlitePool,
) -> std::result::Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!().run(pool).await
}
