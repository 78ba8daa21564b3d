//! Signup and login operations

use sqlx::SqlitePool;
use validator::Validate;

use crate::error::{Error, Result};
use crate::password;
use crate::repository::{self, InsertOutcome};

#[derive(Validate)]
pub struct RegisterInput {
    #[validate(length(min = 3, max = 32, message = "Username must be 3 to 32 characters"))]
    pub username: String,
    #[validate(length(min = 8, max = 64, message = "Password must be 8 to 64 characters"))]
    pub password: String,
}

#[derive(Validate)]
pub struct LoginInput {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Clone)]
pub struct Command {
    pool: SqlitePool,
}

impl Command {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create an account. Does not log the user in.
    pub async fn register(&self, input: RegisterInput) -> Result<()> {
        input.validate()?;

        let password_hash = password::hash(&input.password)?;

        if repository::find_by_username(&self.pool, &input.username)
            .await?
            .is_some()
        {
            return Err(Error::UsernameTaken);
        }

        // Two signups can pass the check above at once; the primary key
        // settles the winner and the loser surfaces as a conflict.
        match repository::insert_if_absent(&self.pool, &input.username, &password_hash).await? {
            InsertOutcome::Created => {
                tracing::info!(username = %input.username, "user registered");
                Ok(())
            }
            InsertOutcome::AlreadyExists => Err(Error::UsernameTaken),
        }
    }

    /// Check credentials and return the username the session belongs to.
    pub async fn login(&self, input: LoginInput) -> Result<String> {
        input.validate()?;

        let Some(user) = repository::find_by_username(&self.pool, &input.username).await? else {
            tracing::info!(username = %input.username, "login rejected: unknown username");
            return Err(Error::InvalidCredentials);
        };

        if !password::verify(&user.password_hash, &input.password)? {
            tracing::info!(username = %input.username, "login rejected: password mismatch");
            return Err(Error::InvalidCredentials);
        }

        Ok(user.username)
    }
}
