use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Username already taken")]
    UsernameTaken,

    /// Unknown username and wrong password collapse into this variant on
    /// purpose; only the log tells them apart.
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("{0}")]
    Validate(#[from] validator::ValidationErrors),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Password hashing failed: {0}")]
    Hash(#[from] argon2::password_hash::Error),
}

impl Error {
    /// True when the message is safe to show to the client. Everything else
    /// renders as an opaque server error.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Error::UsernameTaken | Error::InvalidCredentials | Error::Validate(_)
        )
    }
}
