//! Password hashing and verification

use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{Error as HashError, SaltString, rand_core::OsRng},
};

/// Hash a password with Argon2id and a fresh random salt.
///
/// The salt makes every call produce a different PHC string, so stored
/// hashes can never be compared for equality directly.
pub fn hash(password: &str) -> Result<String, HashError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    Ok(argon2.hash_password(password.as_bytes(), &salt)?.to_string())
}

/// Verify a password against a stored PHC-format hash.
///
/// A mismatch is `Ok(false)`; only a malformed stored hash is an error.
pub fn verify(hash: &str, password: &str) -> Result<bool, HashError> {
    let parsed_hash = PasswordHash::new(hash)?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(HashError::Password) => Ok(false),
        Err(err) => Err(err),
    }
}
