//! Session token generation and validation

use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// Session claims carried by the token
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Username the session was issued for
    pub sub: String,
    /// Issued at (as UTC timestamp)
    pub iat: u64,
    /// Expiration time (as UTC timestamp)
    pub exp: u64,
}

/// Mint a signed session token for a username.
pub fn generate_token(
    username: &str,
    secret: &str,
    lifetime_seconds: u64,
) -> anyhow::Result<String> {
    let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();

    let claims = Claims {
        sub: username.to_owned(),
        iat: now,
        exp: now + lifetime_seconds,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;

    Ok(token)
}

/// Validate a session token and return the username it was issued for.
///
/// Tampering, truncation, a wrong secret or expiry all fail validation.
/// Callers treat the error as "no identity", never as a request failure.
pub fn validate_token(token: &str, secret: &str) -> anyhow::Result<String> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;

    Ok(token_data.claims.sub)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test_secret_key_minimum_32_characters_long";

    #[test]
    fn test_token_roundtrip() {
        let token = generate_token("alice", SECRET, 3600).unwrap();
        let username = validate_token(&token, SECRET).unwrap();
        assert_eq!(username, "alice");
    }

    #[test]
    fn test_rejects_wrong_secret() {
        let token = generate_token("alice", SECRET, 3600).unwrap();
        assert!(validate_token(&token, "another_secret_key_32_characters_xx").is_err());
    }

    #[test]
    fn test_rejects_tampered_token() {
        let token = generate_token("alice", SECRET, 3600).unwrap();

        // Flip one character of the signature
        let mut tampered = token.clone();
        let last = tampered.pop().unwrap();
        tampered.push(if last == 'A' { 'B' } else { 'A' });

        assert!(validate_token(&tampered, SECRET).is_err());
    }

    #[test]
    fn test_rejects_garbage_token() {
        assert!(validate_token("not.a.token", SECRET).is_err());
        assert!(validate_token("", SECRET).is_err());
    }

    #[test]
    fn test_rejects_expired_token() {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();

        // Expired well past the default validation leeway
        let claims = Claims {
            sub: "alice".to_owned(),
            iat: now - 7200,
            exp: now - 3600,
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        assert!(validate_token(&token, SECRET).is_err());
    }
}
