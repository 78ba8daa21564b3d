//! Session cookie handling and the request gate
//!
//! Identity comes from the signed session cookie alone. A token that fails
//! validation for any reason yields an anonymous request, never an error.

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts, response::Redirect};
use axum_extra::extract::{
    CookieJar,
    cookie::{Cookie, SameSite},
};

use crate::config::JwtConfig;
use crate::routes::AppState;

/// Cookie carrying the session token
pub const SESSION_COOKIE_NAME: &str = "session";

/// Build the session cookie for a freshly authenticated username.
pub fn build_cookie<'a>(config: &JwtConfig, username: &str) -> anyhow::Result<Cookie<'a>> {
    let token = scorehub_user::jwt::generate_token(
        username,
        &config.secret,
        config.expiration_days * 24 * 60 * 60,
    )?;

    Ok(Cookie::build((SESSION_COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .build())
}

/// Identity extracted from a valid session cookie.
///
/// Handlers on protected routes take this as an argument; anonymous
/// requests are redirected to the login page instead of reaching them.
pub struct AuthUser(pub String);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = Redirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match session_username(parts, state).await {
            Some(username) => Ok(AuthUser(username)),
            None => Err(Redirect::to("/login")),
        }
    }
}

/// Like [`AuthUser`] but never rejects; public pages use it to vary
/// content for signed-in visitors.
pub struct AuthOptional(pub Option<String>);

impl FromRequestParts<AppState> for AuthOptional {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(AuthOptional(session_username(parts, state).await))
    }
}

async fn session_username(parts: &mut Parts, state: &AppState) -> Option<String> {
    let jar = CookieJar::from_request_parts(parts, state).await.ok()?;
    let token = jar.get(SESSION_COOKIE_NAME)?.value().to_owned();

    match scorehub_user::jwt::validate_token(&token, &state.config.jwt.secret) {
        Ok(username) => Some(username),
        Err(err) => {
            tracing::warn!(error = %err, "rejected session token");
            None
        }
    }
}
