//! Login route handlers

use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::{CookieJar, cookie::Cookie};
use scorehub_user::{Error, LoginInput};
use serde::Deserialize;
use tracing::{error, info};

use crate::auth::{self, SESSION_COOKIE_NAME};
use crate::routes::AppState;
use crate::template::{self, render};

#[derive(askama::Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub error_message: Option<String>,
    pub username: Option<String>,
}

/// GET /login - Show the login form
pub async fn page() -> impl IntoResponse {
    render(LoginTemplate {
        error_message: None,
        username: None,
    })
}

#[derive(Deserialize)]
pub struct ActionInput {
    pub username: String,
    pub password: String,
}

/// POST /login - Check credentials and issue the session cookie
pub async fn action(
    State(app): State<AppState>,
    jar: CookieJar,
    Form(input): Form<ActionInput>,
) -> Response {
    let username = match app
        .user_command
        .login(LoginInput {
            username: input.username.to_owned(),
            password: input.password,
        })
        .await
    {
        Ok(username) => username,
        // Unknown usernames and wrong passwords are indistinguishable here;
        // the log carries the difference
        Err(Error::InvalidCredentials | Error::Validate(_)) => {
            return render(LoginTemplate {
                error_message: Some("Invalid username or password".to_owned()),
                username: Some(input.username),
            });
        }
        Err(err) => {
            error!(error = %err, "login failed");
            return template::server_error();
        }
    };

    let cookie = match auth::build_cookie(&app.config.jwt, &username) {
        Ok(cookie) => cookie,
        Err(err) => {
            error!(error = %err, "failed to issue session token");
            return template::server_error();
        }
    };

    info!(username = %username, "user logged in");

    (jar.add(cookie), Redirect::to("/scores")).into_response()
}

/// POST /logout - Clear the session cookie
pub async fn logout(jar: CookieJar) -> (CookieJar, Redirect) {
    let jar = jar.remove(Cookie::build(SESSION_COOKIE_NAME).path("/"));
    (jar, Redirect::to("/"))
}
