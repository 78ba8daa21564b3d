//! Signup route handlers

use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use scorehub_user::RegisterInput;
use serde::Deserialize;
use tracing::error;

use crate::routes::AppState;
use crate::template::{self, render};

#[derive(askama::Template)]
#[template(path = "signup.html")]
pub struct SignupTemplate {
    pub error_message: Option<String>,
    pub username: Option<String>,
}

/// GET /signup - Show the signup form
pub async fn page() -> impl IntoResponse {
    render(SignupTemplate {
        error_message: None,
        username: None,
    })
}

#[derive(Deserialize)]
pub struct ActionInput {
    pub username: String,
    pub password: String,
}

/// POST /signup - Create the account; the user logs in themselves after.
pub async fn action(State(app): State<AppState>, Form(input): Form<ActionInput>) -> Response {
    match app
        .user_command
        .register(RegisterInput {
            username: input.username.to_owned(),
            password: input.password,
        })
        .await
    {
        Ok(()) => Redirect::to("/login").into_response(),
        Err(err) if err.is_user_facing() => render(SignupTemplate {
            error_message: Some(err.to_string()),
            username: Some(input.username),
        }),
        Err(err) => {
            error!(error = %err, "signup failed");
            template::server_error()
        }
    }
}
