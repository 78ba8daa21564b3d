//! Protected score board page

use axum::{extract::State, response::IntoResponse};

use crate::auth::AuthUser;
use crate::routes::AppState;
use crate::scores::Score;
use crate::template::{self, render};

#[derive(askama::Template)]
#[template(path = "scores.html")]
pub struct ScoresTemplate {
    pub username: String,
    pub scores: Vec<Score>,
}

/// GET /scores - Requires a valid session; fetches the upstream list.
pub async fn page(AuthUser(username): AuthUser, State(app): State<AppState>) -> impl IntoResponse {
    match app.scores.fetch().await {
        Ok(scores) => render(ScoresTemplate { username, scores }),
        Err(err) => {
            tracing::error!(error = %err, "failed to fetch scores");
            template::server_error()
        }
    }
}
