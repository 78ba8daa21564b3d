use axum::{
    Router,
    response::IntoResponse,
    routing::{get, post},
};
use sqlx::SqlitePool;

use crate::config::Config;
use crate::scores::ScoresClient;
use crate::template;

mod assets;
mod health;
mod index;
mod login;
mod register;
mod scores;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub user_command: scorehub_user::Command,
    pub scores: ScoresClient,
    pub pool: SqlitePool,
}

async fn fallback() -> impl IntoResponse {
    template::not_found()
}

pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check endpoints (no auth required)
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(state.pool.clone())
        .route("/", get(index::page))
        .route("/signup", get(register::page).post(register::action))
        .route("/login", get(login::page).post(login::action))
        .route("/logout", post(login::logout))
        .route("/scores", get(scores::page))
        .route("/static/{*path}", get(assets::serve))
        .fallback(fallback)
        .with_state(state)
}
