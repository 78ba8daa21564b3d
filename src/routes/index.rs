use axum::response::IntoResponse;

use crate::auth::AuthOptional;
use crate::template::render;

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub username: Option<String>,
}

pub async fn page(AuthOptional(username): AuthOptional) -> impl IntoResponse {
    render(IndexTemplate { username })
}
