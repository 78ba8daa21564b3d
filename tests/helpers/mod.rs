use axum::{Json, Router, routing::get};
use scorehub::config::{
    Config, DatabaseConfig, JwtConfig, ObservabilityConfig, ScoresConfig, ServerConfig,
};
use scorehub::routes::AppState;
use scorehub::scores::ScoresClient;
use serde_json::json;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

pub async fn setup_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(":memory:")
        .await
        .unwrap();

    scorehub_user::migrate(&pool).await.unwrap();

    pool
}

/// Stub upstream serving a fixed score list; returns its base url.
pub async fn spawn_stub_scores() -> String {
    let app = Router::new().route(
        "/tables/TodoItem",
        get(|| async {
            Json(json!([
                {
                    "id": "123",
                    "createdAt": "2016-03-01T12:00:00.000Z",
                    "version": "2.0.0",
                    "deleted": false,
                    "text": "",
                    "complete": true,
                    "score": "185"
                },
                {
                    "id": "44442",
                    "createdAt": "2016-03-02T12:00:00.000Z",
                    "version": "2.0.0",
                    "deleted": true,
                    "text": "",
                    "complete": false,
                    "score": "97"
                }
            ]))
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

pub async fn create_test_app() -> Router {
    let pool = setup_test_pool().await;
    let base_url = spawn_stub_scores().await;

    let config = Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url: ":memory:".to_string(),
            max_connections: 1,
        },
        jwt: JwtConfig {
            secret: "test_secret_key_minimum_32_characters_long".to_string(),
            expiration_days: 7,
        },
        scores: ScoresConfig {
            base_url,
            api_version: "2.0.0".to_string(),
        },
        observability: ObservabilityConfig::default(),
    };

    let state = AppState {
        user_command: scorehub_user::Command::new(pool.clone()),
        scores: ScoresClient::new(&config.scores).unwrap(),
        pool,
        config,
    };

    scorehub::routes::router(state)
}
