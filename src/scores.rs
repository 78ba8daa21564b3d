//! Client for the upstream score table

use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use reqwest::{Client, header};
use serde::Deserialize;

use crate::config::ScoresConfig;

/// HTTP request timeout in seconds. Bounds the protected-page render when
/// the upstream is unresponsive.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// One entry of the upstream score table. Only `score` is rendered; the
/// remaining fields mirror the upstream document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    pub id: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub complete: bool,
    pub score: String,
}

/// Clone is cheap - reqwest::Client uses Arc internally for connection
/// pooling.
#[derive(Debug, Clone)]
pub struct ScoresClient {
    client: Client,
    base_url: String,
    api_version: String,
}

impl ScoresClient {
    pub fn new(config: &ScoresConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            api_version: config.api_version.clone(),
        })
    }

    /// Fetch the score list from the upstream table endpoint.
    pub async fn fetch(&self) -> Result<Vec<Score>> {
        let url = format!("{}/tables/TodoItem", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("$select", "score")])
            .header(header::ACCEPT, "application/json")
            // The upstream rejects requests without an explicit API version
            .header("Zumo-Api-Version", &self.api_version)
            .send()
            .await
            .context("score request failed")?
            .error_for_status()
            .context("score request rejected")?;

        let scores = response.json().await.context("invalid score payload")?;

        Ok(scores)
    }
}
