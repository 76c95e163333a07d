//! Thin HTTP client for the status endpoints of a running API server.

use color_eyre::eyre::{eyre, Result};
use reqwest::StatusCode;
use vulcan_protocol::api_models::StatusResponse;

pub struct StatusClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl StatusClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("vulcan-cli/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    /// Fetch one process snapshot, `None` if the server does not know the id.
    pub async fn fetch_status(&self, process_id: &str) -> Result<Option<StatusResponse>> {
        let url = format!("{}/api/v1/status/{process_id}", self.base_url);
        let response = self
            .client
            .get(&url)
            .header("X-API-Key", &self.api_key)
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => Ok(Some(response.json().await?)),
            StatusCode::NOT_FOUND => Ok(None),
            status => Err(api_failure(status, response).await),
        }
    }

    /// Fetch all known processes.
    pub async fn fetch_all(&self) -> Result<Vec<StatusResponse>> {
        let url = format!("{}/api/v1/status", self.base_url);
        let response = self
            .client
            .get(&url)
            .header("X-API-Key", &self.api_key)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(api_failure(status, response).await);
        }
        Ok(response.json().await?)
    }
}

async fn api_failure(status: StatusCode, response: reqwest::Response) -> color_eyre::Report {
    let detail = response
        .json::<serde_json::Value>()
        .await
        .ok()
        .and_then(|body| body["detail"].as_str().map(str::to_string))
        .unwrap_or_else(|| format!("server returned {status}"));
    eyre!("{detail}")
}
