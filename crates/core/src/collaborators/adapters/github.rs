//! Repository adapter backed by the GitHub REST API.
//!
//! Pushes a code bundle by upserting each file through the contents
//! endpoint, committing on the configured branch. No local clone is made.

use std::collections::HashMap;

use async_trait::async_trait;
use base64::Engine;
use reqwest::StatusCode;
use serde::Deserialize;
use vulcan_protocol::deployment_models::DeploymentConfig;

use crate::collaborators::base::{CollaboratorError, PushOutcome, RepositoryClient};

const DEFAULT_API_BASE: &str = "https://api.github.com";
const API_VERSION_HEADER: &str = "X-GitHub-Api-Version";
const API_VERSION: &str = "2022-11-28";

pub struct GitHubClient {
    client: reqwest::Client,
    token: String,
    api_base: String,
}

#[derive(Deserialize)]
struct ContentsResponse {
    sha: String,
}

#[derive(Deserialize)]
struct CommitInfo {
    html_url: Option<String>,
}

#[derive(Deserialize)]
struct PutContentsResponse {
    commit: Option<CommitInfo>,
}

/// Extract `(owner, repo)` from an HTTPS or SSH-style GitHub URL.
fn parse_repository_url(url: &str) -> Result<(String, String), CollaboratorError> {
    let trimmed = url.trim_end_matches('/').trim_end_matches(".git");
    let path = trimmed
        .split_once("github.com")
        .map(|(_, rest)| rest.trim_start_matches([':', '/']))
        .ok_or_else(|| {
            CollaboratorError::Backend(format!("Unsupported repository URL: {url}"))
        })?;

    match path.split('/').collect::<Vec<_>>().as_slice() {
        [owner, repo] if !owner.is_empty() && !repo.is_empty() => {
            Ok(((*owner).to_string(), (*repo).to_string()))
        }
        _ => Err(CollaboratorError::Backend(format!(
            "Unsupported repository URL: {url}"
        ))),
    }
}

impl GitHubClient {
    pub fn new(token: impl Into<String>) -> Result<Self, CollaboratorError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("vulcan/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CollaboratorError::Unavailable(format!("HTTP client: {e}")))?;

        Ok(Self {
            client,
            token: token.into(),
            api_base: DEFAULT_API_BASE.to_string(),
        })
    }

    /// Point the client at a different API host (GitHub Enterprise, tests).
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    /// Look up the blob sha of an existing file, if any.
    ///
    /// Needed because the contents endpoint requires the current sha to
    /// update a file in place.
    async fn existing_sha(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        branch: &str,
    ) -> Result<Option<String>, CollaboratorError> {
        let url = format!("{}/repos/{owner}/{repo}/contents/{path}", self.api_base);
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .header(reqwest::header::ACCEPT, "application/vnd.github.v3+json")
            .header(API_VERSION_HEADER, API_VERSION)
            .query(&[("ref", branch)])
            .send()
            .await
            .map_err(|e| CollaboratorError::Backend(format!("GitHub request failed: {e}")))?;

        match response.status() {
            StatusCode::OK => {
                let contents: ContentsResponse = response
                    .json()
                    .await
                    .map_err(|e| CollaboratorError::Protocol(e.to_string()))?;
                Ok(Some(contents.sha))
            }
            StatusCode::NOT_FOUND => Ok(None),
            status => Err(self.api_error(status, response).await),
        }
    }

    async fn upload_file(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        content: &str,
        config: &DeploymentConfig,
    ) -> Result<Option<String>, CollaboratorError> {
        let sha = self.existing_sha(owner, repo, path, &config.branch).await?;

        let encoded = base64::engine::general_purpose::STANDARD.encode(content.as_bytes());
        let mut body = serde_json::json!({
            "message": config.commit_message,
            "content": encoded,
            "branch": config.branch,
        });
        if let Some(sha) = sha {
            body["sha"] = serde_json::Value::String(sha);
        }

        let url = format!("{}/repos/{owner}/{repo}/contents/{path}", self.api_base);
        let response = self
            .client
            .put(&url)
            .bearer_auth(&self.token)
            .header(reqwest::header::ACCEPT, "application/vnd.github.v3+json")
            .header(API_VERSION_HEADER, API_VERSION)
            .json(&body)
            .send()
            .await
            .map_err(|e| CollaboratorError::Backend(format!("GitHub request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(self.api_error(status, response).await);
        }

        let put: PutContentsResponse = response
            .json()
            .await
            .map_err(|e| CollaboratorError::Protocol(e.to_string()))?;
        Ok(put.commit.and_then(|commit| commit.html_url))
    }

    async fn api_error(&self, status: StatusCode, response: reqwest::Response) -> CollaboratorError {
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return CollaboratorError::Backend("Authentication failed".to_string());
        }
        let body = response.text().await.unwrap_or_default();
        CollaboratorError::Backend(format!("GitHub API error {status}: {body}"))
    }
}

#[async_trait]
impl RepositoryClient for GitHubClient {
    async fn push(
        &self,
        code_content: &HashMap<String, String>,
        config: &DeploymentConfig,
    ) -> Result<PushOutcome, CollaboratorError> {
        let (owner, repo) = parse_repository_url(&config.repository_url)?;

        let mut logs = vec![format!(
            "Resolving repository {owner}/{repo} (branch: {})",
            config.branch
        )];

        // Stable upload order keeps the log deterministic.
        let mut paths: Vec<&String> = code_content.keys().collect();
        paths.sort();

        let mut commit_url = None;
        for path in &paths {
            logs.push(format!("Uploading {path}..."));
            let content = &code_content[*path];
            if let Some(url) = self.upload_file(&owner, &repo, path, content, config).await? {
                commit_url = Some(url);
            }
        }

        logs.push(format!(
            "Pushed {} file(s) to {}",
            paths.len(),
            config.branch
        ));

        let deployment_url = commit_url.unwrap_or_else(|| {
            format!("https://github.com/{owner}/{repo}/tree/{}", config.branch)
        });

        Ok(PushOutcome {
            deployment_url,
            logs,
        })
    }
}
