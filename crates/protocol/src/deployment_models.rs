//! Deployment domain models.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::process_models::ProcessStatus;

/// Configuration for one deployment. Immutable input to the workflow.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DeploymentConfig {
    /// Target environment, e.g. `"production"`.
    pub environment: String,

    /// Repository URL, e.g. `"https://github.com/username/repo.git"`.
    pub repository_url: String,

    /// Branch to deploy to.
    pub branch: String,

    /// Commit message for the deployment commit.
    pub commit_message: String,

    /// Backend-specific extras.
    #[serde(default)]
    pub additional_config: HashMap<String, String>,
}

/// Status of one deployment.
///
/// `logs` is append-only and narrates the deployment steps
/// (clone, commit, push, ...).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DeploymentStatus {
    pub status: ProcessStatus,

    /// Where the deployed code can be inspected, e.g. a commit URL.
    pub deployment_url: Option<String>,

    /// Human-readable progress lines.
    #[serde(default)]
    pub logs: Vec<String>,

    /// Failure detail when the deployment failed.
    pub error_message: Option<String>,
}

/// Metadata for a code release.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ReleaseMetadata {
    pub version: String,
    pub release_notes: String,
    pub release_timestamp: String,
    pub author: String,

    #[serde(default)]
    pub additional_info: HashMap<String, String>,
}
