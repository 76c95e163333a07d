//! Collaborator traits and supporting types.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use vulcan_protocol::deployment_models::DeploymentConfig;
use vulcan_protocol::generation_models::{CodeArtifact, Requirements};
use vulcan_protocol::testing_models::{TestCoverage, TestResult};

/// Errors raised by external backends.
///
/// Always recoverable at the workflow level: the workflow finalizes the
/// process as `Failed` with the backend's message and never crashes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollaboratorError {
    /// The backend is not reachable or not installed.
    #[error("Backend not available: {0}")]
    Unavailable(String),

    /// The backend ran and reported a failure. The message is
    /// human-readable and surfaced to callers as-is.
    #[error("{0}")]
    Backend(String),

    /// The backend produced output the adapter could not interpret.
    #[error("Malformed backend response: {0}")]
    Protocol(String),
}

/// The output of one test run.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TestRun {
    /// One result per executed test case.
    pub results: Vec<TestResult>,

    /// Coverage figures, when the run was asked to collect them.
    pub coverage: Option<TestCoverage>,
}

/// The output of one repository push.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PushOutcome {
    /// Where the deployed code can be inspected, e.g. a commit URL.
    pub deployment_url: String,

    /// Ordered human-readable progress lines.
    pub logs: Vec<String>,
}

/// Code-generation backend.
#[async_trait]
pub trait CodeGenerator: Send + Sync {
    /// Produce code artifacts for the given requirements.
    async fn generate(
        &self,
        requirements: &Requirements,
    ) -> Result<Vec<CodeArtifact>, CollaboratorError>;
}

/// Test-runner backend.
#[async_trait]
pub trait TestRunner: Send + Sync {
    /// Execute tests against a code bundle (file path -> source content).
    ///
    /// A run that executes but reports failing tests is still `Ok`; an error
    /// means the run itself could not be performed (e.g. the code fails to
    /// parse).
    async fn run_tests(
        &self,
        code_content: &HashMap<String, String>,
        generate_coverage: bool,
    ) -> Result<TestRun, CollaboratorError>;
}

/// Repository/version-control backend.
#[async_trait]
pub trait RepositoryClient: Send + Sync {
    /// Commit and push a code bundle to the configured repository.
    async fn push(
        &self,
        code_content: &HashMap<String, String>,
        config: &DeploymentConfig,
    ) -> Result<PushOutcome, CollaboratorError>;
}
