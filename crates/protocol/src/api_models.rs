//! Wire-format request and response models.
//!
//! These structures are shared by the HTTP API and the CLI so that both
//! front-ends speak the same JSON dialect.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::generation_models::CodeArtifact;
use crate::process_models::{ProcessState, ProcessStep};
use crate::testing_models::{TestCoverage, TestResult};

fn default_branch() -> String {
    "main".to_string()
}

fn default_commit_message() -> String {
    "Deploy code via Vulcan API".to_string()
}

/// Request model for code generation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GenerateCodeRequest {
    /// Description of the code to generate.
    pub description: String,

    /// Constraints for the generated code.
    #[serde(default)]
    pub constraints: Vec<String>,

    /// Examples of expected behavior.
    #[serde(default)]
    pub examples: Vec<String>,
}

/// Response model for code generation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GenerateCodeResponse {
    pub success: bool,
    pub process_id: String,

    #[serde(default)]
    pub artifacts: Vec<CodeArtifact>,

    pub error_message: Option<String>,
}

/// Request model for running tests on a code bundle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TestCodeRequest {
    /// File path -> source content.
    pub code_content: HashMap<String, String>,

    /// Whether to produce a coverage report.
    #[serde(default)]
    pub generate_coverage: bool,
}

/// One test outcome, flattened for the wire.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TestResultSummary {
    pub name: String,
    pub passed: bool,
    pub execution_time: f64,
    pub error_message: Option<String>,
}

impl From<&TestResult> for TestResultSummary {
    fn from(result: &TestResult) -> Self {
        Self {
            name: result.test_case.name.clone(),
            passed: result.passed,
            execution_time: result.execution_time,
            error_message: result.error_message.clone(),
        }
    }
}

/// Aggregate coverage figures, flattened for the wire.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CoverageSummary {
    pub line: f64,
    pub branch: f64,
    pub function: f64,
}

impl From<&TestCoverage> for CoverageSummary {
    fn from(coverage: &TestCoverage) -> Self {
        Self {
            line: coverage.line_coverage,
            branch: coverage.branch_coverage,
            function: coverage.function_coverage,
        }
    }
}

/// Response model for running tests.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TestCodeResponse {
    pub success: bool,
    pub process_id: String,

    #[serde(default)]
    pub test_results: Vec<TestResultSummary>,

    pub coverage: Option<CoverageSummary>,
    pub error_message: Option<String>,
}

/// Request model for deploying a code bundle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DeployCodeRequest {
    /// File path -> source content.
    pub code_content: HashMap<String, String>,

    /// Repository URL, e.g. `"https://github.com/username/repo.git"`.
    pub repository_url: String,

    /// Branch to deploy to.
    #[serde(default = "default_branch")]
    pub branch: String,

    /// Commit message.
    #[serde(default = "default_commit_message")]
    pub commit_message: String,
}

/// Response model for deploying a code bundle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DeployCodeResponse {
    pub success: bool,
    pub process_id: String,
    pub deployment_url: Option<String>,

    #[serde(default)]
    pub logs: Vec<String>,

    pub error_message: Option<String>,
}

/// Response model for the status endpoint.
///
/// A full projection of [`ProcessState`]: every field survives the round
/// trip, including step order and timestamps.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StatusResponse {
    pub process_id: String,
    pub process_type: String,
    pub status: String,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,

    #[serde(default)]
    pub steps: Vec<ProcessStep>,

    #[serde(default)]
    pub artifacts: Vec<serde_json::Value>,

    #[serde(default)]
    pub errors: Vec<String>,
}

impl From<&ProcessState> for StatusResponse {
    fn from(state: &ProcessState) -> Self {
        Self {
            process_id: state.process_id.to_string(),
            process_type: state.process_type.as_str().to_string(),
            status: state.status.as_str().to_string(),
            start_time: state.start_time,
            end_time: state.end_time,
            steps: state.steps.clone(),
            artifacts: state.artifacts.clone(),
            errors: state.errors.clone(),
        }
    }
}

/// Response body for errors.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Error message.
    pub detail: String,
}
