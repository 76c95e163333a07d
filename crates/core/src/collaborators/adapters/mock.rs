//! Mock collaborator implementations for testing.

use std::collections::HashMap;

use async_trait::async_trait;
use vulcan_protocol::deployment_models::DeploymentConfig;
use vulcan_protocol::generation_models::{CodeArtifact, Requirements};
use vulcan_protocol::testing_models::{TestCase, TestResult};

use crate::collaborators::base::{
    CodeGenerator, CollaboratorError, PushOutcome, RepositoryClient, TestRun, TestRunner,
};

#[derive(Clone)]
pub struct MockCodeGenerator {
    outcome: Result<Vec<CodeArtifact>, CollaboratorError>,
}

impl MockCodeGenerator {
    pub fn new(outcome: Result<Vec<CodeArtifact>, CollaboratorError>) -> Self {
        Self { outcome }
    }

    /// Produces a single python artifact.
    pub fn success() -> Self {
        Self {
            outcome: Ok(vec![CodeArtifact {
                file_path: "add.py".to_string(),
                content: "def add(a, b):\n    return a + b\n".to_string(),
                language: "python".to_string(),
                metadata: HashMap::new(),
            }]),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Err(CollaboratorError::Backend(message.into())),
        }
    }
}

#[async_trait]
impl CodeGenerator for MockCodeGenerator {
    async fn generate(
        &self,
        _requirements: &Requirements,
    ) -> Result<Vec<CodeArtifact>, CollaboratorError> {
        self.outcome.clone()
    }
}

#[derive(Clone)]
pub struct MockTestRunner {
    outcome: Result<TestRun, CollaboratorError>,
}

impl MockTestRunner {
    pub fn new(outcome: Result<TestRun, CollaboratorError>) -> Self {
        Self { outcome }
    }

    /// A run where every test passes.
    pub fn passing() -> Self {
        Self {
            outcome: Ok(TestRun {
                results: vec![Self::result("test_add_positive", true, None)],
                coverage: None,
            }),
        }
    }

    /// A run that executes but reports one failing test.
    pub fn with_one_failure() -> Self {
        Self {
            outcome: Ok(TestRun {
                results: vec![
                    Self::result("test_add_positive", true, None),
                    Self::result(
                        "test_add_negative",
                        false,
                        Some("AssertionError: Expected -3, got 3".to_string()),
                    ),
                ],
                coverage: None,
            }),
        }
    }

    /// A run that could not be performed at all.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Err(CollaboratorError::Backend(message.into())),
        }
    }

    fn result(name: &str, passed: bool, error_message: Option<String>) -> TestResult {
        TestResult {
            test_case: TestCase {
                name: name.to_string(),
                description: format!("mock test {name}"),
                input_data: HashMap::new(),
                expected_output: HashMap::new(),
                is_mocked: true,
            },
            passed,
            actual_output: HashMap::new(),
            error_message,
            execution_time: 0.001,
        }
    }
}

#[async_trait]
impl TestRunner for MockTestRunner {
    async fn run_tests(
        &self,
        _code_content: &HashMap<String, String>,
        _generate_coverage: bool,
    ) -> Result<TestRun, CollaboratorError> {
        self.outcome.clone()
    }
}

#[derive(Clone)]
pub struct MockRepositoryClient {
    outcome: Result<PushOutcome, CollaboratorError>,
}

impl MockRepositoryClient {
    pub fn new(outcome: Result<PushOutcome, CollaboratorError>) -> Self {
        Self { outcome }
    }

    pub fn success() -> Self {
        Self {
            outcome: Ok(PushOutcome {
                deployment_url: "https://github.com/username/repo/commit/abc123".to_string(),
                logs: vec![
                    "Cloning repository...".to_string(),
                    "Committing changes...".to_string(),
                    "Pushing to remote...".to_string(),
                ],
            }),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Err(CollaboratorError::Backend(message.into())),
        }
    }
}

#[async_trait]
impl RepositoryClient for MockRepositoryClient {
    async fn push(
        &self,
        _code_content: &HashMap<String, String>,
        _config: &DeploymentConfig,
    ) -> Result<PushOutcome, CollaboratorError> {
        self.outcome.clone()
    }
}
