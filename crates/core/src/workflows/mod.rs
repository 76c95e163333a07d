//! Workflow orchestrators.
//!
//! Three instances of the same shape: create a process record, run exactly
//! one collaborator step while recording transitions in the registry, and
//! finalize the record with artifacts or an error. The `execute` call a
//! front-end makes returns only after the whole operation finishes or
//! fails; polling happens independently through the registry.

pub mod deployment;
pub mod generation;
pub mod testing;

use uuid::Uuid;
use vulcan_protocol::generation_models::CodeArtifact;
use vulcan_protocol::testing_models::{TestCoverage, TestResult};

pub use deployment::DeploymentWorkflow;
pub use generation::GenerationWorkflow;
pub use testing::TestingWorkflow;

/// Step name used by [`GenerationWorkflow`].
pub const STEP_GENERATE_CODE: &str = "generate_code";

/// Step name used by [`TestingWorkflow`].
pub const STEP_RUN_TESTS: &str = "run_tests";

/// Step name used by [`DeploymentWorkflow`].
pub const STEP_PUSH_TO_REPOSITORY: &str = "push_to_repository";

/// Result of one generation run.
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    pub success: bool,
    pub process_id: Uuid,
    pub artifacts: Vec<CodeArtifact>,
    pub error_message: Option<String>,
}

/// Result of one test run.
///
/// `success` reflects whether the run executed; individual failing tests
/// live in `test_results` and do not make the run unsuccessful.
#[derive(Debug, Clone)]
pub struct TestingOutcome {
    pub success: bool,
    pub process_id: Uuid,
    pub test_results: Vec<TestResult>,
    pub coverage: Option<TestCoverage>,
    pub error_message: Option<String>,
}

/// Result of one deployment run.
#[derive(Debug, Clone)]
pub struct DeploymentOutcome {
    pub success: bool,
    pub process_id: Uuid,
    pub deployment_url: Option<String>,
    pub logs: Vec<String>,
    pub error_message: Option<String>,
}
