//! Testing workflow.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::json;
use vulcan_protocol::process_models::ProcessType;

use crate::collaborators::TestRunner;
use crate::error::{CoreError, CoreResult};
use crate::state::ProcessRegistry;
use crate::workflows::{TestingOutcome, STEP_RUN_TESTS};

/// Orchestrates one test run: a single `run_tests` step against the
/// test-runner backend, tracked in the registry.
///
/// The outcome's `success` reflects whether the run executed; a run that
/// executes but reports failing tests still completes the process.
pub struct TestingWorkflow {
    registry: Arc<ProcessRegistry>,
    runner: Arc<dyn TestRunner>,
}

impl TestingWorkflow {
    pub fn new(registry: Arc<ProcessRegistry>, runner: Arc<dyn TestRunner>) -> Self {
        Self { registry, runner }
    }

    /// Run tests against a code bundle (file path -> source content).
    ///
    /// # Errors
    ///
    /// `Validation` if the bundle is empty (no process is created).
    /// Registry errors indicate a bug in this orchestrator.
    pub async fn execute(
        &self,
        code_content: &HashMap<String, String>,
        generate_coverage: bool,
    ) -> CoreResult<TestingOutcome> {
        if code_content.is_empty() {
            return Err(CoreError::Validation(
                "code_content must contain at least one file".to_string(),
            ));
        }

        let process_id = self.registry.create(ProcessType::Testing).await;
        tracing::info!(%process_id, files = code_content.len(), "starting test run");

        self.registry.begin_step(process_id, STEP_RUN_TESTS).await?;

        match self.runner.run_tests(code_content, generate_coverage).await {
            Ok(run) => {
                self.registry
                    .end_step(process_id, STEP_RUN_TESTS, true, None)
                    .await?;

                let mut records: Vec<serde_json::Value> = run
                    .results
                    .iter()
                    .map(|result| {
                        json!({
                            "name": result.test_case.name,
                            "passed": result.passed,
                            "execution_time": result.execution_time,
                            "error_message": result.error_message,
                        })
                    })
                    .collect();
                if let Some(coverage) = &run.coverage {
                    records.push(json!({
                        "line_coverage": coverage.line_coverage,
                        "branch_coverage": coverage.branch_coverage,
                        "function_coverage": coverage.function_coverage,
                    }));
                }
                self.registry.complete(process_id, records, None).await?;

                let failed = run.results.iter().filter(|result| !result.passed).count();
                tracing::info!(
                    %process_id,
                    total = run.results.len(),
                    failed,
                    "test run completed"
                );

                Ok(TestingOutcome {
                    success: true,
                    process_id,
                    test_results: run.results,
                    coverage: run.coverage,
                    error_message: None,
                })
            }
            Err(backend_error) => {
                let message = format!("Failed to run tests: {backend_error}");
                self.registry
                    .end_step(process_id, STEP_RUN_TESTS, false, Some(message.clone()))
                    .await?;
                self.registry
                    .complete(process_id, Vec::new(), Some(message.clone()))
                    .await?;

                tracing::error!(%process_id, error = %message, "test run failed");
                Ok(TestingOutcome {
                    success: false,
                    process_id,
                    test_results: Vec::new(),
                    coverage: None,
                    error_message: Some(message),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collaborators::adapters::MockTestRunner;
    use vulcan_protocol::process_models::ProcessStatus;

    fn sample_bundle() -> HashMap<String, String> {
        HashMap::from([(
            "add.py".to_string(),
            "def add(a, b):\n    return a + b\n".to_string(),
        )])
    }

    fn workflow(runner: MockTestRunner) -> (Arc<ProcessRegistry>, TestingWorkflow) {
        let registry = Arc::new(ProcessRegistry::new());
        let workflow = TestingWorkflow::new(Arc::clone(&registry), Arc::new(runner));
        (registry, workflow)
    }

    #[tokio::test]
    async fn test_run_with_individual_failures_is_still_a_successful_run() {
        let (registry, workflow) = workflow(MockTestRunner::with_one_failure());

        let outcome = workflow
            .execute(&sample_bundle(), false)
            .await
            .expect("execute should succeed");

        // The run executed, so the workflow reports success even though one
        // embedded result failed.
        assert!(outcome.success);
        assert!(outcome.error_message.is_none());
        assert_eq!(outcome.test_results.len(), 2);
        assert!(!outcome.test_results[1].passed);

        let state = registry.get(outcome.process_id).await.expect("process exists");
        assert_eq!(state.status, ProcessStatus::Completed);
        assert!(state.errors.is_empty());
        assert_eq!(state.artifacts.len(), 2);
        assert_eq!(state.artifacts[1]["passed"], false);
    }

    #[tokio::test]
    async fn test_unexecutable_run_fails_the_process() {
        let (registry, workflow) = workflow(MockTestRunner::failing("Syntax error in code"));

        let outcome = workflow
            .execute(&sample_bundle(), false)
            .await
            .expect("execute should return a structured outcome");

        assert!(!outcome.success);
        assert!(outcome.test_results.is_empty());
        assert_eq!(
            outcome.error_message.as_deref(),
            Some("Failed to run tests: Syntax error in code")
        );

        let state = registry.get(outcome.process_id).await.expect("process exists");
        assert_eq!(state.status, ProcessStatus::Failed);
        assert_eq!(state.errors, vec!["Failed to run tests: Syntax error in code"]);
    }

    #[tokio::test]
    async fn test_empty_bundle_is_rejected() {
        let (registry, workflow) = workflow(MockTestRunner::passing());

        let result = workflow.execute(&HashMap::new(), false).await;
        assert!(matches!(result, Err(CoreError::Validation(_))));
        assert_eq!(registry.count().await, 0);
    }
}
