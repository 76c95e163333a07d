//! End-to-end workflow scenarios against a shared registry.
//!
//! Each test drives a full operation the way a front-end would: kick off a
//! workflow, then poll the registry by process id and inspect the snapshot.

use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;
use vulcan_core::collaborators::adapters::{
    MockCodeGenerator, MockRepositoryClient, MockTestRunner,
};
use vulcan_core::state::ProcessRegistry;
use vulcan_core::workflows::{
    DeploymentWorkflow, GenerationWorkflow, TestingWorkflow, STEP_GENERATE_CODE,
    STEP_PUSH_TO_REPOSITORY, STEP_RUN_TESTS,
};
use vulcan_protocol::deployment_models::DeploymentConfig;
use vulcan_protocol::generation_models::Requirements;
use vulcan_protocol::process_models::{ProcessStatus, ProcessType};

fn bundle() -> HashMap<String, String> {
    HashMap::from([(
        "add.py".to_string(),
        "def add(a, b):\n    return a + b\n".to_string(),
    )])
}

fn deploy_config() -> DeploymentConfig {
    DeploymentConfig {
        environment: "production".to_string(),
        repository_url: "https://github.com/username/repo.git".to_string(),
        branch: "main".to_string(),
        commit_message: "Deploy code via Vulcan API".to_string(),
        additional_config: HashMap::new(),
    }
}

#[tokio::test]
async fn test_generation_success_is_observable_through_polling() {
    let registry = Arc::new(ProcessRegistry::new());
    let workflow =
        GenerationWorkflow::new(Arc::clone(&registry), Arc::new(MockCodeGenerator::success()));

    let outcome = workflow
        .execute(&Requirements::new("Create an add function"))
        .await
        .expect("execute should succeed");
    assert!(outcome.success);

    let state = registry.get(outcome.process_id).await.expect("process exists");
    assert_eq!(state.process_type, ProcessType::CodeGeneration);
    assert_eq!(state.status, ProcessStatus::Completed);
    assert!(state.end_time.is_some());
    assert!(state.end_time.expect("set") >= state.start_time);
    assert_eq!(state.steps.len(), 1);
    assert_eq!(state.steps[0].name, STEP_GENERATE_CODE);
    assert_eq!(state.steps[0].status, ProcessStatus::Completed);
    assert_eq!(state.artifacts.len(), 1);
    assert!(state.errors.is_empty());
}

#[tokio::test]
async fn test_failing_tests_complete_the_process_without_errors() {
    let registry = Arc::new(ProcessRegistry::new());
    let workflow = TestingWorkflow::new(
        Arc::clone(&registry),
        Arc::new(MockTestRunner::with_one_failure()),
    );

    let outcome = workflow
        .execute(&bundle(), true)
        .await
        .expect("execute should succeed");

    assert!(outcome.success);
    assert_eq!(outcome.test_results.len(), 2);
    assert!(outcome.test_results.iter().any(|result| !result.passed));

    let state = registry.get(outcome.process_id).await.expect("process exists");
    assert_eq!(state.status, ProcessStatus::Completed);
    assert_eq!(state.steps[0].name, STEP_RUN_TESTS);
    assert!(state.errors.is_empty());
}

#[tokio::test]
async fn test_deployment_auth_failure_leaves_exactly_one_error() {
    let registry = Arc::new(ProcessRegistry::new());
    let workflow = DeploymentWorkflow::new(
        Arc::clone(&registry),
        Arc::new(MockRepositoryClient::failing("Authentication failed")),
    );

    let outcome = workflow
        .execute(&bundle(), &deploy_config())
        .await
        .expect("execute should return a structured outcome");
    assert!(!outcome.success);

    let state = registry.get(outcome.process_id).await.expect("process exists");
    assert_eq!(state.status, ProcessStatus::Failed);
    assert!(state.end_time.is_some());
    assert_eq!(state.steps[0].name, STEP_PUSH_TO_REPOSITORY);
    assert_eq!(state.steps[0].status, ProcessStatus::Failed);
    assert_eq!(state.errors, vec!["Failed to deploy code: Authentication failed"]);
    assert!(state.artifacts.is_empty());
}

#[tokio::test]
async fn test_polling_an_unknown_process_id_returns_nothing() {
    let registry = ProcessRegistry::new();
    registry.create(ProcessType::Testing).await;

    assert!(registry.get(Uuid::new_v4()).await.is_none());
}

#[tokio::test]
async fn test_concurrent_operations_are_tracked_independently() {
    let registry = Arc::new(ProcessRegistry::new());

    let generation =
        GenerationWorkflow::new(Arc::clone(&registry), Arc::new(MockCodeGenerator::success()));
    let testing = TestingWorkflow::new(
        Arc::clone(&registry),
        Arc::new(MockTestRunner::passing()),
    );
    let deployment = DeploymentWorkflow::new(
        Arc::clone(&registry),
        Arc::new(MockRepositoryClient::failing("Authentication failed")),
    );

    let requirements = Requirements::new("Create an add function");
    let test_bundle = bundle();
    let deploy_bundle = bundle();
    let config = deploy_config();
    let (gen_outcome, test_outcome, deploy_outcome) = tokio::join!(
        generation.execute(&requirements),
        testing.execute(&test_bundle, false),
        deployment.execute(&deploy_bundle, &config),
    );

    let gen_outcome = gen_outcome.expect("generation should succeed");
    let test_outcome = test_outcome.expect("testing should succeed");
    let deploy_outcome = deploy_outcome.expect("deployment should return an outcome");

    assert_eq!(registry.count().await, 3);

    let gen_state = registry.get(gen_outcome.process_id).await.expect("exists");
    assert_eq!(gen_state.process_type, ProcessType::CodeGeneration);
    assert_eq!(gen_state.status, ProcessStatus::Completed);

    let test_state = registry.get(test_outcome.process_id).await.expect("exists");
    assert_eq!(test_state.process_type, ProcessType::Testing);
    assert_eq!(test_state.status, ProcessStatus::Completed);

    // The deployment failure must not leak into the other two records.
    let deploy_state = registry.get(deploy_outcome.process_id).await.expect("exists");
    assert_eq!(deploy_state.process_type, ProcessType::Deployment);
    assert_eq!(deploy_state.status, ProcessStatus::Failed);
    assert!(gen_state.errors.is_empty());
    assert!(test_state.errors.is_empty());
}
