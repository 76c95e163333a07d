use vulcan_protocol::*;

use chrono::{TimeZone, Utc};
use std::collections::HashMap;
use uuid::Uuid;

#[test]
fn test_process_status_serialization_table() {
    // The wire strings are a fixed contract; every variant is listed here.
    let table = [
        (ProcessStatus::NotStarted, "not_started"),
        (ProcessStatus::InProgress, "in_progress"),
        (ProcessStatus::Completed, "completed"),
        (ProcessStatus::Failed, "failed"),
    ];

    for (status, expected) in table {
        let json = serde_json::to_value(status).expect("Failed to serialize ProcessStatus");
        assert_eq!(json, expected);
        assert_eq!(status.as_str(), expected);

        let deserialized: ProcessStatus =
            serde_json::from_value(json).expect("Failed to deserialize ProcessStatus");
        assert_eq!(deserialized, status);
    }
}

#[test]
fn test_process_type_serialization_table() {
    let table = [
        (ProcessType::CodeGeneration, "code_generation"),
        (ProcessType::Testing, "testing"),
        (ProcessType::Deployment, "deployment"),
    ];

    for (process_type, expected) in table {
        let json = serde_json::to_value(process_type).expect("Failed to serialize ProcessType");
        assert_eq!(json, expected);
        assert_eq!(process_type.as_str(), expected);

        let deserialized: ProcessType =
            serde_json::from_value(json).expect("Failed to deserialize ProcessType");
        assert_eq!(deserialized, process_type);
    }
}

#[test]
fn test_process_state_round_trip() {
    let start = Utc.with_ymd_and_hms(2023, 6, 1, 12, 0, 0).single().expect("valid time");
    let step_end = Utc.with_ymd_and_hms(2023, 6, 1, 12, 1, 0).single().expect("valid time");
    let end = Utc.with_ymd_and_hms(2023, 6, 1, 12, 5, 0).single().expect("valid time");

    let state = ProcessState {
        process_id: Uuid::new_v4(),
        process_type: ProcessType::CodeGeneration,
        status: ProcessStatus::Completed,
        start_time: start,
        end_time: Some(end),
        steps: vec![
            ProcessStep {
                name: "generate_code".to_string(),
                status: ProcessStatus::Completed,
                start_time: start,
                end_time: Some(step_end),
            },
            ProcessStep {
                name: "write_output".to_string(),
                status: ProcessStatus::Completed,
                start_time: step_end,
                end_time: Some(end),
            },
        ],
        artifacts: vec![serde_json::json!({
            "file_path": "add.py",
            "content": "def add(a, b):\n    return a + b\n",
            "language": "python",
        })],
        errors: vec![],
    };

    let json = serde_json::to_string(&state).expect("Failed to serialize ProcessState");
    let deserialized: ProcessState =
        serde_json::from_str(&json).expect("Failed to deserialize ProcessState");

    // Every field survives, including step order and timestamps.
    assert_eq!(deserialized, state);
    assert_eq!(deserialized.steps[0].name, "generate_code");
    assert_eq!(deserialized.steps[1].name, "write_output");
}

#[test]
fn test_status_response_projection_round_trip() {
    let mut state = ProcessState::new(ProcessType::Deployment);
    state.status = ProcessStatus::Failed;
    state.end_time = Some(Utc::now());
    state.errors.push("Failed to deploy code: Authentication failed".to_string());

    let response = StatusResponse::from(&state);
    assert_eq!(response.process_id, state.process_id.to_string());
    assert_eq!(response.process_type, "deployment");
    assert_eq!(response.status, "failed");
    assert_eq!(response.errors, state.errors);

    let json = serde_json::to_string(&response).expect("Failed to serialize StatusResponse");
    let deserialized: StatusResponse =
        serde_json::from_str(&json).expect("Failed to deserialize StatusResponse");
    assert_eq!(deserialized, response);
}

#[test]
fn test_generate_code_request_optional_fields_default() {
    let json = r#"{"description": "Create a factorial function"}"#;
    let request: GenerateCodeRequest =
        serde_json::from_str(json).expect("Failed to deserialize GenerateCodeRequest");

    assert_eq!(request.description, "Create a factorial function");
    assert!(request.constraints.is_empty());
    assert!(request.examples.is_empty());
}

#[test]
fn test_deploy_code_request_defaults() {
    let json = r#"{
        "code_content": {"factorial.py": "def factorial(n): ..."},
        "repository_url": "https://github.com/username/repo.git"
    }"#;
    let request: DeployCodeRequest =
        serde_json::from_str(json).expect("Failed to deserialize DeployCodeRequest");

    assert_eq!(request.branch, "main");
    assert_eq!(request.commit_message, "Deploy code via Vulcan API");
}

#[test]
fn test_test_result_summary_from_test_result() {
    let result = TestResult {
        test_case: TestCase {
            name: "test_factorial_positive".to_string(),
            description: "factorial of positive numbers".to_string(),
            input_data: HashMap::new(),
            expected_output: HashMap::new(),
            is_mocked: false,
        },
        passed: false,
        actual_output: HashMap::new(),
        error_message: Some("AssertionError: Expected 120, got 60".to_string()),
        execution_time: 0.001,
    };

    let summary = TestResultSummary::from(&result);
    assert_eq!(summary.name, "test_factorial_positive");
    assert!(!summary.passed);
    assert_eq!(summary.error_message.as_deref(), Some("AssertionError: Expected 120, got 60"));
}

#[test]
fn test_code_metadata_round_trip() {
    let metadata = CodeMetadata {
        generation_timestamp: "2023-06-01T12:00:00Z".to_string(),
        model_used: "mock-generator".to_string(),
        prompt_tokens: 128,
        completion_tokens: 256,
        additional_info: HashMap::from([("temperature".to_string(), "0.2".to_string())]),
    };

    let json = serde_json::to_string(&metadata).expect("Failed to serialize CodeMetadata");
    let deserialized: CodeMetadata =
        serde_json::from_str(&json).expect("Failed to deserialize CodeMetadata");
    assert_eq!(deserialized, metadata);

    // additional_info is optional on the wire.
    let bare: CodeMetadata = serde_json::from_str(
        r#"{
            "generation_timestamp": "2023-06-01T12:00:00Z",
            "model_used": "mock-generator",
            "prompt_tokens": 128,
            "completion_tokens": 256
        }"#,
    )
    .expect("Failed to deserialize CodeMetadata without extras");
    assert!(bare.additional_info.is_empty());
}

#[test]
fn test_release_metadata_round_trip() {
    let metadata = ReleaseMetadata {
        version: "1.2.0".to_string(),
        release_notes: "Adds factorial support".to_string(),
        release_timestamp: "2023-06-01T12:05:00Z".to_string(),
        author: "vulcan".to_string(),
        additional_info: HashMap::new(),
    };

    let json = serde_json::to_string(&metadata).expect("Failed to serialize ReleaseMetadata");
    let deserialized: ReleaseMetadata =
        serde_json::from_str(&json).expect("Failed to deserialize ReleaseMetadata");
    assert_eq!(deserialized, metadata);
}

#[test]
fn test_deployment_status_omits_nothing_on_the_wire() {
    let status = DeploymentStatus {
        status: ProcessStatus::Failed,
        deployment_url: None,
        logs: vec!["Cloning repository...".to_string()],
        error_message: Some("Authentication failed".to_string()),
    };

    let json = serde_json::to_value(&status).expect("Failed to serialize DeploymentStatus");
    assert_eq!(json["status"], "failed");
    assert!(json["deployment_url"].is_null());
    assert_eq!(json["logs"][0], "Cloning repository...");
    assert_eq!(json["error_message"], "Authentication failed");
}

#[test]
fn test_coverage_summary_from_test_coverage() {
    let coverage = TestCoverage {
        line_coverage: 95.0,
        branch_coverage: 85.0,
        function_coverage: 100.0,
        file_coverage: HashMap::from([("factorial.py".to_string(), 95.0)]),
    };

    let summary = CoverageSummary::from(&coverage);
    assert_eq!(summary.line, 95.0);
    assert_eq!(summary.branch, 85.0);
    assert_eq!(summary.function, 100.0);
}
