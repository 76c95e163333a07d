//! Test run endpoint.

use axum::extract::State;
use axum::Json;
use vulcan_protocol::api_models::{
    CoverageSummary, TestCodeRequest, TestCodeResponse, TestResultSummary,
};

use crate::error::ApiError;
use crate::state::AppState;

/// `POST /api/v1/testing/run`
pub async fn run(
    State(state): State<AppState>,
    Json(request): Json<TestCodeRequest>,
) -> Result<Json<TestCodeResponse>, ApiError> {
    let outcome = state
        .testing
        .execute(&request.code_content, request.generate_coverage)
        .await?;

    Ok(Json(TestCodeResponse {
        success: outcome.success,
        process_id: outcome.process_id.to_string(),
        test_results: outcome
            .test_results
            .iter()
            .map(TestResultSummary::from)
            .collect(),
        coverage: outcome.coverage.as_ref().map(CoverageSummary::from),
        error_message: outcome.error_message,
    }))
}
