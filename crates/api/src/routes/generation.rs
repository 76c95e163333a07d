//! Code generation endpoint.

use axum::extract::State;
use axum::Json;
use vulcan_protocol::api_models::{GenerateCodeRequest, GenerateCodeResponse};
use vulcan_protocol::generation_models::Requirements;

use crate::error::ApiError;
use crate::state::AppState;

/// `POST /api/v1/code-generation/generate`
pub async fn generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateCodeRequest>,
) -> Result<Json<GenerateCodeResponse>, ApiError> {
    let requirements = Requirements {
        description: request.description,
        constraints: request.constraints,
        examples: request.examples,
    };

    let outcome = state.generation.execute(&requirements).await?;

    Ok(Json(GenerateCodeResponse {
        success: outcome.success,
        process_id: outcome.process_id.to_string(),
        artifacts: outcome.artifacts,
        error_message: outcome.error_message,
    }))
}
