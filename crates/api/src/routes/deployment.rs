//! Deployment endpoint.

use std::collections::HashMap;

use axum::extract::State;
use axum::Json;
use vulcan_protocol::api_models::{DeployCodeRequest, DeployCodeResponse};
use vulcan_protocol::deployment_models::DeploymentConfig;

use crate::error::ApiError;
use crate::state::AppState;

/// `POST /api/v1/deployment/deploy`
pub async fn deploy(
    State(state): State<AppState>,
    Json(request): Json<DeployCodeRequest>,
) -> Result<Json<DeployCodeResponse>, ApiError> {
    let config = DeploymentConfig {
        environment: "production".to_string(),
        repository_url: request.repository_url,
        branch: request.branch,
        commit_message: request.commit_message,
        additional_config: HashMap::new(),
    };

    let outcome = state
        .deployment
        .execute(&request.code_content, &config)
        .await?;

    Ok(Json(DeployCodeResponse {
        success: outcome.success,
        process_id: outcome.process_id.to_string(),
        deployment_url: outcome.deployment_url,
        logs: outcome.logs,
        error_message: outcome.error_message,
    }))
}
