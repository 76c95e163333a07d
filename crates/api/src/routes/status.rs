//! Status polling endpoints.

use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;
use vulcan_protocol::api_models::StatusResponse;

use crate::error::ApiError;
use crate::state::AppState;

/// `GET /api/v1/status/:process_id`
pub async fn get_status(
    State(state): State<AppState>,
    Path(process_id): Path<String>,
) -> Result<Json<StatusResponse>, ApiError> {
    let id = process_id
        .parse::<Uuid>()
        .map_err(|_| ApiError::not_found(format!("Process {process_id} not found")))?;

    match state.registry.get(id).await {
        Some(process) => Ok(Json(StatusResponse::from(&process))),
        None => Err(ApiError::not_found(format!(
            "Process {process_id} not found"
        ))),
    }
}

/// `GET /api/v1/status`
pub async fn list_statuses(State(state): State<AppState>) -> Json<Vec<StatusResponse>> {
    let mut processes = state.registry.list().await;
    // Newest first, the order the dashboard shows them.
    processes.sort_by(|a, b| b.start_time.cmp(&a.start_time));
    Json(processes.iter().map(StatusResponse::from).collect())
}
