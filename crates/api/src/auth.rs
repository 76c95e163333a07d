//! API-key authentication middleware.

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::Response;

use crate::error::ApiError;
use crate::state::AppState;

pub const API_KEY_HEADER: &str = "X-API-Key";

/// Outcome of checking the `X-API-Key` header against the configured key.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyCheck {
    Valid,
    Missing,
    Invalid,
}

/// Pure check so the policy is testable without a request in flight.
pub fn check_api_key(provided: Option<&str>, expected: &str) -> KeyCheck {
    match provided {
        None => KeyCheck::Missing,
        Some(key) if key == expected => KeyCheck::Valid,
        Some(_) => KeyCheck::Invalid,
    }
}

/// Reject requests without a valid key. A missing header is distinguished
/// from a wrong one so clients can tell misconfiguration from bad secrets.
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let provided = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok());

    match check_api_key(provided, &state.api_key) {
        KeyCheck::Valid => Ok(next.run(request).await),
        KeyCheck::Missing => Err(ApiError::new(
            StatusCode::UNAUTHORIZED,
            "API key is missing",
        )),
        KeyCheck::Invalid => Err(ApiError::new(StatusCode::FORBIDDEN, "Invalid API key")),
    }
}
