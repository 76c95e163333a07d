//! HTTP front-end for the Vulcan coding agent.
//!
//! Exposes the three long-running operations (code generation, testing,
//! deployment) plus status polling over a JSON API, and serves a small
//! embedded browser dashboard. All state lives in [`state::AppState`];
//! handlers are thin wrappers over the core workflows.

pub mod auth;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod routes;
pub mod state;

use axum::middleware;
use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Build the full application router.
///
/// Operation and status routes sit behind the API-key guard; the health
/// check and the dashboard are open.
pub fn router(state: AppState) -> Router {
    let protected = Router::new()
        .route(
            "/api/v1/code-generation/generate",
            post(routes::generation::generate),
        )
        .route("/api/v1/testing/run", post(routes::testing::run))
        .route("/api/v1/deployment/deploy", post(routes::deployment::deploy))
        .route("/api/v1/status/:process_id", get(routes::status::get_status))
        .route("/api/v1/status", get(routes::status::list_statuses))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_api_key,
        ));

    Router::new()
        .route("/", get(routes::health::root))
        .route("/health", get(routes::health::health))
        .route("/dashboard", get(dashboard::index))
        .route("/dashboard/*path", get(dashboard::asset))
        .merge(protected)
        .with_state(state)
}
