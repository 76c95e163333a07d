//! Embedded browser dashboard.
//!
//! A single static page embedded into the binary with `rust-embed`, so the
//! server ships a working dashboard without external file dependencies. The
//! page polls the status endpoints with the API key the user enters.

use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets/"]
pub struct DashboardAssets;

fn serve(path: &str) -> Response {
    match DashboardAssets::get(path) {
        Some(file) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            (
                [(header::CONTENT_TYPE, mime.as_ref().to_string())],
                file.data.into_owned(),
            )
                .into_response()
        }
        None => (StatusCode::NOT_FOUND, "not found").into_response(),
    }
}

/// `GET /dashboard`
pub async fn index() -> Response {
    serve("dashboard.html")
}

/// `GET /dashboard/*path`
pub async fn asset(Path(path): Path<String>) -> Response {
    serve(path.trim_start_matches('/'))
}
