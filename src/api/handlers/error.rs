use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// /err (any method)
///
/// Simulates an internal failure so external probes can exercise the
/// failure path: records one diagnostic line and answers 500 with an
/// empty body.
pub async fn error_handler() -> Response {
    tracing::error!("Unexpected error occurred");
    StatusCode::INTERNAL_SERVER_ERROR.into_response()
}
