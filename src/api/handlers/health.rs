use axum::extract::State;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::api::AppState;

/// GET /health
///
/// Reads the health flag under the read lock: 200 "Healthy" while the
/// flag is set, 503 "Unhealthy" after `/down`. Non-GET requests write
/// nothing and fall through to the default 200.
pub async fn health_check(State(state): State<Arc<AppState>>, method: Method) -> Response {
    if method != Method::GET {
        return StatusCode::OK.into_response();
    }

    if state.health.is_healthy().await {
        (StatusCode::OK, "Healthy").into_response()
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "Unhealthy").into_response()
    }
}

/// POST /down
///
/// Takes the write lock and marks the service unhealthy for the rest of
/// the process lifetime; the response stays the default 200. Any other
/// method is rejected with 400 and leaves the flag untouched.
pub async fn down_handler(State(state): State<Arc<AppState>>, method: Method) -> Response {
    if method == Method::POST {
        state.health.mark_down().await;
        StatusCode::OK.into_response()
    } else {
        StatusCode::BAD_REQUEST.into_response()
    }
}
