use axum::Json;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::service::ServiceInfo;

/// GET /api
///
/// Serializes the service identity as `{"Version":"...","Hostname":"..."}`.
/// Any other method is rejected with 400.
pub async fn api_handler(method: Method) -> Response {
    if method != Method::GET {
        return StatusCode::BAD_REQUEST.into_response();
    }

    Json(ServiceInfo::current()).into_response()
}
