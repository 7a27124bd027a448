use axum::extract::State;
use axum::http::{Method, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use std::sync::Arc;

use crate::api::AppState;
use crate::service::ServiceInfo;

/// GET /
///
/// Renders the HTML greeting embedding the service identity and the
/// configured background color. Any other method is rejected with 400.
pub async fn hello_handler(State(state): State<Arc<AppState>>, method: Method) -> Response {
    if method != Method::GET {
        return StatusCode::BAD_REQUEST.into_response();
    }

    let info = ServiceInfo::current();
    let page = format!(
        "<html><head><title>Hello World</title></head>\
         <body style=\"background-color: {}\"><h1>Hello from {} version {}</h1></body></html>",
        state.config.background_color, info.hostname, info.version
    );

    Html(page).into_response()
}
