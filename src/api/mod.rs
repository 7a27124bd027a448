//! HTTP API module for the demo service
//!
//! Dispatches the six fixed routes of the wire contract to independent
//! handlers.
//!
//! # Endpoints
//! - `GET /`: HTML greeting
//! - `GET /api`: service identity as JSON
//! - `/err`: simulated internal failure
//! - `/metrics`: Prometheus metrics
//! - `GET /health`: health check
//! - `POST /down`: mark the service unhealthy

pub mod handlers;
mod state;

use axum::extract::{Request, State};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::{Router, routing::any};
use std::sync::Arc;

use crate::metrics::RequestLabels;

pub use state::AppState;

/// Creates the main Axum router with all endpoints
///
/// `/`, `/api` and `/err` sit behind the request-counting layer;
/// `/metrics`, `/health` and `/down` stay uncounted. Every route is
/// registered for any method; the method checks live inside the
/// handlers so the statuses of the wire contract are preserved instead
/// of axum's automatic 405. Unknown paths get axum's default 404.
pub fn create_router(state: Arc<AppState>) -> Router {
    let counted = Router::new()
        .route("/", any(handlers::hello_handler))
        .route("/api", any(handlers::api_handler))
        .route("/err", any(handlers::error_handler))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            count_requests,
        ));

    Router::new()
        .merge(counted)
        .route("/metrics", any(handlers::metrics_handler))
        .route("/health", any(handlers::health_check))
        .route("/down", any(handlers::down_handler))
        .with_state(state)
}

/// Counts one completed request, labeled by final status code and method
async fn count_requests(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let response = next.run(request).await;

    state.metrics.inc_requests(&RequestLabels::new(
        response.status().as_u16(),
        method.as_str(),
    ));

    response
}
