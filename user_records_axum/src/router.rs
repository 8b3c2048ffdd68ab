//! Combined router for the user records HTTP API

use std::sync::Arc;

use axum::{Router, response::Json, routing::get};
use serde_json::{Value, json};
use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use user_records::UserStore;

use super::config::USER_RECORDS_ALLOWED_ORIGINS;
use super::cors::build_cors_layer;

/// Create the router for the user records API
///
/// Endpoints:
/// - `GET /` health probe
/// - `POST /users` (also `/users/`), `GET /users`
/// - `GET|PUT|DELETE /users/{id}`
///
/// The CORS allow-list comes from `USER_RECORDS_ALLOWED_ORIGINS`, and every
/// request is traced at INFO level.
pub fn user_records_router(store: Arc<UserStore>) -> Router {
    user_records_router_no_trace(store).layer(
        TraceLayer::new_for_http()
            .make_span_with(
                DefaultMakeSpan::new()
                    .level(Level::INFO)
                    .include_headers(true),
            )
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(
                DefaultOnResponse::new()
                    .level(Level::INFO)
                    .latency_unit(LatencyUnit::Millis),
            ),
    )
}

/// Same as `user_records_router()` but without the HTTP tracing middleware
pub fn user_records_router_no_trace(store: Arc<UserStore>) -> Router {
    Router::new()
        .route("/", get(health))
        .merge(super::user::router())
        .layer(build_cors_layer(&USER_RECORDS_ALLOWED_ORIGINS))
        .with_state(store)
}

async fn health() -> Json<Value> {
    Json(json!({ "message": "Hello, user records!" }))
}
