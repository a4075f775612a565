use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::router::AppState;

/// Triggers one collection pass and serves it in the text exposition format.
pub async fn serve_metrics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let payload = state.registry.render_text();

    let mut response = Response::new(Body::from(payload));
    *response.status_mut() = StatusCode::OK;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; version=0.0.4; charset=utf-8"),
    );

    response
}
