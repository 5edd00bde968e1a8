use std::time::Instant;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(health_check))
        .route("/live", get(liveness))
        .route("/ready", get(readiness))
        .route("/database", get(database_health))
}

pub async fn health_check(State(state): State<AppState>) -> impl axum::response::IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "uptimeSecs": state.uptime_secs(),
    }))
}

pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

pub async fn readiness(State(state): State<AppState>) -> StatusCode {
    match state.store().count_topics() {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}

pub async fn database_health(
    State(state): State<AppState>,
) -> impl axum::response::IntoResponse {
    let start = Instant::now();
    let probe = state.store().get_topic("__health_check__");
    let latency_us = start.elapsed().as_micros() as u64;
    let topic_count = state.store().count_topics().unwrap_or(0);

    if let Err(e) = &probe {
        tracing::error!(error = %e, "Database health probe failed");
    }

    Json(serde_json::json!({
        "healthy": probe.is_ok(),
        "latencyUs": latency_us,
        "topicCount": topic_count,
    }))
}
