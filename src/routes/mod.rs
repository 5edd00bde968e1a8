pub mod explanations;
pub mod health;
pub mod topics;

use axum::extract::DefaultBodyLimit;
use axum::Router;

use crate::middleware::{rate_limit, request_id};
use crate::response::AppError;
use crate::state::AppState;

/// 讲解查询没有字符数上限，由请求体大小约束
const MAX_BODY_SIZE: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .nest("/explanations", explanations::router())
        .nest("/topics", topics::router())
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            rate_limit::rate_limit_middleware,
        ))
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE));

    Router::new()
        .nest("/api", api_routes)
        .nest("/health", health::router())
        .fallback(fallback_404)
        .layer(axum::middleware::from_fn(request_id::request_id_middleware))
        .with_state(state)
}

async fn fallback_404() -> AppError {
    AppError::not_found("Not found")
}
