use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;

use crate::catalog::featured::FEATURED_TOPICS;
use crate::response::{ok, AppError};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/search", get(search_topics))
        .route("/popular", get(popular_topics))
        .route("/featured", get(featured_topics))
        .route("/:id", get(get_topic))
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    q: Option<String>,
}

async fn search_topics(
    Query(query): Query<SearchQuery>,
    State(state): State<AppState>,
) -> impl axum::response::IntoResponse {
    let q = query.q.unwrap_or_default();
    ok(state.explainer().search(&q))
}

async fn popular_topics(State(state): State<AppState>) -> impl axum::response::IntoResponse {
    ok(state.explainer().popular())
}

async fn featured_topics() -> impl axum::response::IntoResponse {
    ok(FEATURED_TOPICS)
}

async fn get_topic(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let topic = state
        .store()
        .get_topic_with_explanations(&id)?
        .ok_or_else(|| AppError::not_found("Topic not found"))?;
    Ok(ok(topic))
}
