use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::Router;
use serde::Deserialize;

use crate::extractors::JsonBody;
use crate::response::{created, ok, AppError};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(resolve_explanation))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResolveRequest {
    topic: String,
}

/// 201 when the explanation was synthesized by this request, 200 when served
/// from storage.
async fn resolve_explanation(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<ResolveRequest>,
) -> Result<Response, AppError> {
    let resolution = state.explainer().resolve(&req.topic)?;

    if resolution.created {
        Ok(created(resolution).into_response())
    } else {
        Ok(ok(resolution).into_response())
    }
}
