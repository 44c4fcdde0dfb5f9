//! Routes for the score registry.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Json, Router, routing::get};
use scoreboard_core::record::ScoreRecord;
use serde::Deserialize;
use tracing::{Span, info, instrument};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /.
#[derive(Debug, Deserialize)]
pub struct CreateScoreRequest {
    /// Username to register; must not be blank.
    pub name: String,
    /// Initial score.
    pub score: i64,
}

/// Request body for PUT /{name}. A `name` in the body is ignored.
#[derive(Debug, Deserialize)]
pub struct UpdateScoreRequest {
    /// Replacement score.
    pub score: i64,
}

/// GET /
#[instrument(skip(state), fields(request_id = %Uuid::new_v4()))]
async fn list_scores(State(state): State<AppState>) -> Json<Vec<ScoreRecord>> {
    let records = state.store.list();
    info!(count = records.len(), "listed scores");
    Json(records)
}

/// GET /{name}
#[instrument(skip(state), fields(request_id = %Uuid::new_v4()))]
async fn get_score(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ScoreRecord>, ApiError> {
    let record = state.store.get(&name)?;
    Ok(Json(record))
}

/// POST /
#[instrument(
    skip_all,
    fields(request_id = %Uuid::new_v4(), name = tracing::field::Empty)
)]
async fn create_score(
    State(state): State<AppState>,
    payload: Result<Json<CreateScoreRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(request) = payload?;
    Span::current().record("name", request.name.as_str());
    if request.name.trim().is_empty() {
        return Err(ApiError::BadRequest("name must not be empty".into()));
    }

    state.store.create(&request.name, request.score)?;
    info!(score = request.score, "score created");

    Ok(StatusCode::ACCEPTED)
}

/// PUT /{name}
#[instrument(skip(state, payload), fields(request_id = %Uuid::new_v4()))]
async fn update_score(
    State(state): State<AppState>,
    Path(name): Path<String>,
    payload: Result<Json<UpdateScoreRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(request) = payload?;

    state.store.update(&name, request.score)?;
    info!(score = request.score, "score updated");

    Ok(StatusCode::ACCEPTED)
}

/// DELETE /{name}
#[instrument(skip(state), fields(request_id = %Uuid::new_v4()))]
async fn delete_score(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.store.delete(&name)?;
    info!("score deleted");

    Ok(StatusCode::ACCEPTED)
}

/// Returns the router for the score registry.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_scores).post(create_score))
        .route(
            "/{name}",
            get(get_score).put(update_score).delete(delete_score),
        )
}
