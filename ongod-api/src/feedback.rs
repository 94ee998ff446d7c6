use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use ongod_store::{FeedbackEntry, StoreError};
use serde::Deserialize;

use crate::error::AppError;
use crate::extract::JsonBody;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    #[serde(default)]
    pub msg: String,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/feedback", get(list_feedback).post(submit_feedback))
}

/// POST /v1/feedback
async fn submit_feedback(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<FeedbackRequest>,
) -> Result<(StatusCode, Json<FeedbackEntry>), AppError> {
    match state.feedback.submit(&req.msg).await {
        Ok(entry) => Ok((StatusCode::CREATED, Json(entry))),
        Err(StoreError::EmptyFeedback) => Err(AppError::ValidationError(
            "Feedback message is empty".to_string(),
        )),
        Err(e) => Err(e.into()),
    }
}

/// GET /v1/feedback
async fn list_feedback(State(state): State<AppState>) -> Result<Json<Vec<FeedbackEntry>>, AppError> {
    Ok(Json(state.feedback.list().await?))
}
