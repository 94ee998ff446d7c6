use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use ongod_core::{Interest, TravelStyle};
use ongod_store::HistoryEntry;
use serde::Serialize;
use uuid::Uuid;

use crate::error::AppError;
use crate::state::AppState;

/// Compact view of a past plan for the "previous searches" list
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryCard {
    pub id: Uuid,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub ts: DateTime<Utc>,
    pub destination: String,
    pub estimated_total: String,
    pub style: TravelStyle,
    pub interests: Vec<Interest>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/history", get(list_history).delete(clear_history))
        .route("/v1/history/cards", get(history_cards))
        .route("/v1/history/{id}", get(get_history_entry))
}

/// GET /v1/history
async fn list_history(State(state): State<AppState>) -> Result<Json<Vec<HistoryEntry>>, AppError> {
    Ok(Json(state.history.list().await?))
}

/// GET /v1/history/cards
async fn history_cards(State(state): State<AppState>) -> Result<Json<Vec<HistoryCard>>, AppError> {
    let pricing = state.generator.pricing();
    let cards = state
        .history
        .list()
        .await?
        .into_iter()
        .map(|entry| HistoryCard {
            id: entry.id,
            ts: entry.ts,
            estimated_total: state.format_inr(pricing.estimated_total(&entry.result)),
            destination: entry.result.destination,
            style: entry.answers.style,
            interests: entry.answers.interests.into_iter().take(2).collect(),
        })
        .collect();

    Ok(Json(cards))
}

/// GET /v1/history/:id
async fn get_history_entry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<HistoryEntry>, AppError> {
    state
        .history
        .find(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFoundError(format!("No history entry {}", id)))
}

/// DELETE /v1/history
async fn clear_history(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.history.clear().await?;
    Ok(StatusCode::NO_CONTENT)
}
