use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use ongod_core::{BudgetTier, Itinerary, Preference};
use serde::Serialize;
use tracing::info;

use crate::error::AppError;
use crate::extract::JsonBody;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanResponse {
    pub itinerary: Itinerary,
    pub budget_tier: BudgetTier,
    #[serde(rename = "estimatedTotalINR")]
    pub estimated_total_inr: u32,
    /// `estimated_total_inr` formatted for display
    pub estimated_total: String,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/plan", post(plan_trip))
        .route("/v1/preferences/last", get(last_preference))
}

/// POST /api/plan
/// Remember the answers, derive a plan and log it to history
async fn plan_trip(
    State(state): State<AppState>,
    JsonBody(preference): JsonBody<Preference>,
) -> Result<Json<PlanResponse>, AppError> {
    state.preferences.save(&preference).await?;

    preference
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let budget_tier = preference.budget_tier();
    let itinerary = state.generator.derive(&preference);
    let estimated_total_inr = state.generator.pricing().estimated_total(&itinerary);

    let entry = state.history.append(preference, itinerary.clone()).await?;
    info!(
        "Planned {} ({} tier, cross-border: {}) as history entry {}",
        itinerary.destination,
        budget_tier,
        itinerary.is_cross_border(),
        entry.id
    );

    Ok(Json(PlanResponse {
        itinerary,
        budget_tier,
        estimated_total_inr,
        estimated_total: state.format_inr(estimated_total_inr),
    }))
}

/// GET /v1/preferences/last
/// Last submitted answers, or the quiz defaults for a first visit
async fn last_preference(State(state): State<AppState>) -> Result<Json<Preference>, AppError> {
    let preference = state.preferences.load().await?.unwrap_or_default();
    Ok(Json(preference))
}
