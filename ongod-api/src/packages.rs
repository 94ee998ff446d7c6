use axum::{extract::State, routing::get, Json, Router};
use ongod_core::{curated_packages, Package};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PackageResponse {
    #[serde(flatten)]
    pub package: Package,
    /// Display price
    pub price: String,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/packages", get(list_packages))
}

/// GET /v1/packages
async fn list_packages(State(state): State<AppState>) -> Json<Vec<PackageResponse>> {
    let packages = curated_packages()
        .into_iter()
        .map(|package| PackageResponse {
            price: state.format_inr(package.price_inr),
            package,
        })
        .collect();

    Json(packages)
}
