use crate::state::AppState;
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use mechanics_core::{core_version, DashboardService, DashboardSummary};
use serde_json::{json, Value};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/dashboard/summary", get(summary))
        .route("/api/health", get(health))
}

async fn summary(State(state): State<AppState>) -> Json<DashboardSummary> {
    Json(DashboardService::new(&state.store).summary())
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "version": core_version() }))
}
