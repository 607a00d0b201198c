use axum::{
    routing::{get, post},
    Router,
};

use crate::api::{estimate, export, health, AppState};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/estimate", post(estimate::post_estimate))
        .route("/insights", post(estimate::post_insights))
        .route("/tips", get(estimate::get_tips))
        .route("/export/csv", post(export::post_export_csv))
        .route("/export/summary", post(export::post_export_summary))
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check))
        .with_state(state)
}
