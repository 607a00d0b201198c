//! Estimate endpoints. Every request carries its full inputs; nothing from a
//! previous request is remembered.

use axum::Json;
use std::time::Instant;

use crate::{
    api::response::ApiResponse,
    domain::{EnergyReport, EstimateInputs},
    estimator::estimate,
    insights::{saving_tips, Insights},
};

fn elapsed_us(start: Instant) -> u64 {
    start.elapsed().as_micros() as u64
}

/// POST /api/v1/estimate
#[cfg_attr(feature = "swagger", utoipa::path(
    post,
    path = "/api/v1/estimate",
    request_body = EstimateInputs,
    responses((status = 200, description = "Energy report for the given household"))
))]
pub async fn post_estimate(
    Json(inputs): Json<EstimateInputs>,
) -> Json<ApiResponse<EnergyReport>> {
    let start = Instant::now();
    let report = estimate(&inputs);
    tracing::info!(
        configuration = %inputs.housing_configuration,
        total_kwh = report.total_energy.as_kilowatt_hours(),
        "estimate served"
    );
    Json(ApiResponse::success(report).with_duration(elapsed_us(start)))
}

/// POST /api/v1/insights
#[cfg_attr(feature = "swagger", utoipa::path(
    post,
    path = "/api/v1/insights",
    request_body = EstimateInputs,
    responses((status = 200, description = "Report with summary, breakdown, projection and comparison"))
))]
pub async fn post_insights(Json(inputs): Json<EstimateInputs>) -> Json<ApiResponse<Insights>> {
    let start = Instant::now();
    let insights = Insights::new(estimate(&inputs));
    tracing::info!(
        configuration = %inputs.housing_configuration,
        monthly_cost = insights.summary.monthly_cost.as_rupees(),
        "insights served"
    );
    Json(ApiResponse::success(insights).with_duration(elapsed_us(start)))
}

/// GET /api/v1/tips
#[cfg_attr(feature = "swagger", utoipa::path(
    get,
    path = "/api/v1/tips",
    responses((status = 200, description = "Energy saving tips"))
))]
pub async fn get_tips() -> Json<ApiResponse<Vec<String>>> {
    Json(ApiResponse::success(saving_tips()))
}
