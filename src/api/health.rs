use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    api::AppState,
    domain::{EstimateInputs, HousingConfiguration},
    estimator::estimate,
};

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: String,
    timestamp: DateTime<Utc>,
    uptime_secs: i64,
    checks: HealthChecks,
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    estimator: ComponentHealth,
}

/// Health status of a component
#[derive(Debug, Serialize)]
pub struct ComponentHealth {
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl ComponentHealth {
    fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            error: None,
        }
    }

    fn unhealthy(error: String) -> Self {
        Self {
            status: "unhealthy".to_string(),
            error: Some(error),
        }
    }
}

/// Run a known estimate and compare against its table value
fn check_estimator() -> ComponentHealth {
    let report = estimate(&EstimateInputs::new(HousingConfiguration::OneBhk));
    let kwh = report.total_energy.as_kilowatt_hours();
    if kwh == HousingConfiguration::OneBhk.base_energy().as_kilowatt_hours() {
        ComponentHealth::healthy()
    } else {
        ComponentHealth::unhealthy(format!("unexpected 1BHK baseline: {kwh} kWh"))
    }
}

/// GET /health - Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let estimator = check_estimator();
    let all_healthy = estimator.status == "healthy";

    let response = HealthResponse {
        status: if all_healthy {
            "healthy".to_string()
        } else {
            "degraded".to_string()
        },
        timestamp: Utc::now(),
        uptime_secs: state.uptime_secs(),
        checks: HealthChecks { estimator },
    };

    let status_code = if all_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    tracing::debug!(healthy = all_healthy, "Health check completed");
    (status_code, Json(response))
}

/// GET /health/ready - Readiness probe
pub async fn readiness_check() -> impl IntoResponse {
    StatusCode::OK
}

/// GET /health/live - Liveness probe
pub async fn liveness_check() -> impl IntoResponse {
    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_health_healthy() {
        let health = ComponentHealth::healthy();
        assert_eq!(health.status, "healthy");
        assert!(health.error.is_none());
    }

    #[test]
    fn test_component_health_unhealthy() {
        let health = ComponentHealth::unhealthy("bad table".to_string());
        assert_eq!(health.status, "unhealthy");
        assert_eq!(health.error, Some("bad table".to_string()));
    }

    #[test]
    fn test_estimator_check_passes() {
        assert_eq!(check_estimator().status, "healthy");
    }
}
