use axum::{
    extract::State,
    http::{header, HeaderValue},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    api::{error::ApiError, AppState},
    domain::{EnergyReport, EstimateInputs, HouseholdProfile},
    estimator::estimate,
    export::{export_record, text_summary, to_csv, ExportKind},
};

#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportRequest {
    #[serde(default)]
    pub profile: HouseholdProfile,
    pub inputs: EstimateInputs,
}

impl ExportRequest {
    /// Validate the identity fields, then estimate
    fn into_parts(self) -> Result<(HouseholdProfile, EnergyReport), ApiError> {
        self.profile.validate()?;
        let report = estimate(&self.inputs);
        Ok((self.profile, report))
    }
}

fn attachment(
    kind: ExportKind,
    profile: &HouseholdProfile,
    body: String,
) -> Result<impl IntoResponse, ApiError> {
    let disposition = HeaderValue::from_str(&kind.content_disposition(profile))
        .map_err(|e| ApiError::ExportError(format!("content disposition: {e}")))?;
    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(kind.content_type())),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    ))
}

/// POST /api/v1/export/csv
#[cfg_attr(feature = "swagger", utoipa::path(
    post,
    path = "/api/v1/export/csv",
    request_body = ExportRequest,
    responses(
        (status = 200, description = "Parameter/value record as CSV", content_type = "text/csv"),
        (status = 400, description = "Invalid profile")
    )
))]
pub async fn post_export_csv(
    Json(req): Json<ExportRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (profile, report) = req.into_parts()?;
    let body = to_csv(&export_record(&profile, &report))?;
    tracing::info!(file = %ExportKind::Csv.file_name(&profile), "csv export generated");
    attachment(ExportKind::Csv, &profile, body)
}

/// POST /api/v1/export/summary
#[cfg_attr(feature = "swagger", utoipa::path(
    post,
    path = "/api/v1/export/summary",
    request_body = ExportRequest,
    responses(
        (status = 200, description = "Plain-text summary", content_type = "text/plain"),
        (status = 400, description = "Invalid profile")
    )
))]
pub async fn post_export_summary(
    State(state): State<AppState>,
    Json(req): Json<ExportRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (profile, report) = req.into_parts()?;
    let body = text_summary(&profile, &report, state.now());
    tracing::info!(file = %ExportKind::Summary.file_name(&profile), "text summary generated");
    attachment(ExportKind::Summary, &profile, body)
}
