use utoipa::OpenApi;

use crate::api::export::ExportRequest;
use crate::domain::{
    Appliance, Cost, DwellingType, Energy, EnergyReport, EstimateInputs, HouseholdProfile,
    HousingConfiguration,
};
use crate::insights::{Breakdown, ComparisonEntry, ConsumptionSummary, Insights, MonthlyProjection};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::estimate::post_estimate,
        crate::api::estimate::post_insights,
        crate::api::estimate::get_tips,
        crate::api::export::post_export_csv,
        crate::api::export::post_export_summary,
    ),
    components(
        schemas(
            EstimateInputs, EnergyReport, HousingConfiguration, Appliance, Energy, Cost,
            HouseholdProfile, DwellingType, ExportRequest, Insights, ConsumptionSummary,
            Breakdown, MonthlyProjection, ComparisonEntry
        )
    ),
    tags((name = "hee", description = "Household Energy Estimator API v1"))
)]
pub struct ApiDoc;
