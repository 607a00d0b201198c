//! Presentation-ready figures built on top of an [`EnergyReport`]: headline
//! consumption metrics, base/appliance breakdown, a flat monthly projection,
//! comparison against typical households, and saving tips.

use serde::Serialize;

use crate::domain::{
    Cost, Energy, EnergyReport, HousingConfiguration, DAYS_PER_MONTH, UNIT_RATE,
};

pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Typical daily consumption of a household of each size (kWh/day)
pub const REFERENCE_DAILY_KWH: [(HousingConfiguration, f64); 3] = [
    (HousingConfiguration::OneBhk, 4.0),
    (HousingConfiguration::TwoBhk, 6.0),
    (HousingConfiguration::ThreeBhk, 8.0),
];

pub const SAVING_TIPS: [&str; 8] = [
    "🌡️ Set AC temperature to 24°C for optimal energy efficiency",
    "🔌 Unplug electronics when not in use to avoid phantom loads",
    "💡 Switch to LED bulbs - they use 75% less energy than incandescent",
    "🌞 Use natural light during the day to reduce lighting costs",
    "🚿 Take shorter showers to reduce water heating energy",
    "🏠 Ensure proper insulation to maintain temperature efficiently",
    "⚡ Use appliances during off-peak hours for lower electricity rates",
    "🔄 Regular maintenance of appliances improves energy efficiency",
];

#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsumptionSummary {
    pub daily_kwh: Energy,
    pub monthly_kwh: Energy,
    pub annual_kwh: Energy,
    pub monthly_cost: Cost,
    pub annual_cost: Cost,
    pub annual_carbon_kg: f64,
}

impl From<&EnergyReport> for ConsumptionSummary {
    fn from(report: &EnergyReport) -> Self {
        Self {
            daily_kwh: report.daily_energy(),
            monthly_kwh: report.monthly_energy(),
            annual_kwh: report.annual_energy(),
            monthly_cost: report.monthly_cost(),
            annual_cost: report.annual_cost(),
            annual_carbon_kg: report.annual_carbon_kg(),
        }
    }
}

/// Share of the daily total, in percent
#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Breakdown {
    pub base_percent: f64,
    pub appliances_percent: f64,
}

impl Breakdown {
    pub fn of(report: &EnergyReport) -> Self {
        let total = report.total_energy.as_kilowatt_hours();
        if total <= 0.0 {
            return Self {
                base_percent: 0.0,
                appliances_percent: 0.0,
            };
        }
        let base_percent = report.base_energy.as_kilowatt_hours() / total * 100.0;
        Self {
            base_percent,
            appliances_percent: 100.0 - base_percent,
        }
    }
}

#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyProjection {
    pub month: String,
    pub energy_kwh: Energy,
}

/// Twelve identical months at the fixed 30-day approximation
pub fn monthly_projection(report: &EnergyReport) -> Vec<MonthlyProjection> {
    let monthly = report.monthly_energy();
    MONTHS
        .iter()
        .map(|month| MonthlyProjection {
            month: month.to_string(),
            energy_kwh: monthly,
        })
        .collect()
}

#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonEntry {
    pub category: String,
    pub daily_kwh: Energy,
    pub monthly_cost: Cost,
}

impl ComparisonEntry {
    fn new(category: String, daily_kwh: Energy) -> Self {
        Self {
            category,
            monthly_cost: UNIT_RATE * (daily_kwh * DAYS_PER_MONTH),
            daily_kwh,
        }
    }
}

/// The household first, followed by each reference household
pub fn comparison(report: &EnergyReport) -> Vec<ComparisonEntry> {
    std::iter::once(ComparisonEntry::new(
        "Your Consumption".to_string(),
        report.total_energy,
    ))
    .chain(REFERENCE_DAILY_KWH.iter().map(|(config, kwh)| {
        ComparisonEntry::new(format!("Average {config}"), Energy::kilowatt_hours(*kwh))
    }))
    .collect()
}

pub fn saving_tips() -> Vec<String> {
    SAVING_TIPS.iter().map(|tip| tip.to_string()).collect()
}

/// Everything the results page renders for one estimate
#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insights {
    pub report: EnergyReport,
    pub summary: ConsumptionSummary,
    pub breakdown: Breakdown,
    pub monthly_projection: Vec<MonthlyProjection>,
    pub comparison: Vec<ComparisonEntry>,
    pub tips: Vec<String>,
}

impl Insights {
    pub fn new(report: EnergyReport) -> Self {
        Self {
            summary: ConsumptionSummary::from(&report),
            breakdown: Breakdown::of(&report),
            monthly_projection: monthly_projection(&report),
            comparison: comparison(&report),
            tips: saving_tips(),
            report,
        }
    }
}
