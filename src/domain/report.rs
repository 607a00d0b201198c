use serde::{Deserialize, Serialize};

use super::household::{Appliance, HousingConfiguration};
use super::types::{Cost, EmissionFactor, Energy, Rate};

/// Flat electricity tariff applied to every estimate
pub const UNIT_RATE: Rate = Rate::rupees_per_kwh(6.0);
/// Grid carbon intensity applied to every estimate
pub const EMISSION_FACTOR: EmissionFactor = EmissionFactor::kg_per_kwh(0.82);
/// Calendar approximation: every month has 30 days
pub const DAYS_PER_MONTH: f64 = 30.0;
/// Calendar approximation: every year has 365 days
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Result of one estimator call. Every field is derived from the inputs;
/// `total_energy == base_energy + appliances_energy` always holds.
#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyReport {
    pub housing_configuration: HousingConfiguration,
    #[serde(rename = "base_energy_kwh_per_day")]
    pub base_energy: Energy,
    #[serde(rename = "appliances_energy_kwh_per_day")]
    pub appliances_energy: Energy,
    #[serde(rename = "total_energy_kwh_per_day")]
    pub total_energy: Energy,
    pub active_appliances: Vec<Appliance>,
}

impl EnergyReport {
    pub fn daily_energy(&self) -> Energy {
        self.total_energy
    }

    pub fn monthly_energy(&self) -> Energy {
        self.total_energy * DAYS_PER_MONTH
    }

    pub fn annual_energy(&self) -> Energy {
        self.total_energy * DAYS_PER_YEAR
    }

    pub fn monthly_cost(&self) -> Cost {
        UNIT_RATE * self.monthly_energy()
    }

    pub fn annual_cost(&self) -> Cost {
        UNIT_RATE * self.annual_energy()
    }

    /// Annual carbon mass in kg CO₂
    pub fn annual_carbon_kg(&self) -> f64 {
        EMISSION_FACTOR * self.annual_energy()
    }

    /// Comma-separated appliance labels, or "None"
    pub fn appliance_labels(&self) -> String {
        if self.active_appliances.is_empty() {
            return "None".to_string();
        }
        self.active_appliances
            .iter()
            .map(|a| a.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_bhk_ac_fridge() -> EnergyReport {
        EnergyReport {
            housing_configuration: HousingConfiguration::TwoBhk,
            base_energy: Energy::kilowatt_hours(3.6),
            appliances_energy: Energy::kilowatt_hours(6.0),
            total_energy: Energy::kilowatt_hours(9.6),
            active_appliances: vec![Appliance::Ac, Appliance::Fridge],
        }
    }

    #[test]
    fn test_derived_metrics() {
        let report = two_bhk_ac_fridge();
        assert_eq!(report.daily_energy().as_kilowatt_hours(), 9.6);
        assert_eq!(report.monthly_energy().as_kilowatt_hours(), 288.0);
        assert_eq!(report.annual_energy().as_kilowatt_hours(), 3504.0);
        assert_eq!(report.monthly_cost().as_rupees(), 1728.0);
        assert_eq!(report.annual_cost().as_rupees(), 21024.0);
        assert!((report.annual_carbon_kg() - 2873.28).abs() < 1e-6);
    }

    #[test]
    fn test_appliance_labels() {
        let mut report = two_bhk_ac_fridge();
        assert_eq!(report.appliance_labels(), "AC, Fridge");

        report.active_appliances.clear();
        assert_eq!(report.appliance_labels(), "None");
    }

    #[test]
    fn test_report_json_shape() {
        let value = serde_json::to_value(two_bhk_ac_fridge()).unwrap();
        assert_eq!(value["housing_configuration"], "2BHK");
        assert_eq!(value["total_energy_kwh_per_day"], 9.6);
        assert_eq!(value["active_appliances"], serde_json::json!(["AC", "Fridge"]));
    }
}
