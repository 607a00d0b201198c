//! # Energy Estimator
//!
//! Pure mapping from [`EstimateInputs`] to an [`EnergyReport`]. The estimator
//! holds no state and cannot fail: every representable input has a report.
//!
//! ```
//! use household_energy_estimator::domain::{Appliance, EstimateInputs, HousingConfiguration};
//! use household_energy_estimator::estimator::estimate;
//!
//! let inputs = EstimateInputs::new(HousingConfiguration::TwoBhk)
//!     .with_appliances([Appliance::Ac, Appliance::Fridge]);
//! let report = estimate(&inputs);
//! assert_eq!(report.total_energy.as_kilowatt_hours(), 9.6);
//! ```

use crate::domain::{Appliance, Energy, EnergyReport, EstimateInputs};

/// Estimate daily household consumption for one set of inputs.
pub fn estimate(inputs: &EstimateInputs) -> EnergyReport {
    let base_energy = inputs.housing_configuration.base_energy();

    let active_appliances: Vec<Appliance> = Appliance::ALL
        .into_iter()
        .filter(|appliance| inputs.has(*appliance))
        .collect();

    let appliances_energy: Energy = active_appliances
        .iter()
        .map(|appliance| appliance.energy_per_day())
        .sum();

    let total_energy = base_energy + appliances_energy;

    tracing::debug!(
        configuration = %inputs.housing_configuration,
        base_kwh = base_energy.as_kilowatt_hours(),
        appliances_kwh = appliances_energy.as_kilowatt_hours(),
        total_kwh = total_energy.as_kilowatt_hours(),
        "energy estimate computed"
    );

    EnergyReport {
        housing_configuration: inputs.housing_configuration,
        base_energy,
        appliances_energy,
        total_energy,
        active_appliances,
    }
}
