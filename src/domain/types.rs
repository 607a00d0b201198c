use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul};

// ============================================================================
// Physical Unit Newtypes
// ============================================================================

/// Energy in kilowatt-hours (kWh)
#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, PartialOrd)]
pub struct Energy(pub f64);

impl Energy {
    pub const ZERO: Energy = Energy(0.0);

    pub const fn kilowatt_hours(kwh: f64) -> Self {
        Self(kwh)
    }

    pub fn as_kilowatt_hours(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Energy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} kWh", self.0)
    }
}

impl Add for Energy {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Mul<f64> for Energy {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl std::iter::Sum for Energy {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Energy::ZERO, Add::add)
    }
}

/// Flat electricity tariff in rupees per kilowatt-hour (₹/kWh)
#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, PartialOrd)]
pub struct Rate(pub f64);

impl Rate {
    pub const fn rupees_per_kwh(rate: f64) -> Self {
        Self(rate)
    }
}

/// Money in rupees (₹)
#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, PartialOrd)]
pub struct Cost(pub f64);

impl Cost {
    pub fn rupees(amount: f64) -> Self {
        Self(amount)
    }

    pub fn as_rupees(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₹{:.0}", self.0)
    }
}

impl Mul<Energy> for Rate {
    type Output = Cost;
    fn mul(self, energy: Energy) -> Self::Output {
        Cost(self.0 * energy.as_kilowatt_hours())
    }
}

/// Carbon dioxide emitted per kilowatt-hour consumed (kg CO₂/kWh)
#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, PartialOrd)]
pub struct EmissionFactor(pub f64);

impl EmissionFactor {
    pub const fn kg_per_kwh(factor: f64) -> Self {
        Self(factor)
    }
}

impl Mul<Energy> for EmissionFactor {
    type Output = f64; // kg CO₂
    fn mul(self, energy: Energy) -> Self::Output {
        self.0 * energy.as_kilowatt_hours()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
