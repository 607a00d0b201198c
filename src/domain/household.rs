//! Household description: the estimator inputs plus the identity metadata that
//! rides along for display and export.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use validator::Validate;

use super::types::Energy;

/// Daily draw of a room's lighting and other low-draw loads
pub const LOW_DRAW_KWH_PER_ROOM: f64 = 0.4;
/// Daily draw of a room's general high-draw loads
pub const HIGH_DRAW_KWH_PER_ROOM: f64 = 0.8;
/// Flat daily draw of any owned appliance, regardless of kind
pub const APPLIANCE_KWH_PER_DAY: Energy = Energy::kilowatt_hours(3.0);

/// Housing size in Bedroom-Hall-Kitchen notation
#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, EnumString,
)]
#[serde(try_from = "String")]
#[strum(ascii_case_insensitive)]
pub enum HousingConfiguration {
    #[serde(rename = "1BHK")]
    #[strum(serialize = "1BHK")]
    OneBhk = 0,
    #[serde(rename = "2BHK")]
    #[strum(serialize = "2BHK")]
    TwoBhk = 1,
    #[serde(rename = "3BHK")]
    #[strum(serialize = "3BHK")]
    ThreeBhk = 2,
}

impl TryFrom<String> for HousingConfiguration {
    type Error = strum::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// One row of the base-load table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseLoad {
    pub configuration: HousingConfiguration,
    pub rooms: u32,
    pub energy_per_day: Energy,
}

/// Base daily consumption keyed by housing configuration, indexed by discriminant.
///
/// Each room contributes `LOW_DRAW_KWH_PER_ROOM + HIGH_DRAW_KWH_PER_ROOM`; the
/// values are written out so the table stays exact in floating point.
pub const BASE_ENERGY_TABLE: [BaseLoad; 3] = [
    BaseLoad {
        configuration: HousingConfiguration::OneBhk,
        rooms: 2,
        energy_per_day: Energy::kilowatt_hours(2.4),
    },
    BaseLoad {
        configuration: HousingConfiguration::TwoBhk,
        rooms: 3,
        energy_per_day: Energy::kilowatt_hours(3.6),
    },
    BaseLoad {
        configuration: HousingConfiguration::ThreeBhk,
        rooms: 4,
        energy_per_day: Energy::kilowatt_hours(4.8),
    },
];

impl HousingConfiguration {
    pub const ALL: [HousingConfiguration; 3] = [Self::OneBhk, Self::TwoBhk, Self::ThreeBhk];

    fn base_load(self) -> BaseLoad {
        BASE_ENERGY_TABLE[self as usize]
    }

    /// Rooms modelled for this configuration
    pub fn rooms(self) -> u32 {
        self.base_load().rooms
    }

    /// Base daily consumption attributable to dwelling size alone
    pub fn base_energy(self) -> Energy {
        self.base_load().energy_per_day
    }
}

/// Appliances with a flat per-day contribution, in report order
#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
)]
pub enum Appliance {
    #[strum(serialize = "AC")]
    #[serde(rename = "AC")]
    Ac,
    Fridge,
    #[strum(serialize = "Washing Machine")]
    #[serde(rename = "Washing Machine")]
    WashingMachine,
}

impl Appliance {
    /// Fixed order in which active appliances are reported
    pub const ALL: [Appliance; 3] = [Self::Ac, Self::Fridge, Self::WashingMachine];

    pub fn energy_per_day(self) -> Energy {
        APPLIANCE_KWH_PER_DAY
    }
}

/// Everything the estimator looks at. Appliance flags default to off.
#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EstimateInputs {
    pub housing_configuration: HousingConfiguration,
    #[serde(default)]
    pub has_ac: bool,
    #[serde(default)]
    pub has_fridge: bool,
    #[serde(default)]
    pub has_washing_machine: bool,
}

impl EstimateInputs {
    pub fn new(housing_configuration: HousingConfiguration) -> Self {
        Self {
            housing_configuration,
            has_ac: false,
            has_fridge: false,
            has_washing_machine: false,
        }
    }

    pub fn with_appliance(mut self, appliance: Appliance) -> Self {
        match appliance {
            Appliance::Ac => self.has_ac = true,
            Appliance::Fridge => self.has_fridge = true,
            Appliance::WashingMachine => self.has_washing_machine = true,
        }
        self
    }

    pub fn with_appliances(self, appliances: impl IntoIterator<Item = Appliance>) -> Self {
        appliances.into_iter().fold(self, Self::with_appliance)
    }

    pub fn has(&self, appliance: Appliance) -> bool {
        match appliance {
            Appliance::Ac => self.has_ac,
            Appliance::Fridge => self.has_fridge,
            Appliance::WashingMachine => self.has_washing_machine,
        }
    }
}

#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(try_from = "String")]
#[strum(ascii_case_insensitive)]
pub enum DwellingType {
    #[default]
    Flat,
    Tenement,
}

impl TryFrom<String> for DwellingType {
    type Error = strum::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

fn default_age() -> u8 {
    30
}

/// Identity metadata shown next to a report. Never read by the estimator.
#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct HouseholdProfile {
    #[serde(default)]
    #[validate(length(max = 100))]
    pub name: String,
    #[serde(default = "default_age")]
    #[validate(range(min = 18, max = 100))]
    pub age: u8,
    #[serde(default)]
    #[validate(length(max = 100))]
    pub city: String,
    #[serde(default)]
    #[validate(length(max = 100))]
    pub area: String,
    #[serde(default)]
    pub dwelling_type: DwellingType,
}

impl Default for HouseholdProfile {
    fn default() -> Self {
        Self {
            name: String::new(),
            age: default_age(),
            city: String::new(),
            area: String::new(),
            dwelling_type: DwellingType::default(),
        }
    }
}

impl HouseholdProfile {
    /// "area, city" as shown on reports
    pub fn location(&self) -> String {
        format!("{}, {}", self.area, self.city)
    }

    /// Name reduced to ASCII alphanumerics, `_` and `-` for use in a file name
    pub fn file_stem(&self) -> String {
        self.name
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                    c
                } else {
                    '_'
                }
            })
            .collect()
    }
}
