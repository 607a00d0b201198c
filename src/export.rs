//! Export formats for a finished estimate: a `Parameter,Value` CSV record and
//! a plain-text summary.

use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};
use std::fmt::{self, Write as _};
use thiserror::Error;

use crate::domain::{EnergyReport, HouseholdProfile};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV encoding failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV buffer flush failed: {0}")]
    Flush(String),

    #[error("CSV output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// A single exported value
#[derive(Debug, Clone, PartialEq)]
pub enum ExportValue {
    Text(String),
    Integer(u64),
    Number(f64),
}

impl fmt::Display for ExportValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportValue::Text(s) => f.write_str(s),
            ExportValue::Integer(n) => write!(f, "{n}"),
            ExportValue::Number(x) => write!(f, "{x}"),
        }
    }
}

impl Serialize for ExportValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRow {
    #[serde(rename = "Parameter")]
    pub parameter: &'static str,
    #[serde(rename = "Value")]
    pub value: ExportValue,
}

/// Round a currency amount to paise so float noise never reaches the export
fn to_paise(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Build the parameter/value record for a profile and its report
pub fn export_record(profile: &HouseholdProfile, report: &EnergyReport) -> Vec<ExportRow> {
    use ExportValue::*;

    let rows = [
        ("Name", Text(profile.name.clone())),
        ("Age", Integer(u64::from(profile.age))),
        ("City", Text(profile.city.clone())),
        ("Area", Text(profile.area.clone())),
        ("Housing Type", Text(profile.dwelling_type.to_string())),
        ("Configuration", Text(report.housing_configuration.to_string())),
        ("Base Energy (kWh/day)", Number(report.base_energy.as_kilowatt_hours())),
        (
            "Appliances Energy (kWh/day)",
            Number(report.appliances_energy.as_kilowatt_hours()),
        ),
        ("Total Energy (kWh/day)", Number(report.total_energy.as_kilowatt_hours())),
        ("Monthly Cost (₹)", Number(to_paise(report.monthly_cost().as_rupees()))),
        ("Annual Cost (₹)", Number(to_paise(report.annual_cost().as_rupees()))),
    ];

    rows.into_iter()
        .map(|(parameter, value)| ExportRow { parameter, value })
        .collect()
}

/// Render the record as CSV with a `Parameter,Value` header
pub fn to_csv(rows: &[ExportRow]) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(vec![]);
    for row in rows {
        writer.serialize(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Flush(e.to_string()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Human-readable report stamped with `generated_at`
pub fn text_summary(
    profile: &HouseholdProfile,
    report: &EnergyReport,
    generated_at: NaiveDateTime,
) -> String {
    format!(
        "Energy Consumption Report\n\
         ========================\n\
         Name: {name}\n\
         Location: {location}\n\
         Housing: {config} {dwelling}\n\
         \n\
         Daily Consumption: {daily}\n\
         Monthly Consumption: {monthly}\n\
         Annual Consumption: {annual}\n\
         \n\
         Estimated Monthly Cost: {monthly_cost}\n\
         Estimated Annual Cost: {annual_cost}\n\
         \n\
         Generated on: {stamp}\n",
        name = profile.name,
        location = profile.location(),
        config = report.housing_configuration,
        dwelling = profile.dwelling_type,
        daily = report.daily_energy(),
        monthly = report.monthly_energy(),
        annual = report.annual_energy(),
        monthly_cost = report.monthly_cost(),
        annual_cost = report.annual_cost(),
        stamp = generated_at.format("%Y-%m-%d %H:%M:%S"),
    )
}

/// Downloadable export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Csv,
    Summary,
}

impl ExportKind {
    fn prefix(self) -> &'static str {
        match self {
            ExportKind::Csv => "energy_report",
            ExportKind::Summary => "energy_summary",
        }
    }

    fn extension(self) -> &'static str {
        match self {
            ExportKind::Csv => "csv",
            ExportKind::Summary => "txt",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            ExportKind::Csv => "text/csv; charset=utf-8",
            ExportKind::Summary => "text/plain; charset=utf-8",
        }
    }

    /// ASCII-only file name, e.g. `energy_report_Asha_Rao.csv`
    pub fn file_name(self, profile: &HouseholdProfile) -> String {
        format!("{}_{}.{}", self.prefix(), profile.file_stem(), self.extension())
    }

    /// `Content-Disposition` value. Names that do not survive the ASCII
    /// reduction are also sent intact as an RFC 5987 `filename*`.
    pub fn content_disposition(self, profile: &HouseholdProfile) -> String {
        let fallback = self.file_name(profile);
        let full = format!(
            "{}_{}.{}",
            self.prefix(),
            profile.name.replace(' ', "_"),
            self.extension()
        );
        if full == fallback {
            format!("attachment; filename=\"{fallback}\"")
        } else {
            format!(
                "attachment; filename=\"{fallback}\"; filename*=UTF-8''{}",
                percent_encode(&full)
            )
        }
    }
}

/// RFC 5987 value encoding: attr-chars pass through, every other byte is `%XX`
fn percent_encode(value: &str) -> String {
    value
        .bytes()
        .fold(String::with_capacity(value.len()), |mut out, byte| {
            if byte.is_ascii_alphanumeric() || b"!#$&+-.^_`|~".contains(&byte) {
                out.push(char::from(byte));
            } else {
                let _ = write!(out, "%{byte:02X}");
            }
            out
        })
}
