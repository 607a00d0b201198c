//! Household electricity estimator: a fixed linear model mapping housing size
//! and appliance ownership to daily, monthly and annual consumption, cost and
//! carbon, plus the HTTP layer that serves and exports those figures.

pub mod api;
pub mod config;
pub mod domain;
pub mod estimator;
pub mod export;
pub mod insights;
pub mod telemetry;

pub use estimator::estimate;
