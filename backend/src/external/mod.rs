//! Simulated data sources for weather, soil and market readings

pub mod conditions;
pub mod market;

pub use conditions::{sample_soil, sample_weather};
pub use market::sample_market;
