//! Weather and soil readings for a location

use serde::{Deserialize, Serialize};

/// Weather conditions sampled for a single analysis
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherConditions {
    /// Air temperature in °C
    pub temperature: f64,
    /// Relative humidity in percent
    pub humidity: f64,
    /// Rainfall in mm
    pub rainfall: f64,
    pub description: String,
    pub location: String,
}

/// Soil reading sampled for a single analysis
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SoilConditions {
    pub ph: f64,
    /// Nitrogen in ppm
    pub nitrogen: i32,
    /// Phosphorus in ppm
    pub phosphorus: i32,
    /// Potassium in ppm
    pub potassium: i32,
    /// Organic matter in percent
    pub organic_matter: f64,
    /// Moisture in percent
    pub moisture: i32,
}
