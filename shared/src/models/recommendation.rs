//! Recommendation output models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CropCategory, MarketOutlook, Season, SoilConditions, WeatherConditions};

/// A scored crop suggestion
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub crop: String,
    pub category: CropCategory,
    /// Suitability plus market adjustment; not bounded to 0-100
    pub score: f64,
    pub market: MarketOutlook,
    pub suitable_season: Season,
}

/// Full result of analysing a location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub weather: WeatherConditions,
    pub soil: SoilConditions,
    /// Highest score first
    pub recommendations: Vec<Recommendation>,
    pub timestamp: DateTime<Utc>,
}
