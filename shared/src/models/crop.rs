//! Crop reference models

use serde::{Deserialize, Serialize};

use crate::types::Range;

/// Crop grouping used by the catalog and the dashboard
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CropCategory {
    Vegetables,
    Grains,
    General,
}

impl std::fmt::Display for CropCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CropCategory::Vegetables => write!(f, "vegetables"),
            CropCategory::Grains => write!(f, "grains"),
            CropCategory::General => write!(f, "general"),
        }
    }
}

/// Preferred growing season
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Winter,
    Summer,
    Monsoon,
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Season::Winter => write!(f, "winter"),
            Season::Summer => write!(f, "summer"),
            Season::Monsoon => write!(f, "monsoon"),
        }
    }
}

/// Acceptable growing conditions for a single crop
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CropProfile {
    pub name: String,
    pub category: CropCategory,
    /// Air temperature in °C
    pub temperature: Range,
    /// Rainfall in mm
    pub rainfall: Range,
    pub soil_ph: Range,
    pub season: Season,
}

impl CropProfile {
    pub fn new(
        name: impl Into<String>,
        category: CropCategory,
        temperature: Range,
        rainfall: Range,
        soil_ph: Range,
        season: Season,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            temperature,
            rainfall,
            soil_ph,
            season,
        }
    }
}
