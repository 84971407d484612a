//! Crop suitability scoring and ranking
//!
//! The base suitability score starts at 100 and gains or loses points per
//! growing condition:
//! - Temperature: +20 in range, otherwise -2 per °C away from the midpoint
//! - Rainfall: +20 in range, otherwise -0.5 per mm away from the midpoint
//! - Soil pH: +15 in range, otherwise -10 per pH unit away from the midpoint
//!
//! The sum is clamped to 0-100. Market signals are added on top of the
//! clamped score and are not clamped again.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::Catalog;
use crate::models::{
    CropProfile, Demand, MarketOutlook, MarketSnapshot, MarketTrend, Recommendation,
    SoilConditions, WeatherConditions,
};
use crate::types::{round_one_decimal, Range};

/// Number of recommendations returned per analysis
pub const MAX_RECOMMENDATIONS: usize = 10;

const BASE_SCORE: f64 = 100.0;

const TEMPERATURE_BONUS: f64 = 20.0;
const TEMPERATURE_PENALTY_PER_UNIT: f64 = 2.0;
const RAINFALL_BONUS: f64 = 20.0;
const RAINFALL_PENALTY_PER_UNIT: f64 = 0.5;
const SOIL_PH_BONUS: f64 = 15.0;
const SOIL_PH_PENALTY_PER_UNIT: f64 = 10.0;

const RISING_TREND_BONUS: f64 = 10.0;
const FALLING_TREND_PENALTY: f64 = 10.0;
const HIGH_DEMAND_BONUS: f64 = 5.0;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScoringError {
    #[error("No market data for crop: {0}")]
    MissingMarketData(String),
}

/// Per-condition contributions to the base suitability score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SuitabilityBreakdown {
    pub temperature: f64,
    pub rainfall: f64,
    pub soil_ph: f64,
    /// Clamped total, always within 0-100
    pub base: f64,
}

/// Bonus when the value is inside the range, otherwise a penalty scaled by
/// the distance from the range midpoint
fn condition_term(range: &Range, value: f64, bonus: f64, penalty_per_unit: f64) -> f64 {
    if range.contains(value) {
        bonus
    } else {
        -(range.distance_from_midpoint(value) * penalty_per_unit)
    }
}

pub fn temperature_term(profile: &CropProfile, temperature: f64) -> f64 {
    condition_term(
        &profile.temperature,
        temperature,
        TEMPERATURE_BONUS,
        TEMPERATURE_PENALTY_PER_UNIT,
    )
}

pub fn rainfall_term(profile: &CropProfile, rainfall: f64) -> f64 {
    condition_term(
        &profile.rainfall,
        rainfall,
        RAINFALL_BONUS,
        RAINFALL_PENALTY_PER_UNIT,
    )
}

pub fn soil_ph_term(profile: &CropProfile, ph: f64) -> f64 {
    condition_term(&profile.soil_ph, ph, SOIL_PH_BONUS, SOIL_PH_PENALTY_PER_UNIT)
}

/// Score each growing condition for a crop and clamp the total
pub fn score_breakdown(
    profile: &CropProfile,
    weather: &WeatherConditions,
    soil: &SoilConditions,
) -> SuitabilityBreakdown {
    let temperature = temperature_term(profile, weather.temperature);
    let rainfall = rainfall_term(profile, weather.rainfall);
    let soil_ph = soil_ph_term(profile, soil.ph);

    let base = (BASE_SCORE + temperature + rainfall + soil_ph).clamp(0.0, 100.0);

    SuitabilityBreakdown {
        temperature,
        rainfall,
        soil_ph,
        base,
    }
}

/// Base suitability score of a crop for the sampled conditions, in 0-100
pub fn suitability_score(
    profile: &CropProfile,
    weather: &WeatherConditions,
    soil: &SoilConditions,
) -> f64 {
    score_breakdown(profile, weather, soil).base
}

/// Points added to (or removed from) the base score for market signals
pub fn market_adjustment(market: &MarketOutlook) -> f64 {
    let trend = match market.trend {
        MarketTrend::Rising => RISING_TREND_BONUS,
        MarketTrend::Stable => 0.0,
        MarketTrend::Falling => -FALLING_TREND_PENALTY,
    };

    let demand = match market.demand {
        Demand::High => HIGH_DEMAND_BONUS,
        Demand::Medium | Demand::Low => 0.0,
    };

    trend + demand
}

/// Final score for a crop: base suitability plus market adjustment, unclamped
pub fn final_score(base: f64, market: &MarketOutlook) -> f64 {
    base + market_adjustment(market)
}

/// Score every crop in the catalog and return the best candidates
///
/// Results are ordered by final score descending. Crops with equal scores
/// keep their catalog order. At most [`MAX_RECOMMENDATIONS`] entries are
/// returned.
pub fn rank_recommendations(
    catalog: &Catalog,
    weather: &WeatherConditions,
    soil: &SoilConditions,
    market: &MarketSnapshot,
) -> Result<Vec<Recommendation>, ScoringError> {
    let mut recommendations = catalog
        .iter()
        .map(|profile| {
            let outlook = market
                .get(&profile.name)
                .copied()
                .ok_or_else(|| ScoringError::MissingMarketData(profile.name.clone()))?;

            let base = suitability_score(profile, weather, soil);

            Ok(Recommendation {
                crop: profile.name.clone(),
                category: profile.category,
                score: round_one_decimal(final_score(base, &outlook)),
                market: outlook,
                suitable_season: profile.season,
            })
        })
        .collect::<Result<Vec<_>, ScoringError>>()?;

    // sort_by is stable, so ties keep catalog order
    recommendations.sort_by(|a, b| b.score.total_cmp(&a.score));
    recommendations.truncate(MAX_RECOMMENDATIONS);

    Ok(recommendations)
}
