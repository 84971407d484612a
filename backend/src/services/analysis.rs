//! Analysis service for ranking crops at a location

use std::sync::Arc;

use chrono::Utc;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use shared::{rank_recommendations, score_breakdown, AnalysisReport, Catalog};

use crate::error::AppResult;
use crate::external::{sample_market, sample_soil, sample_weather};

/// Analysis service combining sampled conditions with the crop catalog
#[derive(Clone)]
pub struct AnalysisService {
    catalog: Arc<Catalog>,
    seed: Option<u64>,
}

impl AnalysisService {
    /// Create a new AnalysisService drawing fresh samples per request
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog, seed: None }
    }

    /// Create an AnalysisService that reproduces the same samples on every request
    pub fn with_seed(catalog: Arc<Catalog>, seed: Option<u64>) -> Self {
        Self { catalog, seed }
    }

    fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }

    /// Sample conditions for a location and rank every crop against them
    pub fn analyze(&self, location: &str) -> AppResult<AnalysisReport> {
        let mut rng = self.rng();
        self.analyze_with(&mut rng, location)
    }

    /// Same as [`AnalysisService::analyze`] with a caller-supplied random source
    pub fn analyze_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        location: &str,
    ) -> AppResult<AnalysisReport> {
        let weather = sample_weather(rng, location);
        let soil = sample_soil(rng);
        let market = sample_market(rng, &self.catalog);

        tracing::debug!(
            location = %weather.location,
            temperature = weather.temperature,
            rainfall = weather.rainfall,
            ph = soil.ph,
            "Sampled conditions"
        );

        if tracing::enabled!(tracing::Level::TRACE) {
            for profile in self.catalog.iter() {
                let breakdown = score_breakdown(profile, &weather, &soil);
                tracing::trace!(
                    crop = %profile.name,
                    temperature = breakdown.temperature,
                    rainfall = breakdown.rainfall,
                    soil_ph = breakdown.soil_ph,
                    base = breakdown.base,
                    "Suitability breakdown"
                );
            }
        }

        let recommendations = rank_recommendations(&self.catalog, &weather, &soil, &market)?;

        match recommendations.first() {
            Some(top) => tracing::info!(
                location = %weather.location,
                top_crop = %top.crop,
                score = top.score,
                count = recommendations.len(),
                "Analysis complete"
            ),
            None => tracing::warn!(location = %weather.location, "Crop catalog is empty"),
        }

        Ok(AnalysisReport {
            weather,
            soil,
            recommendations,
            timestamp: Utc::now(),
        })
    }
}
