//! Market price source
//!
//! Stands in for a commodity price feed with one simulated outlook per crop.

use rand::{seq::SliceRandom, Rng};
use shared::{Catalog, Demand, MarketOutlook, MarketSnapshot, MarketTrend};

/// Sample a market outlook for a single crop
pub fn sample_outlook<R: Rng + ?Sized>(rng: &mut R) -> MarketOutlook {
    let current_price = rng.gen_range(1000..=5000);
    let trend = MarketTrend::ALL
        .choose(rng)
        .copied()
        .unwrap_or(MarketTrend::Stable);
    let demand = Demand::ALL.choose(rng).copied().unwrap_or(Demand::Medium);
    let forecast = rng.gen_range(-15..=25);

    MarketOutlook {
        current_price,
        trend,
        demand,
        forecast,
    }
}

/// Sample an outlook for every crop in the catalog
///
/// Crops are drawn in catalog order so a seeded generator always assigns
/// the same outlook to the same crop.
pub fn sample_market<R: Rng + ?Sized>(rng: &mut R, catalog: &Catalog) -> MarketSnapshot {
    catalog
        .crop_names()
        .map(|name| (name.to_string(), sample_outlook(rng)))
        .collect()
}
