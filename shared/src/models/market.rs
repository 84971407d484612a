//! Market outlook models

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Direction of the price trend for a crop
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MarketTrend {
    Rising,
    Stable,
    Falling,
}

impl MarketTrend {
    pub const ALL: [MarketTrend; 3] = [MarketTrend::Rising, MarketTrend::Stable, MarketTrend::Falling];
}

impl std::fmt::Display for MarketTrend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MarketTrend::Rising => write!(f, "rising"),
            MarketTrend::Stable => write!(f, "stable"),
            MarketTrend::Falling => write!(f, "falling"),
        }
    }
}

/// Buyer demand level for a crop
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Demand {
    High,
    Medium,
    Low,
}

impl Demand {
    pub const ALL: [Demand; 3] = [Demand::High, Demand::Medium, Demand::Low];
}

impl std::fmt::Display for Demand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Demand::High => write!(f, "high"),
            Demand::Medium => write!(f, "medium"),
            Demand::Low => write!(f, "low"),
        }
    }
}

/// Price and demand outlook for one crop
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MarketOutlook {
    /// Price per quintal
    pub current_price: i32,
    pub trend: MarketTrend,
    pub demand: Demand,
    /// Expected price change in percent
    pub forecast: i32,
}

/// Market outlook for every crop in the catalog, keyed by crop name
pub type MarketSnapshot = HashMap<String, MarketOutlook>;
