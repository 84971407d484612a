//! Crop catalog
//!
//! The built-in table of crops and their acceptable growing conditions.
//! Built once at startup and shared read-only across requests.

use serde::{Deserialize, Serialize};

use crate::models::{CropCategory, CropProfile, Season};
use crate::types::Range;

/// (name, category, temperature °C, rainfall mm, soil pH, season)
type CatalogRow = (&'static str, CropCategory, (f64, f64), (f64, f64), (f64, f64), Season);

const STANDARD_CROPS: &[CatalogRow] = &[
    // Vegetables
    ("Tomato", CropCategory::Vegetables, (15.0, 30.0), (50.0, 150.0), (6.0, 7.0), Season::Winter),
    ("Brinjal", CropCategory::Vegetables, (20.0, 35.0), (60.0, 100.0), (5.5, 6.5), Season::Summer),
    ("Mirchi", CropCategory::Vegetables, (20.0, 30.0), (60.0, 120.0), (6.5, 7.5), Season::Summer),
    ("Karela", CropCategory::Vegetables, (24.0, 35.0), (50.0, 100.0), (6.0, 7.0), Season::Summer),
    // Grains
    ("Rice", CropCategory::Grains, (20.0, 35.0), (100.0, 200.0), (5.5, 6.5), Season::Monsoon),
    ("Wheat", CropCategory::Grains, (10.0, 25.0), (30.0, 80.0), (6.0, 7.5), Season::Winter),
    ("Barley", CropCategory::Grains, (12.0, 25.0), (30.0, 70.0), (6.5, 7.5), Season::Winter),
    ("Chickpea", CropCategory::Grains, (15.0, 30.0), (40.0, 80.0), (6.0, 7.5), Season::Winter),
    ("Ground nut", CropCategory::Grains, (20.0, 30.0), (50.0, 100.0), (6.0, 6.5), Season::Summer),
    ("Maize", CropCategory::Grains, (18.0, 32.0), (60.0, 120.0), (5.5, 7.0), Season::Monsoon),
    ("Millets", CropCategory::Grains, (25.0, 35.0), (40.0, 80.0), (5.0, 7.0), Season::Summer),
    // General
    ("Cotton", CropCategory::General, (21.0, 35.0), (50.0, 100.0), (6.0, 7.5), Season::Summer),
    ("Tobacco", CropCategory::General, (20.0, 30.0), (50.0, 120.0), (5.5, 6.5), Season::Winter),
];

/// Ordered collection of crop profiles
///
/// Iteration order is the tie-break order used when ranking.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    profiles: Vec<CropProfile>,
}

impl Catalog {
    pub fn new(profiles: Vec<CropProfile>) -> Self {
        Self { profiles }
    }

    /// The built-in catalog: vegetables, then grains, then general crops
    pub fn standard() -> Self {
        let profiles = STANDARD_CROPS
            .iter()
            .map(|&(name, category, temp, rain, ph, season)| {
                CropProfile::new(
                    name,
                    category,
                    Range::new(temp.0, temp.1),
                    Range::new(rain.0, rain.1),
                    Range::new(ph.0, ph.1),
                    season,
                )
            })
            .collect();

        Self { profiles }
    }

    pub fn iter(&self) -> impl Iterator<Item = &CropProfile> {
        self.profiles.iter()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&CropProfile> {
        self.profiles.iter().find(|p| p.name == name)
    }

    pub fn crop_names(&self) -> impl Iterator<Item = &str> {
        self.profiles.iter().map(|p| p.name.as_str())
    }

    pub fn by_category(&self, category: CropCategory) -> impl Iterator<Item = &CropProfile> {
        self.profiles.iter().filter(move |p| p.category == category)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CropProfile;
    type IntoIter = std::slice::Iter<'a, CropProfile>;

    fn into_iter(self) -> Self::IntoIter {
        self.profiles.iter()
    }
}
