//! WebAssembly module for the Crop Advisor dashboard
//!
//! Provides client-side computation for:
//! - Suitability scoring of a crop against entered conditions
//! - Market adjustment of a score
//! - The built-in crop catalog and per-crop / per-category lookups

use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::catalog::*;
pub use shared::models::*;
pub use shared::scoring::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::log_1(&"Crop Advisor scoring module loaded".into());
}

/// Calculate the base suitability score (0-100) for a crop
///
/// Takes JSON-encoded `CropProfile`, `WeatherConditions` and `SoilConditions`.
#[wasm_bindgen]
pub fn calculate_suitability(
    profile_json: &str,
    weather_json: &str,
    soil_json: &str,
) -> Result<f64, JsValue> {
    let profile: CropProfile = serde_json::from_str(profile_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid crop profile JSON: {}", e)))?;
    let weather: WeatherConditions = serde_json::from_str(weather_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid weather JSON: {}", e)))?;
    let soil: SoilConditions = serde_json::from_str(soil_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid soil JSON: {}", e)))?;

    Ok(suitability_score(&profile, &weather, &soil))
}

/// Calculate the per-condition score breakdown for a crop as JSON
#[wasm_bindgen]
pub fn calculate_breakdown(
    profile_json: &str,
    weather_json: &str,
    soil_json: &str,
) -> Result<String, JsValue> {
    let profile: CropProfile = serde_json::from_str(profile_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid crop profile JSON: {}", e)))?;
    let weather: WeatherConditions = serde_json::from_str(weather_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid weather JSON: {}", e)))?;
    let soil: SoilConditions = serde_json::from_str(soil_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid soil JSON: {}", e)))?;

    serde_json::to_string(&score_breakdown(&profile, &weather, &soil))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Apply the market adjustment to a base score
///
/// Unknown trend or demand labels contribute nothing.
#[wasm_bindgen]
pub fn apply_market_adjustment(base_score: f64, trend: &str, demand: &str) -> f64 {
    let outlook = MarketOutlook {
        current_price: 0,
        trend: parse_trend(trend).unwrap_or(MarketTrend::Stable),
        demand: parse_demand(demand).unwrap_or(Demand::Low),
        forecast: 0,
    };
    final_score(base_score, &outlook)
}

/// The built-in crop catalog as JSON
#[wasm_bindgen]
pub fn standard_catalog_json() -> String {
    serde_json::to_string(&Catalog::standard()).unwrap_or_else(|_| "{}".to_string())
}

/// A single crop profile from the built-in catalog as JSON, if the crop exists
#[wasm_bindgen]
pub fn crop_profile_json(name: &str) -> Option<String> {
    Catalog::standard()
        .get(name)
        .and_then(|profile| serde_json::to_string(profile).ok())
}

/// Names of the built-in crops in a category ("vegetables", "grains", "general") as JSON
///
/// Unknown categories yield an empty list.
#[wasm_bindgen]
pub fn crops_in_category_json(category: &str) -> String {
    let names: Vec<String> = match parse_category(category) {
        Some(category) => Catalog::standard()
            .by_category(category)
            .map(|profile| profile.name.clone())
            .collect(),
        None => Vec::new(),
    };
    serde_json::to_string(&names).unwrap_or_else(|_| "[]".to_string())
}

fn parse_category(label: &str) -> Option<CropCategory> {
    [CropCategory::Vegetables, CropCategory::Grains, CropCategory::General]
        .into_iter()
        .find(|c| c.to_string().eq_ignore_ascii_case(label.trim()))
}

fn parse_trend(label: &str) -> Option<MarketTrend> {
    MarketTrend::ALL
        .into_iter()
        .find(|t| t.to_string().eq_ignore_ascii_case(label.trim()))
}

fn parse_demand(label: &str) -> Option<Demand> {
    Demand::ALL
        .into_iter()
        .find(|d| d.to_string().eq_ignore_ascii_case(label.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_labels() {
        assert_eq!(parse_trend("rising"), Some(MarketTrend::Rising));
        assert_eq!(parse_trend(" Falling "), Some(MarketTrend::Falling));
        assert_eq!(parse_trend("sideways"), None);
        assert_eq!(parse_demand("HIGH"), Some(Demand::High));
        assert_eq!(parse_demand(""), None);
    }

    #[test]
    fn test_apply_market_adjustment() {
        assert_eq!(apply_market_adjustment(100.0, "rising", "high"), 115.0);
        assert_eq!(apply_market_adjustment(50.0, "stable", "medium"), 50.0);
        assert_eq!(apply_market_adjustment(5.0, "falling", "low"), -5.0);
        assert_eq!(apply_market_adjustment(40.0, "unknown", "high"), 45.0);
    }

    #[test]
    fn test_adjustment_matches_shared_scoring() {
        let outlook = MarketOutlook {
            current_price: 2000,
            trend: MarketTrend::Falling,
            demand: Demand::High,
            forecast: 0,
        };
        assert_eq!(
            apply_market_adjustment(80.0, "falling", "high"),
            final_score(80.0, &outlook)
        );
    }

    #[test]
    fn test_crop_profile_lookup() {
        let json = crop_profile_json("Millets").unwrap();
        let profile: CropProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(profile.category, CropCategory::Grains);
        assert_eq!(profile.season, Season::Summer);
        assert!(crop_profile_json("Coffee").is_none());
    }

    #[test]
    fn test_crops_in_category() {
        let names: Vec<String> = serde_json::from_str(&crops_in_category_json("general")).unwrap();
        assert_eq!(names, vec!["Cotton", "Tobacco"]);

        let names: Vec<String> = serde_json::from_str(&crops_in_category_json("Vegetables")).unwrap();
        assert_eq!(names, vec!["Tomato", "Brinjal", "Mirchi", "Karela"]);

        assert_eq!(crops_in_category_json("fruit"), "[]");
    }

    #[test]
    fn test_standard_catalog_json() {
        let json = standard_catalog_json();
        let catalog: Catalog = serde_json::from_str(&json).unwrap();
        assert_eq!(catalog.len(), 13);
    }
}
