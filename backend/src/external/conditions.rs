//! Weather and soil condition source
//!
//! Stands in for a live weather provider and soil survey: readings are drawn
//! uniformly from plausible bounds. Callers supply the random source so a
//! seeded generator reproduces the same readings.

use rand::{seq::SliceRandom, Rng};
use shared::{round_one_decimal, SoilConditions, WeatherConditions};

/// Sky conditions reported alongside the numeric readings
pub const WEATHER_DESCRIPTIONS: [&str; 4] = ["Clear sky", "Partly cloudy", "Rainy", "Humid"];

/// Sample current weather for a location
///
/// The location is echoed back unchanged.
pub fn sample_weather<R: Rng + ?Sized>(rng: &mut R, location: &str) -> WeatherConditions {
    let temperature = rng.gen_range(15.0..=35.0);
    let humidity = rng.gen_range(40.0..=90.0);
    let rainfall = rng.gen_range(20.0..=150.0);
    let description = WEATHER_DESCRIPTIONS
        .choose(rng)
        .copied()
        .unwrap_or(WEATHER_DESCRIPTIONS[0]);

    WeatherConditions {
        temperature,
        humidity,
        rainfall,
        description: description.to_string(),
        location: location.to_string(),
    }
}

/// Sample a soil reading
pub fn sample_soil<R: Rng + ?Sized>(rng: &mut R) -> SoilConditions {
    SoilConditions {
        ph: round_one_decimal(rng.gen_range(5.0..=7.5)),
        nitrogen: rng.gen_range(200..=400),
        phosphorus: rng.gen_range(20..=60),
        potassium: rng.gen_range(150..=300),
        organic_matter: round_one_decimal(rng.gen_range(1.5..=4.0)),
        moisture: rng.gen_range(30..=70),
    }
}
