//! Validation utilities for the Crop Advisor service
//!
//! The catalog is fixed configuration, so it is checked once at startup
//! rather than on every request.

use std::collections::HashSet;

use thiserror::Error;

use crate::catalog::Catalog;
use crate::types::Range;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Crop name must not be empty")]
    EmptyName,

    #[error("Duplicate crop in catalog: {0}")]
    DuplicateCrop(String),

    #[error("Invalid {field} range for {crop}: {min} > {max}")]
    InvertedRange {
        crop: String,
        field: &'static str,
        min: f64,
        max: f64,
    },

    #[error("Non-finite {field} bound for {crop}")]
    NonFiniteBound { crop: String, field: &'static str },
}

fn validate_range(crop: &str, field: &'static str, range: &Range) -> Result<(), CatalogError> {
    if !range.min.is_finite() || !range.max.is_finite() {
        return Err(CatalogError::NonFiniteBound {
            crop: crop.to_string(),
            field,
        });
    }
    if range.min > range.max {
        return Err(CatalogError::InvertedRange {
            crop: crop.to_string(),
            field,
            min: range.min,
            max: range.max,
        });
    }
    Ok(())
}

/// Check every crop has a unique name and well-formed ranges
pub fn validate_catalog(catalog: &Catalog) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();

    for profile in catalog {
        if profile.name.trim().is_empty() {
            return Err(CatalogError::EmptyName);
        }
        if !seen.insert(profile.name.as_str()) {
            return Err(CatalogError::DuplicateCrop(profile.name.clone()));
        }

        validate_range(&profile.name, "temperature", &profile.temperature)?;
        validate_range(&profile.name, "rainfall", &profile.rainfall)?;
        validate_range(&profile.name, "soil_ph", &profile.soil_ph)?;
    }

    Ok(())
}
