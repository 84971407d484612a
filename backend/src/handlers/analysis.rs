//! HTTP handlers for crop analysis endpoints

use axum::{extract::State, Json};
use axum_extra::extract::WithRejection;
use serde::Deserialize;
use shared::AnalysisReport;

use crate::error::{AppError, AppResult};
use crate::AppState;

/// Request body for an analysis
#[derive(Debug, Default, Deserialize)]
pub struct AnalyzeRequest {
    pub location: Option<String>,
}

impl AnalyzeRequest {
    /// The requested location, or the fallback when it is missing or empty
    pub fn location_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self.location.as_deref() {
            Some(location) if !location.is_empty() => location,
            _ => fallback,
        }
    }
}

/// Analyze a location and return the top crop recommendations
pub async fn analyze(
    State(state): State<AppState>,
    WithRejection(Json(input), _): WithRejection<Json<AnalyzeRequest>, AppError>,
) -> AppResult<Json<AnalysisReport>> {
    let location = input.location_or(&state.config.analysis.default_location);
    let report = state.analysis.analyze(location)?;
    Ok(Json(report))
}
