//! Crop Advisor - Backend Library
//!
//! Recommends crops for a location by scoring a fixed catalog against
//! sampled weather, soil and market conditions.

use std::sync::Arc;

use axum::{routing::get, Router};
use shared::{validate_catalog, Catalog};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod routes;
pub mod services;

pub use config::Config;
use error::AppResult;
use services::AnalysisService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub analysis: AnalysisService,
}

impl AppState {
    /// Validate the catalog and build the state served to every request
    pub fn new(config: Config, catalog: Catalog) -> AppResult<Self> {
        validate_catalog(&catalog)?;

        let analysis = AnalysisService::with_seed(Arc::new(catalog), config.sampling.seed);

        Ok(Self {
            config: Arc::new(config),
            analysis,
        })
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .merge(routes::api_routes())
        .nest("/api", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Crop Advisor API v1.0"
}
