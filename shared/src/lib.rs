//! Shared types and models for the Crop Advisor service
//!
//! This crate contains the crop catalog, the suitability scorer and the
//! ranking logic shared between the backend and the browser (via WASM).

pub mod catalog;
pub mod models;
pub mod scoring;
pub mod types;
pub mod validation;

pub use catalog::*;
pub use models::*;
pub use scoring::*;
pub use types::*;
pub use validation::*;
