//! HTTP handlers for the Crop Advisor service

pub mod analysis;
pub mod health;

pub use analysis::analyze;
pub use health::health_check;
