//! Business logic services for the Crop Advisor service

pub mod analysis;

pub use analysis::AnalysisService;
