//! Domain models for the Crop Advisor service

mod conditions;
mod crop;
mod market;
mod recommendation;

pub use conditions::*;
pub use crop::*;
pub use market::*;
pub use recommendation::*;
