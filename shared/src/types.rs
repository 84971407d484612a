//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// Closed numeric interval `[min, max]` describing an acceptable growing condition
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Inclusive on both ends
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Absolute distance from the midpoint of the range
    pub fn distance_from_midpoint(&self, value: f64) -> f64 {
        (value - self.midpoint()).abs()
    }
}

/// Round to one decimal place, the precision used for soil readings and scores
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_contains_is_inclusive() {
        let range = Range::new(15.0, 30.0);
        assert!(range.contains(15.0));
        assert!(range.contains(30.0));
        assert!(range.contains(22.5));
        assert!(!range.contains(14.999));
        assert!(!range.contains(30.001));
    }

    #[test]
    fn test_range_midpoint() {
        assert_eq!(Range::new(15.0, 30.0).midpoint(), 22.5);
        assert_eq!(Range::new(6.0, 7.0).midpoint(), 6.5);
        assert_eq!(Range::new(15.0, 30.0).distance_from_midpoint(40.0), 17.5);
    }

    #[test]
    fn test_round_one_decimal() {
        assert_eq!(round_one_decimal(6.449), 6.4);
        assert_eq!(round_one_decimal(6.45001), 6.5);
        assert_eq!(round_one_decimal(-3.26), -3.3);
        assert_eq!(round_one_decimal(115.0), 115.0);
    }
}
