//! Percentage value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A value between 0 and 100 inclusive.
///
/// Used for CPU utilization readings taken from inventory exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(u8);

impl Percentage {
    /// Creates a new Percentage, clamping to valid range.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Creates a Percentage from a fractional measurement, rounding to the
    /// nearest whole percent.
    ///
    /// Returns `None` for NaN or values outside 0-100.
    pub fn from_measurement(value: f64) -> Option<Self> {
        if !value.is_finite() || !(0.0..=100.0).contains(&value) {
            return None;
        }
        Some(Self(value.round() as u8))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_new_clamps_to_100() {
        assert_eq!(Percentage::new(101).value(), 100);
        assert_eq!(Percentage::new(255).value(), 100);
    }

    #[test]
    fn from_measurement_rounds() {
        assert_eq!(Percentage::from_measurement(18.4), Some(Percentage::new(18)));
        assert_eq!(Percentage::from_measurement(85.5), Some(Percentage::new(86)));
    }

    #[test]
    fn from_measurement_rejects_out_of_range() {
        assert_eq!(Percentage::from_measurement(-1.0), None);
        assert_eq!(Percentage::from_measurement(100.1), None);
        assert_eq!(Percentage::from_measurement(f64::NAN), None);
    }

    #[test]
    fn display_adds_percent_sign() {
        assert_eq!(format!("{}", Percentage::new(42)), "42%");
    }
}
