//! Dissonance score value object ([0, 1] scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Cognitive dissonance score from upstream analysis, between 0 and 1.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DissonanceScore(f64);

impl DissonanceScore {
    /// Zero dissonance.
    pub const ZERO: Self = Self(0.0);

    /// Boost rules fire above this threshold.
    pub const BOOST_THRESHOLD: f64 = 0.7;

    /// Creates a new score, clamping to the valid range.
    ///
    /// NaN clamps to zero.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Creates a score, returning an error if out of range.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if value.is_nan() || !(0.0..=1.0).contains(&value) {
            return Err(ValidationError::out_of_range(
                "dissonance_score",
                0.0,
                1.0,
                value,
            ));
        }
        Ok(Self(value))
    }

    /// Returns the raw value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// True when the score exceeds the boost threshold.
    pub fn is_elevated(&self) -> bool {
        self.0 > Self::BOOST_THRESHOLD
    }
}

impl Default for DissonanceScore {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for DissonanceScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_valid_values() {
        assert_eq!(DissonanceScore::new(0.0).value(), 0.0);
        assert_eq!(DissonanceScore::new(0.5).value(), 0.5);
        assert_eq!(DissonanceScore::new(1.0).value(), 1.0);
    }

    #[test]
    fn new_clamps_out_of_range() {
        assert_eq!(DissonanceScore::new(1.5).value(), 1.0);
        assert_eq!(DissonanceScore::new(-0.3).value(), 0.0);
        assert_eq!(DissonanceScore::new(f64::NAN).value(), 0.0);
    }

    #[test]
    fn try_new_rejects_out_of_range() {
        assert!(DissonanceScore::try_new(0.7).is_ok());
        assert!(DissonanceScore::try_new(1.1).is_err());
        assert!(DissonanceScore::try_new(-0.1).is_err());
        assert!(DissonanceScore::try_new(f64::NAN).is_err());
    }

    #[test]
    fn is_elevated_only_above_threshold() {
        assert!(!DissonanceScore::new(0.7).is_elevated());
        assert!(DissonanceScore::new(0.71).is_elevated());
        assert!(DissonanceScore::new(1.0).is_elevated());
        assert!(!DissonanceScore::ZERO.is_elevated());
    }

    #[test]
    fn serializes_transparently() {
        let score = DissonanceScore::new(0.25);
        assert_eq!(serde_json::to_string(&score).unwrap(), "0.25");
    }
}
