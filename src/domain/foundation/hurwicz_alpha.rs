//! Hurwicz coefficient of optimism (0.0 to 1.0).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Weight given to the optimistic row outcome by the Hurwicz criterion.
///
/// The pessimistic outcome receives `1 - alpha`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct HurwiczAlpha(f64);

impl HurwiczAlpha {
    /// Pure pessimism (Wald).
    pub const PESSIMIST: Self = Self(0.0);

    /// Pure optimism.
    pub const OPTIMIST: Self = Self(1.0);

    /// Creates an alpha, returning `InvalidParameter` outside `[0, 1]`.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(ValidationError::invalid_parameter("alpha", 0.0, 1.0, value));
        }
        Ok(Self(value))
    }

    /// Returns the optimism weight.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns the pessimism weight, `1 - alpha`.
    pub fn complement(&self) -> f64 {
        1.0 - self.0
    }

    /// Blends an optimistic and a pessimistic outcome.
    pub fn blend(&self, optimistic: f64, pessimistic: f64) -> f64 {
        self.0 * optimistic + self.complement() * pessimistic
    }
}

impl Default for HurwiczAlpha {
    fn default() -> Self {
        Self(0.5)
    }
}

impl TryFrom<f64> for HurwiczAlpha {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<HurwiczAlpha> for f64 {
    fn from(alpha: HurwiczAlpha) -> Self {
        alpha.0
    }
}

impl fmt::Display for HurwiczAlpha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "α={}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_new_accepts_bounds() {
        assert!(HurwiczAlpha::try_new(0.0).is_ok());
        assert!(HurwiczAlpha::try_new(0.3).is_ok());
        assert!(HurwiczAlpha::try_new(1.0).is_ok());
    }

    #[test]
    fn try_new_rejects_out_of_range() {
        for bad in [-0.01, 1.01, f64::NAN, f64::INFINITY] {
            match HurwiczAlpha::try_new(bad) {
                Err(ValidationError::InvalidParameter { name, .. }) => assert_eq!(name, "alpha"),
                other => panic!("Expected InvalidParameter for {}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn blend_weights_outcomes() {
        let alpha = HurwiczAlpha::try_new(0.25).unwrap();
        assert_eq!(alpha.complement(), 0.75);
        assert_eq!(alpha.blend(8.0, 4.0), 5.0);
    }

    #[test]
    fn extremes_pick_one_side() {
        assert_eq!(HurwiczAlpha::OPTIMIST.blend(9.0, 3.0), 9.0);
        assert_eq!(HurwiczAlpha::PESSIMIST.blend(9.0, 3.0), 3.0);
    }

    #[test]
    fn deserialization_validates() {
        let alpha: HurwiczAlpha = serde_json::from_str("0.6").unwrap();
        assert_eq!(alpha.value(), 0.6);
        assert!(serde_json::from_str::<HurwiczAlpha>("1.2").is_err());
    }

    #[test]
    fn default_is_balanced() {
        assert_eq!(HurwiczAlpha::default().value(), 0.5);
    }
}
