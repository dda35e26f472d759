//! Analysis defaults

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::analysis::DEFAULT_PROBABILITY_TOLERANCE;
use crate::domain::foundation::HurwiczAlpha;

const MAX_PROBABILITY_TOLERANCE: f64 = 1e-3;

/// Defaults applied to problems that leave them unset
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// Coefficient of optimism for problems without `hurwicz_alpha`
    #[serde(default = "default_hurwicz_alpha")]
    pub default_hurwicz_alpha: f64,

    /// Allowed deviation of a probability sum from 1; the default 0 demands an exact sum
    #[serde(default = "default_probability_tolerance")]
    pub probability_tolerance: f64,

    /// Directory problem files are read from
    #[serde(default = "default_problems_dir")]
    pub problems_dir: String,
}

impl AnalysisConfig {
    /// Returns the default coefficient as a validated value
    pub fn hurwicz_alpha(&self) -> Result<HurwiczAlpha, ValidationError> {
        HurwiczAlpha::try_new(self.default_hurwicz_alpha)
            .map_err(|_| ValidationError::InvalidHurwiczAlpha(self.default_hurwicz_alpha))
    }

    /// Validate analysis configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.hurwicz_alpha()?;

        if !(0.0..=MAX_PROBABILITY_TOLERANCE).contains(&self.probability_tolerance) {
            return Err(ValidationError::InvalidProbabilityTolerance(
                self.probability_tolerance,
            ));
        }
        if self.problems_dir.trim().is_empty() {
            return Err(ValidationError::MissingRequired("analysis.problems_dir"));
        }
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            default_hurwicz_alpha: default_hurwicz_alpha(),
            probability_tolerance: default_probability_tolerance(),
            problems_dir: default_problems_dir(),
        }
    }
}

fn default_hurwicz_alpha() -> f64 {
    0.5
}

fn default_probability_tolerance() -> f64 {
    DEFAULT_PROBABILITY_TOLERANCE
}

fn default_problems_dir() -> String {
    "problems".to_string()
}
