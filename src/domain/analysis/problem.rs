//! Decision Problem - Raw input handed over by the data-entry layer.

use serde::{Deserialize, Serialize};

use super::{DecisionMode, PayoffMatrix, ProbabilityVector};
use crate::domain::foundation::{HurwiczAlpha, Orientation, ValidationError};

/// Unvalidated description of a decision problem.
///
/// A problem that carries `probabilities` is evaluated under risk;
/// otherwise it is evaluated under uncertainty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionProblem {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub orientation: Orientation,
    pub alternatives: Vec<String>,
    pub states: Vec<String>,
    pub payoffs: Vec<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probabilities: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hurwicz_alpha: Option<f64>,
}

impl DecisionProblem {
    /// Returns the information regime for this problem.
    pub fn mode(&self) -> DecisionMode {
        if self.probabilities.is_some() {
            DecisionMode::Risk
        } else {
            DecisionMode::Uncertainty
        }
    }

    /// Validates the payoff table into a matrix.
    pub fn matrix(&self) -> Result<PayoffMatrix, ValidationError> {
        PayoffMatrix::try_new(
            self.payoffs.clone(),
            self.orientation,
            self.alternatives.clone(),
            self.states.clone(),
        )
    }

    /// Validates the probabilities, if any, with the given sum tolerance.
    pub fn probability_vector(
        &self,
        tolerance: f64,
    ) -> Option<Result<ProbabilityVector, ValidationError>> {
        self.probabilities
            .as_ref()
            .map(|values| ProbabilityVector::try_with_tolerance(values.clone(), tolerance))
    }

    /// Resolves the Hurwicz coefficient, falling back to `default` when unset.
    pub fn alpha_or(&self, default: HurwiczAlpha) -> Result<HurwiczAlpha, ValidationError> {
        match self.hurwicz_alpha {
            Some(value) => HurwiczAlpha::try_new(value),
            None => Ok(default),
        }
    }
}
