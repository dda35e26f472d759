//! Probability Vector - Known state probabilities for decisions under risk.

use serde::Serialize;

use crate::domain::foundation::ValidationError;

/// Default absolute tolerance on the probability sum: the sum must be exactly 1.
pub const DEFAULT_PROBABILITY_TOLERANCE: f64 = 0.0;

/// Validated probabilities, one per state, each in `[0, 1]`, summing to 1.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ProbabilityVector(Vec<f64>);

impl ProbabilityVector {
    /// Validates probabilities, requiring an exact sum of 1.
    ///
    /// Use [`ProbabilityVector::try_with_tolerance`] to accept decimal inputs
    /// whose binary sum is off by rounding.
    pub fn try_new(values: Vec<f64>) -> Result<Self, ValidationError> {
        Self::try_with_tolerance(values, DEFAULT_PROBABILITY_TOLERANCE)
    }

    /// Validates probabilities with an explicit tolerance on the sum.
    ///
    /// Each value must lie in `[0, 1]` exactly. The sum must be within
    /// `tolerance` of 1; a tolerance of `0.0` demands exact equality.
    ///
    /// # Errors
    /// `InvalidProbability` for an empty vector, a value outside `[0, 1]`,
    /// or a sum too far from 1.
    pub fn try_with_tolerance(values: Vec<f64>, tolerance: f64) -> Result<Self, ValidationError> {
        if values.is_empty() {
            return Err(ValidationError::invalid_probability(
                "at least one probability is required",
            ));
        }

        if let Some((index, value)) = values
            .iter()
            .enumerate()
            .find(|(_, p)| !(0.0..=1.0).contains(*p))
        {
            return Err(ValidationError::invalid_probability(format!(
                "probability {} at position {} is outside [0, 1]",
                value, index
            )));
        }

        let sum: f64 = values.iter().sum();
        if (sum - 1.0).abs() > tolerance {
            return Err(ValidationError::invalid_probability(format!(
                "probabilities sum to {}, expected 1",
                sum
            )));
        }

        Ok(Self(values))
    }

    /// Returns the probabilities in state order.
    pub fn values(&self) -> &[f64] {
        &self.0
    }

    /// Returns the number of states covered.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a validated vector.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Probability-weighted sum of one row of values.
    pub fn weighted_sum(&self, row: &[f64]) -> f64 {
        row.iter().zip(&self.0).map(|(value, p)| value * p).sum()
    }

    /// Index of the most probable state; the first one wins a tie.
    pub fn most_likely(&self) -> usize {
        let mut best = 0;
        for (index, p) in self.0.iter().enumerate().skip(1) {
            if *p > self.0[best] {
                best = index;
            }
        }
        best
    }
}
