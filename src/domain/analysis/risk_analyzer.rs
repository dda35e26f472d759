//! Risk Analyzer - Criteria for decisions with known state probabilities.

use serde::{Deserialize, Serialize};

use super::{
    AlternativeScore, Criterion, CriterionResult, PayoffMatrix, ProbabilityVector, RiskReport,
};
use crate::domain::foundation::{min_of, ValidationError};

/// Maximum-likelihood outcome: the most probable state and the best
/// alternative(s) within it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaximumLikelihoodResult {
    /// Label of the most probable state.
    pub state: String,
    /// Probability of that state.
    pub probability: f64,
    pub result: CriterionResult,
}

/// Decision criteria under risk for one matrix and probability vector.
///
/// Construction checks that the probabilities cover exactly the matrix
/// states; afterwards every criterion is total.
#[derive(Debug, Clone, Copy)]
pub struct RiskAnalyzer<'a> {
    matrix: &'a PayoffMatrix,
    probabilities: &'a ProbabilityVector,
}

impl<'a> RiskAnalyzer<'a> {
    /// Pairs a matrix with its state probabilities.
    ///
    /// # Errors
    /// `DimensionMismatch` if the vector length differs from the state count.
    pub fn try_new(
        matrix: &'a PayoffMatrix,
        probabilities: &'a ProbabilityVector,
    ) -> Result<Self, ValidationError> {
        if probabilities.len() != matrix.state_count() {
            return Err(ValidationError::DimensionMismatch {
                expected: matrix.state_count(),
                actual: probabilities.len(),
            });
        }

        Ok(Self {
            matrix,
            probabilities,
        })
    }

    /// Returns the analysed matrix.
    pub fn matrix(&self) -> &'a PayoffMatrix {
        self.matrix
    }

    /// Returns the state probabilities.
    pub fn probabilities(&self) -> &'a ProbabilityVector {
        self.probabilities
    }

    /// Probability-weighted payoff of each alternative.
    pub fn expected_values(&self) -> Vec<f64> {
        self.matrix
            .payoffs()
            .iter()
            .map(|row| self.probabilities.weighted_sum(row))
            .collect()
    }

    /// Probability-weighted regret of each alternative.
    pub fn expected_opportunity_losses(&self) -> Vec<f64> {
        self.matrix
            .regret()
            .rows()
            .iter()
            .map(|row| self.probabilities.weighted_sum(row))
            .collect()
    }

    /// Expected value: the alternative with the best expected payoff.
    pub fn expected_value(&self) -> CriterionResult {
        let orientation = self.matrix.orientation();
        CriterionResult::select(
            Criterion::ExpectedValue,
            self.matrix.alternatives(),
            &self.expected_values(),
            |s| orientation.best(s),
        )
    }

    /// Maximum likelihood: assume the most probable state occurs and pick
    /// its best cell.
    ///
    /// Tied most-probable states resolve to the first one. Alternatives tied
    /// within that state are all reported.
    pub fn maximum_likelihood(&self) -> MaximumLikelihoodResult {
        let column = self.probabilities.most_likely();
        let orientation = self.matrix.orientation();
        let payoffs: Vec<f64> = self.matrix.column(column).collect();

        MaximumLikelihoodResult {
            state: self.matrix.states()[column].clone(),
            probability: self.probabilities.values()[column],
            result: CriterionResult::select(
                Criterion::MaximumLikelihood,
                self.matrix.alternatives(),
                &payoffs,
                |s| orientation.best(s),
            ),
        }
    }

    /// Expected opportunity loss: the alternative with the smallest EOL.
    ///
    /// Always a minimisation, whatever the orientation.
    pub fn expected_opportunity_loss(&self) -> CriterionResult {
        CriterionResult::select(
            Criterion::ExpectedOpportunityLoss,
            self.matrix.alternatives(),
            &self.expected_opportunity_losses(),
            min_of,
        )
    }

    /// Value of perfect information: the minimum EOL across alternatives.
    ///
    /// The most a decision maker should pay to learn the state in advance.
    pub fn value_of_perfect_information(&self) -> f64 {
        min_of(&self.expected_opportunity_losses())
    }

    /// Expected payoff if the state were always known before choosing:
    /// the probability-weighted sum of the column optima.
    pub fn expected_value_with_perfect_information(&self) -> f64 {
        self.probabilities
            .weighted_sum(self.matrix.regret().column_optima())
    }

    /// Runs every risk criterion.
    pub fn evaluate(&self) -> RiskReport {
        let labels = self.matrix.alternatives();
        let expected_values = self.expected_values();
        let losses = self.expected_opportunity_losses();

        RiskReport {
            probabilities: self.probabilities.values().to_vec(),
            expected_value: self.expected_value(),
            expected_values: AlternativeScore::series(labels, &expected_values),
            maximum_likelihood: self.maximum_likelihood(),
            expected_opportunity_loss: self.expected_opportunity_loss(),
            expected_opportunity_losses: AlternativeScore::series(labels, &losses),
            value_of_perfect_information: min_of(&losses),
            expected_value_with_perfect_information: self
                .expected_value_with_perfect_information(),
        }
    }
}
