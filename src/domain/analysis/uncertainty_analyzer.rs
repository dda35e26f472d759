//! Uncertainty Analyzer - Criteria for decisions with unknown state probabilities.

use super::{Criterion, CriterionResult, PayoffMatrix, UncertaintyReport};
use crate::domain::foundation::{max_of, min_of, HurwiczAlpha};

/// Decision criteria under uncertainty.
///
/// Every criterion reduces each alternative to a row score, then selects the
/// best row score for the matrix orientation. Savage works on the regret
/// matrix and always minimises.
pub struct UncertaintyAnalyzer;

impl UncertaintyAnalyzer {
    /// Best payoff of each row: row max for gains, row min for costs.
    pub fn optimistic_scores(matrix: &PayoffMatrix) -> Vec<f64> {
        let orientation = matrix.orientation();
        matrix.payoffs().iter().map(|row| orientation.best(row)).collect()
    }

    /// Worst payoff of each row: row min for gains, row max for costs.
    pub fn pessimistic_scores(matrix: &PayoffMatrix) -> Vec<f64> {
        let orientation = matrix.orientation();
        matrix.payoffs().iter().map(|row| orientation.worst(row)).collect()
    }

    /// Arithmetic mean of each row.
    pub fn laplace_scores(matrix: &PayoffMatrix) -> Vec<f64> {
        let states = matrix.state_count() as f64;
        matrix
            .payoffs()
            .iter()
            .map(|row| row.iter().sum::<f64>() / states)
            .collect()
    }

    /// `alpha * optimistic + (1 - alpha) * pessimistic` for each row.
    pub fn hurwicz_scores(matrix: &PayoffMatrix, alpha: HurwiczAlpha) -> Vec<f64> {
        Self::optimistic_scores(matrix)
            .into_iter()
            .zip(Self::pessimistic_scores(matrix))
            .map(|(optimistic, pessimistic)| alpha.blend(optimistic, pessimistic))
            .collect()
    }

    /// Maximum regret of each row.
    pub fn max_regret_scores(matrix: &PayoffMatrix) -> Vec<f64> {
        matrix
            .regret()
            .rows()
            .iter()
            .map(|row| max_of(row))
            .collect()
    }

    /// Optimism: the alternative with the best best-case outcome.
    pub fn optimism(matrix: &PayoffMatrix) -> CriterionResult {
        Self::select_best(matrix, Criterion::Optimism, &Self::optimistic_scores(matrix))
    }

    /// Pessimism: the alternative with the best worst-case outcome.
    pub fn pessimism(matrix: &PayoffMatrix) -> CriterionResult {
        Self::select_best(matrix, Criterion::Pessimism, &Self::pessimistic_scores(matrix))
    }

    /// Laplace: the alternative with the best mean outcome.
    pub fn laplace(matrix: &PayoffMatrix) -> CriterionResult {
        Self::select_best(matrix, Criterion::Laplace, &Self::laplace_scores(matrix))
    }

    /// Hurwicz: the alternative with the best alpha-weighted blend.
    pub fn hurwicz(matrix: &PayoffMatrix, alpha: HurwiczAlpha) -> CriterionResult {
        Self::select_best(matrix, Criterion::Hurwicz, &Self::hurwicz_scores(matrix, alpha))
    }

    /// Savage: the alternative whose maximum regret is smallest.
    ///
    /// Orientation-independent; regret is already a non-negative loss.
    pub fn savage(matrix: &PayoffMatrix) -> CriterionResult {
        CriterionResult::select(
            Criterion::Savage,
            matrix.alternatives(),
            &Self::max_regret_scores(matrix),
            min_of,
        )
    }

    /// Runs all five criteria.
    pub fn evaluate(matrix: &PayoffMatrix, alpha: HurwiczAlpha) -> UncertaintyReport {
        UncertaintyReport {
            optimism: Self::optimism(matrix),
            pessimism: Self::pessimism(matrix),
            laplace: Self::laplace(matrix),
            hurwicz_alpha: alpha,
            hurwicz: Self::hurwicz(matrix, alpha),
            savage: Self::savage(matrix),
        }
    }

    fn select_best(matrix: &PayoffMatrix, criterion: Criterion, scores: &[f64]) -> CriterionResult {
        let orientation = matrix.orientation();
        CriterionResult::select(criterion, matrix.alternatives(), scores, |s| {
            orientation.best(s)
        })
    }
}
