//! Regret Matrix - Opportunity loss of every cell against its column optimum.

use serde::{Deserialize, Serialize};

use super::PayoffMatrix;

/// Opportunity-loss matrix with the same shape as its payoff matrix.
///
/// Entry `(i, j)` is `|payoff[i][j] - optimum[j]|`, where the column optimum
/// is the column max for gain problems and the column min for cost problems.
/// Every entry is non-negative, so regret is always minimised regardless of
/// orientation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegretMatrix {
    column_optima: Vec<f64>,
    regrets: Vec<Vec<f64>>,
}

impl RegretMatrix {
    /// Derives the regret matrix of a payoff matrix.
    ///
    /// Prefer [`PayoffMatrix::regret`], which caches the result.
    pub fn derive(matrix: &PayoffMatrix) -> Self {
        let orientation = matrix.orientation();

        let column_optima: Vec<f64> = (0..matrix.state_count())
            .map(|j| {
                let column: Vec<f64> = matrix.column(j).collect();
                orientation.best(&column)
            })
            .collect();

        let regrets = matrix
            .payoffs()
            .iter()
            .map(|row| {
                row.iter()
                    .zip(&column_optima)
                    .map(|(payoff, optimum)| (payoff - optimum).abs())
                    .collect()
            })
            .collect();

        Self {
            column_optima,
            regrets,
        }
    }

    /// Returns the best payoff of each state.
    pub fn column_optima(&self) -> &[f64] {
        &self.column_optima
    }

    /// Returns all regret rows.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.regrets
    }

    /// Returns the regrets of one alternative.
    pub fn row(&self, index: usize) -> &[f64] {
        &self.regrets[index]
    }

    /// Returns the regret of a single cell.
    pub fn get(&self, row: usize, column: usize) -> f64 {
        self.regrets[row][column]
    }
}
