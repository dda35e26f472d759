//! Payoff Matrix - Validated alternatives x states table of payoffs.

use once_cell::sync::OnceCell;
use serde::{Serialize, Serializer};
use std::collections::HashSet;

use super::RegretMatrix;
use crate::domain::foundation::{Axis, Orientation, ValidationError};

/// An immutable, rectangular payoff matrix.
///
/// Rows are alternatives, columns are states of nature. Every instance is
/// validated on construction: at least one row and one column, equal row
/// lengths, finite payoffs, and unique labels matching both dimensions.
///
/// The regret matrix is derived lazily on first use and cached for the
/// lifetime of the matrix. Concurrent readers share the same cached value.
#[derive(Debug, Clone)]
pub struct PayoffMatrix {
    payoffs: Vec<Vec<f64>>,
    orientation: Orientation,
    alternatives: Vec<String>,
    states: Vec<String>,
    regret: OnceCell<RegretMatrix>,
}

impl PayoffMatrix {
    /// Builds a matrix from validated input.
    ///
    /// # Errors
    /// - `EmptyMatrix` if there are no rows or no columns
    /// - `ShapeMismatch` if rows differ in length
    /// - `NonFiniteValue` if a payoff is NaN or infinite
    /// - `LabelMismatch` if a label list disagrees with its dimension
    /// - `DuplicateLabel` if a label repeats within its axis
    pub fn try_new(
        payoffs: Vec<Vec<f64>>,
        orientation: Orientation,
        alternatives: Vec<String>,
        states: Vec<String>,
    ) -> Result<Self, ValidationError> {
        let width = Self::check_shape(&payoffs)?;

        for (row, values) in payoffs.iter().enumerate() {
            if let Some(column) = values.iter().position(|v| !v.is_finite()) {
                return Err(ValidationError::NonFiniteValue { row, column });
            }
        }

        Self::check_labels(Axis::Alternatives, &alternatives, payoffs.len())?;
        Self::check_labels(Axis::States, &states, width)?;

        Ok(Self {
            payoffs,
            orientation,
            alternatives,
            states,
            regret: OnceCell::new(),
        })
    }

    /// Creates a builder for constructing a payoff matrix.
    pub fn builder() -> PayoffMatrixBuilder {
        PayoffMatrixBuilder::new()
    }

    /// Returns the column count shared by every row.
    fn check_shape(payoffs: &[Vec<f64>]) -> Result<usize, ValidationError> {
        let first = payoffs.first().ok_or(ValidationError::EmptyMatrix)?;
        let expected = first.len();

        if let Some((row, values)) = payoffs
            .iter()
            .enumerate()
            .find(|(_, values)| values.len() != expected)
        {
            return Err(ValidationError::ShapeMismatch {
                row,
                expected,
                actual: values.len(),
            });
        }

        if expected == 0 {
            return Err(ValidationError::EmptyMatrix);
        }

        Ok(expected)
    }

    fn check_labels(axis: Axis, labels: &[String], expected: usize) -> Result<(), ValidationError> {
        if labels.len() != expected {
            return Err(ValidationError::label_mismatch(axis, expected, labels.len()));
        }

        let mut seen = HashSet::with_capacity(labels.len());
        for label in labels {
            if !seen.insert(label.as_str()) {
                return Err(ValidationError::DuplicateLabel {
                    axis,
                    label: label.clone(),
                });
            }
        }

        Ok(())
    }

    /// Returns the payoff rows.
    pub fn payoffs(&self) -> &[Vec<f64>] {
        &self.payoffs
    }

    /// Returns the payoffs of one alternative.
    pub fn row(&self, index: usize) -> &[f64] {
        &self.payoffs[index]
    }

    /// Iterates over the payoffs of one state.
    pub fn column(&self, index: usize) -> impl Iterator<Item = f64> + '_ {
        self.payoffs.iter().map(move |row| row[index])
    }

    /// Returns the problem orientation.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns the alternative labels in row order.
    pub fn alternatives(&self) -> &[String] {
        &self.alternatives
    }

    /// Returns the state labels in column order.
    pub fn states(&self) -> &[String] {
        &self.states
    }

    /// Returns the number of alternatives.
    pub fn alternative_count(&self) -> usize {
        self.payoffs.len()
    }

    /// Returns the number of states.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Returns the opportunity-loss matrix, computing it on first access.
    pub fn regret(&self) -> &RegretMatrix {
        self.regret.get_or_init(|| RegretMatrix::derive(self))
    }
}

impl PartialEq for PayoffMatrix {
    fn eq(&self, other: &Self) -> bool {
        self.payoffs == other.payoffs
            && self.orientation == other.orientation
            && self.alternatives == other.alternatives
            && self.states == other.states
    }
}

impl Serialize for PayoffMatrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut s = serializer.serialize_struct("PayoffMatrix", 4)?;
        s.serialize_field("orientation", &self.orientation)?;
        s.serialize_field("alternatives", &self.alternatives)?;
        s.serialize_field("states", &self.states)?;
        s.serialize_field("payoffs", &self.payoffs)?;
        s.end()
    }
}

/// Builder for constructing PayoffMatrix instances.
#[derive(Debug, Default)]
pub struct PayoffMatrixBuilder {
    orientation: Orientation,
    alternatives: Vec<String>,
    states: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl PayoffMatrixBuilder {
    /// Creates a new builder for a gain problem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the orientation.
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Sets the alternatives.
    pub fn alternatives(mut self, labels: Vec<impl Into<String>>) -> Self {
        self.alternatives = labels.into_iter().map(|s| s.into()).collect();
        self
    }

    /// Sets the states.
    pub fn states(mut self, labels: Vec<impl Into<String>>) -> Self {
        self.states = labels.into_iter().map(|s| s.into()).collect();
        self
    }

    /// Appends a row of payoffs.
    pub fn row(mut self, payoffs: Vec<f64>) -> Self {
        self.rows.push(payoffs);
        self
    }

    /// Replaces all rows.
    pub fn rows(mut self, rows: Vec<Vec<f64>>) -> Self {
        self.rows = rows;
        self
    }

    /// Validates and builds the payoff matrix.
    pub fn build(self) -> Result<PayoffMatrix, ValidationError> {
        PayoffMatrix::try_new(self.rows, self.orientation, self.alternatives, self.states)
    }
}
