//! Criterion results and the shared winner-selection rule.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// The classical decision criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    // Uncertainty
    Optimism,
    Pessimism,
    Laplace,
    Hurwicz,
    Savage,

    // Risk
    ExpectedValue,
    MaximumLikelihood,
    ExpectedOpportunityLoss,
}

impl Criterion {
    /// Returns the display label for this criterion.
    pub fn label(&self) -> &'static str {
        match self {
            Criterion::Optimism => "Optimism (maximax)",
            Criterion::Pessimism => "Pessimism (maximin)",
            Criterion::Laplace => "Laplace (equal likelihood)",
            Criterion::Hurwicz => "Hurwicz",
            Criterion::Savage => "Savage (minimax regret)",
            Criterion::ExpectedValue => "Expected value",
            Criterion::MaximumLikelihood => "Maximum likelihood",
            Criterion::ExpectedOpportunityLoss => "Expected opportunity loss",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Outcome of one criterion: the optimal score and every alternative attaining it.
///
/// Ties are never broken: all alternatives whose score equals `value`
/// exactly are reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionResult {
    pub criterion: Criterion,
    pub value: f64,
    pub winners: BTreeSet<String>,
}

impl CriterionResult {
    /// Selects the optimum of `scores` with `pick` and collects the winners.
    ///
    /// `labels` and `scores` are parallel, in row order. Scores are compared
    /// with exact equality.
    pub fn select(
        criterion: Criterion,
        labels: &[String],
        scores: &[f64],
        pick: impl Fn(&[f64]) -> f64,
    ) -> Self {
        let value = pick(scores);
        let winners = labels
            .iter()
            .zip(scores)
            .filter(|(_, score)| **score == value)
            .map(|(label, _)| label.clone())
            .collect();

        Self {
            criterion,
            value,
            winners,
        }
    }

    /// Returns true if `alternative` is among the winners.
    pub fn is_winner(&self, alternative: &str) -> bool {
        self.winners.contains(alternative)
    }

    /// Returns true if more than one alternative attains the optimum.
    pub fn is_tie(&self) -> bool {
        self.winners.len() > 1
    }
}

/// An alternative paired with its row score, for charting score series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeScore {
    pub alternative: String,
    pub score: f64,
}

impl AlternativeScore {
    /// Zips labels with scores in row order.
    pub fn series(labels: &[String], scores: &[f64]) -> Vec<Self> {
        labels
            .iter()
            .zip(scores)
            .map(|(alternative, score)| AlternativeScore {
                alternative: alternative.clone(),
                score: *score,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{max_of, min_of};

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn select_collects_single_winner() {
        let result = CriterionResult::select(
            Criterion::Optimism,
            &labels(&["A", "B", "C"]),
            &[3.0, 9.0, 4.0],
            max_of,
        );

        assert_eq!(result.value, 9.0);
        assert_eq!(result.winners.len(), 1);
        assert!(result.is_winner("B"));
        assert!(!result.is_tie());
    }

    #[test]
    fn select_reports_every_tied_alternative() {
        let result = CriterionResult::select(
            Criterion::Savage,
            &labels(&["A", "B", "C"]),
            &[4.0, 4.0, 6.0],
            min_of,
        );

        assert_eq!(result.value, 4.0);
        assert!(result.is_tie());
        assert!(result.is_winner("A"));
        assert!(result.is_winner("B"));
        assert!(!result.is_winner("C"));
    }

    #[test]
    fn result_serializes_winners_as_array() {
        let result = CriterionResult::select(
            Criterion::Laplace,
            &labels(&["B", "A"]),
            &[6.0, 6.0],
            max_of,
        );

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["criterion"], "laplace");
        assert_eq!(json["winners"], serde_json::json!(["A", "B"]));
    }

    #[test]
    fn series_pairs_labels_with_scores() {
        let series = AlternativeScore::series(&labels(&["A", "B"]), &[1.5, 2.5]);
        assert_eq!(series[1].alternative, "B");
        assert_eq!(series[1].score, 2.5);
    }
}
