//! Analysis reports handed to the presentation layer.
//!
//! Reports carry numbers and label identifiers only. Formatting, tables
//! and charts are the presentation layer's concern.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{AlternativeScore, CriterionResult, MaximumLikelihoodResult, PayoffMatrix};
use crate::domain::foundation::{HurwiczAlpha, Orientation, ReportId};

/// Information regime a problem is evaluated under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionMode {
    /// State probabilities unknown.
    Uncertainty,
    /// State probabilities known.
    Risk,
}

impl fmt::Display for DecisionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecisionMode::Uncertainty => write!(f, "uncertainty"),
            DecisionMode::Risk => write!(f, "risk"),
        }
    }
}

/// Results of the five uncertainty criteria.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UncertaintyReport {
    pub optimism: CriterionResult,
    pub pessimism: CriterionResult,
    pub laplace: CriterionResult,
    /// Coefficient of optimism used for `hurwicz`.
    pub hurwicz_alpha: HurwiczAlpha,
    pub hurwicz: CriterionResult,
    pub savage: CriterionResult,
}

impl UncertaintyReport {
    /// Criterion results in presentation order.
    pub fn results(&self) -> [&CriterionResult; 5] {
        [
            &self.optimism,
            &self.pessimism,
            &self.laplace,
            &self.hurwicz,
            &self.savage,
        ]
    }
}

/// Results of the risk criteria.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskReport {
    /// State probabilities the analysis used.
    pub probabilities: Vec<f64>,
    pub expected_value: CriterionResult,
    /// Expected value of every alternative, in row order.
    pub expected_values: Vec<AlternativeScore>,
    pub maximum_likelihood: MaximumLikelihoodResult,
    pub expected_opportunity_loss: CriterionResult,
    /// Expected opportunity loss of every alternative, in row order.
    pub expected_opportunity_losses: Vec<AlternativeScore>,
    /// Minimum expected opportunity loss.
    pub value_of_perfect_information: f64,
    /// Probability-weighted sum of the column optima.
    pub expected_value_with_perfect_information: f64,
}

impl RiskReport {
    /// Criterion results in presentation order.
    pub fn results(&self) -> [&CriterionResult; 3] {
        [
            &self.expected_value,
            &self.maximum_likelihood.result,
            &self.expected_opportunity_loss,
        ]
    }
}

/// Complete evaluation of one decision problem.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub report_id: ReportId,
    /// Name of the evaluated problem.
    pub problem: String,
    pub mode: DecisionMode,
    pub orientation: Orientation,
    pub alternatives: Vec<String>,
    pub states: Vec<String>,
    pub payoffs: Vec<Vec<f64>>,
    pub regret_matrix: Vec<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uncertainty: Option<UncertaintyReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk: Option<RiskReport>,
    /// When the criteria were evaluated, RFC 3339 in UTC.
    pub computed_at: DateTime<Utc>,
}

impl AnalysisReport {
    /// Starts a report carrying the matrix and its regret matrix.
    pub fn for_matrix(problem: impl Into<String>, mode: DecisionMode, matrix: &PayoffMatrix) -> Self {
        Self {
            report_id: ReportId::new(),
            problem: problem.into(),
            mode,
            orientation: matrix.orientation(),
            alternatives: matrix.alternatives().to_vec(),
            states: matrix.states().to_vec(),
            payoffs: matrix.payoffs().to_vec(),
            regret_matrix: matrix.regret().rows().to_vec(),
            uncertainty: None,
            risk: None,
            computed_at: Utc::now(),
        }
    }

    /// Attaches uncertainty results.
    pub fn with_uncertainty(mut self, report: UncertaintyReport) -> Self {
        self.uncertainty = Some(report);
        self
    }

    /// Attaches risk results.
    pub fn with_risk(mut self, report: RiskReport) -> Self {
        self.risk = Some(report);
        self
    }

    /// Every criterion result in the report.
    pub fn results(&self) -> Vec<&CriterionResult> {
        let mut results = Vec::new();
        if let Some(uncertainty) = &self.uncertainty {
            results.extend(uncertainty.results());
        }
        if let Some(risk) = &self.risk {
            results.extend(risk.results());
        }
        results
    }
}
