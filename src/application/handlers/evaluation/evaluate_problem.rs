//! EvaluateProblemHandler - Command handler for evaluating a decision problem.
//!
//! Loads a problem, validates it into a payoff matrix, runs the criteria
//! for its decision mode and hands the report to the presentation layer.

use std::sync::Arc;

use crate::domain::analysis::{
    AnalysisReport, DecisionProblem, RiskAnalyzer, UncertaintyAnalyzer,
    DEFAULT_PROBABILITY_TOLERANCE,
};
use crate::domain::foundation::{DomainError, ErrorCode, HurwiczAlpha, ValidationError};
use crate::ports::{ProblemSource, ProblemSourceError, ReportSink, ReportSinkError};

/// Command to evaluate a named problem.
#[derive(Debug, Clone)]
pub struct EvaluateProblemCommand {
    /// Name the problem source knows the problem by.
    pub problem_name: String,
}

impl EvaluateProblemCommand {
    pub fn new(problem_name: impl Into<String>) -> Self {
        Self {
            problem_name: problem_name.into(),
        }
    }
}

/// Result of a successful evaluation.
#[derive(Debug, Clone)]
pub struct EvaluateProblemResult {
    /// The report that was presented.
    pub report: AnalysisReport,
}

/// Analysis defaults applied when a problem leaves them unset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisSettings {
    pub default_alpha: HurwiczAlpha,
    pub probability_tolerance: f64,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            default_alpha: HurwiczAlpha::default(),
            probability_tolerance: DEFAULT_PROBABILITY_TOLERANCE,
        }
    }
}

/// Error type for evaluating a problem.
#[derive(Debug, thiserror::Error)]
pub enum EvaluateProblemError {
    #[error(transparent)]
    Source(#[from] ProblemSourceError),

    #[error("Problem '{problem}' is invalid: {source}")]
    Invalid {
        problem: String,
        #[source]
        source: ValidationError,
    },

    #[error(transparent)]
    Sink(#[from] ReportSinkError),
}

impl EvaluateProblemError {
    fn invalid(problem: &str, source: ValidationError) -> Self {
        EvaluateProblemError::Invalid {
            problem: problem.to_string(),
            source,
        }
    }
}

impl From<EvaluateProblemError> for DomainError {
    fn from(err: EvaluateProblemError) -> Self {
        match err {
            EvaluateProblemError::Source(ProblemSourceError::NotFound(name)) => {
                DomainError::new(ErrorCode::ProblemNotFound, format!("Problem not found: {}", name))
                    .with_detail("problem", name)
            }
            EvaluateProblemError::Source(other) => {
                DomainError::new(ErrorCode::MalformedProblem, other.to_string())
            }
            EvaluateProblemError::Invalid { problem, source } => {
                DomainError::from(source).with_detail("problem", problem)
            }
            EvaluateProblemError::Sink(e) => DomainError::new(ErrorCode::ReportFailed, e.to_string()),
        }
    }
}

/// Handler for evaluating decision problems.
pub struct EvaluateProblemHandler {
    source: Arc<dyn ProblemSource>,
    sink: Arc<dyn ReportSink>,
    settings: AnalysisSettings,
}

impl EvaluateProblemHandler {
    pub fn new(source: Arc<dyn ProblemSource>, sink: Arc<dyn ReportSink>) -> Self {
        Self::with_settings(source, sink, AnalysisSettings::default())
    }

    pub fn with_settings(
        source: Arc<dyn ProblemSource>,
        sink: Arc<dyn ReportSink>,
        settings: AnalysisSettings,
    ) -> Self {
        Self {
            source,
            sink,
            settings,
        }
    }

    pub fn handle(
        &self,
        cmd: EvaluateProblemCommand,
    ) -> Result<EvaluateProblemResult, EvaluateProblemError> {
        // 1. Load the problem
        let problem = self.source.load(&cmd.problem_name)?;

        // 2. Validate and run the criteria for the problem's mode
        let report = self.evaluate(&problem).map_err(|e| {
            tracing::warn!(
                problem = %problem.name,
                code = %e.code(),
                error = %e,
                "Rejected decision problem"
            );
            EvaluateProblemError::invalid(&problem.name, e)
        })?;

        // 3. Present
        self.sink.present(&report)?;

        tracing::info!(problem = %problem.name, mode = %report.mode, "Report presented");

        Ok(EvaluateProblemResult { report })
    }

    fn evaluate(&self, problem: &DecisionProblem) -> Result<AnalysisReport, ValidationError> {
        let matrix = problem.matrix()?;
        let mode = problem.mode();
        // Validated in both modes; only uncertainty reports use it.
        let alpha = problem.alpha_or(self.settings.default_alpha)?;
        let report = AnalysisReport::for_matrix(&problem.name, mode, &matrix);

        let report = match problem.probability_vector(self.settings.probability_tolerance) {
            Some(probabilities) => {
                let probabilities = probabilities?;
                let analyzer = RiskAnalyzer::try_new(&matrix, &probabilities)?;
                report.with_risk(analyzer.evaluate())
            }
            None => report.with_uncertainty(UncertaintyAnalyzer::evaluate(&matrix, alpha)),
        };

        tracing::debug!(
            report_id = %report.report_id,
            problem = %problem.name,
            mode = %mode,
            alternatives = matrix.alternative_count(),
            states = matrix.state_count(),
            "Evaluated decision problem"
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::DecisionMode;
    use crate::domain::foundation::Orientation;
    use std::sync::Mutex;

    // ─────────────────────────────────────────────────────────────────────
    // Mock implementations
    // ─────────────────────────────────────────────────────────────────────

    struct MockProblemSource {
        problem: Option<DecisionProblem>,
    }

    impl ProblemSource for MockProblemSource {
        fn load(&self, name: &str) -> Result<DecisionProblem, ProblemSourceError> {
            self.problem
                .clone()
                .filter(|p| p.name == name)
                .ok_or_else(|| ProblemSourceError::NotFound(name.to_string()))
        }

        fn list(&self) -> Result<Vec<String>, ProblemSourceError> {
            Ok(self.problem.iter().map(|p| p.name.clone()).collect())
        }
    }

    #[derive(Default)]
    struct MockReportSink {
        presented: Mutex<Vec<AnalysisReport>>,
        fail: bool,
    }

    impl ReportSink for MockReportSink {
        fn present(&self, report: &AnalysisReport) -> Result<(), ReportSinkError> {
            if self.fail {
                return Err(ReportSinkError::IoError("pipe closed".to_string()));
            }
            self.presented.lock().unwrap().push(report.clone());
            Ok(())
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Helpers
    // ─────────────────────────────────────────────────────────────────────

    fn problem() -> DecisionProblem {
        DecisionProblem {
            name: "plant".to_string(),
            orientation: Orientation::Gain,
            alternatives: vec!["A".into(), "B".into()],
            states: vec!["S1".into(), "S2".into()],
            payoffs: vec![vec![7.0, 5.0], vec![3.0, 9.0]],
            probabilities: None,
            hurwicz_alpha: None,
        }
    }

    fn handler_for(
        problem: DecisionProblem,
        sink: Arc<MockReportSink>,
        settings: AnalysisSettings,
    ) -> EvaluateProblemHandler {
        let source = Arc::new(MockProblemSource {
            problem: Some(problem),
        });
        EvaluateProblemHandler::with_settings(source, sink, settings)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Tests
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn evaluates_uncertainty_problem() {
        let sink = Arc::new(MockReportSink::default());
        let handler = handler_for(problem(), sink.clone(), AnalysisSettings::default());

        let result = handler.handle(EvaluateProblemCommand::new("plant")).unwrap();
        let uncertainty = result.report.uncertainty.as_ref().unwrap();

        assert_eq!(result.report.mode, DecisionMode::Uncertainty);
        assert!(result.report.risk.is_none());
        assert_eq!(uncertainty.optimism.value, 9.0);
        assert!(uncertainty.optimism.is_winner("B"));
        assert_eq!(uncertainty.pessimism.value, 5.0);
        assert!(uncertainty.pessimism.is_winner("A"));
        assert_eq!(uncertainty.hurwicz_alpha, HurwiczAlpha::default());
        assert_eq!(sink.presented.lock().unwrap().len(), 1);
    }

    #[test]
    fn problem_alpha_overrides_default() {
        let mut p = problem();
        p.hurwicz_alpha = Some(1.0);
        let sink = Arc::new(MockReportSink::default());
        let handler = handler_for(p, sink, AnalysisSettings::default());

        let report = handler.handle(EvaluateProblemCommand::new("plant")).unwrap().report;
        let uncertainty = report.uncertainty.unwrap();

        assert_eq!(uncertainty.hurwicz.value, uncertainty.optimism.value);
        assert_eq!(uncertainty.hurwicz.winners, uncertainty.optimism.winners);
    }

    #[test]
    fn evaluates_risk_problem() {
        let mut p = problem();
        p.probabilities = Some(vec![0.5, 0.5]);
        let sink = Arc::new(MockReportSink::default());
        let handler = handler_for(p, sink, AnalysisSettings::default());

        let report = handler.handle(EvaluateProblemCommand::new("plant")).unwrap().report;
        let risk = report.risk.as_ref().unwrap();

        assert_eq!(report.mode, DecisionMode::Risk);
        assert!(report.uncertainty.is_none());
        assert_eq!(risk.expected_value.value, 6.0);
        assert!(risk.expected_value.is_tie());
        assert_eq!(risk.value_of_perfect_information, 2.0);
    }

    #[test]
    fn unknown_problem_is_not_found() {
        let sink = Arc::new(MockReportSink::default());
        let handler = handler_for(problem(), sink.clone(), AnalysisSettings::default());

        let err = handler.handle(EvaluateProblemCommand::new("other")).unwrap_err();
        assert!(matches!(
            err,
            EvaluateProblemError::Source(ProblemSourceError::NotFound(_))
        ));
        assert_eq!(DomainError::from(err).code, ErrorCode::ProblemNotFound);
        assert!(sink.presented.lock().unwrap().is_empty());
    }

    #[test]
    fn ragged_payoffs_are_rejected_before_presenting() {
        let mut p = problem();
        p.payoffs = vec![vec![7.0, 5.0], vec![3.0]];
        let sink = Arc::new(MockReportSink::default());
        let handler = handler_for(p, sink.clone(), AnalysisSettings::default());

        let err = handler.handle(EvaluateProblemCommand::new("plant")).unwrap_err();
        assert!(matches!(
            err,
            EvaluateProblemError::Invalid {
                source: ValidationError::ShapeMismatch { row: 1, .. },
                ..
            }
        ));
        assert!(sink.presented.lock().unwrap().is_empty());
    }

    #[test]
    fn probability_dimension_mismatch_is_rejected() {
        let mut p = problem();
        p.probabilities = Some(vec![1.0]);
        let sink = Arc::new(MockReportSink::default());
        let handler = handler_for(p, sink, AnalysisSettings::default());

        let err = handler.handle(EvaluateProblemCommand::new("plant")).unwrap_err();
        let domain = DomainError::from(err);
        assert_eq!(domain.code, ErrorCode::DimensionMismatch);
        assert_eq!(domain.details.get("problem").map(String::as_str), Some("plant"));
    }

    #[test]
    fn default_tolerance_rejects_rounded_sum() {
        let mut p = problem();
        p.alternatives.push("C".into());
        p.states.push("S3".into());
        p.payoffs = vec![vec![1.0, 2.0, 3.0]; 3];
        p.probabilities = Some(vec![0.6, 0.3, 0.1]);
        let sink = Arc::new(MockReportSink::default());

        let err = handler_for(p.clone(), sink.clone(), AnalysisSettings::default())
            .handle(EvaluateProblemCommand::new("plant"))
            .unwrap_err();
        assert_eq!(DomainError::from(err).code, ErrorCode::InvalidProbability);

        let relaxed = AnalysisSettings {
            probability_tolerance: 1e-9,
            ..AnalysisSettings::default()
        };
        assert!(handler_for(p, sink, relaxed)
            .handle(EvaluateProblemCommand::new("plant"))
            .is_ok());
    }

    #[test]
    fn out_of_range_alpha_is_rejected_under_risk() {
        let mut p = problem();
        p.probabilities = Some(vec![0.5, 0.5]);
        p.hurwicz_alpha = Some(5.0);
        let sink = Arc::new(MockReportSink::default());
        let handler = handler_for(p, sink.clone(), AnalysisSettings::default());

        let err = handler.handle(EvaluateProblemCommand::new("plant")).unwrap_err();
        assert!(matches!(
            err,
            EvaluateProblemError::Invalid {
                source: ValidationError::InvalidParameter { .. },
                ..
            }
        ));
        assert_eq!(DomainError::from(err).code, ErrorCode::InvalidParameter);
        assert!(sink.presented.lock().unwrap().is_empty());
    }

    #[test]
    fn sink_failure_is_reported() {
        let sink = Arc::new(MockReportSink {
            fail: true,
            ..MockReportSink::default()
        });
        let handler = handler_for(problem(), sink, AnalysisSettings::default());

        let err = handler.handle(EvaluateProblemCommand::new("plant")).unwrap_err();
        assert!(matches!(err, EvaluateProblemError::Sink(_)));
        assert_eq!(DomainError::from(err).code, ErrorCode::ReportFailed);
    }
}
