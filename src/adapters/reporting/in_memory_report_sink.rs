//! In-memory report sink for tests.

use std::sync::Mutex;

use crate::domain::analysis::AnalysisReport;
use crate::ports::{ReportSink, ReportSinkError};

/// Report sink that keeps every presented report
#[derive(Debug, Default)]
pub struct InMemoryReportSink {
    reports: Mutex<Vec<AnalysisReport>>,
}

impl InMemoryReportSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the reports presented so far, oldest first
    pub fn reports(&self) -> Vec<AnalysisReport> {
        self.reports
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    pub fn last(&self) -> Option<AnalysisReport> {
        self.reports.lock().ok().and_then(|r| r.last().cloned())
    }

    pub fn len(&self) -> usize {
        self.reports.lock().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ReportSink for InMemoryReportSink {
    fn present(&self, report: &AnalysisReport) -> Result<(), ReportSinkError> {
        self.reports
            .lock()
            .map_err(|e| ReportSinkError::IoError(e.to_string()))?
            .push(report.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::{DecisionMode, PayoffMatrix};

    #[test]
    fn keeps_reports_in_order() {
        let matrix = PayoffMatrix::builder()
            .alternatives(vec!["A"])
            .states(vec!["S"])
            .row(vec![1.0])
            .build()
            .unwrap();

        let sink = InMemoryReportSink::new();
        assert!(sink.is_empty());

        sink.present(&AnalysisReport::for_matrix("first", DecisionMode::Uncertainty, &matrix))
            .unwrap();
        sink.present(&AnalysisReport::for_matrix("second", DecisionMode::Uncertainty, &matrix))
            .unwrap();

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.reports()[0].problem, "first");
        assert_eq!(sink.last().unwrap().problem, "second");
    }
}
