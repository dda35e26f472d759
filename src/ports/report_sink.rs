//! Report Sink Port - Interface to the presentation layer.
//!
//! The presentation layer receives structured criterion results and owns
//! all formatting, tabulation and charting.

use crate::domain::analysis::AnalysisReport;

/// Errors that can occur while presenting a report
#[derive(Debug, thiserror::Error)]
pub enum ReportSinkError {
    #[error("Failed to serialize report: {0}")]
    SerializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Port for presenting analysis reports
pub trait ReportSink: Send + Sync {
    /// Present a completed report
    fn present(&self, report: &AnalysisReport) -> Result<(), ReportSinkError>;
}
