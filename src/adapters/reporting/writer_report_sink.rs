//! Writer-backed report sink.
//!
//! Serializes each report as one JSON or YAML document to any
//! `io::Write` target (stdout, a file, a buffer).

use std::fmt;
use std::io::Write;
use std::str::FromStr;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::domain::analysis::AnalysisReport;
use crate::ports::{ReportSink, ReportSinkError};

/// Serialization format for rendered reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Json,
    Yaml,
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Json => write!(f, "json"),
            ReportFormat::Yaml => write!(f, "yaml"),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(ReportFormat::Json),
            "yaml" | "yml" => Ok(ReportFormat::Yaml),
            other => Err(format!("unknown report format: {}", other)),
        }
    }
}

/// Report sink writing serialized reports to a writer
pub struct WriterReportSink<W: Write + Send> {
    writer: Mutex<W>,
    format: ReportFormat,
    pretty: bool,
}

impl<W: Write + Send> WriterReportSink<W> {
    pub fn new(writer: W, format: ReportFormat, pretty: bool) -> Self {
        Self {
            writer: Mutex::new(writer),
            format,
            pretty,
        }
    }

    pub fn format(&self) -> ReportFormat {
        self.format
    }

    /// Consumes the sink and returns the writer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner().unwrap_or_else(|e| e.into_inner())
    }

    fn render(&self, report: &AnalysisReport) -> Result<String, ReportSinkError> {
        let rendered = match (self.format, self.pretty) {
            (ReportFormat::Json, true) => serde_json::to_string_pretty(report)
                .map_err(|e| ReportSinkError::SerializationFailed(e.to_string()))?,
            (ReportFormat::Json, false) => serde_json::to_string(report)
                .map_err(|e| ReportSinkError::SerializationFailed(e.to_string()))?,
            // YAML has no compact form
            (ReportFormat::Yaml, _) => serde_yaml::to_string(report)
                .map_err(|e| ReportSinkError::SerializationFailed(e.to_string()))?,
        };
        Ok(rendered)
    }
}

impl<W: Write + Send> fmt::Debug for WriterReportSink<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriterReportSink")
            .field("format", &self.format)
            .field("pretty", &self.pretty)
            .finish_non_exhaustive()
    }
}

impl<W: Write + Send> ReportSink for WriterReportSink<W> {
    fn present(&self, report: &AnalysisReport) -> Result<(), ReportSinkError> {
        let rendered = self.render(report)?;

        let mut writer = self
            .writer
            .lock()
            .map_err(|e| ReportSinkError::IoError(e.to_string()))?;

        let io_error = |e: std::io::Error| ReportSinkError::IoError(e.to_string());
        writer.write_all(rendered.as_bytes()).map_err(io_error)?;
        if !rendered.ends_with('\n') {
            writer.write_all(b"\n").map_err(io_error)?;
        }
        writer.flush().map_err(io_error)?;

        tracing::debug!(
            report_id = %report.report_id,
            format = %self.format,
            bytes = rendered.len(),
            "Report written"
        );

        Ok(())
    }
}
