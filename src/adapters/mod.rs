//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `problems` - Problem sources (files, in-memory)
//! - `reporting` - Report sinks (writers, in-memory)

pub mod problems;
pub mod reporting;

pub use problems::{FileProblemSource, InMemoryProblemSource};
pub use reporting::{InMemoryReportSink, ReportFormat, WriterReportSink};
