//! Report sink adapters.

mod in_memory_report_sink;
mod writer_report_sink;

pub use in_memory_report_sink::InMemoryReportSink;
pub use writer_report_sink::{ReportFormat, WriterReportSink};
