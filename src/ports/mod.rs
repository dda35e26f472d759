//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the analysis core and the outside world. Adapters implement these ports.
//!
//! - `ProblemSource` - Data-entry layer supplying decision problems
//! - `ReportSink` - Presentation layer receiving analysis reports

mod problem_source;
mod report_sink;

pub use problem_source::{ProblemSource, ProblemSourceError};
pub use report_sink::{ReportSink, ReportSinkError};
