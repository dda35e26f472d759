//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod evaluation;

pub use evaluation::{
    AnalysisSettings, EvaluateProblemCommand, EvaluateProblemError, EvaluateProblemHandler,
    EvaluateProblemResult, ListProblemsHandler, ListProblemsQuery,
};
