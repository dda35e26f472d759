//! Decision problem evaluation handlers.

mod evaluate_problem;
mod list_problems;

pub use evaluate_problem::{
    AnalysisSettings, EvaluateProblemCommand, EvaluateProblemError, EvaluateProblemHandler,
    EvaluateProblemResult,
};
pub use list_problems::{ListProblemsHandler, ListProblemsQuery};
