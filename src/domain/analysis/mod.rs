//! Analysis Module - Pure domain services for decision matrix criteria.
//!
//! This module contains stateless functions that evaluate a payoff matrix
//! (and, under risk, a probability vector) with the classical criteria.
//!
//! # Components
//!
//! - `PayoffMatrix` - Validated alternatives x states payoff table
//! - `ProbabilityVector` - Validated state probabilities for risk
//! - `RegretMatrix` - Opportunity losses shared by Savage and EOL
//! - `UncertaintyAnalyzer` - Optimism, pessimism, Laplace, Hurwicz, Savage
//! - `RiskAnalyzer` - Expected value, maximum likelihood, EOL, value of information
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. Validation
//! happens once, when a matrix or probability vector is built; every
//! criterion over a built value is total.

mod criterion;
mod payoff_matrix;
mod probability_vector;
mod problem;
mod regret_matrix;
mod report;
mod risk_analyzer;
mod uncertainty_analyzer;

// Re-export all public types
pub use criterion::{AlternativeScore, Criterion, CriterionResult};
pub use payoff_matrix::{PayoffMatrix, PayoffMatrixBuilder};
pub use probability_vector::{ProbabilityVector, DEFAULT_PROBABILITY_TOLERANCE};
pub use problem::DecisionProblem;
pub use regret_matrix::RegretMatrix;
pub use report::{AnalysisReport, DecisionMode, RiskReport, UncertaintyReport};
pub use risk_analyzer::{MaximumLikelihoodResult, RiskAnalyzer};
pub use uncertainty_analyzer::UncertaintyAnalyzer;
