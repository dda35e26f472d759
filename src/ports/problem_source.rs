//! Problem Source Port - Interface to the data-entry layer.
//!
//! The data-entry layer acquires a decision problem (interactively, from a
//! file, over the wire) and hands it over unvalidated. The analysis core
//! does all validation itself.

use crate::domain::analysis::DecisionProblem;

/// Errors that can occur while loading a decision problem
#[derive(Debug, thiserror::Error)]
pub enum ProblemSourceError {
    #[error("Problem not found: {0}")]
    NotFound(String),

    #[error("Failed to parse problem '{name}': {reason}")]
    Malformed { name: String, reason: String },

    #[error("Unsupported problem format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Port for loading decision problems by name
pub trait ProblemSource: Send + Sync {
    /// Load a problem
    ///
    /// # Errors
    /// Returns `ProblemSourceError::NotFound` if no problem has that name
    fn load(&self, name: &str) -> Result<DecisionProblem, ProblemSourceError>;

    /// List the names of the available problems
    fn list(&self) -> Result<Vec<String>, ProblemSourceError>;
}
