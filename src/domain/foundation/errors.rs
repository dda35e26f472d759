//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Matrix axis a label list belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Alternatives,
    States,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Alternatives => write!(f, "alternatives"),
            Axis::States => write!(f, "states"),
        }
    }
}

/// Errors raised while constructing a payoff matrix, probability vector,
/// or criterion parameter.
///
/// These are the only failures in the analysis core: once a value has been
/// built, every criterion over it is total.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Row {row} has {actual} values, expected {expected}")]
    ShapeMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Payoff matrix must have at least one alternative and one state")]
    EmptyMatrix,

    #[error("Expected {expected} {axis} labels, got {actual}")]
    LabelMismatch {
        axis: Axis,
        expected: usize,
        actual: usize,
    },

    #[error("Duplicate {axis} label '{label}'")]
    DuplicateLabel { axis: Axis, label: String },

    #[error("Payoff at row {row}, column {column} is not a finite number")]
    NonFiniteValue { row: usize, column: usize },

    #[error("Probability vector has {actual} entries but the matrix has {expected} states")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Invalid probability vector: {reason}")]
    InvalidProbability { reason: String },

    #[error("Parameter '{name}' must be between {min} and {max}, got {actual}")]
    InvalidParameter {
        name: String,
        min: f64,
        max: f64,
        actual: f64,
    },
}

impl ValidationError {
    /// Creates a label mismatch error.
    pub fn label_mismatch(axis: Axis, expected: usize, actual: usize) -> Self {
        ValidationError::LabelMismatch {
            axis,
            expected,
            actual,
        }
    }

    /// Creates an invalid probability error.
    pub fn invalid_probability(reason: impl Into<String>) -> Self {
        ValidationError::InvalidProbability {
            reason: reason.into(),
        }
    }

    /// Creates an invalid parameter error for a value outside `[min, max]`.
    pub fn invalid_parameter(name: impl Into<String>, min: f64, max: f64, actual: f64) -> Self {
        ValidationError::InvalidParameter {
            name: name.into(),
            min,
            max,
            actual,
        }
    }

    /// Returns the error code for this validation failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::ShapeMismatch { .. } => ErrorCode::ShapeMismatch,
            ValidationError::EmptyMatrix => ErrorCode::EmptyMatrix,
            ValidationError::LabelMismatch { .. } => ErrorCode::LabelMismatch,
            ValidationError::DuplicateLabel { .. } => ErrorCode::DuplicateLabel,
            ValidationError::NonFiniteValue { .. } => ErrorCode::NonFiniteValue,
            ValidationError::DimensionMismatch { .. } => ErrorCode::DimensionMismatch,
            ValidationError::InvalidProbability { .. } => ErrorCode::InvalidProbability,
            ValidationError::InvalidParameter { .. } => ErrorCode::InvalidParameter,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Matrix validation
    ShapeMismatch,
    EmptyMatrix,
    LabelMismatch,
    DuplicateLabel,
    NonFiniteValue,

    // Risk inputs
    DimensionMismatch,
    InvalidProbability,

    // Criterion parameters
    InvalidParameter,

    // Collaborator errors
    ProblemNotFound,
    MalformedProblem,
    ReportFailed,

    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ShapeMismatch => "SHAPE_MISMATCH",
            ErrorCode::EmptyMatrix => "EMPTY_MATRIX",
            ErrorCode::LabelMismatch => "LABEL_MISMATCH",
            ErrorCode::DuplicateLabel => "DUPLICATE_LABEL",
            ErrorCode::NonFiniteValue => "NON_FINITE_VALUE",
            ErrorCode::DimensionMismatch => "DIMENSION_MISMATCH",
            ErrorCode::InvalidProbability => "INVALID_PROBABILITY",
            ErrorCode::InvalidParameter => "INVALID_PARAMETER",
            ErrorCode::ProblemNotFound => "PROBLEM_NOT_FOUND",
            ErrorCode::MalformedProblem => "MALFORMED_PROBLEM",
            ErrorCode::ReportFailed => "REPORT_FAILED",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}
