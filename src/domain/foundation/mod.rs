//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the decision matrix domain.

mod errors;
mod hurwicz_alpha;
mod ids;
mod orientation;

pub use errors::{Axis, DomainError, ErrorCode, ValidationError};
pub use hurwicz_alpha::HurwiczAlpha;
pub use ids::ReportId;
pub use orientation::Orientation;
pub(crate) use orientation::{max_of, min_of};
