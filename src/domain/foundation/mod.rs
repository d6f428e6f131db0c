//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps, and error types used by the
//! calculation history and the HTTP layer.

mod errors;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{CalculationId, UserId};
pub use timestamp::Timestamp;
