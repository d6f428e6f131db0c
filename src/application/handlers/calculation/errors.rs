//! Errors returned by calculation handlers.

use thiserror::Error;

use crate::domain::foundation::{CalculationId, DomainError};
use crate::domain::ranking::RankingError;

/// Errors that can occur while running or managing calculations.
#[derive(Debug, Error)]
pub enum CalculationError {
    #[error(transparent)]
    Ranking(#[from] RankingError),

    /// Also returned for records owned by someone else.
    #[error("Calculation not found: {0}")]
    NotFound(CalculationId),

    #[error("Repository error: {0}")]
    Repository(#[from] DomainError),
}
