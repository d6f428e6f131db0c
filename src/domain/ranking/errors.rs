//! Errors raised by the ranking engine.

use thiserror::Error;

/// Every way a ranking call can fail.
///
/// All variants abort the call; no partial ranking is ever returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RankingError {
    #[error("Invalid weights: {0}")]
    InvalidWeights(String),

    #[error("Alternative '{alternative}' has {actual} values but there are {expected} active criteria")]
    DimensionMismatch {
        alternative: String,
        expected: usize,
        actual: usize,
    },

    #[error("No active {0} to rank")]
    EmptyInput(&'static str),

    #[error("Division by zero: {0}")]
    DivisionByZero(String),

    #[error("Invalid value {value} for alternative '{alternative}' on criterion '{criterion}': {reason}")]
    InvalidValue {
        alternative: String,
        criterion: String,
        value: f64,
        reason: &'static str,
    },

    #[error("Active criterion at position {0} has an empty name")]
    EmptyCriterionName(usize),

    #[error("Unknown ranking method '{0}', expected one of SAW, TOPSIS, WP")]
    UnknownMethod(String),
}

impl RankingError {
    /// Stable machine-readable code for transport layers.
    pub fn code(&self) -> &'static str {
        match self {
            RankingError::InvalidWeights(_) => "INVALID_WEIGHTS",
            RankingError::DimensionMismatch { .. } => "DIMENSION_MISMATCH",
            RankingError::EmptyInput(_) => "EMPTY_INPUT",
            RankingError::DivisionByZero(_) => "DIVISION_BY_ZERO",
            RankingError::InvalidValue { .. } => "INVALID_VALUE",
            RankingError::EmptyCriterionName(_) => "EMPTY_CRITERION_NAME",
            RankingError::UnknownMethod(_) => "UNKNOWN_METHOD",
        }
    }
}
