//! Ranking method selection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{DecisionMatrix, RankingError};

/// The supported MCDA methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RankingMethod {
    /// Simple Additive Weighting.
    #[serde(rename = "SAW")]
    Saw,
    /// Technique for Order Preference by Similarity to Ideal Solution.
    #[serde(rename = "TOPSIS")]
    Topsis,
    /// Weighted Product.
    #[serde(rename = "WP")]
    Wp,
}

impl RankingMethod {
    pub const ALL: [RankingMethod; 3] = [RankingMethod::Saw, RankingMethod::Topsis, RankingMethod::Wp];

    /// Canonical upper-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            RankingMethod::Saw => "SAW",
            RankingMethod::Topsis => "TOPSIS",
            RankingMethod::Wp => "WP",
        }
    }
}

impl fmt::Display for RankingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RankingMethod {
    type Err = RankingError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        RankingMethod::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| RankingError::UnknownMethod(s.to_string()))
    }
}

/// Produces one raw score per matrix row, in row order.
///
/// Higher is better for every implementation. Scores are unrounded.
pub trait Ranker: Send + Sync {
    fn method(&self) -> RankingMethod;

    fn score(&self, matrix: &DecisionMatrix) -> Result<Vec<f64>, RankingError>;
}
