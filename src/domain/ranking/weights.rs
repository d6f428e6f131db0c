//! Weight Normalizer - rescales raw criterion weights to sum to 1.

use super::{Criterion, RankingError};

/// Weight normalization functions.
pub struct WeightNormalizer;

impl WeightNormalizer {
    /// Normalizes the weights of the given (already filtered) active criteria.
    ///
    /// # Algorithm
    /// `normalized_i = weight_i / Σ weight_j`
    ///
    /// # Errors
    /// - `InvalidWeights` if the slice is empty
    /// - `InvalidWeights` if any weight is NaN, infinite, or not positive
    /// - `InvalidWeights` if the sum is zero or overflows
    pub fn normalize(active: &[&Criterion]) -> Result<Vec<f64>, RankingError> {
        if active.is_empty() {
            return Err(RankingError::InvalidWeights(
                "no active criteria to weight".to_string(),
            ));
        }

        for criterion in active {
            if !criterion.weight.is_finite() {
                return Err(RankingError::InvalidWeights(format!(
                    "criterion '{}' has a non-numeric weight",
                    criterion.name
                )));
            }
            if criterion.weight <= 0.0 {
                return Err(RankingError::InvalidWeights(format!(
                    "criterion '{}' has weight {}, weights must be positive",
                    criterion.name, criterion.weight
                )));
            }
        }

        let total: f64 = active.iter().map(|c| c.weight).sum();
        if total == 0.0 || !total.is_finite() {
            return Err(RankingError::InvalidWeights(format!(
                "weights sum to {}",
                total
            )));
        }

        Ok(active.iter().map(|c| c.weight / total).collect())
    }
}
