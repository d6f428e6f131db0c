//! SAW Ranker - Simple Additive Weighting.

use super::{DecisionMatrix, Normalization, Ranker, RankingError, RankingMethod};

/// Weighted sum of min-max normalized values.
#[derive(Debug, Clone, Copy, Default)]
pub struct SawRanker;

impl Ranker for SawRanker {
    fn method(&self) -> RankingMethod {
        RankingMethod::Saw
    }

    /// # Algorithm
    /// For each alternative: score = Σ(normalized[criterion] × weight[criterion])
    /// where benefit columns are divided by their max and cost columns divide
    /// their min by the value.
    ///
    /// # Edge Cases
    /// - Benefit column whose max is 0: `DivisionByZero`
    /// - Cost value of 0: `DivisionByZero`
    fn score(&self, matrix: &DecisionMatrix) -> Result<Vec<f64>, RankingError> {
        let normalized = Normalization::MinMax.apply(matrix)?;

        Ok(normalized
            .iter()
            .map(|row| {
                row.iter()
                    .zip(matrix.weights())
                    .map(|(value, weight)| value * weight)
                    .sum::<f64>()
            })
            .collect())
    }
}
