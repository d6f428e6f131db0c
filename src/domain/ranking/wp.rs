//! WP Ranker - Weighted Product.

use super::{DecisionMatrix, Ranker, RankingError, RankingMethod};

/// Multiplicative aggregation of raw values.
///
/// Cost criteria use a negative exponent (`value^-w`) rather than inverting
/// the value first; the two forms agree to within floating tolerance.
#[derive(Debug, Clone, Copy, Default)]
pub struct WpRanker;

impl WpRanker {
    /// `+w` for benefit, `-w` for cost.
    fn signed_weights(matrix: &DecisionMatrix) -> Vec<f64> {
        matrix
            .criterion_types()
            .iter()
            .zip(matrix.weights())
            .map(|(criterion_type, &weight)| {
                if criterion_type.is_benefit() {
                    weight
                } else {
                    -weight
                }
            })
            .collect()
    }
}

impl Ranker for WpRanker {
    fn method(&self) -> RankingMethod {
        RankingMethod::Wp
    }

    /// # Algorithm
    /// For each alternative: score = Π value[criterion] ^ signed_weight[criterion]
    ///
    /// # Edge Cases
    /// - Negative value: `InvalidValue` (no real power for fractional exponents)
    /// - Zero value on a cost criterion: `DivisionByZero`
    /// - Zero value on a benefit criterion: score 0
    fn score(&self, matrix: &DecisionMatrix) -> Result<Vec<f64>, RankingError> {
        let exponents = Self::signed_weights(matrix);
        let mut scores = Vec::with_capacity(matrix.alternative_count());

        for (i, row) in matrix.values().iter().enumerate() {
            let mut product = 1.0;

            for (j, (&value, &exponent)) in row.iter().zip(&exponents).enumerate() {
                if value < 0.0 {
                    return Err(RankingError::InvalidValue {
                        alternative: matrix.alternative_names()[i].clone(),
                        criterion: matrix.criterion_names()[j].clone(),
                        value,
                        reason: "weighted product requires non-negative values",
                    });
                }
                if value == 0.0 && exponent < 0.0 {
                    return Err(RankingError::DivisionByZero(format!(
                        "alternative '{}' has 0 on cost criterion '{}'",
                        matrix.alternative_names()[i],
                        matrix.criterion_names()[j]
                    )));
                }
                product *= value.powf(exponent);
            }

            scores.push(product);
        }

        Ok(scores)
    }
}
