//! TOPSIS Ranker - closeness to the ideal solution.

use super::{DecisionMatrix, Normalization, Ranker, RankingError, RankingMethod};

/// Ranks by relative closeness to the ideal-best point.
#[derive(Debug, Clone, Copy, Default)]
pub struct TopsisRanker;

/// Per-criterion extremes of the weighted matrix.
#[derive(Debug, Clone, PartialEq)]
struct IdealPoints {
    best: Vec<f64>,
    worst: Vec<f64>,
}

impl TopsisRanker {
    /// Vector-normalizes each column, then scales it by its weight.
    fn weighted_matrix(matrix: &DecisionMatrix) -> Result<Vec<Vec<f64>>, RankingError> {
        let mut weighted = Normalization::Vector.apply(matrix)?;
        for row in &mut weighted {
            for (value, weight) in row.iter_mut().zip(matrix.weights()) {
                *value *= weight;
            }
        }
        Ok(weighted)
    }

    /// Ideal best is the column max for benefit and min for cost; ideal
    /// worst is the opposite extreme.
    fn ideal_points(matrix: &DecisionMatrix, weighted: &[Vec<f64>]) -> IdealPoints {
        let mut best = Vec::with_capacity(matrix.criterion_count());
        let mut worst = Vec::with_capacity(matrix.criterion_count());

        for (j, criterion_type) in matrix.criterion_types().iter().enumerate() {
            let max = weighted.iter().map(|row| row[j]).fold(f64::NEG_INFINITY, f64::max);
            let min = weighted.iter().map(|row| row[j]).fold(f64::INFINITY, f64::min);

            if criterion_type.is_benefit() {
                best.push(max);
                worst.push(min);
            } else {
                best.push(min);
                worst.push(max);
            }
        }

        IdealPoints { best, worst }
    }

    fn distance(row: &[f64], point: &[f64]) -> f64 {
        row.iter()
            .zip(point)
            .map(|(value, ideal)| (value - ideal).powi(2))
            .sum::<f64>()
            .sqrt()
    }
}

impl Ranker for TopsisRanker {
    fn method(&self) -> RankingMethod {
        RankingMethod::Topsis
    }

    /// # Algorithm
    /// 1. normalized = value / sqrt(Σ value²) per column
    /// 2. weighted = normalized × weight
    /// 3. ideal best/worst per column
    /// 4. d⁺ / d⁻ = Euclidean distance to ideal best / worst
    /// 5. score = d⁻ / (d⁺ + d⁻)
    ///
    /// # Edge Cases
    /// - Column of all zeros: `DivisionByZero`
    /// - Every alternative identical (d⁺ + d⁻ = 0): `DivisionByZero`
    ///
    /// Scores are always within [0, 1].
    fn score(&self, matrix: &DecisionMatrix) -> Result<Vec<f64>, RankingError> {
        let weighted = Self::weighted_matrix(matrix)?;
        let ideal = Self::ideal_points(matrix, &weighted);

        weighted
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let to_best = Self::distance(row, &ideal.best);
                let to_worst = Self::distance(row, &ideal.worst);
                let total = to_best + to_worst;

                if total == 0.0 {
                    return Err(RankingError::DivisionByZero(format!(
                        "alternative '{}' is at both the ideal best and ideal worst point",
                        matrix.alternative_names()[i]
                    )));
                }

                // to_worst <= total with both non-negative, so the quotient is
                // already in [0, 1]; the clamp pins that in release builds.
                Ok((to_worst / total).clamp(0.0, 1.0))
            })
            .collect()
    }
}
