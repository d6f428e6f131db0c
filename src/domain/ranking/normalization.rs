//! Column normalization strategies used by the rankers.

use super::{DecisionMatrix, RankingError};

/// Per-column value rescaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalization {
    /// Benefit: `value / max`. Cost: `min / value`.
    MinMax,
    /// `value / sqrt(Σ value²)` over the column, computed without
    /// intermediate overflow.
    Vector,
}

impl Normalization {
    /// Returns a row-major matrix of normalized values.
    pub fn apply(&self, matrix: &DecisionMatrix) -> Result<Vec<Vec<f64>>, RankingError> {
        match self {
            Normalization::MinMax => min_max(matrix),
            Normalization::Vector => vector(matrix),
        }
    }
}

fn min_max(matrix: &DecisionMatrix) -> Result<Vec<Vec<f64>>, RankingError> {
    let mut normalized = vec![vec![0.0; matrix.criterion_count()]; matrix.alternative_count()];

    for (j, criterion_type) in matrix.criterion_types().iter().enumerate() {
        let name = &matrix.criterion_names()[j];

        if criterion_type.is_benefit() {
            let max = matrix.column_max(j);
            if max == 0.0 {
                return Err(RankingError::DivisionByZero(format!(
                    "benefit criterion '{}' has a maximum of 0",
                    name
                )));
            }
            for (row, value) in normalized.iter_mut().zip(matrix.column(j)) {
                row[j] = value / max;
            }
        } else {
            let min = matrix.column_min(j);
            for (i, (row, value)) in normalized.iter_mut().zip(matrix.column(j)).enumerate() {
                if value == 0.0 {
                    return Err(RankingError::DivisionByZero(format!(
                        "alternative '{}' has 0 on cost criterion '{}'",
                        matrix.alternative_names()[i],
                        name
                    )));
                }
                row[j] = min / value;
            }
        }
    }

    Ok(normalized)
}

fn vector(matrix: &DecisionMatrix) -> Result<Vec<Vec<f64>>, RankingError> {
    let mut normalized = vec![vec![0.0; matrix.criterion_count()]; matrix.alternative_count()];

    for j in 0..matrix.criterion_count() {
        // Σ v² over- or underflows at extreme magnitudes; hypot does not.
        let magnitude = matrix.column(j).fold(0.0, f64::hypot);
        if magnitude == 0.0 {
            return Err(RankingError::DivisionByZero(format!(
                "criterion '{}' is 0 for every alternative",
                matrix.criterion_names()[j]
            )));
        }

        for (row, value) in normalized.iter_mut().zip(matrix.column(j)) {
            row[j] = value / magnitude;
        }
    }

    Ok(normalized)
}
