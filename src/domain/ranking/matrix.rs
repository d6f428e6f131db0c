//! Decision Matrix - validated view of active criteria x active alternatives.

use super::{Alternative, Criterion, CriterionType, RankingError, WeightNormalizer};

/// Immutable snapshot built fresh for each ranking call.
///
/// Rows are active alternatives and columns are active criteria, both in
/// their original relative order. Caller records are only borrowed.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionMatrix {
    criterion_names: Vec<String>,
    criterion_types: Vec<CriterionType>,
    weights: Vec<f64>,
    alternative_names: Vec<String>,
    values: Vec<Vec<f64>>,
}

impl DecisionMatrix {
    /// Filters inactive entries on both axes and validates the remainder.
    ///
    /// # Errors
    /// - `EmptyInput` if no active criteria or no active alternatives remain
    /// - `EmptyCriterionName` if an active criterion has a blank name
    /// - `InvalidWeights` from [`WeightNormalizer::normalize`]
    /// - `DimensionMismatch` if an active alternative's value count differs
    ///   from the active criteria count
    /// - `InvalidValue` if a value is NaN or infinite
    pub fn build(
        criteria: &[Criterion],
        alternatives: &[Alternative],
    ) -> Result<Self, RankingError> {
        let active_criteria: Vec<&Criterion> = criteria.iter().filter(|c| c.active).collect();
        let active_alternatives: Vec<&Alternative> =
            alternatives.iter().filter(|a| a.active).collect();

        if active_criteria.is_empty() {
            return Err(RankingError::EmptyInput("criteria"));
        }
        if active_alternatives.is_empty() {
            return Err(RankingError::EmptyInput("alternatives"));
        }

        if let Some(position) = active_criteria.iter().position(|c| c.name.trim().is_empty()) {
            return Err(RankingError::EmptyCriterionName(position));
        }

        let weights = WeightNormalizer::normalize(&active_criteria)?;

        let expected = active_criteria.len();
        for alternative in &active_alternatives {
            if alternative.values.len() != expected {
                return Err(RankingError::DimensionMismatch {
                    alternative: alternative.name.clone(),
                    expected,
                    actual: alternative.values.len(),
                });
            }

            for (criterion, &value) in active_criteria.iter().zip(&alternative.values) {
                if !value.is_finite() {
                    return Err(RankingError::InvalidValue {
                        alternative: alternative.name.clone(),
                        criterion: criterion.name.clone(),
                        value,
                        reason: "value must be a finite number",
                    });
                }
            }
        }

        Ok(Self {
            criterion_names: active_criteria.iter().map(|c| c.name.clone()).collect(),
            criterion_types: active_criteria.iter().map(|c| c.criterion_type).collect(),
            weights,
            alternative_names: active_alternatives.iter().map(|a| a.name.clone()).collect(),
            values: active_alternatives.iter().map(|a| a.values.clone()).collect(),
        })
    }

    /// Number of active alternatives (rows).
    pub fn alternative_count(&self) -> usize {
        self.alternative_names.len()
    }

    /// Number of active criteria (columns).
    pub fn criterion_count(&self) -> usize {
        self.criterion_names.len()
    }

    /// Normalized weights, aligned with the columns. Sum to 1.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn criterion_types(&self) -> &[CriterionType] {
        &self.criterion_types
    }

    pub fn criterion_names(&self) -> &[String] {
        &self.criterion_names
    }

    pub fn alternative_names(&self) -> &[String] {
        &self.alternative_names
    }

    /// Row-major values, `values()[alternative][criterion]`.
    pub fn values(&self) -> &[Vec<f64>] {
        &self.values
    }

    /// Iterates one criterion column top to bottom.
    pub fn column(&self, criterion: usize) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().map(move |row| row[criterion])
    }

    /// Largest value in a column.
    pub fn column_max(&self, criterion: usize) -> f64 {
        self.column(criterion).fold(f64::NEG_INFINITY, f64::max)
    }

    /// Smallest value in a column.
    pub fn column_min(&self, criterion: usize) -> f64 {
        self.column(criterion).fold(f64::INFINITY, f64::min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn criteria() -> Vec<Criterion> {
        vec![
            Criterion::cost("Price", 2.0),
            Criterion::benefit("Storage", 1.0).deactivated(),
            Criterion::benefit("Quality", 2.0),
        ]
    }

    #[test]
    fn build_filters_inactive_entries_in_order() {
        let alternatives = vec![
            Alternative::new("A", vec![100.0, 8.0]),
            Alternative::new("B", vec![150.0, 9.0]).deactivated(),
            Alternative::new("C", vec![200.0, 10.0]),
        ];

        let matrix = DecisionMatrix::build(&criteria(), &alternatives).unwrap();

        assert_eq!(matrix.criterion_names(), &["Price", "Quality"]);
        assert_eq!(
            matrix.criterion_types(),
            &[CriterionType::Cost, CriterionType::Benefit]
        );
        assert_eq!(matrix.alternative_names(), &["A", "C"]);
        assert_eq!(matrix.values(), &[vec![100.0, 8.0], vec![200.0, 10.0]]);
        assert_eq!(matrix.weights(), &[0.5, 0.5]);
    }

    #[test]
    fn build_does_not_mutate_inputs() {
        let criteria = criteria();
        let alternatives = vec![Alternative::new("A", vec![1.0, 2.0])];
        let before = (criteria.clone(), alternatives.clone());

        DecisionMatrix::build(&criteria, &alternatives).unwrap();

        assert_eq!((criteria, alternatives), before);
    }

    #[test]
    fn inactive_alternative_with_wrong_shape_is_ignored() {
        let alternatives = vec![
            Alternative::new("A", vec![100.0, 8.0]),
            Alternative::new("Draft", vec![1.0]).deactivated(),
        ];
        assert!(DecisionMatrix::build(&criteria(), &alternatives).is_ok());
    }

    #[test]
    fn inactive_criterion_with_zero_weight_is_ignored() {
        let criteria = vec![
            Criterion::benefit("Quality", 1.0),
            Criterion::benefit("Unused", 0.0).deactivated(),
        ];
        let alternatives = vec![Alternative::new("A", vec![3.0])];
        assert!(DecisionMatrix::build(&criteria, &alternatives).is_ok());
    }

    #[test]
    fn no_active_criteria_is_empty_input() {
        let criteria = vec![Criterion::benefit("Quality", 1.0).deactivated()];
        let alternatives = vec![Alternative::new("A", vec![])];
        assert_eq!(
            DecisionMatrix::build(&criteria, &alternatives),
            Err(RankingError::EmptyInput("criteria"))
        );
    }

    #[test]
    fn no_active_alternatives_is_empty_input() {
        let alternatives = vec![Alternative::new("A", vec![1.0, 2.0]).deactivated()];
        assert_eq!(
            DecisionMatrix::build(&criteria(), &alternatives),
            Err(RankingError::EmptyInput("alternatives"))
        );
        assert_eq!(
            DecisionMatrix::build(&criteria(), &[]),
            Err(RankingError::EmptyInput("alternatives"))
        );
    }

    #[test]
    fn short_values_is_dimension_mismatch() {
        let alternatives = vec![
            Alternative::new("A", vec![100.0, 8.0]),
            Alternative::new("B", vec![200.0]),
        ];
        assert_eq!(
            DecisionMatrix::build(&criteria(), &alternatives),
            Err(RankingError::DimensionMismatch {
                alternative: "B".to_string(),
                expected: 2,
                actual: 1,
            })
        );
    }

    #[test]
    fn blank_criterion_name_is_rejected() {
        let criteria = vec![Criterion::benefit("Quality", 1.0), Criterion::cost("  ", 1.0)];
        let alternatives = vec![Alternative::new("A", vec![1.0, 2.0])];
        assert_eq!(
            DecisionMatrix::build(&criteria, &alternatives),
            Err(RankingError::EmptyCriterionName(1))
        );
    }

    #[test]
    fn non_finite_value_is_rejected() {
        let alternatives = vec![Alternative::new("A", vec![f64::NAN, 8.0])];
        assert!(matches!(
            DecisionMatrix::build(&criteria(), &alternatives),
            Err(RankingError::InvalidValue { ref criterion, .. }) if criterion == "Price"
        ));
    }

    #[test]
    fn column_extrema() {
        let alternatives = vec![
            Alternative::new("A", vec![100.0, 8.0]),
            Alternative::new("B", vec![50.0, 12.0]),
            Alternative::new("C", vec![200.0, 10.0]),
        ];
        let matrix = DecisionMatrix::build(&criteria(), &alternatives).unwrap();

        assert_eq!(matrix.column(1).collect::<Vec<_>>(), vec![8.0, 12.0, 10.0]);
        assert_eq!(matrix.column_max(0), 200.0);
        assert_eq!(matrix.column_min(0), 50.0);
    }
}
