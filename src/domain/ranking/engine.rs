//! Ranking Engine - public entry point for MCDA ranking.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
    Alternative, Criterion, DecisionMatrix, Ranker, RankingError, RankingMethod, SawRanker,
    TopsisRanker, WpRanker,
};

/// Decimal places kept in every returned score, for all methods.
pub const SCORE_PRECISION: i32 = 3;

/// One ranked alternative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    pub name: String,
    pub score: f64,
    /// 1-based; 1 is the best alternative.
    pub rank: usize,
}

/// Stateless ranking entry point.
///
/// Each call builds its own [`DecisionMatrix`] from borrowed inputs, so
/// concurrent calls never interact.
#[derive(Debug, Clone, Copy, Default)]
pub struct RankingEngine;

impl RankingEngine {
    pub fn new() -> Self {
        Self
    }

    /// Ranks `alternatives` against `criteria` with the named method.
    ///
    /// Inactive criteria and alternatives are filtered out internally.
    ///
    /// # Errors
    /// - `UnknownMethod` if `method` is not SAW, TOPSIS or WP (case-insensitive)
    /// - any error from [`DecisionMatrix::build`] or the selected ranker
    pub fn rank(
        &self,
        method: &str,
        criteria: &[Criterion],
        alternatives: &[Alternative],
    ) -> Result<Vec<RankedResult>, RankingError> {
        let method: RankingMethod = method.parse()?;
        self.rank_with(method, criteria, alternatives)
    }

    /// Typed variant of [`RankingEngine::rank`].
    pub fn rank_with(
        &self,
        method: RankingMethod,
        criteria: &[Criterion],
        alternatives: &[Alternative],
    ) -> Result<Vec<RankedResult>, RankingError> {
        let matrix = DecisionMatrix::build(criteria, alternatives)?;

        debug!(
            method = %method,
            alternatives = matrix.alternative_count(),
            criteria = matrix.criterion_count(),
            "Ranking alternatives"
        );

        let scores = Self::ranker_for(method).score(&matrix)?;
        Ok(assign_ranks(matrix.alternative_names(), scores))
    }

    fn ranker_for(method: RankingMethod) -> &'static dyn Ranker {
        match method {
            RankingMethod::Saw => &SawRanker,
            RankingMethod::Topsis => &TopsisRanker,
            RankingMethod::Wp => &WpRanker,
        }
    }
}

/// Sorts by raw score descending, assigns ranks, then rounds.
///
/// The sort is stable, so equal scores keep their input order.
fn assign_ranks(names: &[String], scores: Vec<f64>) -> Vec<RankedResult> {
    let mut order: Vec<(usize, f64)> = scores.into_iter().enumerate().collect();
    order.sort_by(|a, b| b.1.total_cmp(&a.1));

    order
        .into_iter()
        .enumerate()
        .map(|(position, (index, score))| RankedResult {
            name: names[index].clone(),
            score: round_score(score),
            rank: position + 1,
        })
        .collect()
}

/// Rounds half away from zero to [`SCORE_PRECISION`] decimal places.
pub fn round_score(score: f64) -> f64 {
    let factor = 10f64.powi(SCORE_PRECISION);
    (score * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(results: &[RankedResult]) -> Vec<&str> {
        results.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn saw_prefers_cheaper_comparable_quality() {
        let criteria = vec![Criterion::cost("Price", 0.5), Criterion::benefit("Quality", 0.5)];
        let alternatives = vec![
            Alternative::new("A", vec![100.0, 8.0]),
            Alternative::new("B", vec![200.0, 10.0]),
        ];

        let results = RankingEngine::new().rank("SAW", &criteria, &alternatives).unwrap();

        assert_eq!(names(&results), vec!["A", "B"]);
        assert_eq!(results[0].score, 0.9);
        assert_eq!(results[1].score, 0.75);
        assert_eq!(results[0].rank, 1);
        assert_eq!(results[1].rank, 2);
    }

    #[test]
    fn topsis_dominant_alternative_wins() {
        let criteria = vec![
            Criterion::benefit("Battery", 2.0),
            Criterion::benefit("Camera", 1.0),
            Criterion::benefit("Screen", 1.0),
        ];
        let alternatives = vec![
            Alternative::new("Basic", vec![3.0, 5.0, 4.0]),
            Alternative::new("Flagship", vec![9.0, 9.0, 8.0]),
            Alternative::new("Mid", vec![6.0, 7.0, 5.0]),
        ];

        let results = RankingEngine::new().rank("TOPSIS", &criteria, &alternatives).unwrap();

        assert_eq!(results[0].name, "Flagship");
        assert!(results[0].score > results[1].score);
        assert!(results.iter().all(|r| (0.0..=1.0).contains(&r.score)));
    }

    #[test]
    fn topsis_ranking_ignores_extreme_column_scale() {
        let criteria = vec![Criterion::benefit("X", 0.9), Criterion::benefit("Y", 0.1)];
        let at_scale = |scale: f64| {
            vec![
                Alternative::new("A", vec![2.0 * scale, 1.0]),
                Alternative::new("B", vec![1.0 * scale, 2.0]),
            ]
        };

        let reference = RankingEngine::new().rank("TOPSIS", &criteria, &at_scale(1.0)).unwrap();
        assert_eq!(names(&reference), vec!["A", "B"]);
        assert_eq!((reference[0].score, reference[1].score), (0.9, 0.1));

        for scale in [1e200, 1e-200] {
            let results = RankingEngine::new()
                .rank("TOPSIS", &criteria, &at_scale(scale))
                .unwrap();
            assert_eq!(results, reference, "scale {}", scale);
        }
    }

    #[test]
    fn wp_ties_keep_input_order() {
        let criteria = vec![Criterion::benefit("X", 1.0), Criterion::benefit("Y", 2.0)];
        let alternatives = vec![
            Alternative::new("First", vec![4.0, 6.0]),
            Alternative::new("Second", vec![4.0, 6.0]),
        ];

        let results = RankingEngine::new().rank("WP", &criteria, &alternatives).unwrap();

        assert_eq!(results[0].score, results[1].score);
        assert_eq!(names(&results), vec!["First", "Second"]);
        assert_eq!((results[0].rank, results[1].rank), (1, 2));
    }

    #[test]
    fn all_zero_weights_fail_without_results() {
        let criteria = vec![Criterion::cost("Price", 0.0), Criterion::benefit("Quality", 0.0)];
        let alternatives = vec![Alternative::new("A", vec![100.0, 8.0])];

        for method in RankingMethod::ALL {
            assert!(matches!(
                RankingEngine::new().rank_with(method, &criteria, &alternatives),
                Err(RankingError::InvalidWeights(_))
            ));
        }
    }

    #[test]
    fn short_values_fail_with_dimension_mismatch() {
        let criteria = vec![Criterion::cost("Price", 1.0), Criterion::benefit("Quality", 1.0)];
        let alternatives = vec![
            Alternative::new("A", vec![100.0, 8.0]),
            Alternative::new("B", vec![200.0]),
        ];

        assert!(matches!(
            RankingEngine::new().rank("SAW", &criteria, &alternatives),
            Err(RankingError::DimensionMismatch { expected: 2, actual: 1, .. })
        ));
    }

    #[test]
    fn unknown_method_is_rejected_before_validation() {
        let result = RankingEngine::new().rank("ELECTRE", &[], &[]);
        assert_eq!(result, Err(RankingError::UnknownMethod("ELECTRE".to_string())));
    }

    #[test]
    fn method_name_is_case_insensitive() {
        let criteria = vec![Criterion::benefit("X", 1.0)];
        let alternatives = vec![Alternative::new("A", vec![1.0]), Alternative::new("B", vec![2.0])];

        let upper = RankingEngine::new().rank("SAW", &criteria, &alternatives).unwrap();
        let lower = RankingEngine::new().rank("saw", &criteria, &alternatives).unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn inactive_entries_are_skipped() {
        let criteria = vec![
            Criterion::benefit("Quality", 1.0),
            Criterion::cost("Ignored", 0.0).deactivated(),
        ];
        let alternatives = vec![
            Alternative::new("Retired", vec![100.0]).deactivated(),
            Alternative::new("A", vec![4.0]),
            Alternative::new("B", vec![8.0]),
        ];

        let results = RankingEngine::new().rank("SAW", &criteria, &alternatives).unwrap();
        assert_eq!(names(&results), vec!["B", "A"]);
    }

    #[test]
    fn scores_are_rounded_to_three_places() {
        let criteria = vec![Criterion::benefit("X", 1.0)];
        let alternatives = vec![
            Alternative::new("A", vec![1.0]),
            Alternative::new("B", vec![3.0]),
        ];

        for method in RankingMethod::ALL {
            let results = RankingEngine::new().rank_with(method, &criteria, &alternatives).unwrap();
            for result in results {
                assert_eq!(result.score, round_score(result.score));
            }
        }

        let results = RankingEngine::new().rank("SAW", &criteria, &alternatives).unwrap();
        assert_eq!(results[1].score, 0.333);
    }

    #[test]
    fn round_score_rounds_half_away_from_zero() {
        assert_eq!(round_score(0.12345), 0.123);
        assert_eq!(round_score(0.9996), 1.0);
        assert_eq!(round_score(2.0), 2.0);
    }

    #[test]
    fn ranks_follow_raw_score_order() {
        let results = assign_ranks(
            &["A".to_string(), "B".to_string(), "C".to_string()],
            vec![0.2, 0.9, 0.5],
        );
        assert_eq!(names(&results), vec!["B", "C", "A"]);
        assert_eq!(
            results.iter().map(|r| r.rank).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn ranked_result_serializes_for_transport() {
        let json = serde_json::to_value(RankedResult {
            name: "A".to_string(),
            score: 0.9,
            rank: 1,
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"name": "A", "score": 0.9, "rank": 1}));
    }
}
