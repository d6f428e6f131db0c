//! Calculation record - one saved ranking run.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CalculationId, Timestamp, UserId};
use crate::domain::ranking::{Alternative, Criterion, RankedResult, RankingMethod};

/// Inputs and results of a ranking call, owned by one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRecord {
    pub id: CalculationId,
    pub user_id: UserId,
    pub method: RankingMethod,
    pub criteria: Vec<Criterion>,
    pub alternatives: Vec<Alternative>,
    pub results: Vec<RankedResult>,
    pub created_at: Timestamp,
}

impl CalculationRecord {
    /// Creates a record stamped with a fresh id and the current time.
    pub fn new(
        user_id: UserId,
        method: RankingMethod,
        criteria: Vec<Criterion>,
        alternatives: Vec<Alternative>,
        results: Vec<RankedResult>,
    ) -> Self {
        Self {
            id: CalculationId::new(),
            user_id,
            method,
            criteria,
            alternatives,
            results,
            created_at: Timestamp::now(),
        }
    }

    /// Returns true if `user_id` owns this record.
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }

    /// Name of the rank-1 alternative, if any results were stored.
    pub fn best_alternative(&self) -> Option<&str> {
        self.results
            .iter()
            .find(|r| r.rank == 1)
            .map(|r| r.name.as_str())
    }
}
