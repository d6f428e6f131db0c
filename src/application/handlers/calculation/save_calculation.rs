//! SaveCalculationHandler - Ranks alternatives and stores the run.

use std::sync::Arc;

use tracing::info;

use crate::domain::calculation::CalculationRecord;
use crate::domain::foundation::UserId;
use crate::domain::ranking::{Alternative, Criterion, RankingEngine, RankingMethod};
use crate::ports::CalculationRepository;

use super::CalculationError;

/// Command to rank and persist a calculation.
#[derive(Debug, Clone)]
pub struct SaveCalculationCommand {
    pub user_id: UserId,
    pub method: String,
    pub criteria: Vec<Criterion>,
    pub alternatives: Vec<Alternative>,
}

/// Handler for saving calculations.
///
/// Nothing is stored when ranking fails.
pub struct SaveCalculationHandler {
    repository: Arc<dyn CalculationRepository>,
    engine: RankingEngine,
}

impl SaveCalculationHandler {
    pub fn new(repository: Arc<dyn CalculationRepository>) -> Self {
        Self {
            repository,
            engine: RankingEngine::new(),
        }
    }

    pub async fn handle(
        &self,
        cmd: SaveCalculationCommand,
    ) -> Result<CalculationRecord, CalculationError> {
        let method: RankingMethod = cmd.method.parse()?;
        let results = self
            .engine
            .rank_with(method, &cmd.criteria, &cmd.alternatives)?;

        let record = CalculationRecord::new(
            cmd.user_id,
            method,
            cmd.criteria,
            cmd.alternatives,
            results,
        );
        self.repository.save(&record).await?;

        info!(
            calculation_id = %record.id,
            user_id = %record.user_id,
            method = %record.method,
            "Saved calculation"
        );

        Ok(record)
    }
}
