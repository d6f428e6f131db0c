//! RankAlternativesHandler - Stateless ranking without persistence.

use crate::domain::ranking::{Alternative, Criterion, RankedResult, RankingEngine};

use super::CalculationError;

/// Command to rank alternatives with a named method.
#[derive(Debug, Clone)]
pub struct RankAlternativesCommand {
    pub method: String,
    pub criteria: Vec<Criterion>,
    pub alternatives: Vec<Alternative>,
}

/// Handler for one-off rankings.
#[derive(Debug, Clone, Copy, Default)]
pub struct RankAlternativesHandler {
    engine: RankingEngine,
}

impl RankAlternativesHandler {
    pub fn new() -> Self {
        Self {
            engine: RankingEngine::new(),
        }
    }

    pub fn handle(&self, cmd: &RankAlternativesCommand) -> Result<Vec<RankedResult>, CalculationError> {
        Ok(self.engine.rank(&cmd.method, &cmd.criteria, &cmd.alternatives)?)
    }
}
