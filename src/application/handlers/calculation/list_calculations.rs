//! ListCalculationsHandler - Query handler for a user's history.

use std::sync::Arc;

use crate::domain::calculation::CalculationRecord;
use crate::domain::foundation::UserId;
use crate::ports::CalculationRepository;

use super::CalculationError;

/// Query for a user's saved calculations.
#[derive(Debug, Clone)]
pub struct ListCalculationsQuery {
    pub user_id: UserId,
    /// Defaults to the handler's page size; clamped to it.
    pub limit: Option<usize>,
}

/// Handler for listing calculation history, newest first.
pub struct ListCalculationsHandler {
    repository: Arc<dyn CalculationRepository>,
    max_limit: usize,
}

impl ListCalculationsHandler {
    pub fn new(repository: Arc<dyn CalculationRepository>, max_limit: usize) -> Self {
        Self {
            repository,
            max_limit,
        }
    }

    pub async fn handle(
        &self,
        query: ListCalculationsQuery,
    ) -> Result<Vec<CalculationRecord>, CalculationError> {
        let limit = query.limit.unwrap_or(self.max_limit).min(self.max_limit);
        Ok(self.repository.find_by_user(&query.user_id, limit).await?)
    }
}
