//! GetCalculationHandler - Query handler for a single saved calculation.

use std::sync::Arc;

use crate::domain::calculation::CalculationRecord;
use crate::domain::foundation::{CalculationId, UserId};
use crate::ports::CalculationRepository;

use super::CalculationError;

/// Query for one calculation owned by the caller.
#[derive(Debug, Clone)]
pub struct GetCalculationQuery {
    pub calculation_id: CalculationId,
    pub user_id: UserId,
}

/// Handler for fetching a saved calculation.
pub struct GetCalculationHandler {
    repository: Arc<dyn CalculationRepository>,
}

impl GetCalculationHandler {
    pub fn new(repository: Arc<dyn CalculationRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: GetCalculationQuery,
    ) -> Result<CalculationRecord, CalculationError> {
        self.repository
            .find_by_id(&query.calculation_id)
            .await?
            .filter(|record| record.is_owned_by(&query.user_id))
            .ok_or(CalculationError::NotFound(query.calculation_id))
    }
}
