//! DeleteCalculationHandler - Command handler for removing a saved calculation.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{CalculationId, UserId};
use crate::ports::CalculationRepository;

use super::CalculationError;

/// Command to delete a calculation owned by the caller.
#[derive(Debug, Clone)]
pub struct DeleteCalculationCommand {
    pub calculation_id: CalculationId,
    pub user_id: UserId,
}

/// Handler for deleting calculations.
pub struct DeleteCalculationHandler {
    repository: Arc<dyn CalculationRepository>,
}

impl DeleteCalculationHandler {
    pub fn new(repository: Arc<dyn CalculationRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteCalculationCommand) -> Result<(), CalculationError> {
        let owned = self
            .repository
            .find_by_id(&cmd.calculation_id)
            .await?
            .is_some_and(|record| record.is_owned_by(&cmd.user_id));

        if !owned {
            return Err(CalculationError::NotFound(cmd.calculation_id));
        }

        self.repository.delete(&cmd.calculation_id).await?;
        info!(calculation_id = %cmd.calculation_id, "Deleted calculation");
        Ok(())
    }
}
