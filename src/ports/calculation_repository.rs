//! Calculation repository port.
//!
//! Defines the contract for storing and retrieving saved ranking runs.
//! The ranking engine never touches this port; only the application layer
//! does, after a ranking has succeeded.

use async_trait::async_trait;

use crate::domain::calculation::CalculationRecord;
use crate::domain::foundation::{CalculationId, DomainError, UserId};

/// Repository port for calculation history.
///
/// Implementations are created once per process and shared behind an `Arc`.
#[async_trait]
pub trait CalculationRepository: Send + Sync {
    /// Save a new calculation record.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, record: &CalculationRecord) -> Result<(), DomainError>;

    /// Find a record by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &CalculationId) -> Result<Option<CalculationRecord>, DomainError>;

    /// Find a user's records, newest first, at most `limit` of them.
    async fn find_by_user(
        &self,
        user_id: &UserId,
        limit: usize,
    ) -> Result<Vec<CalculationRecord>, DomainError>;

    /// Delete a record.
    ///
    /// # Errors
    ///
    /// - `CalculationNotFound` if the record doesn't exist
    async fn delete(&self, id: &CalculationId) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calculation_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn CalculationRepository) {}
    }
}
