//! In-Memory Calculation Repository
//!
//! Keeps calculation history in process memory. History is lost on restart.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::calculation::CalculationRecord;
use crate::domain::foundation::{CalculationId, DomainError, ErrorCode, UserId};
use crate::ports::CalculationRepository;

/// In-memory calculation history with a per-user cap.
#[derive(Debug, Clone)]
pub struct InMemoryCalculationRepository {
    /// Records in insertion order (oldest first).
    records: Arc<RwLock<Vec<CalculationRecord>>>,
    max_records_per_user: usize,
}

impl InMemoryCalculationRepository {
    /// Create a repository keeping at most `max_records_per_user` per user.
    pub fn new(max_records_per_user: usize) -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
            max_records_per_user: max_records_per_user.max(1),
        }
    }

    /// Get the total number of stored records
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.records.write().await.clear();
    }
}

#[async_trait]
impl CalculationRepository for InMemoryCalculationRepository {
    async fn save(&self, record: &CalculationRecord) -> Result<(), DomainError> {
        let mut records = self.records.write().await;
        records.push(record.clone());

        let owned = records.iter().filter(|r| r.user_id == record.user_id).count();
        if owned > self.max_records_per_user {
            let excess = owned - self.max_records_per_user;
            let mut evicted = 0;
            records.retain(|r| {
                if evicted < excess && r.user_id == record.user_id {
                    evicted += 1;
                    false
                } else {
                    true
                }
            });
            debug!(user_id = %record.user_id, evicted, "Evicted oldest calculations");
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &CalculationId) -> Result<Option<CalculationRecord>, DomainError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| &r.id == id).cloned())
    }

    async fn find_by_user(
        &self,
        user_id: &UserId,
        limit: usize,
    ) -> Result<Vec<CalculationRecord>, DomainError> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .rev()
            .filter(|r| &r.user_id == user_id)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: &CalculationId) -> Result<(), DomainError> {
        let mut records = self.records.write().await;
        let position = records.iter().position(|r| &r.id == id).ok_or_else(|| {
            DomainError::new(ErrorCode::CalculationNotFound, "Calculation not found")
                .with_detail("calculation_id", id.to_string())
        })?;
        records.remove(position);
        Ok(())
    }
}
