//! Calculation history configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Upper bound accepted for `max_records_per_user`.
pub const MAX_HISTORY_PER_USER: usize = 10_000;

/// Saved calculation history settings
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryConfig {
    /// Records kept per user before the oldest are evicted.
    /// Also the largest page the history endpoint returns.
    #[serde(default = "default_max_records_per_user")]
    pub max_records_per_user: usize,
}

impl HistoryConfig {
    /// Validate history configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_records_per_user == 0 || self.max_records_per_user > MAX_HISTORY_PER_USER {
            return Err(ValidationError::InvalidHistorySize {
                max: MAX_HISTORY_PER_USER,
            });
        }
        Ok(())
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_records_per_user: default_max_records_per_user(),
        }
    }
}

fn default_max_records_per_user() -> usize {
    100
}
