//! Data Transfer Objects for calculation endpoints.
//!
//! Request bodies reuse the domain `Criterion`/`Alternative` shapes so the
//! JSON a client sends is exactly what the engine ranks.

use serde::{Deserialize, Serialize};

use crate::domain::calculation::CalculationRecord;
use crate::domain::ranking::{Alternative, Criterion, RankedResult, RankingError};

// ════════════════════════════════════════════════════════════════════════════════
// Requests
// ════════════════════════════════════════════════════════════════════════════════

/// Body for `POST /api/calculate/:method`.
#[derive(Debug, Clone, Deserialize)]
pub struct RankRequest {
    pub criteria: Vec<Criterion>,
    pub alternatives: Vec<Alternative>,
}

/// Body for `POST /api/calculate` and `POST /api/calculations`.
#[derive(Debug, Clone, Deserialize)]
pub struct MethodRankRequest {
    pub method: String,
    pub criteria: Vec<Criterion>,
    pub alternatives: Vec<Alternative>,
}

/// Query parameters for the history endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct HistoryParams {
    pub limit: Option<usize>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════════

/// Full view of a saved calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationView {
    pub id: String,
    pub method: String,
    pub best_alternative: Option<String>,
    pub criteria: Vec<Criterion>,
    pub alternatives: Vec<Alternative>,
    pub results: Vec<RankedResult>,
    pub created_at: String,
}

impl From<CalculationRecord> for CalculationView {
    fn from(record: CalculationRecord) -> Self {
        Self {
            id: record.id.to_string(),
            method: record.method.to_string(),
            best_alternative: record.best_alternative().map(str::to_string),
            created_at: record.created_at.as_datetime().to_rfc3339(),
            criteria: record.criteria,
            alternatives: record.alternatives,
            results: record.results,
        }
    }
}

/// History list entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationSummary {
    pub id: String,
    pub method: String,
    pub best_alternative: Option<String>,
    pub alternative_count: usize,
    pub created_at: String,
}

impl From<&CalculationRecord> for CalculationSummary {
    fn from(record: &CalculationRecord) -> Self {
        Self {
            id: record.id.to_string(),
            method: record.method.to_string(),
            best_alternative: record.best_alternative().map(str::to_string),
            alternative_count: record.results.len(),
            created_at: record.created_at.as_datetime().to_rfc3339(),
        }
    }
}

/// Liveness probe body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource_type, id),
            details: None,
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            code: "UNAUTHORIZED".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }

    /// Ranking failures carry the engine's own error code.
    pub fn ranking(error: &RankingError) -> Self {
        Self {
            code: error.code().to_string(),
            message: error.to_string(),
            details: None,
        }
    }
}
