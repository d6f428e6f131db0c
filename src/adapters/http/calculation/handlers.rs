//! HTTP handlers for ranking and calculation history endpoints.
//!
//! These handlers connect Axum routes to application layer handlers.

use std::sync::Arc;

use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::error;

use crate::application::handlers::{
    CalculationError, DeleteCalculationCommand, DeleteCalculationHandler, GetCalculationHandler,
    GetCalculationQuery, ListCalculationsHandler, ListCalculationsQuery, RankAlternativesCommand,
    RankAlternativesHandler, SaveCalculationCommand, SaveCalculationHandler,
};
use crate::domain::foundation::{CalculationId, UserId};
use crate::domain::ranking::{RankedResult, RankingError};
use crate::ports::CalculationRepository;

use super::dto::{
    CalculationSummary, CalculationView, ErrorResponse, HealthResponse, HistoryParams,
    MethodRankRequest, RankRequest,
};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Calculation API error that implements IntoResponse.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Ranking(RankingError),
    NotFound(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg)),
            ApiError::Ranking(err) => {
                let status = match err {
                    RankingError::UnknownMethod(_) => StatusCode::BAD_REQUEST,
                    _ => StatusCode::UNPROCESSABLE_ENTITY,
                };
                (status, ErrorResponse::ranking(&err))
            }
            ApiError::NotFound(id) => {
                (StatusCode::NOT_FOUND, ErrorResponse::not_found("Calculation", &id))
            }
            ApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal(msg))
            }
        };
        (status, Json(error)).into_response()
    }
}

impl From<CalculationError> for ApiError {
    fn from(error: CalculationError) -> Self {
        match error {
            CalculationError::Ranking(err) => ApiError::Ranking(err),
            CalculationError::NotFound(id) => ApiError::NotFound(id.to_string()),
            CalculationError::Repository(err) => {
                error!(error = %err, "Calculation repository failure");
                ApiError::Internal("Failed to access calculation history".to_string())
            }
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing calculation dependencies.
#[derive(Clone)]
pub struct CalculationAppState {
    pub repository: Arc<dyn CalculationRepository>,
    /// Largest page the history endpoint returns.
    pub history_limit: usize,
}

impl CalculationAppState {
    pub fn new(repository: Arc<dyn CalculationRepository>, history_limit: usize) -> Self {
        Self {
            repository,
            history_limit,
        }
    }

    pub fn rank_handler(&self) -> RankAlternativesHandler {
        RankAlternativesHandler::new()
    }

    pub fn save_handler(&self) -> SaveCalculationHandler {
        SaveCalculationHandler::new(self.repository.clone())
    }

    pub fn list_handler(&self) -> ListCalculationsHandler {
        ListCalculationsHandler::new(self.repository.clone(), self.history_limit)
    }

    pub fn get_handler(&self) -> GetCalculationHandler {
        GetCalculationHandler::new(self.repository.clone())
    }

    pub fn delete_handler(&self) -> DeleteCalculationHandler {
        DeleteCalculationHandler::new(self.repository.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// User Context
// ════════════════════════════════════════════════════════════════════════════════

/// Authenticated user context extracted from request.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Rejection type for AuthenticatedUser extraction.
pub struct AuthenticationRequired;

impl IntoResponse for AuthenticationRequired {
    fn into_response(self) -> axum::response::Response {
        let error = ErrorResponse::unauthorized("Authentication is required");
        (StatusCode::UNAUTHORIZED, Json(error)).into_response()
    }
}

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AuthenticationRequired;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get("x-user-id")
            .and_then(|h| h.to_str().ok())
            .and_then(|s| UserId::new(s).ok())
            .ok_or(AuthenticationRequired)?;

        Ok(AuthenticatedUser { user_id })
    }
}

fn parse_calculation_id(raw: &str) -> Result<CalculationId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::BadRequest("Invalid calculation ID format".to_string()))
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/calculate/:method
///
/// Ranks alternatives with the method named in the path.
pub async fn rank_with_path_method(
    State(state): State<CalculationAppState>,
    Path(method): Path<String>,
    Json(request): Json<RankRequest>,
) -> Result<Json<Vec<RankedResult>>, ApiError> {
    let cmd = RankAlternativesCommand {
        method,
        criteria: request.criteria,
        alternatives: request.alternatives,
    };

    let results = state.rank_handler().handle(&cmd)?;
    Ok(Json(results))
}

/// POST /api/calculate
///
/// Ranks alternatives with the method named in the body.
pub async fn rank_with_body_method(
    State(state): State<CalculationAppState>,
    Json(request): Json<MethodRankRequest>,
) -> Result<Json<Vec<RankedResult>>, ApiError> {
    let cmd = RankAlternativesCommand {
        method: request.method,
        criteria: request.criteria,
        alternatives: request.alternatives,
    };

    let results = state.rank_handler().handle(&cmd)?;
    Ok(Json(results))
}

/// POST /api/calculations
///
/// Ranks alternatives and stores the run in the caller's history.
pub async fn save_calculation(
    State(state): State<CalculationAppState>,
    user: AuthenticatedUser,
    Json(request): Json<MethodRankRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = SaveCalculationCommand {
        user_id: user.user_id,
        method: request.method,
        criteria: request.criteria,
        alternatives: request.alternatives,
    };

    let record = state.save_handler().handle(cmd).await?;
    Ok((StatusCode::CREATED, Json(CalculationView::from(record))))
}

/// GET /api/calculations
///
/// Lists the caller's saved calculations, newest first.
pub async fn list_calculations(
    State(state): State<CalculationAppState>,
    Query(params): Query<HistoryParams>,
    user: AuthenticatedUser,
) -> Result<Json<Vec<CalculationSummary>>, ApiError> {
    let query = ListCalculationsQuery {
        user_id: user.user_id,
        limit: params.limit,
    };

    let records = state.list_handler().handle(query).await?;
    Ok(Json(records.iter().map(CalculationSummary::from).collect()))
}

/// GET /api/calculations/:id
pub async fn get_calculation(
    State(state): State<CalculationAppState>,
    Path(id): Path<String>,
    user: AuthenticatedUser,
) -> Result<Json<CalculationView>, ApiError> {
    let query = GetCalculationQuery {
        calculation_id: parse_calculation_id(&id)?,
        user_id: user.user_id,
    };

    let record = state.get_handler().handle(query).await?;
    Ok(Json(CalculationView::from(record)))
}

/// DELETE /api/calculations/:id
pub async fn delete_calculation(
    State(state): State<CalculationAppState>,
    Path(id): Path<String>,
    user: AuthenticatedUser,
) -> Result<StatusCode, ApiError> {
    let cmd = DeleteCalculationCommand {
        calculation_id: parse_calculation_id(&id)?,
        user_id: user.user_id,
    };

    state.delete_handler().handle(cmd).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
