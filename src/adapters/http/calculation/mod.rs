//! Calculation HTTP adapter module.
//!
//! Provides REST API endpoints for stateless ranking and saved calculation
//! history.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::ErrorResponse;
pub use handlers::{ApiError, AuthenticatedUser, CalculationAppState};
pub use routes::{calculation_routes, health_routes};
