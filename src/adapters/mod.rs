//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - Axum REST endpoints for ranking and history
//! - `storage` - Calculation history repositories

pub mod http;
pub mod storage;

pub use http::{calculation_routes, health_routes, CalculationAppState};
pub use storage::InMemoryCalculationRepository;
