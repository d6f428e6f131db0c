//! HTTP adapters - REST API implementations.

pub mod calculation;

pub use calculation::{calculation_routes, health_routes, CalculationAppState};
