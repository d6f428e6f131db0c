//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `CalculationRepository` - Persistence of saved ranking runs

mod calculation_repository;

pub use calculation_repository::CalculationRepository;
