//! Storage Adapters
//!
//! Implementations of the CalculationRepository port.
//!
//! ## Available Adapters
//!
//! - **InMemoryCalculationRepository** - Keeps history in memory (development/testing)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::InMemoryCalculationRepository;
//!
//! let repository = Arc::new(InMemoryCalculationRepository::new(100));
//! ```

mod in_memory_calculation_repository;

pub use in_memory_calculation_repository::InMemoryCalculationRepository;
