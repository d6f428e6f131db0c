//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers (write) are kept separate from query handlers (read).

pub mod handlers;

pub use handlers::{
    CalculationError, DeleteCalculationCommand, DeleteCalculationHandler, GetCalculationHandler,
    GetCalculationQuery, ListCalculationsHandler, ListCalculationsQuery, RankAlternativesCommand,
    RankAlternativesHandler, SaveCalculationCommand, SaveCalculationHandler,
};
