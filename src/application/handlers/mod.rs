//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod calculation;

pub use calculation::{
    CalculationError, DeleteCalculationCommand, DeleteCalculationHandler, GetCalculationHandler,
    GetCalculationQuery, ListCalculationsHandler, ListCalculationsQuery, RankAlternativesCommand,
    RankAlternativesHandler, SaveCalculationCommand, SaveCalculationHandler,
};
