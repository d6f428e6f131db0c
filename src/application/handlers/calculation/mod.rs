//! Calculation command and query handlers.
//!
//! Ranking itself is delegated to the pure `RankingEngine`; these handlers
//! add ownership checks and persistence around it.

mod delete_calculation;
mod errors;
mod get_calculation;
mod list_calculations;
mod rank_alternatives;
mod save_calculation;

pub use delete_calculation::{DeleteCalculationCommand, DeleteCalculationHandler};
pub use errors::CalculationError;
pub use get_calculation::{GetCalculationHandler, GetCalculationQuery};
pub use list_calculations::{ListCalculationsHandler, ListCalculationsQuery};
pub use rank_alternatives::{RankAlternativesCommand, RankAlternativesHandler};
pub use save_calculation::{SaveCalculationCommand, SaveCalculationHandler};
