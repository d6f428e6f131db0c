//! Calculation module - saved ranking runs.
//!
//! A calculation record captures the inputs and output of one ranking call
//! so a user can revisit it later. Records are opaque to the ranking engine.

mod record;

pub use record::CalculationRecord;
