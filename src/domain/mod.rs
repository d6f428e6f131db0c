//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `ranking` - Pure MCDA ranking engine (SAW, TOPSIS, WP)
//! - `calculation` - Saved ranking runs owned by a user

pub mod calculation;
pub mod foundation;
pub mod ranking;
