//! Choice Ranker - Multi-criteria decision analysis service
//!
//! Ranks alternatives against weighted Benefit/Cost criteria with SAW,
//! TOPSIS or WP, and keeps a per-user history of saved calculations.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
