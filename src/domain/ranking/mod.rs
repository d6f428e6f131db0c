//! Ranking Module - Multi-criteria decision analysis.
//!
//! Ranks alternatives against weighted Benefit/Cost criteria with one of
//! three classical methods.
//!
//! # Components
//!
//! - `WeightNormalizer` - Rescales raw weights to sum to 1
//! - `DecisionMatrix` - Active criteria x active alternatives, validated
//! - `Normalization` - Min-max and vector column rescaling
//! - `SawRanker`, `TopsisRanker`, `WpRanker` - Score computation
//! - `RankingEngine` - Method selection, sorting, ranking and rounding
//!
//! All functions are pure and stateless. Inputs are borrowed and never
//! mutated; no I/O happens here.

mod criterion;
mod engine;
mod errors;
mod matrix;
mod method;
mod normalization;
mod saw;
mod topsis;
mod weights;
mod wp;

pub use criterion::{Alternative, Criterion, CriterionType};
pub use engine::{round_score, RankedResult, RankingEngine, SCORE_PRECISION};
pub use errors::RankingError;
pub use matrix::DecisionMatrix;
pub use method::{Ranker, RankingMethod};
pub use normalization::Normalization;
pub use saw::SawRanker;
pub use topsis::TopsisRanker;
pub use weights::WeightNormalizer;
pub use wp::WpRanker;
