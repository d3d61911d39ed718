//! Aggregation: vector → scalar, and scalars → global score.

pub mod combine;
pub mod environment;

pub use combine::{CombinedScore, EnvironmentCombiner};
pub use environment::environment_score;
