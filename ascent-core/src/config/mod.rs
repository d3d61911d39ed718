//! Configuration system for Ascent.
//! TOML-based, layered resolution: env > project > defaults.

pub mod ascent_config;
pub mod scoring_config;
pub mod storage_config;
pub mod trend_config;

pub use ascent_config::AscentConfig;
pub use scoring_config::ScoringConfig;
pub use storage_config::StorageConfig;
pub use trend_config::TrendConfig;
