//! The Ascent scoring pipeline.
//!
//! Data flow: raw metric vectors → progressive enforcement against stored
//! history → per-environment aggregation → multi-environment combination
//! with a synergy bonus → milestone classification → trend analysis →
//! report structures. Every synthetic adjustment the enforcer makes is
//! logged to an append-only audit trail and surfaced in the report, so
//! consumers can always distinguish real improvement from enforced
//! improvement.

pub mod aggregation;
pub mod enforcement;
pub mod milestones;
pub mod pipeline;
pub mod report;
pub mod trends;

pub use aggregation::{environment_score, CombinedScore, EnvironmentCombiner};
pub use enforcement::{EnforcementBatch, ProgressiveEnforcer};
pub use milestones::{BandTable, CONSCIOUSNESS_BANDS, INDEPENDENCE_BANDS};
pub use pipeline::AssessmentPipeline;
pub use report::{create_reporter, AssessmentReport, Reporter};
pub use trends::{GlobalScorePoint, RollingStats, TrendAnalyzer, TrendDirection, TrendSummary};
