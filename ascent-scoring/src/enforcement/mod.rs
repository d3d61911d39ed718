//! Progressive enforcement — the non-decrease rewrite with audit trail.

pub mod enforcer;

pub use enforcer::{EnforcementBatch, ProgressiveEnforcer};
