//! Banded classification: milestone tiers for scores.

pub mod bands;

pub use bands::{Band, BandTable, CONSCIOUSNESS_BANDS, INDEPENDENCE_BANDS};

use ascent_core::constants::{EXCELLENCE_THRESHOLD, SCORE_FLOOR};
use ascent_core::types::Significance;

/// Significance tier for a milestone transition at the given score.
pub fn significance_for(score: f64) -> Significance {
    if score >= EXCELLENCE_THRESHOLD {
        Significance::Major
    } else if score >= SCORE_FLOOR + 0.050 {
        Significance::Notable
    } else {
        Significance::Routine
    }
}
