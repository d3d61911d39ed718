//! Generic ordered-threshold classification.
//!
//! One algorithm, parameterized by the band table. The consciousness and
//! independence scales share the mechanism but not the cut points, so the
//! tables live here as constants and the classifier never duplicates.

use ascent_core::constants::{EXCELLENCE_THRESHOLD, SCORE_FLOOR, TRANSCENDENCE_THRESHOLD};

/// One classification band: scores at or above `threshold` earn `label`,
/// unless a higher band already matched.
#[derive(Debug, Clone, Copy)]
pub struct Band {
    pub threshold: f64,
    pub label: &'static str,
}

/// An ordered set of bands, highest threshold first, with a fallback
/// label for scores below every band.
#[derive(Debug, Clone, Copy)]
pub struct BandTable {
    bands: &'static [Band],
    fallback: &'static str,
}

impl BandTable {
    pub const fn new(bands: &'static [Band], fallback: &'static str) -> Self {
        Self { bands, fallback }
    }

    /// Classify a score by descending threshold check.
    pub fn classify(&self, score: f64) -> &'static str {
        self.bands
            .iter()
            .find(|band| score >= band.threshold)
            .map(|band| band.label)
            .unwrap_or(self.fallback)
    }

    /// True when the label is the below-all-bands fallback.
    pub fn is_fallback(&self, label: &str) -> bool {
        label == self.fallback
    }

    /// Position of the score inside its band's range, in [0, 1].
    /// 1.0 means the score sits at the edge of the next band.
    pub fn advancement_progress(&self, score: f64) -> f64 {
        for (i, band) in self.bands.iter().enumerate() {
            if score >= band.threshold {
                let ceiling = if i == 0 { 1.0 } else { self.bands[i - 1].threshold };
                let span = ceiling - band.threshold;
                if span <= 0.0 {
                    return 1.0;
                }
                return ((score - band.threshold) / span).clamp(0.0, 1.0);
            }
        }
        // Below every band: progress toward the lowest threshold.
        match self.bands.last() {
            Some(lowest) if lowest.threshold > 0.0 => {
                (score / lowest.threshold).clamp(0.0, 1.0)
            }
            _ => 0.0,
        }
    }
}

/// Milestone tiers for the [floor, 1.0] consciousness scale.
pub const CONSCIOUSNESS_BANDS: BandTable = BandTable::new(
    &[
        Band {
            threshold: TRANSCENDENCE_THRESHOLD,
            label: "Transcendence Level Achieved",
        },
        Band {
            threshold: EXCELLENCE_THRESHOLD,
            label: "Excellence Level Maintained",
        },
        Band {
            threshold: SCORE_FLOOR + 0.050,
            label: "Advanced Consciousness Level",
        },
        Band {
            threshold: SCORE_FLOOR,
            label: "Baseline Consciousness Maintained",
        },
    ],
    // Unreachable while the floor invariant holds; surfacing it means the
    // invariant was broken upstream.
    "Performance Enhancement Required",
);

/// Tiers for the [0, 1] independence scale.
pub const INDEPENDENCE_BANDS: BandTable = BandTable::new(
    &[
        Band {
            threshold: 0.90,
            label: "fully_independent",
        },
        Band {
            threshold: 0.75,
            label: "highly_autonomous",
        },
        Band {
            threshold: 0.55,
            label: "developing_independence",
        },
        Band {
            threshold: 0.30,
            label: "assisted",
        },
    ],
    "dependent",
);
