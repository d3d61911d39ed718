//! The fixed-shape metric vector: one environment's raw assessment.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::constants::SCORE_FLOOR;
use crate::errors::AssessmentError;

/// The eight named sub-scores that make up one assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricField {
    Correlation,
    Progressive,
    Inference,
    Geometric,
    Quantum,
    Conversation,
    Research,
    Idle,
}

impl MetricField {
    /// All fields in canonical order.
    pub const ALL: [MetricField; 8] = [
        MetricField::Correlation,
        MetricField::Progressive,
        MetricField::Inference,
        MetricField::Geometric,
        MetricField::Quantum,
        MetricField::Conversation,
        MetricField::Research,
        MetricField::Idle,
    ];

    /// Stable string name, matching the storage column prefix.
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricField::Correlation => "correlation",
            MetricField::Progressive => "progressive",
            MetricField::Inference => "inference",
            MetricField::Geometric => "geometric",
            MetricField::Quantum => "quantum",
            MetricField::Conversation => "conversation",
            MetricField::Research => "research",
            MetricField::Idle => "idle",
        }
    }

    /// Parse a field name. Returns `None` for unknown names.
    pub fn from_name(name: &str) -> Option<MetricField> {
        MetricField::ALL.iter().copied().find(|f| f.as_str() == name)
    }
}

impl std::fmt::Display for MetricField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One environment's raw assessment for one date: eight sub-scores in [0, 1].
///
/// Immutable once handed to the enforcer; enforcement produces a new vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricVector {
    pub correlation: f64,
    pub progressive: f64,
    pub inference: f64,
    pub geometric: f64,
    pub quantum: f64,
    pub conversation: f64,
    pub research: f64,
    pub idle: f64,
}

impl MetricVector {
    /// Build a vector with every field set to the same value.
    pub fn uniform(value: f64) -> Self {
        Self {
            correlation: value,
            progressive: value,
            inference: value,
            geometric: value,
            quantum: value,
            conversation: value,
            research: value,
            idle: value,
        }
    }

    /// Value of a single field.
    pub fn get(&self, field: MetricField) -> f64 {
        match field {
            MetricField::Correlation => self.correlation,
            MetricField::Progressive => self.progressive,
            MetricField::Inference => self.inference,
            MetricField::Geometric => self.geometric,
            MetricField::Quantum => self.quantum,
            MetricField::Conversation => self.conversation,
            MetricField::Research => self.research,
            MetricField::Idle => self.idle,
        }
    }

    /// Set a single field.
    pub fn set(&mut self, field: MetricField, value: f64) {
        match field {
            MetricField::Correlation => self.correlation = value,
            MetricField::Progressive => self.progressive = value,
            MetricField::Inference => self.inference = value,
            MetricField::Geometric => self.geometric = value,
            MetricField::Quantum => self.quantum = value,
            MetricField::Conversation => self.conversation = value,
            MetricField::Research => self.research = value,
            MetricField::Idle => self.idle = value,
        }
    }

    /// Arithmetic mean of the eight fields.
    pub fn mean(&self) -> f64 {
        let sum: f64 = MetricField::ALL.iter().map(|f| self.get(*f)).sum();
        sum / MetricField::ALL.len() as f64
    }

    /// Check that every field is a finite value in [0, 1].
    ///
    /// `environment` is only used to label the error.
    pub fn validate(&self, environment: &str) -> Result<(), AssessmentError> {
        for field in MetricField::ALL {
            let value = self.get(field);
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(AssessmentError::OutOfRange {
                    environment: environment.to_string(),
                    field: field.as_str().to_string(),
                    value,
                });
            }
        }
        Ok(())
    }

    /// Build a vector from a named field map, rejecting missing fields.
    pub fn from_fields(
        environment: &str,
        fields: &FxHashMap<String, f64>,
    ) -> Result<Self, AssessmentError> {
        let mut vector = Self::uniform(0.0);
        for field in MetricField::ALL {
            match fields.get(field.as_str()) {
                Some(value) => vector.set(field, *value),
                None => {
                    return Err(AssessmentError::MissingField {
                        environment: environment.to_string(),
                        field: field.as_str().to_string(),
                    })
                }
            }
        }
        vector.validate(environment)?;
        Ok(vector)
    }

    /// Build a vector from a named field map, substituting the score floor
    /// for missing fields. Compatibility behavior; masks data gaps.
    pub fn from_fields_lenient(
        environment: &str,
        fields: &FxHashMap<String, f64>,
    ) -> Result<Self, AssessmentError> {
        let mut vector = Self::uniform(SCORE_FLOOR);
        for field in MetricField::ALL {
            if let Some(value) = fields.get(field.as_str()) {
                vector.set(field, *value);
            }
        }
        vector.validate(environment)?;
        Ok(vector)
    }
}
