//! JSON reporter — the report structure, pretty-printed.

use ascent_core::errors::ReportError;

use super::types::AssessmentReport;
use super::Reporter;

/// Machine-readable JSON output.
pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, report: &AssessmentReport) -> Result<String, ReportError> {
        serde_json::to_string_pretty(report).map_err(|e| ReportError::Serialization {
            message: e.to_string(),
        })
    }
}
