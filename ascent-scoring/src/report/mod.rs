//! Reporters — output formats for assessment results.

pub mod console;
pub mod json;
pub mod types;

pub use types::AssessmentReport;

use ascent_core::errors::ReportError;

/// Trait for report generation.
pub trait Reporter: Send + Sync {
    fn name(&self) -> &'static str;
    fn generate(&self, report: &AssessmentReport) -> Result<String, ReportError>;
}

/// Create a reporter by format name.
pub fn create_reporter(format: &str) -> Option<Box<dyn Reporter>> {
    match format {
        "json" => Some(Box::new(json::JsonReporter)),
        "console" => Some(Box::new(console::ConsoleReporter)),
        _ => None,
    }
}

/// List all available reporter format names.
pub fn available_formats() -> &'static [&'static str] {
    &["json", "console"]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_knows_every_listed_format() {
        for format in available_formats() {
            let reporter = create_reporter(format).unwrap();
            assert_eq!(reporter.name(), *format);
        }
        assert!(create_reporter("sarif").is_none());
    }
}
