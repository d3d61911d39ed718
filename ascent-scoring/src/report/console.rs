//! Console reporter — human-readable dashboard output.

use ascent_core::errors::ReportError;

use super::types::AssessmentReport;
use super::Reporter;

/// Human-readable terminal output. The enforcement audit gets its own
/// section rather than being folded into the totals.
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn name(&self) -> &'static str {
        "console"
    }

    fn generate(&self, report: &AssessmentReport) -> Result<String, ReportError> {
        let mut output = String::new();

        output.push_str("╔══════════════════════════════════════════╗\n");
        output.push_str("║         Ascent Performance Report        ║\n");
        output.push_str("╚══════════════════════════════════════════╝\n\n");

        output.push_str(&format!("Date: {}\n", report.score_date));
        output.push_str(&format!("Global Score: {:.4}\n", report.global.global_score));
        output.push_str(&format!("Milestone: {}\n", report.milestone));
        output.push_str(&format!("Synergy Bonus: {:.4}\n", report.global.synergy_bonus));
        output.push_str(&format!(
            "Evolution Rate: {:.1}%\n",
            report.global.evolution_rate * 100.0
        ));
        output.push_str(&format!(
            "Daily Improvement: {:+.3}%\n",
            report.global.daily_improvement_pct
        ));

        output.push_str("\nEnvironments:\n");
        for (environment, record) in &report.per_environment {
            output.push_str(&format!(
                "  {:<12} {:.3} ({}) {:+.4}\n",
                environment,
                record.overall_score,
                record.trend.as_str(),
                record.improvement_from_previous,
            ));
        }

        output.push_str(&format!(
            "\nTrend: {} over {} days (signed {:+.4})\n",
            report.trend.direction.as_str(),
            report.trend.days_analyzed,
            report.trend.signed_improvement,
        ));
        output.push_str(&format!(
            "Consecutive Improvement Days: {}\n",
            report.rolling.consecutive_improvement_days
        ));

        // Audit section: synthetic bumps are never hidden.
        let adjusted = report.adjusted_count();
        let audited = report.audited_count();
        if audited == 0 {
            output.push_str("\nEnforcement Audit: baseline cycle, no prior history\n");
        } else {
            output.push_str(&format!(
                "\nEnforcement Audit: {adjusted} of {audited} metrics synthetically adjusted\n"
            ));
            for entry in report.adjustments.iter().filter(|entry| entry.adjusted) {
                // Stored value = raw + adjustment = previous + min_step.
                output.push_str(&format!(
                    "  {}/{}: raw {:.3} -> stored {:.3} (prev {:.3}, +{:.3})\n",
                    entry.environment,
                    entry.field.as_str(),
                    entry.raw_value,
                    entry.raw_value + entry.adjustment,
                    entry.previous_value,
                    entry.adjustment,
                ));
            }
        }

        output.push_str(&format!("\nHighlights: {}\n", report.global.highlights));
        output.push_str(&format!(
            "Optimization Areas: {}\n",
            report.global.optimizations
        ));

        Ok(output)
    }
}
