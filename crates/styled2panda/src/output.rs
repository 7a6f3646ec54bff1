//! Report formatting.

use crate::cli::OutputFormat;
use crate::driver::RunSummary;

/// Formats the run summary for output.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats the summary and its per-declaration records.
    pub fn format(&self, summary: &RunSummary) -> String {
        match self.format {
            OutputFormat::Human => Self::format_human(summary),
            OutputFormat::Json => Self::format_json(summary),
        }
    }

    fn format_human(summary: &RunSummary) -> String {
        let mut output = String::new();

        for report in &summary.reports {
            output.push_str(&format!(
                "{}:{} {} {}\n",
                report.file,
                report.line,
                report.declaration,
                report.status.describe()
            ));
        }

        if !summary.reports.is_empty() {
            output.push('\n');
        }
        output.push_str(&format!(
            "{} rewritten, {} skipped, {} failed across {} files ({} changed)\n",
            summary.rewritten,
            summary.skipped,
            summary.failed,
            summary.files_scanned,
            summary.files_changed
        ));

        output
    }

    fn format_json(summary: &RunSummary) -> String {
        serde_json::to_string_pretty(summary).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::{DeclarationReport, RewriteStatus};

    fn sample_summary() -> RunSummary {
        RunSummary {
            files_scanned: 2,
            files_changed: 1,
            rewritten: 1,
            skipped: 1,
            failed: 0,
            reports: vec![
                DeclarationReport {
                    file: "src/Button.tsx".to_string(),
                    declaration: "Button".to_string(),
                    line: 4,
                    status: RewriteStatus::Rewritten,
                },
                DeclarationReport {
                    file: "src/Card.tsx".to_string(),
                    declaration: "Card".to_string(),
                    line: 9,
                    status: RewriteStatus::SkippedTemplateExpressions,
                },
            ],
        }
    }

    #[test]
    fn human_output_lists_declarations_and_summary() {
        let output = Formatter::new(OutputFormat::Human).format(&sample_summary());
        assert!(output.contains("src/Button.tsx:4 Button rewritten"));
        assert!(output.contains("src/Card.tsx:9 Card skipped (template contains expressions)"));
        assert!(output.contains("1 rewritten, 1 skipped, 0 failed across 2 files (1 changed)"));
    }

    #[test]
    fn human_output_for_empty_run_is_just_the_summary() {
        let output = Formatter::new(OutputFormat::Human).format(&RunSummary::default());
        assert_eq!(
            output,
            "0 rewritten, 0 skipped, 0 failed across 0 files (0 changed)\n"
        );
    }

    #[test]
    fn json_output_round_trips() {
        let output = Formatter::new(OutputFormat::Json).format(&sample_summary());
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["rewritten"], 1);
        assert_eq!(value["reports"][0]["declaration"], "Button");
        assert_eq!(value["reports"][1]["status"]["kind"], "skipped-template-expressions");
    }
}
