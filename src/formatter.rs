//! Output formatters for annotation reports.
//!
//! This module provides trait-based formatters for rendering a run's
//! annotation log and summary in human-readable or JSON form.

use crate::types::{AnnotationReport, LogLine, Summary};
use std::path::Path;

/// Trait for formatting annotation reports.
///
/// Implementors render each part of a report, plus the complete report.
pub trait ReportFormatter {
    /// Format the listing header.
    fn format_header(&self, report: &AnnotationReport, path: &Path) -> Option<String>;

    /// Format the per-instruction annotation log.
    fn format_log(&self, log: &[LogLine]) -> Option<String>;

    /// Format the categorized summary.
    fn format_summary(&self, summary: &Summary) -> Option<String>;

    /// Format the complete report.
    ///
    /// Default implementation concatenates all component outputs.
    fn format_report(&self, report: &AnnotationReport, path: &Path) -> String {
        [
            self.format_header(report, path),
            self.format_log(&report.log),
            self.format_summary(&report.summary),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// Human-readable output formatter.
#[derive(Debug, Clone, Default)]
pub struct HumanFormatter {
    /// Show the listing header
    pub verbose: bool,
    /// Quiet mode (summary only)
    pub quiet: bool,
}

impl HumanFormatter {
    /// Create a new human formatter with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a verbose formatter.
    pub fn verbose() -> Self {
        Self {
            verbose: true,
            quiet: false,
        }
    }

    /// Create a quiet formatter.
    pub fn quiet() -> Self {
        Self {
            verbose: false,
            quiet: true,
        }
    }
}

impl ReportFormatter for HumanFormatter {
    fn format_header(&self, report: &AnnotationReport, path: &Path) -> Option<String> {
        if !self.verbose || self.quiet {
            return None;
        }
        Some(format!(
            "Listing: {} ({}, {} heads, {} system instructions)\n",
            path.display(),
            report.mode,
            report.heads,
            report.system_instructions
        ))
    }

    fn format_log(&self, log: &[LogLine]) -> Option<String> {
        if self.quiet || log.is_empty() {
            return None;
        }
        Some(log.iter().map(|line| format!("{}\n", line)).collect())
    }

    fn format_summary(&self, summary: &Summary) -> Option<String> {
        let mut s = String::from("SUMMARY:\n");
        for (category, locations) in summary.iter() {
            if locations.is_empty() {
                continue;
            }
            let locations: Vec<_> = locations.iter().map(ToString::to_string).collect();
            s.push_str(&format!(
                "  {:<24}: {}\n",
                category.name(),
                locations.join(", ")
            ));
        }
        Some(s)
    }
}

/// JSON output formatter.
#[derive(Debug, Clone)]
pub struct JsonFormatter {
    /// Pretty-print JSON
    pub pretty: bool,
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl JsonFormatter {
    /// Create a new JSON formatter with pretty printing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a compact JSON formatter.
    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

impl ReportFormatter for JsonFormatter {
    fn format_header(&self, _report: &AnnotationReport, _path: &Path) -> Option<String> {
        None // Handled in format_report
    }

    fn format_log(&self, _log: &[LogLine]) -> Option<String> {
        None // Handled in format_report
    }

    fn format_summary(&self, _summary: &Summary) -> Option<String> {
        None // Handled in format_report
    }

    fn format_report(&self, report: &AnnotationReport, path: &Path) -> String {
        #[derive(serde::Serialize)]
        struct JsonOutput<'a> {
            listing: String,
            #[serde(flatten)]
            report: &'a AnnotationReport,
        }

        let output = JsonOutput {
            listing: path.display().to_string(),
            report,
        };

        let mut json = if self.pretty {
            serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
        } else {
            serde_json::to_string(&output).unwrap_or_else(|_| "{}".to_string())
        };
        json.push('\n');
        json
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ArchMode, Location, SummaryCategory};
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn sample_report() -> AnnotationReport {
        let mut summary = Summary::new();
        summary.record(
            SummaryCategory::PageTable,
            Location::Offset {
                function: "mmu_init".to_string(),
                offset: 0x10,
            },
        );
        summary.record(SummaryCategory::PageTable, Location::Address(0x8000));
        summary.record(
            SummaryCategory::Cryptography,
            Location::Function("aes_block".to_string()),
        );
        AnnotationReport {
            mode: ArchMode::Aarch32,
            heads: 12,
            system_instructions: 3,
            log: vec![LogLine {
                address: 0x1010,
                text: "[>] TTBR0 (Translation Table Base Register 0)".to_string(),
            }],
            summary,
        }
    }

    #[test]
    fn test_human_formatter() {
        let output = HumanFormatter::new().format_report(&sample_report(), &PathBuf::from("fw.json"));
        let expected = "\
1010: [>] TTBR0 (Translation Table Base Register 0)
SUMMARY:
  Page table              : mmu_init+0x10, 0x8000
  Cryptography            : aes_block
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_human_formatter_verbose_and_quiet() {
        let path = PathBuf::from("fw.json");
        let verbose = HumanFormatter::verbose().format_report(&sample_report(), &path);
        assert!(verbose.starts_with("Listing: fw.json (aarch32, 12 heads, 3 system instructions)\n"));

        let quiet = HumanFormatter::quiet().format_report(&sample_report(), &path);
        assert!(!quiet.contains("1010:"));
        assert!(quiet.starts_with("SUMMARY:\n"));
    }

    #[test]
    fn test_empty_summary() {
        let mut report = sample_report();
        report.summary = Summary::new();
        report.log.clear();
        let output = HumanFormatter::new().format_report(&report, &PathBuf::from("fw.json"));
        assert_eq!(output, "SUMMARY:\n");
    }

    #[test]
    fn test_json_formatter() {
        let output = JsonFormatter::new().format_report(&sample_report(), &PathBuf::from("fw.json"));

        assert!(output.contains("\"listing\": \"fw.json\""));
        assert!(output.contains("\"mode\": \"aarch32\""));
        assert!(output.contains("\"Page table\": ["));
        assert!(output.contains("\"mmu_init+0x10\""));

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["summary"]["Cryptography"][0], "aes_block");
        assert_eq!(value["log"][0]["address"], 0x1010);
    }

    #[test]
    fn test_json_compact() {
        let output = JsonFormatter::compact().format_report(&sample_report(), &PathBuf::from("fw.json"));
        assert_eq!(output.lines().count(), 1);
    }
}
