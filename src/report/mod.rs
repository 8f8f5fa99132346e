mod terminal;
mod json;

pub use terminal::TerminalReporter;
pub use json::JsonReporter;

use crate::rewrite::{FileReport, RunSummary};
use miette::Result;
use std::path::PathBuf;

/// Output format for reports
#[derive(Debug, Clone, Default)]
pub enum ReportFormat {
    #[default]
    Terminal,
    Json,
}

/// Reporter for per-file results and the run summary
pub enum Reporter {
    Terminal(TerminalReporter),
    Json(JsonReporter),
}

impl Reporter {
    pub fn new(format: ReportFormat, output_path: Option<PathBuf>, quiet: bool) -> Self {
        match format {
            ReportFormat::Terminal => Reporter::Terminal(TerminalReporter::new().with_files(!quiet)),
            ReportFormat::Json => Reporter::Json(JsonReporter::new(output_path)),
        }
    }

    /// Called once per file, as soon as its outcome is known
    pub fn file(&mut self, report: &FileReport) {
        match self {
            Reporter::Terminal(reporter) => reporter.print_file(report),
            Reporter::Json(reporter) => reporter.record(report),
        }
    }

    /// Called once after the last file
    pub fn finish(&self, summary: &RunSummary) -> Result<()> {
        match self {
            Reporter::Terminal(reporter) => {
                reporter.print_summary(summary);
                Ok(())
            }
            Reporter::Json(reporter) => reporter.finish(summary),
        }
    }
}
