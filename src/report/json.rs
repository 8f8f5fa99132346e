use crate::rewrite::{FileOutcome, FileReport, RunSummary};
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use std::path::PathBuf;

/// JSON reporter for programmatic output
pub struct JsonReporter {
    output_path: Option<PathBuf>,
    files: Vec<JsonFile>,
}

impl JsonReporter {
    pub fn new(output_path: Option<PathBuf>) -> Self {
        Self {
            output_path,
            files: Vec::new(),
        }
    }

    /// Remember a file result; unchanged files are left out
    pub fn record(&mut self, report: &FileReport) {
        if let Some(file) = JsonFile::from_report(report) {
            self.files.push(file);
        }
    }

    pub fn finish(&self, summary: &RunSummary) -> Result<()> {
        let json = self.render(summary)?;

        if let Some(path) = &self.output_path {
            std::fs::write(path, &json).into_diagnostic()?;
            println!("Report written to: {}", path.display());
        } else {
            println!("{}", json);
        }

        Ok(())
    }

    pub fn render(&self, summary: &RunSummary) -> Result<String> {
        let report = JsonReport {
            version: env!("CARGO_PKG_VERSION"),
            summary,
            files: &self.files,
        };
        serde_json::to_string_pretty(&report).into_diagnostic()
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    version: &'static str,
    summary: &'a RunSummary,
    files: &'a [JsonFile],
}

#[derive(Serialize)]
struct JsonFile {
    path: String,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    lines_removed: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl JsonFile {
    fn from_report(report: &FileReport) -> Option<Self> {
        let (status, lines_removed, error) = match &report.outcome {
            FileOutcome::Unchanged => return None,
            FileOutcome::Written { removed } => ("updated", Some(*removed), None),
            FileOutcome::WouldWrite { removed } => ("would_update", Some(*removed), None),
            FileOutcome::ReadFailed(e) => ("read_failed", None, Some(e.to_string())),
            FileOutcome::WriteFailed(e) => ("write_failed", None, Some(e.to_string())),
        };

        Some(Self {
            path: report.path.display().to_string(),
            status,
            lines_removed,
            error,
        })
    }
}
