use crate::rewrite::{FileOutcome, FileReport, RunSummary};
use colored::Colorize;

/// Terminal reporter with colored output
pub struct TerminalReporter {
    /// Print the per-file lines, not just the summary
    show_files: bool,
}

impl TerminalReporter {
    pub fn new() -> Self {
        Self { show_files: true }
    }

    pub fn with_files(mut self, show: bool) -> Self {
        self.show_files = show;
        self
    }

    pub fn print_file(&self, report: &FileReport) {
        if !self.show_files {
            return;
        }
        if let Some(line) = self.format_file(report) {
            println!("{}", line);
        }
    }

    pub fn print_summary(&self, summary: &RunSummary) {
        println!();
        println!("{}", self.format_summary(summary));
        if summary.has_failures() {
            println!(
                "{}",
                format!(
                    "{} failed ({} read, {} write)",
                    summary.failures(),
                    summary.read_failed,
                    summary.write_failed
                )
                .red()
            );
        }
    }

    /// One line per updated or failed file; unchanged files print nothing
    pub fn format_file(&self, report: &FileReport) -> Option<String> {
        let path = report.path.display();
        match &report.outcome {
            FileOutcome::Unchanged => None,
            FileOutcome::Written { .. } => Some(format!("{} Updated: {}", "✓".green(), path)),
            FileOutcome::WouldWrite { removed } => Some(format!(
                "{} Would update: {} ({} lines)",
                "~".yellow(),
                path,
                removed
            )),
            FileOutcome::ReadFailed(e) | FileOutcome::WriteFailed(e) => {
                Some(format!("{} Error: {}: {}", "✗".red(), path, e))
            }
        }
    }

    pub fn format_summary(&self, summary: &RunSummary) -> String {
        let verb = if summary.dry_run { "Would update" } else { "Updated" };
        format!(
            "{} {} {} of {} files",
            "✓".green().bold(),
            verb,
            summary.updated,
            summary.discovered
        )
    }
}

impl Default for TerminalReporter {
    fn default() -> Self {
        Self::new()
    }
}
