//! File rewrite driver
//!
//! Reads each discovered file, strips it, and writes it back only when the
//! text changed. Per-file failures become [`FileOutcome`]s; they never stop
//! the run.

mod writer;

pub use writer::write_contents;

use crate::config::RewriteConfig;
use crate::discovery::SourceFile;
use crate::error::StripError;
use crate::strip::RuleSet;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// Terminal state of one file
#[derive(Debug)]
pub enum FileOutcome {
    /// Content changed and was written back
    Written { removed: usize },
    /// Content would change; dry run, nothing written
    WouldWrite { removed: usize },
    /// Nothing to strip; no write
    Unchanged,
    /// Could not be read or decoded
    ReadFailed(StripError),
    /// Stripped in memory but the write did not take effect
    WriteFailed(StripError),
}

impl FileOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, FileOutcome::ReadFailed(_) | FileOutcome::WriteFailed(_))
    }
}

/// Result of processing a single file
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: FileOutcome,
}

/// Counters accumulated across a run
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Files handed to the driver
    pub discovered: usize,
    /// Files written back (or that would be, in a dry run)
    pub updated: usize,
    pub unchanged: usize,
    pub read_failed: usize,
    pub write_failed: usize,
    /// Lines removed across all updated files
    pub lines_removed: usize,
    pub dry_run: bool,
    pub elapsed_ms: u64,
}

impl RunSummary {
    pub fn record(&mut self, outcome: &FileOutcome) {
        self.discovered += 1;
        match outcome {
            FileOutcome::Written { removed } | FileOutcome::WouldWrite { removed } => {
                self.updated += 1;
                self.lines_removed += removed;
            }
            FileOutcome::Unchanged => self.unchanged += 1,
            FileOutcome::ReadFailed(_) => self.read_failed += 1,
            FileOutcome::WriteFailed(_) => self.write_failed += 1,
        }
    }

    pub fn failures(&self) -> usize {
        self.read_failed + self.write_failed
    }

    pub fn has_failures(&self) -> bool {
        self.failures() > 0
    }
}

/// Applies a rule set to files on disk
pub struct Rewriter<'a> {
    rules: &'a RuleSet,
    options: RewriteConfig,
}

impl<'a> Rewriter<'a> {
    pub fn new(rules: &'a RuleSet, options: RewriteConfig) -> Self {
        Self { rules, options }
    }

    /// Read, strip and conditionally rewrite one file
    pub fn process_file(&self, file: &SourceFile) -> FileReport {
        let outcome = match file.read_contents() {
            Ok(original) => self.rewrite(&file.path, &original),
            Err(e) => FileOutcome::ReadFailed(e),
        };

        debug!("{}: {:?}", file.path.display(), outcome);
        FileReport {
            path: file.path.clone(),
            outcome,
        }
    }

    /// Strip `original` (the content currently at `path`) and write the
    /// result back if it differs
    pub fn rewrite(&self, path: &Path, original: &str) -> FileOutcome {
        let (stripped, counts) = self.rules.strip_counted(original);
        if stripped == original {
            return FileOutcome::Unchanged;
        }

        let removed: usize = counts.iter().map(|(_, n)| n).sum();

        if self.options.dry_run {
            return FileOutcome::WouldWrite { removed };
        }

        match write_contents(path, &stripped, self.options.atomic_write) {
            Ok(()) => FileOutcome::Written { removed },
            Err(e) => FileOutcome::WriteFailed(e),
        }
    }

    /// Process every file in order, handing each report to `on_report` as
    /// soon as it is known
    pub fn run<F>(&self, files: &[SourceFile], mut on_report: F) -> RunSummary
    where
        F: FnMut(&FileReport),
    {
        let start = Instant::now();
        let mut summary = RunSummary {
            dry_run: self.options.dry_run,
            ..RunSummary::default()
        };

        for file in files {
            let report = self.process_file(file);
            summary.record(&report.outcome);
            on_report(&report);
        }

        summary.elapsed_ms = start.elapsed().as_millis() as u64;
        info!(
            "Processed {} files: {} updated, {} unchanged, {} failed",
            summary.discovered,
            summary.updated,
            summary.unchanged,
            summary.failures()
        );
        summary
    }
}
