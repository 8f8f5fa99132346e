//! lombok-strip - Remove Lombok annotations and imports from Java sources
//!
//! The run is a straight pipeline:
//! 1. **File Discovery** - Find every `.java` file under the configured roots
//! 2. **Stripping** - Apply the ordered removal rules to each file's text
//! 3. **Rewrite** - Write the file back only if its text changed
//! 4. **Reporting** - One line per updated or failed file, then a summary

pub mod config;
pub mod discovery;
pub mod error;
pub mod report;
pub mod rewrite;
pub mod strip;

pub use config::Config;
pub use discovery::{FileFinder, SourceFile};
pub use error::StripError;
pub use report::{ReportFormat, Reporter};
pub use rewrite::{FileOutcome, FileReport, Rewriter, RunSummary};
pub use strip::{strip, Profile, RemovalRule, RuleSet};
