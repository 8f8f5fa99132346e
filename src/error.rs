use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while discovering, reading or rewriting source files.
///
/// `Read`, `Decode` and `Write` are per-file: the driver turns them into
/// outcomes and keeps going. `Discovery`, `Exclude` and `Pattern` abort the run.
#[derive(Error, Debug, Diagnostic)]
pub enum StripError {
    #[error("failed to read {}: {source}", .path.display())]
    #[diagnostic(code(lombok_strip::read))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid UTF-8: {source}", .path.display())]
    #[diagnostic(code(lombok_strip::decode))]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    #[diagnostic(code(lombok_strip::write))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot enumerate {}: {message}", .path.display())]
    #[diagnostic(
        code(lombok_strip::discovery),
        help("check that the root directory is readable")
    )]
    Discovery { path: PathBuf, message: String },

    #[error("invalid exclude pattern '{pattern}'")]
    #[diagnostic(
        code(lombok_strip::exclude),
        help("exclude patterns are globs such as '**/build/**' or '*Test.java'")
    )]
    Exclude {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("invalid removal pattern for rule '{rule}'")]
    #[diagnostic(code(lombok_strip::pattern))]
    Pattern {
        rule: String,
        #[source]
        source: regex::Error,
    },
}

pub type Result<T> = std::result::Result<T, StripError>;
