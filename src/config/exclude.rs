use crate::error::{Result, StripError};
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use std::path::Path;

/// Compiled exclusion patterns.
///
/// A pattern without `/` (`Foo.java`, `*Test*`) matches the file name. A
/// pattern with `/` (`build/**`, `**/generated/**`) matches the path relative
/// to the root being walked, or the full path. `*` never crosses a `/`.
#[derive(Debug, Clone)]
pub struct ExcludeSet {
    by_name: GlobSet,
    by_path: GlobSet,
}

impl ExcludeSet {
    pub fn new(patterns: &[String]) -> Result<Self> {
        let mut by_name = GlobSetBuilder::new();
        let mut by_path = GlobSetBuilder::new();

        for pattern in patterns {
            let glob = GlobBuilder::new(pattern)
                .literal_separator(true)
                .build()
                .map_err(|source| StripError::Exclude {
                    pattern: pattern.clone(),
                    source,
                })?;
            if pattern.contains('/') {
                by_path.add(glob);
            } else {
                by_name.add(glob);
            }
        }

        let build = |builder: GlobSetBuilder| {
            builder.build().map_err(|source| StripError::Exclude {
                pattern: patterns.join(", "),
                source,
            })
        };

        Ok(Self {
            by_name: build(by_name)?,
            by_path: build(by_path)?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty() && self.by_path.is_empty()
    }

    /// Check whether `path`, found while walking `root`, is excluded
    pub fn is_excluded(&self, path: &Path, root: &Path) -> bool {
        if let Some(name) = path.file_name() {
            if self.by_name.is_match(name) {
                return true;
            }
        }

        let relative = path.strip_prefix(root).unwrap_or(path);
        self.by_path.is_match(relative) || self.by_path.is_match(path)
    }
}
