use crate::config::{Config, ExcludeSet};
use crate::error::{Result, StripError};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};
use walkdir::WalkDir;

/// A discovered source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
}

impl SourceFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read the file and decode it as UTF-8
    pub fn read_contents(&self) -> Result<String> {
        let bytes = std::fs::read(&self.path).map_err(|source| StripError::Read {
            path: self.path.clone(),
            source,
        })?;
        String::from_utf8(bytes).map_err(|source| StripError::Decode {
            path: self.path.clone(),
            source,
        })
    }
}

/// File finder for discovering source files under the configured roots
pub struct FileFinder<'a> {
    config: &'a Config,
}

impl<'a> FileFinder<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Find every matching file under all configured roots.
    ///
    /// Roots are walked in configuration order. Within a root the order is
    /// whatever the directory traversal yields. Missing roots contribute no
    /// files; a root that exists but cannot be listed is an error, and so
    /// is an exclude pattern that does not compile.
    pub fn find_files(&self) -> Result<Vec<SourceFile>> {
        let excludes = self.config.exclude_set()?;
        let mut files = Vec::new();
        for root in &self.config.roots {
            files.extend(self.scan_root(root, &excludes)?);
        }

        debug!("Found {} files", files.len());
        Ok(files)
    }

    /// Scan a single root for matching files
    fn scan_root(&self, root: &Path, excludes: &ExcludeSet) -> Result<Vec<SourceFile>> {
        if !root.exists() {
            trace!("Root does not exist: {}", root.display());
            return Ok(Vec::new());
        }

        if root.is_dir() {
            std::fs::read_dir(root).map_err(|e| StripError::Discovery {
                path: root.to_path_buf(),
                message: e.to_string(),
            })?;
        }

        debug!("Scanning for files in: {}", root.display());

        let paths = if self.config.respect_gitignore {
            self.walk_with_ignore(root)
        } else {
            self.walk_all(root)
        };

        Ok(paths
            .into_iter()
            .filter(|path| self.accept(path, root, excludes))
            .map(SourceFile::new)
            .collect())
    }

    /// Walk everything, hidden directories included, without following links
    fn walk_all(&self, root: &Path) -> Vec<PathBuf> {
        WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!("Skipping unreadable entry: {}", e);
                    None
                }
            })
            .filter(|entry| {
                if entry.path_is_symlink() {
                    debug!("Skipping symlink: {}", entry.path().display());
                    return false;
                }
                entry.file_type().is_file()
            })
            .map(|entry| entry.into_path())
            .collect()
    }

    /// Walk honouring .gitignore, .ignore and hidden-file rules
    fn walk_with_ignore(&self, root: &Path) -> Vec<PathBuf> {
        let walker = WalkBuilder::new(root)
            .hidden(true)           // Skip hidden files
            .git_ignore(true)       // Respect .gitignore
            .git_global(true)       // Respect global gitignore
            .git_exclude(true)      // Respect .git/info/exclude
            .ignore(true)           // Respect .ignore files
            .parents(true)          // Check parent directories for ignore files
            .follow_links(false)    // Don't follow symlinks
            .build();

        walker
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!("Skipping unreadable entry: {}", e);
                    None
                }
            })
            .filter(|entry| {
                if entry.path_is_symlink() {
                    debug!("Skipping symlink: {}", entry.path().display());
                    return false;
                }
                entry.file_type().map(|t| t.is_file()).unwrap_or(false)
            })
            .map(|entry| entry.into_path())
            .collect()
    }

    fn accept(&self, path: &Path, root: &Path, excludes: &ExcludeSet) -> bool {
        if !self.config.matches_extension(path) {
            return false;
        }
        if excludes.is_excluded(path, root) {
            trace!("Excluding: {}", path.display());
            return false;
        }
        trace!("Found: {}", path.display());
        true
    }
}
