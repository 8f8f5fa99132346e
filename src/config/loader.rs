use super::ExcludeSet;
use crate::strip::Profile;
use miette::{IntoDiagnostic, Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for a stripping run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root directories to scan, in order
    pub roots: Vec<PathBuf>,

    /// File extension to process, without the leading dot
    pub extension: String,

    /// Patterns to exclude from discovery
    pub exclude: Vec<String>,

    /// Which removal rules to apply
    pub profile: Profile,

    /// Honour .gitignore / .ignore files while walking
    pub respect_gitignore: bool,

    /// Rewrite options
    pub rewrite: RewriteConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RewriteConfig {
    /// Write through a sibling temp file and rename over the target
    pub atomic_write: bool,

    /// Report what would change without touching any file
    pub dry_run: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roots: vec![PathBuf::from("src")],
            extension: "java".to_string(),
            exclude: vec![],
            profile: Profile::default(),
            respect_gitignore: false,
            rewrite: RewriteConfig::default(),
        }
    }
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            atomic_write: true,
            dry_run: false,
        }
    }
}

impl Config {
    /// Load configuration from a file (YAML or TOML)
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to read config file: {}", path.display()))?;

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        match extension {
            "yml" | "yaml" => serde_yaml::from_str(&contents)
                .into_diagnostic()
                .wrap_err("Failed to parse YAML config"),
            "toml" => toml::from_str(&contents)
                .into_diagnostic()
                .wrap_err("Failed to parse TOML config"),
            _ => {
                if let Ok(config) = serde_yaml::from_str(&contents) {
                    Ok(config)
                } else {
                    toml::from_str(&contents)
                        .into_diagnostic()
                        .wrap_err("Failed to parse config file")
                }
            }
        }
    }

    /// Try to load configuration from default locations under `dir`
    pub fn from_default_locations(dir: &Path) -> Result<Self> {
        let default_names = [
            ".lombok-strip.yml",
            ".lombok-strip.yaml",
            ".lombok-strip.toml",
        ];

        for name in &default_names {
            let path = dir.join(name);
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Compile the exclusion patterns
    pub fn exclude_set(&self) -> crate::error::Result<ExcludeSet> {
        ExcludeSet::new(&self.exclude)
    }

    /// True when the file name carries the configured extension
    pub fn matches_extension(&self, path: &Path) -> bool {
        let suffix = format!(".{}", self.extension.trim_start_matches('.'));
        path.file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.ends_with(&suffix))
            .unwrap_or(false)
    }
}
