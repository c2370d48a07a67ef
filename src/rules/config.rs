//! Configuration file schema.
//!
//! A config file wraps a [`RuleSet`] together with the settings that only
//! matter when scanning files from the command line.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::RuleSet;

/// Config file names searched for in the working directory.
pub const DEFAULT_CONFIG_NAMES: &[&str] = &["talkhuman.yaml", ".talkhuman.yaml"];

/// The config written by `talkhuman init`. Mirrors the built-in defaults.
pub const DEFAULT_TEMPLATE: &str = include_str!("../templates/talkhuman.yaml");

const DEFAULT_EXTENSIONS: &[&str] = &["md", "markdown", "txt", "rst"];

/// Top-level config definition.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub version: String,
    /// Maximum acceptable slop score before `check` fails
    #[serde(default)]
    pub threshold: Option<i32>,
    /// File extensions scanned when a directory is given (without the dot)
    #[serde(default)]
    pub extensions: Vec<String>,
    /// Glob patterns for paths to skip (e.g., "**/drafts/**")
    #[serde(default)]
    pub excluded_paths: Vec<String>,
    #[serde(default)]
    pub rules: RuleSet,
}

impl Config {
    /// Parse a config from a YAML file.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        let mut config: Config = serde_yaml::from_str(content)?;
        config.rules = config.rules.normalized();
        Ok(config)
    }

    /// Extensions to scan, falling back to common prose formats.
    pub fn scan_extensions(&self) -> Vec<String> {
        if self.extensions.is_empty() {
            DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect()
        } else {
            self.extensions
                .iter()
                .map(|e| e.trim_start_matches('.').to_lowercase())
                .collect()
        }
    }

    /// Check if a path should be excluded based on excluded_paths patterns.
    pub fn is_path_excluded(&self, path: &Path) -> bool {
        if self.excluded_paths.is_empty() {
            return false;
        }

        let path_str = path.to_string_lossy();

        self.excluded_paths.iter().any(|pattern| {
            globset::Glob::new(pattern)
                .map(|glob| glob.compile_matcher().is_match(&*path_str))
                .unwrap_or(false)
        })
    }

    /// Validate the config and the rule set it carries.
    pub fn validate(&self) -> anyhow::Result<()> {
        if let Some(threshold) = self.threshold {
            if !(0..=100).contains(&threshold) {
                anyhow::bail!("threshold must be between 0 and 100, got {}", threshold);
            }
        }

        for pattern in &self.excluded_paths {
            globset::Glob::new(pattern).map_err(|e| {
                anyhow::anyhow!("invalid excluded_paths pattern {:?}: {}", pattern, e)
            })?;
        }

        super::validate(&self.rules)?;
        Ok(())
    }
}

/// Find a config file: working directory first, then the user config dir.
pub fn discover_config() -> Option<PathBuf> {
    for name in DEFAULT_CONFIG_NAMES {
        let path = PathBuf::from(name);
        if path.exists() {
            return Some(path);
        }
    }

    ProjectDirs::from("", "", "talkhuman")
        .map(|dirs| dirs.config_dir().join("talkhuman.yaml"))
        .filter(|p| p.exists())
}
