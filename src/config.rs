//! Generator configuration.
//!
//! Loads an optional `maven-tree.toml` from the project root. Every key is
//! optional and falls back to its default; unknown keys are rejected to catch
//! typos early.
//!
//! ## Config File Location
//!
//! ```text
//! project/
//! ├── maven-tree.toml          # Optional, overrides stock defaults
//! ├── repository/              # Input: the Maven repository tree
//! │   └── com/example/foo/1.0/foo-1.0.pom
//! └── public/
//!     └── tree-data/           # Output: tree.json + one manifest per version
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! repository_dir = "repository"    # Input root, relative to the project
//! output_dir = "public/tree-data"  # Output directory, relative to the project
//! tree_file = "tree.json"          # Aggregate tree record name
//! root_label = "repository"        # Name of the root node in the tree
//! prune_stale = false              # Delete manifests of vanished versions
//! ```
//!
//! Absolute paths in `repository_dir` and `output_dir` are used as-is.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the config file looked up in the project root.
pub const CONFIG_FILE: &str = "maven-tree.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Generator configuration loaded from `maven-tree.toml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Root of the Maven repository tree to index.
    pub repository_dir: String,
    /// Directory receiving the tree file and the version manifests.
    pub output_dir: String,
    /// File name of the aggregate tree record inside `output_dir`.
    pub tree_file: String,
    /// Name given to the root node of the tree.
    pub root_label: String,
    /// Remove manifests in `output_dir` that this run did not produce.
    pub prune_stale: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            repository_dir: "repository".to_string(),
            output_dir: "public/tree-data".to_string(),
            tree_file: "tree.json".to_string(),
            root_label: "repository".to_string(),
            prune_stale: false,
        }
    }
}

impl GeneratorConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.repository_dir.trim().is_empty() {
            return Err(ConfigError::Validation(
                "repository_dir must not be empty".into(),
            ));
        }
        if self.output_dir.trim().is_empty() {
            return Err(ConfigError::Validation(
                "output_dir must not be empty".into(),
            ));
        }
        if self.root_label.is_empty() {
            return Err(ConfigError::Validation(
                "root_label must not be empty".into(),
            ));
        }
        if !self.tree_file.ends_with(".json") {
            return Err(ConfigError::Validation(
                "tree_file must end in .json".into(),
            ));
        }
        if self.tree_file.contains(['/', '\\']) {
            return Err(ConfigError::Validation(
                "tree_file must be a bare file name".into(),
            ));
        }
        Ok(())
    }

    /// Repository root resolved against the project directory.
    pub fn repository_path(&self, project: &Path) -> PathBuf {
        project.join(&self.repository_dir)
    }

    /// Output directory resolved against the project directory.
    pub fn output_path(&self, project: &Path) -> PathBuf {
        project.join(&self.output_dir)
    }
}

/// Parse config text, filling absent keys with defaults, and validate it.
pub fn parse_config(content: &str) -> Result<GeneratorConfig, ConfigError> {
    let config: GeneratorConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Load the generator config for a project directory.
///
/// A missing `maven-tree.toml` yields the defaults.
pub fn load_config(project: &Path) -> Result<GeneratorConfig, ConfigError> {
    let config_path = project.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(GeneratorConfig::default());
    }
    parse_config(&fs::read_to_string(&config_path)?)
}

/// Returns a fully-commented stock `maven-tree.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# maven-tree configuration
# ========================
# All settings are optional. Values shown below are the defaults.
# Relative paths resolve against the directory holding this file.
# Unknown keys will cause an error.

# Root of the Maven repository to index (groupId/artifactId/version layout).
repository_dir = "repository"

# Where tree.json and the per-version manifests are written.
# Created if missing.
output_dir = "public/tree-data"

# File name of the aggregate tree record inside output_dir.
tree_file = "tree.json"

# Name of the root node in tree.json.
root_label = "repository"

# Delete manifests in output_dir for versions no longer in the repository.
# Off by default: orphan manifests are left in place and the tree is the
# only authority on which versions exist.
prune_stale = false
"##
}
