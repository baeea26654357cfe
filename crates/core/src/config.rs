//! Configuration for report output and logging.
//!
//! Config priority: project-relative (.creatorrank.toml) > user (~/.config/creatorrank/config.toml) > defaults.
//! Scoring weights live in [`crate::scoring`] and are not configurable.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project-relative config file name
pub const PROJECT_CONFIG_FILE: &str = ".creatorrank.toml";

// ============================================================================
// Report Configuration
// ============================================================================

/// Console and export settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
  /// Creators shown in the console ranking (default: 10)
  pub top_n: usize,

  /// Items shown in the profile "top content" listing (default: 5)
  pub top_items: usize,

  /// Directory CSV exports are written to (default: ".")
  pub output_dir: PathBuf,

  /// Prefix CSV files with a UTF-8 byte-order mark for spreadsheet tools (default: true)
  pub write_bom: bool,
}

impl Default for ReportConfig {
  fn default() -> Self {
    Self {
      top_n: 10,
      top_items: 5,
      output_dir: PathBuf::from("."),
      write_bom: true,
    }
  }
}

// ============================================================================
// Logging Configuration
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
  /// Log level: error, warn, info, debug, trace (default: info). RUST_LOG overrides.
  pub level: String,
}

impl Default for LoggingConfig {
  fn default() -> Self {
    Self {
      level: "info".to_string(),
    }
  }
}

// ============================================================================
// Main Configuration
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  #[serde(default)]
  pub report: ReportConfig,

  #[serde(default)]
  pub logging: LoggingConfig,
}

impl Config {
  /// Load config for a working directory, with fallback to user config.
  ///
  /// Unreadable or unparseable files fall through to the next source.
  pub fn load_for_dir(dir: &Path) -> Self {
    let project_config = Self::project_config_path(dir);
    if project_config.exists()
      && let Ok(config) = Self::load_file(&project_config)
    {
      return config;
    }

    if let Some(user_config_path) = Self::user_config_path()
      && user_config_path.exists()
      && let Ok(config) = Self::load_file(&user_config_path)
    {
      return config;
    }

    Self::default()
  }

  /// Load a single config file, surfacing parse errors
  pub fn load_file(path: &Path) -> Result<Self> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
  }

  /// Get the user-level config path
  pub fn user_config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
      return Some(PathBuf::from(path).join("creatorrank").join("config.toml"));
    }

    dirs::config_dir().map(|p: PathBuf| p.join("creatorrank").join("config.toml"))
  }

  /// Get the project-relative config path
  pub fn project_config_path(dir: &Path) -> PathBuf {
    dir.join(PROJECT_CONFIG_FILE)
  }

  /// Generate a default config file as a string
  pub fn generate_template() -> String {
    let defaults = ReportConfig::default();
    format!(
      r#"# creatorrank configuration
# Place in ./{project_file} (project) or ~/.config/creatorrank/config.toml (user)
#
# Scoring weights are fixed and cannot be configured:
#   engagement = likes*1 + shares*3 + comments*2 + collects*4
#   composite  = sum*0.4 + mean*0.3 + items*1000 + max*0.3

# ============================================================================
# Reports
# ============================================================================

[report]
# Creators listed in the console ranking
top_n = {top_n}

# Items listed under "top content" in profile reports
top_items = {top_items}

# Where CSV exports are written
output_dir = "."

# UTF-8 byte-order mark at the start of CSV files (helps spreadsheet tools)
write_bom = {write_bom}

# ============================================================================
# Logging
# ============================================================================

[logging]
# error, warn, info, debug, trace (RUST_LOG takes precedence)
level = "info"
"#,
      project_file = PROJECT_CONFIG_FILE,
      top_n = defaults.top_n,
      top_items = defaults.top_items,
      write_bom = defaults.write_bom,
    )
  }
}
