//! Command implementations

mod config;
mod items;
mod profile;
mod rank;

pub use config::{cmd_config_init, cmd_config_show};
pub use items::cmd_items;
pub use profile::cmd_profile;
pub use rank::cmd_rank;

use anyhow::{Context, Result};
use extract::{Analysis, analyze};
use rank_core::{Config, Document, load_document};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Load and analyze a snapshot. Nothing is written until this succeeds.
fn load_and_analyze(input: &Path) -> Result<(Document, Analysis)> {
  let document = load_document(input).with_context(|| format!("Failed to load {}", input.display()))?;
  debug!(kind = ?document.kind, feeds = document.feeds.len(), "Loaded document");
  let analysis = analyze(&document).with_context(|| format!("Failed to analyze {}", input.display()))?;
  Ok((document, analysis))
}

/// `--output` if given, else the configured directory
fn output_dir(config: &Config, output: Option<PathBuf>) -> PathBuf {
  output.unwrap_or_else(|| config.report.output_dir.clone())
}
