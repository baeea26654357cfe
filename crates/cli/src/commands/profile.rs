//! `creatorrank profile`

use super::{load_and_analyze, output_dir};
use anyhow::Result;
use rank_core::Config;
use report::{ProfileReport, export, item_table, profile_items_path};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Deep-dive report on a profile snapshot, plus its per-item table
pub fn cmd_profile(config: &Config, input: &Path, output: Option<PathBuf>, no_export: bool) -> Result<()> {
  let (document, analysis) = load_and_analyze(input)?;
  if document.profile.is_none() {
    warn!(path = %input.display(), "No profile metadata in document, showing item analysis only");
  }

  let report = ProfileReport::from_analysis(document.profile.as_ref(), &analysis, config.report.top_items);
  print!("{}", report.as_str());

  if no_export {
    return Ok(());
  }

  let nickname = document
    .profile
    .as_ref()
    .map(|p| p.basic.nickname.as_str())
    .filter(|n| !n.is_empty())
    .or_else(|| analysis.ranking.leader().map(|l| l.aggregate.creator_name.as_str()))
    .unwrap_or_default();

  let path = profile_items_path(&output_dir(config, output), nickname);
  let path = export(&item_table(&analysis.items), &path, config.report.write_bom)?;
  println!("Exported: {}", path.display());

  Ok(())
}
