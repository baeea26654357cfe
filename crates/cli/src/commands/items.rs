//! `creatorrank items`

use super::{load_and_analyze, output_dir};
use anyhow::{Result, bail};
use rank_core::Config;
use report::{creator_items_path, export, item_table};
use std::path::{Path, PathBuf};

/// Export one creator's items, highest engagement first
pub fn cmd_items(config: &Config, input: &Path, creator_id: &str, output: Option<PathBuf>) -> Result<()> {
  let (_, analysis) = load_and_analyze(input)?;

  let Some(entry) = analysis.ranking.get(creator_id) else {
    bail!("Creator {} not found in {}", creator_id, input.display());
  };

  let items = analysis.items_for_creator(creator_id);
  let path = creator_items_path(
    &output_dir(config, output),
    &entry.aggregate.creator_name,
    &entry.aggregate.creator_id,
  );
  let path = export(&item_table(items.iter().copied()), &path, config.report.write_bom)?;

  println!(
    "{} (rank {}): {} items -> {}",
    entry.aggregate.creator_name,
    entry.rank,
    items.len(),
    path.display()
  );
  Ok(())
}
