//! `creatorrank rank`

use super::{load_and_analyze, output_dir};
use anyhow::Result;
use extract::Analysis;
use rank_core::Config;
use report::{CREATOR_RANKING_FILE, ITEMS_FILE, RankingReport, creator_items_path, creator_table, export, item_table};
use std::path::{Path, PathBuf};

/// Rank creators and export the item, ranking and top-creator tables
pub fn cmd_rank(
  config: &Config,
  input: &Path,
  output: Option<PathBuf>,
  top: Option<usize>,
  no_export: bool,
  json: bool,
) -> Result<()> {
  let (_, analysis) = load_and_analyze(input)?;
  let top_n = top.unwrap_or(config.report.top_n);

  if json {
    println!("{}", serde_json::to_string_pretty(&ranking_json(&analysis, top_n))?);
  } else {
    print!("{}", RankingReport::from_analysis(&analysis, top_n).as_str());
  }

  if no_export {
    return Ok(());
  }

  let dir = output_dir(config, output);
  let bom = config.report.write_bom;
  let mut written = vec![
    export(&item_table(&analysis.items), &dir.join(ITEMS_FILE), bom)?,
    export(&creator_table(analysis.ranking.entries()), &dir.join(CREATOR_RANKING_FILE), bom)?,
  ];

  if let Some(leader) = analysis.ranking.leader() {
    let agg = &leader.aggregate;
    let items = analysis.items_for_creator(&agg.creator_id);
    let path = creator_items_path(&dir, &agg.creator_name, &agg.creator_id);
    written.push(export(&item_table(items.iter().copied()), &path, bom)?);
  }

  if !json {
    println!("Exported:");
    for path in &written {
      println!("- {}", path.display());
    }
  }

  Ok(())
}

fn ranking_json(analysis: &Analysis, top_n: usize) -> serde_json::Value {
  let creators: Vec<serde_json::Value> = analysis
    .ranking
    .top(top_n)
    .iter()
    .map(|entry| {
      serde_json::json!({
        "rank": entry.rank,
        "composite_score": entry.composite_score,
        "creator": entry.aggregate,
      })
    })
    .collect();

  serde_json::json!({
    "items": analysis.items.len(),
    "creators_total": analysis.ranking.len(),
    "creators": creators,
  })
}
