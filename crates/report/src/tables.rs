//! Export tables: per-item analysis and ranked creator aggregates.

use crate::csv::CsvTable;
use extract::{ItemAnalysis, RankedCreator};
use rank_core::{AGGREGATE_FIELDS, CreatorAggregate, Error, FieldStats, Result};
use std::path::{Path, PathBuf};
use tracing::info;

pub const ITEM_COLUMNS: &[&str] = &[
  "user_id",
  "nickname",
  "note_id",
  "note_title",
  "note_type",
  "category",
  "liked_count",
  "shared_count",
  "comment_count",
  "collected_count",
  "engagement_score",
  "total_interactions",
];

pub const CREATOR_RANKING_FILE: &str = "creator_ranking.csv";
pub const ITEMS_FILE: &str = "items.csv";

/// Header of the creator table
pub fn creator_columns() -> Vec<String> {
  let mut columns = vec![
    "rank".to_string(),
    "user_id".to_string(),
    "nickname".to_string(),
    "note_count".to_string(),
  ];
  for field in AGGREGATE_FIELDS {
    for stat in ["sum", "mean", "max"] {
      columns.push(format!("{}_{}", field, stat));
    }
  }
  columns.push("comprehensive_score".to_string());
  columns
}

/// One row per item, in the order given
pub fn item_table<'a, I>(items: I) -> CsvTable
where
  I: IntoIterator<Item = &'a ItemAnalysis>,
{
  let mut table = CsvTable::new(ITEM_COLUMNS.iter().copied());
  for item in items {
    let r = &item.record;
    table.push_row(vec![
      r.creator_id.clone(),
      r.creator_name.clone(),
      r.item_id.clone(),
      r.title.clone(),
      r.content_type.to_string(),
      item.category.to_string(),
      r.counts.liked.to_string(),
      r.counts.shared.to_string(),
      r.counts.comment.to_string(),
      r.counts.collected.to_string(),
      r.engagement_score().to_string(),
      r.total_interactions().to_string(),
    ]);
  }
  table
}

/// One row per ranked creator. Floats use the shortest text that parses
/// back to the same value.
pub fn creator_table(entries: &[RankedCreator]) -> CsvTable {
  let mut table = CsvTable::new(creator_columns());
  for entry in entries {
    let agg = &entry.aggregate;
    let mut row = vec![
      entry.rank.to_string(),
      agg.creator_id.clone(),
      agg.creator_name.clone(),
      agg.item_count.to_string(),
    ];
    for stats in agg.field_stats() {
      row.push(stats.sum.to_string());
      row.push(stats.mean.to_string());
      row.push(stats.max.to_string());
    }
    row.push(entry.composite_score.to_string());
    table.push_row(row);
  }
  table
}

/// Read a creator table written by [`creator_table`] back into ranked entries
pub fn load_creator_table(path: &Path) -> Result<Vec<RankedCreator>> {
  let table = CsvTable::read(path)?;
  let expected = creator_columns();
  if table.headers != expected {
    return Err(Error::Csv {
      line: 1,
      reason: format!("unexpected creator table header in {}", path.display()),
    });
  }

  table
    .rows
    .iter()
    .enumerate()
    .map(|(i, row)| parse_creator_row(row, i + 2))
    .collect()
}

fn parse_creator_row(row: &[String], line: usize) -> Result<RankedCreator> {
  let int = |col: usize| -> Result<u64> {
    row[col].parse::<u64>().map_err(|_| Error::Csv {
      line,
      reason: format!("column {}: expected an integer, got {:?}", col + 1, row[col]),
    })
  };
  let float = |col: usize| -> Result<f64> {
    row[col].parse::<f64>().map_err(|_| Error::Csv {
      line,
      reason: format!("column {}: expected a number, got {:?}", col + 1, row[col]),
    })
  };

  // rank, user_id, nickname, note_count, then sum/mean/max triples
  let mut stats = [FieldStats::default(); 6];
  for (i, slot) in stats.iter_mut().enumerate() {
    let base = 4 + i * 3;
    *slot = FieldStats {
      sum: int(base)?,
      mean: float(base + 1)?,
      max: int(base + 2)?,
    };
  }
  let [liked, shared, comment, collected, engagement, total_interactions] = stats;

  Ok(RankedCreator {
    rank: int(0)? as usize,
    composite_score: float(4 + 6 * 3)?,
    aggregate: CreatorAggregate {
      creator_id: row[1].clone(),
      creator_name: row[2].clone(),
      item_count: int(3)? as usize,
      liked,
      shared,
      comment,
      collected,
      engagement,
      total_interactions,
    },
  })
}

/// File-system safe stem from a display name; falls back to `fallback`
pub fn file_stem(name: &str, fallback: &str) -> String {
  let cleaned: String = name
    .chars()
    .map(|c| match c {
      '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
      c if c.is_control() => '_',
      c => c,
    })
    .collect();
  let cleaned = cleaned.trim().trim_matches('.');
  if cleaned.is_empty() {
    fallback.to_string()
  } else {
    cleaned.to_string()
  }
}

/// `<creator>_items.csv`
pub fn creator_items_path(dir: &Path, creator_name: &str, creator_id: &str) -> PathBuf {
  dir.join(format!("{}_items.csv", file_stem(creator_name, creator_id)))
}

/// `<nickname>_content_analysis.csv`
pub fn profile_items_path(dir: &Path, nickname: &str) -> PathBuf {
  dir.join(format!("{}_content_analysis.csv", file_stem(nickname, "profile")))
}

/// Write a table and log where it went
pub fn export(table: &CsvTable, path: &Path, bom: bool) -> Result<PathBuf> {
  table.write(path, bom)?;
  info!(path = %path.display(), rows = table.rows.len(), "Exported table");
  Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_creator_columns() {
    let columns = creator_columns();
    assert_eq!(columns.len(), 4 + 18 + 1);
    assert_eq!(columns[4], "liked_count_sum");
    assert_eq!(columns[17], "engagement_score_max");
    assert_eq!(columns[22], "comprehensive_score");
  }

  #[test]
  fn test_file_stem() {
    assert_eq!(file_stem("乐乐妈妈", "u1"), "乐乐妈妈");
    assert_eq!(file_stem("a/b:c", "u1"), "a_b_c");
    assert_eq!(file_stem("  ", "u1"), "u1");
    assert_eq!(file_stem("..", "u1"), "u1");
  }

  #[test]
  fn test_paths() {
    let dir = Path::new("out");
    assert_eq!(creator_items_path(dir, "", "u9"), Path::new("out/u9_items.csv"));
    assert_eq!(
      profile_items_path(dir, "小王"),
      Path::new("out/小王_content_analysis.csv")
    );
  }
}
