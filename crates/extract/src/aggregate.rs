//! Per-creator rollup.
//!
//! Records are grouped by creator id into an insertion-ordered table, then
//! each group is reduced to sum / mean / max per field. The first name seen
//! for an id is kept; later records with a different name do not overwrite it.

use rank_core::{CreatorAggregate, Error, FieldStats, InteractionRecord, Result};
use std::collections::HashMap;
use tracing::debug;

struct CreatorGroup<'a> {
  creator_id: &'a str,
  creator_name: &'a str,
  records: Vec<&'a InteractionRecord>,
}

/// Group records by creator id, preserving first-encounter order
fn group_by_creator(records: &[InteractionRecord]) -> Vec<CreatorGroup<'_>> {
  let mut index: HashMap<&str, usize> = HashMap::new();
  let mut groups: Vec<CreatorGroup<'_>> = Vec::new();

  for record in records {
    match index.get(record.creator_id.as_str()) {
      Some(&slot) => {
        let group = &mut groups[slot];
        if group.creator_name != record.creator_name {
          debug!(
            creator_id = %record.creator_id,
            kept = %group.creator_name,
            ignored = %record.creator_name,
            "Creator name conflict, keeping first-seen name"
          );
        }
        group.records.push(record);
      }
      None => {
        index.insert(record.creator_id.as_str(), groups.len());
        groups.push(CreatorGroup {
          creator_id: &record.creator_id,
          creator_name: &record.creator_name,
          records: vec![record],
        });
      }
    }
  }

  groups
}

fn stats(records: &[&InteractionRecord], field: impl Fn(&InteractionRecord) -> u64) -> FieldStats {
  // Groups always hold at least one record
  FieldStats::from_values(records.iter().map(|r| field(r))).unwrap_or_default()
}

fn reduce(group: CreatorGroup<'_>) -> CreatorAggregate {
  let records = &group.records;
  CreatorAggregate {
    creator_id: group.creator_id.to_string(),
    creator_name: group.creator_name.to_string(),
    item_count: records.len(),
    liked: stats(records, |r| r.counts.liked),
    shared: stats(records, |r| r.counts.shared),
    comment: stats(records, |r| r.counts.comment),
    collected: stats(records, |r| r.counts.collected),
    engagement: stats(records, |r| r.engagement_score()),
    total_interactions: stats(records, |r| r.total_interactions()),
  }
}

/// One aggregate per distinct creator id, in first-encounter order.
///
/// Fails with `EmptyDataset` when there are no records.
pub fn aggregate_creators(records: &[InteractionRecord]) -> Result<Vec<CreatorAggregate>> {
  if records.is_empty() {
    return Err(Error::EmptyDataset);
  }

  let aggregates: Vec<CreatorAggregate> = group_by_creator(records).into_iter().map(reduce).collect();
  debug!(records = records.len(), creators = aggregates.len(), "Aggregated creators");
  Ok(aggregates)
}

#[cfg(test)]
mod tests {
  use super::*;
  use rank_core::{ContentType, InteractionCounts};

  fn record(item: &str, creator: &str, name: &str, liked: u64) -> InteractionRecord {
    InteractionRecord {
      item_id: item.to_string(),
      creator_id: creator.to_string(),
      creator_name: name.to_string(),
      title: String::new(),
      content_type: ContentType::Normal,
      counts: InteractionCounts::new(liked, 0, 0, 0),
    }
  }

  #[test]
  fn test_empty_dataset() {
    assert!(matches!(aggregate_creators(&[]), Err(Error::EmptyDataset)));
  }

  #[test]
  fn test_group_counts_and_order() {
    let records = vec![
      record("1", "b", "B", 5),
      record("2", "a", "A", 10),
      record("3", "b", "B", 7),
    ];
    let aggs = aggregate_creators(&records).unwrap();

    assert_eq!(aggs.len(), 2);
    assert_eq!(aggs[0].creator_id, "b");
    assert_eq!(aggs[0].item_count, 2);
    assert_eq!(aggs[0].liked.sum, 12);
    assert_eq!(aggs[0].liked.max, 7);
    assert!((aggs[0].liked.mean - 6.0).abs() < 1e-12);
    assert_eq!(aggs[1].creator_id, "a");
    assert_eq!(aggs[1].item_count, 1);
  }

  #[test]
  fn test_first_seen_name_wins() {
    let records = vec![record("1", "u", "first", 1), record("2", "u", "renamed", 1)];
    let aggs = aggregate_creators(&records).unwrap();
    assert_eq!(aggs.len(), 1);
    assert_eq!(aggs[0].creator_name, "first");
    assert_eq!(aggs[0].item_count, 2);
  }

  #[test]
  fn test_engagement_and_total_fields() {
    let mut r = record("1", "u", "U", 1);
    r.counts = InteractionCounts::new(1, 1, 1, 1);
    let aggs = aggregate_creators(&[r]).unwrap();
    assert_eq!(aggs[0].engagement.sum, 10);
    assert_eq!(aggs[0].total_interactions.sum, 4);
  }
}
