use crate::scoring;
use serde::{Deserialize, Serialize};

/// sum / mean / max of one numeric field over a creator's items
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldStats {
  pub sum: u64,
  pub mean: f64,
  pub max: u64,
}

impl FieldStats {
  /// Reduce a non-empty value sequence. Returns `None` for an empty one,
  /// since the mean is undefined there.
  pub fn from_values<I>(values: I) -> Option<Self>
  where
    I: IntoIterator<Item = u64>,
  {
    let mut count = 0usize;
    let mut sum = 0u64;
    let mut max = 0u64;
    for value in values {
      count += 1;
      sum = sum.saturating_add(value);
      max = max.max(value);
    }

    if count == 0 {
      return None;
    }

    Some(Self {
      sum,
      mean: sum as f64 / count as f64,
      max,
    })
  }
}

/// Field names used for the six aggregated columns, in export order
pub const AGGREGATE_FIELDS: &[&str] = &[
  "liked_count",
  "shared_count",
  "comment_count",
  "collected_count",
  "engagement_score",
  "total_interactions",
];

/// Summary statistics for one creator across all their observed items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatorAggregate {
  pub creator_id: String,
  /// First name seen for this creator id
  pub creator_name: String,
  pub item_count: usize,
  pub liked: FieldStats,
  pub shared: FieldStats,
  pub comment: FieldStats,
  pub collected: FieldStats,
  pub engagement: FieldStats,
  pub total_interactions: FieldStats,
}

impl CreatorAggregate {
  /// Composite ranking score from the engagement stats. The mean is used at
  /// full precision, not rounded to two decimals first.
  pub fn composite_score(&self) -> f64 {
    scoring::composite_score(
      self.engagement.sum,
      self.engagement.mean,
      self.item_count,
      self.engagement.max,
    )
  }

  /// Stats in `AGGREGATE_FIELDS` order
  pub fn field_stats(&self) -> [&FieldStats; 6] {
    [
      &self.liked,
      &self.shared,
      &self.comment,
      &self.collected,
      &self.engagement,
      &self.total_interactions,
    ]
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_field_stats_basic() {
    let stats = FieldStats::from_values([10, 20, 30]).unwrap();
    assert_eq!(stats.sum, 60);
    assert_eq!(stats.max, 30);
    assert!((stats.mean - 20.0).abs() < f64::EPSILON);
  }

  #[test]
  fn test_field_stats_fractional_mean() {
    let stats = FieldStats::from_values([100, 5]).unwrap();
    assert_eq!(stats.sum, 105);
    assert_eq!(stats.max, 100);
    assert!((stats.mean - 52.5).abs() < f64::EPSILON);
  }

  #[test]
  fn test_field_stats_empty() {
    assert!(FieldStats::from_values(std::iter::empty()).is_none());
  }

  #[test]
  fn test_field_stats_all_zero() {
    let stats = FieldStats::from_values([0, 0]).unwrap();
    assert_eq!(stats, FieldStats::default());
  }
}
