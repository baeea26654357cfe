//! Composite ranking of creators.

use rank_core::{CreatorAggregate, Error, Result};
use tracing::debug;

/// A creator with its position in the ranking
#[derive(Debug, Clone, PartialEq)]
pub struct RankedCreator {
  /// 1-based
  pub rank: usize,
  pub composite_score: f64,
  pub aggregate: CreatorAggregate,
}

/// Creators ordered by composite score, highest first
#[derive(Debug, Clone, Default)]
pub struct Ranking {
  entries: Vec<RankedCreator>,
}

impl Ranking {
  /// Score and order aggregates.
  ///
  /// The sort is stable: creators with identical composite scores keep the
  /// order in which they appear in `aggregates`.
  pub fn from_aggregates(aggregates: Vec<CreatorAggregate>) -> Result<Self> {
    if aggregates.is_empty() {
      return Err(Error::EmptyDataset);
    }

    let mut scored: Vec<(f64, CreatorAggregate)> = aggregates
      .into_iter()
      .map(|aggregate| (aggregate.composite_score(), aggregate))
      .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));

    let entries: Vec<RankedCreator> = scored
      .into_iter()
      .enumerate()
      .map(|(i, (composite_score, aggregate))| RankedCreator {
        rank: i + 1,
        composite_score,
        aggregate,
      })
      .collect();

    if let Some(leader) = entries.first() {
      debug!(
        creators = entries.len(),
        leader = %leader.aggregate.creator_id,
        score = leader.composite_score,
        "Ranked creators"
      );
    }

    Ok(Self { entries })
  }

  pub fn entries(&self) -> &[RankedCreator] {
    &self.entries
  }

  /// First `k` entries (all of them when `k` exceeds the length)
  pub fn top(&self, k: usize) -> &[RankedCreator] {
    &self.entries[..k.min(self.entries.len())]
  }

  pub fn leader(&self) -> Option<&RankedCreator> {
    self.entries.first()
  }

  pub fn get(&self, creator_id: &str) -> Option<&RankedCreator> {
    self.entries.iter().find(|e| e.aggregate.creator_id == creator_id)
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}
