//! End-to-end batch analysis: normalize → classify → aggregate → rank.

use crate::aggregate::aggregate_creators;
use crate::classifier::{CategorySummary, SeriesInfo, classify_title, story_series, summarize_categories};
use crate::normalize::normalize_document;
use crate::rank::Ranking;
use rank_core::{CategoryLabel, ContentType, Document, Error, InteractionRecord, Result};
use tracing::info;

/// A normalized item with its category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemAnalysis {
  pub record: InteractionRecord,
  pub category: CategoryLabel,
}

/// Split of items by content format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContentMix {
  pub video: usize,
  pub normal: usize,
  pub other: usize,
}

impl ContentMix {
  pub fn total(&self) -> usize {
    self.video + self.normal + self.other
  }

  /// Percentage of `count` in the whole mix (0 for an empty mix)
  pub fn share(&self, count: usize) -> f64 {
    match self.total() {
      0 => 0.0,
      total => count as f64 / total as f64 * 100.0,
    }
  }
}

/// Everything derived from one snapshot
#[derive(Debug, Clone)]
pub struct Analysis {
  /// Items in document order
  pub items: Vec<ItemAnalysis>,
  pub ranking: Ranking,
  pub categories: Vec<CategorySummary>,
}

impl Analysis {
  /// Run the whole pipeline over already-normalized records
  pub fn from_records(records: Vec<InteractionRecord>) -> Result<Self> {
    if records.is_empty() {
      return Err(Error::EmptyDataset);
    }

    let aggregates = aggregate_creators(&records)?;
    let ranking = Ranking::from_aggregates(aggregates)?;

    let items: Vec<ItemAnalysis> = records
      .into_iter()
      .map(|record| ItemAnalysis {
        category: classify_title(&record.title),
        record,
      })
      .collect();
    let categories = summarize_categories(items.iter().map(|item| (item.category, &item.record)));

    info!(
      items = items.len(),
      creators = ranking.len(),
      categories = categories.len(),
      "Analysis complete"
    );

    Ok(Self {
      items,
      ranking,
      categories,
    })
  }

  pub fn records(&self) -> impl Iterator<Item = &InteractionRecord> {
    self.items.iter().map(|item| &item.record)
  }

  /// Items of one creator, highest engagement first
  pub fn items_for_creator(&self, creator_id: &str) -> Vec<&ItemAnalysis> {
    let mut items: Vec<&ItemAnalysis> = self.items.iter().filter(|i| i.record.creator_id == creator_id).collect();
    items.sort_by(|a, b| b.record.engagement_score().cmp(&a.record.engagement_score()));
    items
  }

  /// The `k` highest-engagement items overall; ties keep document order
  pub fn top_items(&self, k: usize) -> Vec<&ItemAnalysis> {
    let mut items: Vec<&ItemAnalysis> = self.items.iter().collect();
    items.sort_by(|a, b| b.record.engagement_score().cmp(&a.record.engagement_score()));
    items.truncate(k);
    items
  }

  pub fn content_mix(&self) -> ContentMix {
    let mut mix = ContentMix::default();
    for item in &self.items {
      match item.record.content_type {
        ContentType::Video => mix.video += 1,
        ContentType::Normal => mix.normal += 1,
        ContentType::Other(_) => mix.other += 1,
      }
    }
    mix
  }

  /// Mean engagement score over all items
  pub fn average_engagement(&self) -> f64 {
    let sum = self.records().map(|r| r.engagement_score()).fold(0u64, u64::saturating_add);
    sum as f64 / self.items.len() as f64
  }

  pub fn story_series(&self) -> SeriesInfo {
    story_series(self.items.iter().map(|i| i.record.title.as_str()))
  }

  /// Number of items carrying `label`
  pub fn category_count(&self, label: CategoryLabel) -> usize {
    self.categories.iter().find(|c| c.label == label).map_or(0, |c| c.count)
  }
}

/// Normalize a document and analyze it
pub fn analyze(document: &Document) -> Result<Analysis> {
  let records = normalize_document(document)?;
  Analysis::from_records(records)
}
