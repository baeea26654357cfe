use crate::scoring;
use serde::{Deserialize, Serialize};

/// Content format tag as exported by the platform.
///
/// Known tags get their own variant; anything else is carried verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ContentType {
  /// Short video note
  Video,
  /// Image/text note
  Normal,
  Other(String),
}

impl ContentType {
  pub fn as_str(&self) -> &str {
    match self {
      ContentType::Video => "video",
      ContentType::Normal => "normal",
      ContentType::Other(raw) => raw,
    }
  }
}

impl From<&str> for ContentType {
  fn from(raw: &str) -> Self {
    match raw {
      "video" => ContentType::Video,
      "normal" => ContentType::Normal,
      other => ContentType::Other(other.to_string()),
    }
  }
}

impl From<String> for ContentType {
  fn from(raw: String) -> Self {
    match raw.as_str() {
      "video" => ContentType::Video,
      "normal" => ContentType::Normal,
      _ => ContentType::Other(raw),
    }
  }
}

impl From<ContentType> for String {
  fn from(value: ContentType) -> Self {
    value.as_str().to_string()
  }
}

impl std::fmt::Display for ContentType {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

/// The four raw interaction counters of one item
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionCounts {
  pub liked: u64,
  pub shared: u64,
  pub comment: u64,
  pub collected: u64,
}

impl InteractionCounts {
  pub fn new(liked: u64, shared: u64, comment: u64, collected: u64) -> Self {
    Self {
      liked,
      shared,
      comment,
      collected,
    }
  }

  pub fn engagement_score(&self) -> u64 {
    scoring::engagement_score(self.liked, self.shared, self.comment, self.collected)
  }

  pub fn total_interactions(&self) -> u64 {
    scoring::total_interactions(self.liked, self.shared, self.comment, self.collected)
  }
}

/// One content item's measured engagement.
///
/// Engagement score is never stored; it is always derived from `counts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionRecord {
  pub item_id: String,
  pub creator_id: String,
  pub creator_name: String,
  pub title: String,
  pub content_type: ContentType,
  pub counts: InteractionCounts,
}

impl InteractionRecord {
  pub fn engagement_score(&self) -> u64 {
    self.counts.engagement_score()
  }

  pub fn total_interactions(&self) -> u64 {
    self.counts.total_interactions()
  }
}
