//! Raw feed → `InteractionRecord`

use rank_core::{
  ContentType, Document, Error, InteractionCounts, InteractionRecord, RawFeed, RawInteractInfo, RecordLocation, Result,
  optional_text, parse_counter, require_id,
};
use tracing::{debug, info};

/// Normalize one note feed. `index` is the feed's position in the document.
pub fn normalize_feed(index: usize, feed: &RawFeed) -> Result<InteractionRecord> {
  let mut location = RecordLocation { index, item_id: None };

  let item_id = require_id(feed.id.as_ref(), "id").map_err(|e| e.at(location.clone()))?;
  location.item_id = Some(item_id.clone());

  let card = feed.note_card.as_ref().ok_or_else(|| Error::MissingKey {
    location: location.clone(),
    field: "noteCard".to_string(),
  })?;

  let user = card.user.as_ref().ok_or_else(|| Error::MissingKey {
    location: location.clone(),
    field: "noteCard.user".to_string(),
  })?;

  let creator_id = require_id(user.user_id.as_ref(), "noteCard.user.userId").map_err(|e| e.at(location.clone()))?;
  let creator_name =
    optional_text(user.nickname.as_ref(), "noteCard.user.nickname").map_err(|e| e.at(location.clone()))?;
  let title = optional_text(card.display_title.as_ref(), "noteCard.displayTitle").map_err(|e| e.at(location.clone()))?;
  let content_type = optional_text(card.note_type.as_ref(), "noteCard.type").map_err(|e| e.at(location.clone()))?;

  let counts = match &card.interact_info {
    Some(info) => parse_counts(info).map_err(|e| e.at(location.clone()))?,
    None => InteractionCounts::default(),
  };

  Ok(InteractionRecord {
    item_id,
    creator_id,
    creator_name,
    title,
    content_type: ContentType::from(content_type),
    counts,
  })
}

fn parse_counts(info: &RawInteractInfo) -> rank_core::ValidationResult<InteractionCounts> {
  Ok(InteractionCounts {
    liked: parse_counter(info.liked_count.as_ref(), "noteCard.interactInfo.likedCount")?,
    shared: parse_counter(info.shared_count.as_ref(), "noteCard.interactInfo.sharedCount")?,
    comment: parse_counter(info.comment_count.as_ref(), "noteCard.interactInfo.commentCount")?,
    collected: parse_counter(info.collected_count.as_ref(), "noteCard.interactInfo.collectedCount")?,
  })
}

/// Normalize every note feed of a document, failing on the first bad record
/// (badly shaped feeds included).
///
/// Non-note feeds (e.g. `hot_query`) are skipped.
pub fn normalize_document(document: &Document) -> Result<Vec<InteractionRecord>> {
  let records = document
    .notes()
    .map(|note| {
      let (index, feed) = note?;
      normalize_feed(index, &feed)
    })
    .collect::<Result<Vec<_>>>()?;

  let skipped = document.feeds.len() - records.len();
  if skipped > 0 {
    debug!(skipped, "Skipped non-note feeds");
  }
  info!(items = records.len(), kind = ?document.kind, "Normalized snapshot");

  Ok(records)
}
