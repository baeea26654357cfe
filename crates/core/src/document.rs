//! Snapshot documents and their typed schema.
//!
//! Three export shapes are recognised by structure:
//!
//! - search snapshot: `data.feeds[]`
//! - profile snapshot: `data.data.{userBasicInfo, interactions, feeds[]}`
//! - simplified search export: top-level `{keyword, count, feeds[]}`
//!
//! Feed lists are kept as raw JSON and converted one entry at a time, so a
//! badly shaped entry fails with its record index instead of failing the
//! whole document. Leaf values (ids, counters, titles) stay raw until the
//! normalizer validates them.

use crate::error::{Error, RecordLocation, Result};
use crate::validation::{ValidationError, ValidationResult, optional_record, optional_text, require_id};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::Path;
use tracing::debug;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Model type of feeds that carry a content item
pub const NOTE_MODEL_TYPE: &str = "note";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawUser {
  pub user_id: Option<Value>,
  pub nickname: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawInteractInfo {
  pub liked_count: Option<Value>,
  pub shared_count: Option<Value>,
  pub comment_count: Option<Value>,
  pub collected_count: Option<Value>,
}

#[derive(Debug, Clone, Default)]
pub struct RawNoteCard {
  pub display_title: Option<Value>,
  pub note_type: Option<Value>,
  pub interact_info: Option<RawInteractInfo>,
  pub user: Option<RawUser>,
}

impl RawNoteCard {
  fn from_value(value: Option<&Value>) -> ValidationResult<Option<Self>> {
    let card = match value {
      None | Some(Value::Null) => return Ok(None),
      Some(Value::Object(card)) => card,
      Some(other) => return Err(ValidationError::invalid_type("noteCard", "object", other)),
    };

    Ok(Some(RawNoteCard {
      display_title: card.get("displayTitle").cloned(),
      note_type: card.get("type").cloned(),
      interact_info: optional_record(card.get("interactInfo"), "noteCard.interactInfo")?,
      user: optional_record(card.get("user"), "noteCard.user")?,
    }))
  }
}

/// One entry of a feed list
#[derive(Debug, Clone, Default)]
pub struct RawFeed {
  pub id: Option<Value>,
  pub model_type: Option<String>,
  /// Parsed for note feeds only
  pub note_card: Option<RawNoteCard>,
}

impl RawFeed {
  /// Read the feed at `index` of a feed list.
  ///
  /// Non-note feeds keep `note_card` empty so their payload is never checked.
  pub fn from_value(index: usize, value: &Value) -> Result<Self> {
    let mut location = RecordLocation { index, item_id: None };
    let Some(object) = value.as_object() else {
      return Err(ValidationError::invalid_type("feed", "object", value).at(location));
    };

    let id = object.get("id").filter(|v| !v.is_null()).cloned();
    location.item_id = id.as_ref().and_then(|v| require_id(Some(v), "id").ok());

    let model_type = optional_text(object.get("modelType"), "modelType").map_err(|e| e.at(location.clone()))?;
    let mut feed = RawFeed {
      id,
      model_type: (!model_type.is_empty()).then_some(model_type),
      note_card: None,
    };

    if feed.is_note() {
      feed.note_card = RawNoteCard::from_value(object.get("noteCard")).map_err(|e| e.at(location))?;
    }
    Ok(feed)
  }

  /// Feeds without a model type are assumed to be notes
  pub fn is_note(&self) -> bool {
    self.model_type.as_deref().is_none_or(|t| t == NOTE_MODEL_TYPE)
  }
}

/// Rewrite a simplified export entry (`{id, title, user, interact}`) into the
/// search feed shape
fn simplified_feed(entry: Value) -> Value {
  let Value::Object(mut entry) = entry else {
    return entry;
  };

  let mut card = Map::new();
  for (from, to) in [("title", "displayTitle"), ("interact", "interactInfo"), ("user", "user")] {
    if let Some(value) = entry.remove(from) {
      card.insert(to.to_string(), value);
    }
  }

  let mut feed = Map::new();
  if let Some(id) = entry.remove("id") {
    feed.insert("id".to_string(), id);
  }
  feed.insert("modelType".to_string(), Value::from(NOTE_MODEL_TYPE));
  feed.insert("noteCard".to_string(), Value::Object(card));
  Value::Object(feed)
}

/// Profile owner's public info
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserBasicInfo {
  #[serde(default)]
  pub nickname: String,
  #[serde(default)]
  pub red_id: String,
  /// 1 = male, anything else female (platform convention)
  #[serde(default)]
  pub gender: Option<i64>,
  #[serde(default)]
  pub ip_location: String,
  #[serde(default)]
  pub desc: String,
}

/// Account-level counter (followers, likes received, ...)
#[derive(Debug, Clone, Deserialize)]
pub struct AccountInteraction {
  #[serde(default, rename = "type")]
  pub kind: Option<String>,
  #[serde(default)]
  pub name: String,
  /// Display text; the platform renders these as e.g. "1万+"
  #[serde(default, deserialize_with = "display_text")]
  pub count: String,
}

fn display_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
  D: serde::Deserializer<'de>,
{
  let value = Value::deserialize(deserializer)?;
  Ok(match value {
    Value::String(s) => s,
    Value::Null => String::new(),
    other => other.to_string(),
  })
}

#[derive(Debug, Clone, Default)]
pub struct ProfileInfo {
  pub basic: UserBasicInfo,
  pub interactions: Vec<AccountInteraction>,
}

#[derive(Debug, Deserialize)]
struct FeedList {
  #[serde(default)]
  feeds: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct SearchEnvelope {
  data: FeedList,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProfileData {
  #[serde(default)]
  user_basic_info: UserBasicInfo,
  #[serde(default)]
  interactions: Vec<AccountInteraction>,
  #[serde(default)]
  feeds: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct ProfileInner {
  data: ProfileData,
}

#[derive(Debug, Deserialize)]
struct ProfileEnvelope {
  data: ProfileInner,
}

#[derive(Debug, Deserialize)]
struct SimplifiedEnvelope {
  #[serde(default)]
  keyword: Option<String>,
  #[serde(default)]
  feeds: Vec<Value>,
}

/// Which export shape a document came in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
  Search,
  Profile,
  SimplifiedSearch,
}

impl DocumentKind {
  /// Detect the export shape from the parsed JSON tree
  pub fn detect(root: &Value) -> Option<Self> {
    if root.pointer("/data/data/feeds").is_some_and(Value::is_array) {
      Some(DocumentKind::Profile)
    } else if root.pointer("/data/feeds").is_some_and(Value::is_array) {
      Some(DocumentKind::Search)
    } else if root.get("feeds").is_some_and(Value::is_array) {
      Some(DocumentKind::SimplifiedSearch)
    } else {
      None
    }
  }
}

/// A loaded snapshot
#[derive(Debug, Clone)]
pub struct Document {
  pub kind: DocumentKind,
  /// All feed entries in document order, notes and otherwise
  pub feeds: Vec<Value>,
  /// Present for profile snapshots
  pub profile: Option<ProfileInfo>,
  /// Search keyword, when the export records it
  pub keyword: Option<String>,
}

impl Document {
  /// Note feeds with their position in `feeds`. Entries that cannot be read
  /// yield an error carrying that position.
  pub fn notes(&self) -> impl Iterator<Item = Result<(usize, RawFeed)>> + '_ {
    self
      .feeds
      .iter()
      .enumerate()
      .filter_map(|(index, value)| match RawFeed::from_value(index, value) {
        Ok(feed) if !feed.is_note() => None,
        Ok(feed) => Some(Ok((index, feed))),
        Err(e) => Some(Err(e)),
      })
  }

  /// Parse a document from raw bytes; `origin` is used in error messages
  pub fn from_slice(bytes: &[u8], origin: &Path) -> Result<Self> {
    let load_error = |reason: String| Error::DocumentLoad {
      path: origin.to_path_buf(),
      reason,
    };

    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let root: Value = serde_json::from_slice(bytes).map_err(|e| load_error(format!("invalid JSON: {}", e)))?;

    let kind = DocumentKind::detect(&root)
      .ok_or_else(|| load_error("unrecognised document shape (no feeds list found)".to_string()))?;
    debug!(?kind, path = %origin.display(), "Detected document kind");

    let document = match kind {
      DocumentKind::Search => {
        let envelope: SearchEnvelope = serde_json::from_value(root).map_err(|e| load_error(e.to_string()))?;
        Document {
          kind,
          feeds: envelope.data.feeds,
          profile: None,
          keyword: None,
        }
      }
      DocumentKind::Profile => {
        let envelope: ProfileEnvelope = serde_json::from_value(root).map_err(|e| load_error(e.to_string()))?;
        let data = envelope.data.data;
        Document {
          kind,
          feeds: data.feeds,
          profile: Some(ProfileInfo {
            basic: data.user_basic_info,
            interactions: data.interactions,
          }),
          keyword: None,
        }
      }
      DocumentKind::SimplifiedSearch => {
        let envelope: SimplifiedEnvelope = serde_json::from_value(root).map_err(|e| load_error(e.to_string()))?;
        Document {
          kind,
          feeds: envelope.feeds.into_iter().map(simplified_feed).collect(),
          profile: None,
          keyword: envelope.keyword,
        }
      }
    };

    Ok(document)
  }
}

/// Read and parse a snapshot file
pub fn load_document(path: &Path) -> Result<Document> {
  let bytes = std::fs::read(path).map_err(|e| Error::DocumentLoad {
    path: path.to_path_buf(),
    reason: e.to_string(),
  })?;
  Document::from_slice(&bytes, path)
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;
  use tempfile::TempDir;

  fn parse(value: &Value) -> Result<Document> {
    Document::from_slice(value.to_string().as_bytes(), Path::new("test.json"))
  }

  #[test]
  fn test_detect_search() {
    let doc = parse(&json!({
      "data": {"feeds": [
        {"id": "n1", "modelType": "note", "noteCard": {"displayTitle": "t"}},
        {"id": "q1", "modelType": "hot_query"}
      ]}
    }))
    .unwrap();
    assert_eq!(doc.kind, DocumentKind::Search);
    assert_eq!(doc.feeds.len(), 2);

    let notes: Vec<usize> = doc.notes().map(|note| note.unwrap().0).collect();
    assert_eq!(notes, vec![0]);
  }

  #[test]
  fn test_detect_profile() {
    let doc = parse(&json!({
      "data": {"data": {
        "userBasicInfo": {"nickname": "乐乐", "redId": "123", "gender": 1, "ipLocation": "江苏", "desc": "hi"},
        "interactions": [{"type": "fans", "name": "粉丝", "count": "1万+"}, {"name": "获赞与收藏", "count": 5000}],
        "feeds": [{"id": "n1", "noteCard": {"type": "video"}}]
      }}
    }))
    .unwrap();
    assert_eq!(doc.kind, DocumentKind::Profile);
    let profile = doc.profile.as_ref().unwrap();
    assert_eq!(profile.basic.nickname, "乐乐");
    assert_eq!(profile.basic.gender, Some(1));
    assert_eq!(profile.interactions[0].count, "1万+");
    assert_eq!(profile.interactions[1].count, "5000");
    assert_eq!(doc.feeds.len(), 1);
    assert_eq!(doc.notes().count(), 1);
  }

  #[test]
  fn test_detect_simplified() {
    let doc = parse(&json!({
      "keyword": "美食",
      "count": 1,
      "feeds": [{
        "id": "n1",
        "xsecToken": "tok",
        "title": "好吃",
        "user": {"userId": "u1", "nickname": "a"},
        "interact": {"likedCount": "3"},
        "index": 0
      }]
    }))
    .unwrap();
    assert_eq!(doc.kind, DocumentKind::SimplifiedSearch);
    assert_eq!(doc.keyword.as_deref(), Some("美食"));
    let (_, feed) = doc.notes().next().unwrap().unwrap();
    assert_eq!(feed.id, Some(json!("n1")));
    let card = feed.note_card.unwrap();
    assert_eq!(card.display_title, Some(json!("好吃")));
    assert_eq!(card.interact_info.unwrap().liked_count, Some(json!("3")));
    assert_eq!(card.user.unwrap().user_id, Some(json!("u1")));
  }

  #[test]
  fn test_bad_sub_record_fails_only_its_feed() {
    let doc = parse(&json!({
      "data": {"feeds": [
        {"id": "n0", "noteCard": {"user": {"userId": "u0"}}},
        {"id": "n1", "noteCard": {"user": {"userId": "u1"}, "interactInfo": "oops"}}
      ]}
    }))
    .unwrap();

    let notes: Vec<Result<(usize, RawFeed)>> = doc.notes().collect();
    assert!(notes[0].is_ok());
    match &notes[1] {
      Err(Error::MalformedRecord { location, field, value }) => {
        assert_eq!(location.index, 1);
        assert_eq!(location.item_id.as_deref(), Some("n1"));
        assert_eq!(field, "noteCard.interactInfo");
        assert_eq!(value, "\"oops\"");
      }
      other => panic!("expected MalformedRecord, got {:?}", other),
    }
  }

  #[test]
  fn test_bad_feed_shapes_carry_location() {
    let doc = parse(&json!({
      "data": {"feeds": [
        {"id": "n0", "noteCard": {"user": "bob"}},
        {"id": 7, "modelType": 3},
        "not a feed",
        {"id": "n3", "noteCard": ["x"]}
      ]}
    }))
    .unwrap();

    let fields: Vec<(usize, String)> = doc
      .notes()
      .map(|note| match note {
        Err(Error::MalformedRecord { location, field, .. }) => (location.index, field),
        other => panic!("expected MalformedRecord, got {:?}", other),
      })
      .collect();
    assert_eq!(
      fields,
      vec![
        (0, "noteCard.user".to_string()),
        (1, "modelType".to_string()),
        (2, "feed".to_string()),
        (3, "noteCard".to_string()),
      ]
    );
  }

  #[test]
  fn test_non_note_payload_is_not_checked() {
    let doc = parse(&json!({
      "data": {"feeds": [{"id": "q1", "modelType": "hot_query", "noteCard": "ignored"}]}
    }))
    .unwrap();
    assert_eq!(doc.notes().count(), 0);
  }

  #[test]
  fn test_unknown_shape() {
    let err = parse(&json!({"items": []})).unwrap_err();
    assert!(matches!(err, Error::DocumentLoad { .. }));
  }

  #[test]
  fn test_invalid_json() {
    let err = Document::from_slice(b"{not json", Path::new("bad.json")).unwrap_err();
    assert!(err.to_string().contains("invalid JSON"));
  }

  #[test]
  fn test_bom_tolerated() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("bom.json");
    let mut bytes = UTF8_BOM.to_vec();
    bytes.extend_from_slice(br#"{"data": {"feeds": []}}"#);
    std::fs::write(&path, bytes).unwrap();

    let doc = load_document(&path).unwrap();
    assert_eq!(doc.kind, DocumentKind::Search);
    assert!(doc.feeds.is_empty());
  }

  #[test]
  fn test_missing_file() {
    let err = load_document(Path::new("/nonexistent/snapshot.json")).unwrap_err();
    assert!(matches!(err, Error::DocumentLoad { .. }));
  }
}
