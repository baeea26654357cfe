use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Where a bad record sits in the input document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordLocation {
  /// Zero-based position among the document's feeds
  pub index: usize,
  pub item_id: Option<String>,
}

impl fmt::Display for RecordLocation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match &self.item_id {
      Some(id) => write!(f, "record #{} (id {})", self.index, id),
      None => write!(f, "record #{}", self.index),
    }
  }
}

#[derive(Error, Debug)]
pub enum Error {
  #[error("Document load: {path}: {reason}")]
  DocumentLoad { path: PathBuf, reason: String },

  #[error("Missing key: {location}: {field} is required")]
  MissingKey { location: RecordLocation, field: String },

  #[error("Malformed record: {location}: unexpected value for {field}: {value}")]
  MalformedRecord {
    location: RecordLocation,
    field: String,
    value: String,
  },

  #[error("Empty dataset: no content items to analyze")]
  EmptyDataset,

  #[error("CSV: line {line}: {reason}")]
  Csv { line: usize, reason: String },

  #[error("Config: {0}")]
  Config(String),

  #[error("IO: {0}")]
  Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
