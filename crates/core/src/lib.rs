pub mod category;
pub mod config;
pub mod creator;
pub mod document;
pub mod error;
pub mod record;
pub mod scoring;
pub mod validation;

pub use category::CategoryLabel;
pub use config::{Config, LoggingConfig, PROJECT_CONFIG_FILE, ReportConfig};
pub use creator::{AGGREGATE_FIELDS, CreatorAggregate, FieldStats};
pub use document::{
  AccountInteraction, Document, DocumentKind, ProfileInfo, RawFeed, RawInteractInfo, RawNoteCard, RawUser,
  UserBasicInfo, load_document,
};
pub use error::{Error, RecordLocation, Result};
pub use record::{ContentType, InteractionCounts, InteractionRecord};
pub use validation::{
  ValidationError, ValidationErrorKind, ValidationResult, optional_record, optional_text, parse_counter, parse_counter_str,
  require_id,
};
