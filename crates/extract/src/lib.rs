pub mod aggregate;
pub mod classifier;
pub mod normalize;
pub mod pipeline;
pub mod rank;

pub use aggregate::aggregate_creators;
pub use classifier::{
  CATEGORY_RULES, CategoryRule, CategorySummary, FALLBACK_CATEGORY, SeriesInfo, classify_title, story_series,
  summarize_categories,
};
pub use normalize::{normalize_document, normalize_feed};
pub use pipeline::{Analysis, ContentMix, ItemAnalysis, analyze};
pub use rank::{RankedCreator, Ranking};
