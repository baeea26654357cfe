//! Console reports and CSV exports for ranked creator analyses.

pub mod console;
pub mod csv;
pub mod format;
pub mod tables;

pub use console::{ProfileReport, RankingReport, write_category_distribution, write_item_list};
pub use csv::{CsvTable, escape_field};
pub use format::{percent, share, thousands, thousands_f64, truncate_title};
pub use tables::{
  CREATOR_RANKING_FILE, ITEM_COLUMNS, ITEMS_FILE, creator_columns, creator_items_path, creator_table, export, file_stem,
  item_table, load_creator_table, profile_items_path,
};
