use serde::{Deserialize, Serialize};

/// Thematic bucket assigned to an item from its title
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryLabel {
  /// Children's stories
  Story,
  /// Science popularization and history
  Science,
  /// Outings, markets, everyday family life
  DailyLife,
  /// Travel sharing
  Travel,
  /// Unclassified; not produced by the default rule table
  Other,
}

impl CategoryLabel {
  pub const ALL: [CategoryLabel; 5] = [
    CategoryLabel::Story,
    CategoryLabel::Science,
    CategoryLabel::DailyLife,
    CategoryLabel::Travel,
    CategoryLabel::Other,
  ];

  /// Display label used in reports and exports
  pub fn as_str(&self) -> &'static str {
    match self {
      CategoryLabel::Story => "儿童故事",
      CategoryLabel::Science => "科普教育",
      CategoryLabel::DailyLife => "日常生活",
      CategoryLabel::Travel => "旅行分享",
      CategoryLabel::Other => "其他",
    }
  }
}

impl std::fmt::Display for CategoryLabel {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

impl std::str::FromStr for CategoryLabel {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    CategoryLabel::ALL
      .into_iter()
      .find(|label| label.as_str() == s)
      .ok_or_else(|| format!("unknown category: {}", s))
  }
}
