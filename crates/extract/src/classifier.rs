use rank_core::{CategoryLabel, InteractionRecord};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Keyword rule: any keyword contained in the title selects `label`
#[derive(Debug, Clone, Copy)]
pub struct CategoryRule {
  pub keywords: &'static [&'static str],
  pub label: CategoryLabel,
}

impl CategoryRule {
  fn matches(&self, title: &str) -> bool {
    self.keywords.iter().any(|k| title.contains(k))
  }
}

/// Rules in evaluation order; the first match wins.
///
/// The travel rule is shadowed by the daily-life rule above it (both match
/// "扬州") and never fires. It stays in place so historical classifications
/// do not change.
pub const CATEGORY_RULES: &[CategoryRule] = &[
  CategoryRule {
    keywords: &["儿童故事", "故事"],
    label: CategoryLabel::Story,
  },
  CategoryRule {
    keywords: &["科普", "古"],
    label: CategoryLabel::Science,
  },
  CategoryRule {
    keywords: &["扬州", "早市", "遛娃"],
    label: CategoryLabel::DailyLife,
  },
  CategoryRule {
    keywords: &["扬州"],
    label: CategoryLabel::Travel,
  },
];

/// Label for titles no rule matches
pub const FALLBACK_CATEGORY: CategoryLabel = CategoryLabel::DailyLife;

/// Classify a title into exactly one category
pub fn classify_title(title: &str) -> CategoryLabel {
  CATEGORY_RULES
    .iter()
    .find(|rule| rule.matches(title))
    .map(|rule| rule.label)
    .unwrap_or(FALLBACK_CATEGORY)
}

/// Engagement statistics of one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySummary {
  pub label: CategoryLabel,
  pub count: usize,
  pub engagement_sum: u64,
  pub engagement_mean: f64,
  pub liked_mean: f64,
  pub collected_mean: f64,
}

/// Group classified records by label, in order of each label's first appearance
pub fn summarize_categories<'a, I>(items: I) -> Vec<CategorySummary>
where
  I: IntoIterator<Item = (CategoryLabel, &'a InteractionRecord)>,
{
  let mut index: HashMap<CategoryLabel, usize> = HashMap::new();
  let mut groups: Vec<(CategoryLabel, Vec<&InteractionRecord>)> = Vec::new();

  for (label, record) in items {
    match index.get(&label) {
      Some(&slot) => groups[slot].1.push(record),
      None => {
        index.insert(label, groups.len());
        groups.push((label, vec![record]));
      }
    }
  }

  groups
    .into_iter()
    .map(|(label, records)| {
      let count = records.len();
      let total = |field: fn(&InteractionRecord) -> u64| {
        records
          .iter()
          .map(|r| field(r))
          .fold(0u64, u64::saturating_add)
      };
      let engagement_sum = total(|r| r.engagement_score());
      let liked_sum = total(|r| r.counts.liked);
      let collected_sum = total(|r| r.counts.collected);
      CategorySummary {
        label,
        count,
        engagement_sum,
        engagement_mean: engagement_sum as f64 / count as f64,
        liked_mean: liked_sum as f64 / count as f64,
        collected_mean: collected_sum as f64 / count as f64,
      }
    })
    .collect()
}

static NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("static pattern"));

/// Marker of a numbered story series title
pub const STORY_SERIES_MARKER: &str = "儿童故事";

/// Numbered episodes of a creator's story series
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeriesInfo {
  /// Titles carrying the series marker and at least one digit
  pub episodes: usize,
  /// Largest number found in those titles
  pub latest: Option<u64>,
}

/// Detect numbered story episodes among titles
pub fn story_series<'a, I>(titles: I) -> SeriesInfo
where
  I: IntoIterator<Item = &'a str>,
{
  let mut info = SeriesInfo::default();

  for title in titles {
    if !title.contains(STORY_SERIES_MARKER) || !title.chars().any(|c| c.is_numeric()) {
      continue;
    }
    info.episodes += 1;
    let numbers = NUMBER.find_iter(title).filter_map(|m| m.as_str().parse::<u64>().ok());
    info.latest = numbers.chain(info.latest).max();
  }

  info
}

#[cfg(test)]
mod tests {
  use super::*;
  use rank_core::{ContentType, InteractionCounts};

  fn record(liked: u64, collected: u64) -> InteractionRecord {
    InteractionRecord {
      item_id: "n".to_string(),
      creator_id: "u".to_string(),
      creator_name: "U".to_string(),
      title: String::new(),
      content_type: ContentType::Video,
      counts: InteractionCounts::new(liked, 0, 0, collected),
    }
  }

  #[test]
  fn test_classify_story() {
    assert_eq!(classify_title("儿童故事第5集：分享"), CategoryLabel::Story);
    assert_eq!(classify_title("睡前小故事"), CategoryLabel::Story);
  }

  #[test]
  fn test_classify_science() {
    assert_eq!(classify_title("恐龙科普"), CategoryLabel::Science);
    assert_eq!(classify_title("参观古城墙"), CategoryLabel::Science);
  }

  #[test]
  fn test_story_beats_science() {
    assert_eq!(classify_title("古代故事"), CategoryLabel::Story);
  }

  #[test]
  fn test_classify_daily_life_keywords() {
    assert_eq!(classify_title("周末去早市"), CategoryLabel::DailyLife);
    assert_eq!(classify_title("公园遛娃"), CategoryLabel::DailyLife);
  }

  #[test]
  fn test_travel_rule_is_shadowed() {
    assert_eq!(classify_title("扬州三日游"), CategoryLabel::DailyLife);
  }

  #[test]
  fn test_fallback() {
    assert_eq!(classify_title("挖掘机来啦"), CategoryLabel::DailyLife);
    assert_eq!(classify_title(""), CategoryLabel::DailyLife);
  }

  #[test]
  fn test_rule_order() {
    let labels: Vec<CategoryLabel> = CATEGORY_RULES.iter().map(|r| r.label).collect();
    assert_eq!(
      labels,
      vec![
        CategoryLabel::Story,
        CategoryLabel::Science,
        CategoryLabel::DailyLife,
        CategoryLabel::Travel
      ]
    );
  }

  #[test]
  fn test_summarize_categories() {
    let a = record(10, 0);
    let b = record(20, 5);
    let c = record(4, 1);
    let summary = summarize_categories(vec![
      (CategoryLabel::DailyLife, &a),
      (CategoryLabel::Story, &b),
      (CategoryLabel::DailyLife, &c),
    ]);

    assert_eq!(summary.len(), 2);
    assert_eq!(summary[0].label, CategoryLabel::DailyLife);
    assert_eq!(summary[0].count, 2);
    // 10 + (4 + 4*1)
    assert_eq!(summary[0].engagement_sum, 18);
    assert!((summary[0].engagement_mean - 9.0).abs() < 1e-12);
    assert!((summary[0].liked_mean - 7.0).abs() < 1e-12);
    assert!((summary[0].collected_mean - 0.5).abs() < 1e-12);
    assert_eq!(summary[1].label, CategoryLabel::Story);
    assert_eq!(summary[1].engagement_sum, 40);
  }

  #[test]
  fn test_summarize_saturates_on_huge_counters() {
    let a = record(u64::MAX, u64::MAX);
    let b = record(u64::MAX, 1);
    let summary = summarize_categories(vec![(CategoryLabel::Story, &a), (CategoryLabel::Story, &b)]);
    assert_eq!(summary[0].engagement_sum, u64::MAX);
    assert_eq!(summary[0].count, 2);
    assert!(summary[0].liked_mean.is_finite());
  }

  #[test]
  fn test_story_series() {
    let info = story_series(vec!["儿童故事1：勇敢", "儿童故事第12集", "科普：恐龙", "儿童故事合集", "故事3"]);
    assert_eq!(info.episodes, 2);
    assert_eq!(info.latest, Some(12));
  }

  #[test]
  fn test_story_series_none() {
    assert_eq!(story_series(vec!["日常"]), SeriesInfo::default());
  }
}
