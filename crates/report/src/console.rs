//! Plain-text reports for stdout.

use crate::format::{percent, share, thousands, thousands_f64, truncate_title};
use chrono::Local;
use extract::{Analysis, ItemAnalysis, RankedCreator, SeriesInfo};
use rank_core::{CategoryLabel, ProfileInfo, scoring};
use std::fmt::Write as _;

const RULE_WIDTH: usize = 80;

/// Creator ranking report for a search snapshot
pub struct RankingReport {
  content: String,
}

impl RankingReport {
  /// Build the report: method, top `top_n` creators, the leader's items,
  /// category distribution.
  pub fn from_analysis(analysis: &Analysis, top_n: usize) -> Self {
    let mut content = String::new();

    Self::write_header(&mut content, analysis);
    Self::write_method(&mut content);
    Self::write_ranking(&mut content, analysis.ranking.top(top_n));
    if let Some(leader) = analysis.ranking.leader() {
      Self::write_leader_items(&mut content, leader, &analysis.items_for_creator(&leader.aggregate.creator_id));
    }
    write_category_distribution(&mut content, analysis);

    Self { content }
  }

  fn write_header(out: &mut String, analysis: &Analysis) {
    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));
    let _ = writeln!(out, "Creator Engagement Ranking");
    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));
    let _ = writeln!(out, "Generated: {}", Local::now().format("%Y-%m-%d %H:%M:%S"));
    let _ = writeln!(
      out,
      "Items: {} | Creators: {}",
      thousands(analysis.items.len() as u64),
      thousands(analysis.ranking.len() as u64)
    );
    let _ = writeln!(out);
  }

  fn write_method(out: &mut String) {
    let _ = writeln!(out, "Scoring method:");
    let _ = writeln!(
      out,
      "- Total engagement ({:.0}%): likes x{} + shares x{} + comments x{} + collects x{}",
      scoring::SUM_WEIGHT * 100.0,
      scoring::LIKE_WEIGHT,
      scoring::SHARE_WEIGHT,
      scoring::COMMENT_WEIGHT,
      scoring::COLLECT_WEIGHT
    );
    let _ = writeln!(
      out,
      "- Mean engagement ({:.0}%): typical item performance",
      scoring::MEAN_WEIGHT * 100.0
    );
    let _ = writeln!(
      out,
      "- Output bonus: +{} per item",
      thousands_f64(scoring::ITEM_COUNT_BONUS)
    );
    let _ = writeln!(out, "- Best item ({:.0}%): breakout potential", scoring::MAX_WEIGHT * 100.0);
    let _ = writeln!(out);
  }

  fn write_ranking(out: &mut String, entries: &[RankedCreator]) {
    let _ = writeln!(out, "TOP {} creators:", entries.len());
    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));

    for entry in entries {
      let agg = &entry.aggregate;
      let _ = writeln!(out, "#{}: {}", entry.rank, agg.creator_name);
      let _ = writeln!(out, "  Creator ID: {}", agg.creator_id);
      let _ = writeln!(out, "  Composite score: {}", thousands_f64(entry.composite_score));
      let _ = writeln!(out, "  Items: {}", agg.item_count);
      let _ = writeln!(out, "  Total interactions: {}", thousands(agg.total_interactions.sum));
      let _ = writeln!(out, "  Mean interactions: {}", thousands_f64(agg.total_interactions.mean));
      let _ = writeln!(out, "  Best item interactions: {}", thousands(agg.total_interactions.max));
      let _ = writeln!(out, "  Mean likes: {}", thousands_f64(agg.liked.mean));
      let _ = writeln!(out, "  Mean collects: {}", thousands_f64(agg.collected.mean));
      let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));
    }
    let _ = writeln!(out);
  }

  fn write_leader_items(out: &mut String, leader: &RankedCreator, items: &[&ItemAnalysis]) {
    let _ = writeln!(out, "Top creator: {}", leader.aggregate.creator_name);
    let _ = writeln!(out, "Creator ID: {}", leader.aggregate.creator_id);
    let _ = writeln!(out, "Composite score: {}", thousands_f64(leader.composite_score));
    let _ = writeln!(out);
    let _ = writeln!(out, "All items by this creator:");
    write_item_list(out, items);
  }

  pub fn as_str(&self) -> &str {
    &self.content
  }

  pub fn into_string(self) -> String {
    self.content
  }
}

/// Deep-dive report for a single creator's profile snapshot
pub struct ProfileReport {
  content: String,
}

impl ProfileReport {
  pub fn from_analysis(profile: Option<&ProfileInfo>, analysis: &Analysis, top_items: usize) -> Self {
    let mut content = String::new();

    let name = profile
      .map(|p| p.basic.nickname.as_str())
      .filter(|n| !n.is_empty())
      .or_else(|| analysis.ranking.leader().map(|l| l.aggregate.creator_name.as_str()))
      .unwrap_or_default();

    let _ = writeln!(content, "{}", "=".repeat(RULE_WIDTH));
    let _ = writeln!(content, "Creator Profile: {}", name);
    let _ = writeln!(content, "{}", "=".repeat(RULE_WIDTH));
    let _ = writeln!(content);

    if let Some(profile) = profile {
      Self::write_basic_info(&mut content, profile);
    }
    Self::write_content_mix(&mut content, analysis);
    Self::write_topics(&mut content, analysis);
    Self::write_top_items(&mut content, &analysis.top_items(top_items));
    Self::write_patterns(&mut content, analysis);
    write_category_distribution(&mut content, analysis);

    Self { content }
  }

  fn write_basic_info(out: &mut String, profile: &ProfileInfo) {
    let basic = &profile.basic;
    let _ = writeln!(out, "Basic info:");
    let _ = writeln!(out, "  Nickname: {}", basic.nickname);
    let _ = writeln!(out, "  Red ID: {}", basic.red_id);
    let gender = match basic.gender {
      Some(1) => "male",
      Some(_) => "female",
      None => "unknown",
    };
    let _ = writeln!(out, "  Gender: {}", gender);
    let _ = writeln!(out, "  IP location: {}", basic.ip_location);
    let _ = writeln!(out, "  Bio: {}", basic.desc);
    let _ = writeln!(out);

    if !profile.interactions.is_empty() {
      let _ = writeln!(out, "Account stats:");
      for interaction in &profile.interactions {
        let _ = writeln!(out, "  {}: {}", interaction.name, interaction.count);
      }
      let _ = writeln!(out);
    }
  }

  fn write_content_mix(out: &mut String, analysis: &Analysis) {
    let mix = analysis.content_mix();
    let _ = writeln!(out, "Content:");
    let _ = writeln!(out, "  Total items: {}", thousands(mix.total() as u64));
    let _ = writeln!(out, "  Video: {} ({})", mix.video, percent(mix.share(mix.video)));
    let _ = writeln!(out, "  Image/text: {} ({})", mix.normal, percent(mix.share(mix.normal)));
    if mix.other > 0 {
      let _ = writeln!(out, "  Other: {} ({})", mix.other, percent(mix.share(mix.other)));
    }
    let _ = writeln!(out);
  }

  fn write_topics(out: &mut String, analysis: &Analysis) {
    let total = analysis.items.len();
    let _ = writeln!(out, "Topics:");
    for label in [CategoryLabel::Story, CategoryLabel::Science, CategoryLabel::DailyLife] {
      let count = analysis.category_count(label);
      let _ = writeln!(out, "  {}: {} ({})", label, count, percent(share(count, total)));
    }
    let _ = writeln!(out);
  }

  fn write_top_items(out: &mut String, items: &[&ItemAnalysis]) {
    let _ = writeln!(out, "TOP {} items:", items.len());
    for (i, item) in items.iter().enumerate() {
      let r = &item.record;
      let _ = writeln!(out, "{}. {}", i + 1, truncate_title(&r.title, 60));
      let _ = writeln!(out, "   Type: {} | Topic: {}", r.content_type, item.category);
      let _ = writeln!(out, "   Engagement: {}", thousands(r.engagement_score()));
      let _ = writeln!(
        out,
        "   Likes: {} | Collects: {} | Shares: {} | Comments: {}",
        thousands(r.counts.liked),
        thousands(r.counts.collected),
        thousands(r.counts.shared),
        thousands(r.counts.comment)
      );
    }
    let _ = writeln!(out);
  }

  fn write_patterns(out: &mut String, analysis: &Analysis) {
    let total = analysis.items.len();
    let mix = analysis.content_mix();
    let educational = analysis.category_count(CategoryLabel::Story) + analysis.category_count(CategoryLabel::Science);

    let _ = writeln!(out, "Creation patterns:");
    write_series(out, &analysis.story_series());
    let _ = writeln!(out, "  Video share: {}", percent(mix.share(mix.video)));
    let _ = writeln!(out, "  Educational share: {}", percent(share(educational, total)));
    let _ = writeln!(out, "  Mean engagement: {}", thousands_f64(analysis.average_engagement()));
    let _ = writeln!(out);
  }

  pub fn as_str(&self) -> &str {
    &self.content
  }

  pub fn into_string(self) -> String {
    self.content
  }
}

fn write_series(out: &mut String, series: &SeriesInfo) {
  let _ = writeln!(out, "  Numbered story episodes: {}", series.episodes);
  if let Some(latest) = series.latest {
    let _ = writeln!(out, "  Latest episode: {}", latest);
  }
}

/// Item listing with engagement breakdown
pub fn write_item_list(out: &mut String, items: &[&ItemAnalysis]) {
  for (i, item) in items.iter().enumerate() {
    let r = &item.record;
    let _ = writeln!(out, "{}. {}", i + 1, r.title);
    let _ = writeln!(out, "   Type: {}", r.content_type);
    let _ = writeln!(out, "   Engagement: {}", thousands(r.engagement_score()));
    let _ = writeln!(
      out,
      "   Likes: {} | Collects: {} | Shares: {} | Comments: {}",
      thousands(r.counts.liked),
      thousands(r.counts.collected),
      thousands(r.counts.shared),
      thousands(r.counts.comment)
    );
  }
  let _ = writeln!(out);
}

/// Per-category counts and mean engagement
pub fn write_category_distribution(out: &mut String, analysis: &Analysis) {
  let total = analysis.items.len();
  let _ = writeln!(out, "Category performance:");
  for summary in &analysis.categories {
    let _ = writeln!(
      out,
      "  {}: {} items ({}), mean engagement {}, mean likes {}, mean collects {}",
      summary.label,
      summary.count,
      percent(share(summary.count, total)),
      thousands_f64(summary.engagement_mean),
      thousands_f64(summary.liked_mean),
      thousands_f64(summary.collected_mean)
    );
  }
  let _ = writeln!(out);
}
