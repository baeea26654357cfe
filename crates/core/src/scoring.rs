//! Fixed scoring weights.
//!
//! Item-level engagement is an exact integer weighting of the four interaction
//! counters. Creator-level composite score blends total, mean and peak
//! engagement with a flat bonus per published item.
//!
//! ```text
//! engagement = liked*1 + shared*3 + comment*2 + collected*4
//! composite  = engagement_sum*0.4 + engagement_mean*0.3 + item_count*1000 + engagement_max*0.3
//! ```
//!
//! None of these are runtime configuration. Changing `ITEM_COUNT_BONUS` in
//! particular reorders any dataset whose engagement scores sit below a few
//! thousand.

/// Weight of a like
pub const LIKE_WEIGHT: u64 = 1;
/// Weight of a share
pub const SHARE_WEIGHT: u64 = 3;
/// Weight of a comment
pub const COMMENT_WEIGHT: u64 = 2;
/// Weight of a collect (bookmark)
pub const COLLECT_WEIGHT: u64 = 4;

/// Share of summed engagement in the composite score
pub const SUM_WEIGHT: f64 = 0.4;
/// Share of mean engagement in the composite score
pub const MEAN_WEIGHT: f64 = 0.3;
/// Share of the best single item in the composite score
pub const MAX_WEIGHT: f64 = 0.3;
/// Flat points per item
pub const ITEM_COUNT_BONUS: f64 = 1000.0;

/// Weighted engagement score of a single item.
///
/// Saturates instead of wrapping on counters near `u64::MAX`; real snapshots
/// stay many orders of magnitude below that.
pub fn engagement_score(liked: u64, shared: u64, comment: u64, collected: u64) -> u64 {
  liked
    .saturating_mul(LIKE_WEIGHT)
    .saturating_add(shared.saturating_mul(SHARE_WEIGHT))
    .saturating_add(comment.saturating_mul(COMMENT_WEIGHT))
    .saturating_add(collected.saturating_mul(COLLECT_WEIGHT))
}

/// Unweighted sum of the four counters
pub fn total_interactions(liked: u64, shared: u64, comment: u64, collected: u64) -> u64 {
  liked
    .saturating_add(shared)
    .saturating_add(comment)
    .saturating_add(collected)
}

/// Creator-level composite ranking score
pub fn composite_score(engagement_sum: u64, engagement_mean: f64, item_count: usize, engagement_max: u64) -> f64 {
  engagement_sum as f64 * SUM_WEIGHT
    + engagement_mean * MEAN_WEIGHT
    + item_count as f64 * ITEM_COUNT_BONUS
    + engagement_max as f64 * MAX_WEIGHT
}
