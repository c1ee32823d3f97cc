/// Default rolling window for trending recommendations, in days.
pub const DEFAULT_TRENDING_WINDOW_DAYS: u32 = 7;

/// Default deadline horizon for urgent recommendations, in days.
pub const DEFAULT_URGENT_MAX_DAYS: u32 = 7;

/// Urgent recommendations only surface campaigns still meaningfully short
/// of their goal.
pub const URGENT_MAX_COMPLETION: f64 = 0.8;

/// Similarity term weights for `get_similar_campaigns`.
pub const SIMILAR_CATEGORY_WEIGHT: f64 = 0.5;
pub const SIMILAR_STATE_WEIGHT: f64 = 0.3;
pub const SIMILAR_GOAL_WEIGHT: f64 = 0.2;
