//! Ranking domain models.

use serde::{Deserialize, Serialize};

use crate::campaigns::Campaign;
use crate::features::FeatureVector;

/// Result-set ordering strategies. Mutually exclusive, selected by the
/// caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortStrategy {
    #[default]
    Relevance,
    Newest,
    Oldest,
    GoalHigh,
    GoalLow,
    Progress,
    Popular,
    Urgent,
    Trending,
}

impl SortStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortStrategy::Relevance => "relevance",
            SortStrategy::Newest => "newest",
            SortStrategy::Oldest => "oldest",
            SortStrategy::GoalHigh => "goal_high",
            SortStrategy::GoalLow => "goal_low",
            SortStrategy::Progress => "progress",
            SortStrategy::Popular => "popular",
            SortStrategy::Urgent => "urgent",
            SortStrategy::Trending => "trending",
        }
    }

    /// Permissive parse: unknown strings fall back to `Relevance`, matching
    /// the subsystem's silently-correct input policy.
    pub fn parse_lossy(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "relevance" => SortStrategy::Relevance,
            "newest" => SortStrategy::Newest,
            "oldest" => SortStrategy::Oldest,
            "goal_high" => SortStrategy::GoalHigh,
            "goal_low" => SortStrategy::GoalLow,
            "progress" => SortStrategy::Progress,
            "popular" => SortStrategy::Popular,
            "urgent" => SortStrategy::Urgent,
            "trending" => SortStrategy::Trending,
            _ => SortStrategy::Relevance,
        }
    }
}

/// A campaign carrying its per-request scoring state through the ranking
/// pipeline.
#[derive(Debug, Clone)]
pub struct ScoredCampaign {
    pub campaign: Campaign,
    pub features: FeatureVector,
    pub text_score: f64,
    pub relevance: f64,
}
