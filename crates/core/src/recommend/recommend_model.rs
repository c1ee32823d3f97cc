//! Recommendation request/response contracts.

use serde::{Deserialize, Serialize};

use crate::campaigns::CampaignSummary;

/// The recommendation variants exposed to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum RecommendationKind {
    Personalized,
    Popular,
    Similar { campaign_id: String },
    Trending { window_days: u32 },
    Urgent { max_days: u32 },
    Nearby,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendRequest {
    #[serde(default)]
    pub donor_id: Option<String>,
    #[serde(flatten)]
    pub kind: RecommendationKind,
    #[serde(default)]
    pub limit: u32,
}

/// A recommended campaign with presentational reasons.
///
/// Reasons are generated from feature thresholds after ranking and never
/// affect ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedCampaign {
    #[serde(flatten)]
    pub campaign: CampaignSummary,
    pub relevance_score: f64,
    pub reasons: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendResponse {
    pub items: Vec<RecommendedCampaign>,
}
