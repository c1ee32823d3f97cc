use async_trait::async_trait;

use crate::errors::Result;
use crate::recommend::recommend_model::{
    RecommendRequest, RecommendResponse, RecommendedCampaign,
};

/// Trait for recommendation operations.
///
/// Every variant degrades to `get_popular_campaigns` on upstream data
/// failures instead of propagating the error - callers always receive a
/// non-empty list while any campaign data is reachable. The exception is
/// `get_nearby_campaigns`, which surfaces an explicit no-location signal.
#[async_trait]
pub trait RecommendationServiceTrait: Send + Sync {
    /// Dispatches on the request's kind.
    async fn recommend(&self, request: RecommendRequest) -> Result<RecommendResponse>;

    async fn get_personalized_recommendations(
        &self,
        donor_id: &str,
        limit: u32,
    ) -> Result<Vec<RecommendedCampaign>>;

    async fn get_popular_campaigns(&self, limit: u32) -> Result<Vec<RecommendedCampaign>>;

    async fn get_similar_campaigns(
        &self,
        campaign_id: &str,
        limit: u32,
    ) -> Result<Vec<RecommendedCampaign>>;

    async fn get_trending_campaigns(
        &self,
        limit: u32,
        window_days: u32,
    ) -> Result<Vec<RecommendedCampaign>>;

    async fn get_urgent_campaigns(
        &self,
        limit: u32,
        max_days: u32,
    ) -> Result<Vec<RecommendedCampaign>>;

    async fn get_nearby_campaigns(
        &self,
        donor_id: &str,
        limit: u32,
    ) -> Result<Vec<RecommendedCampaign>>;
}
