use async_trait::async_trait;
use chrono::Duration;

use crate::campaigns::campaigns_model::{Campaign, CampaignFilters, CampaignText, TextMatch};
use crate::errors::Result;

/// Trait for campaign store operations.
///
/// The campaign store is an external collaborator; this subsystem only reads
/// from it. Implementations push filtering into the storage engine and return
/// already-fetched records for scoring.
#[async_trait]
pub trait CampaignRepositoryTrait: Send + Sync {
    fn get_by_id(&self, campaign_id: &str) -> Result<Campaign>;

    /// Text search over active campaigns. The text-match score is the store's
    /// own relevance signal and is treated as opaque by the ranking layer.
    /// An empty query matches every filtered row with a zero score.
    async fn search(&self, query: &str, filters: &CampaignFilters) -> Result<Vec<TextMatch>>;

    /// All active campaigns matching the given filters.
    async fn list_active(&self, filters: &CampaignFilters) -> Result<Vec<Campaign>>;

    /// Number of campaigns this creator started inside the rolling window
    /// ending now (used by the creation-burst fraud signal).
    async fn count_recent_by_creator(&self, creator_id: &str, window: Duration) -> Result<i64>;

    /// Recent title/description pairs from other creators, newest first,
    /// for the duplicate-text fraud signal.
    async fn list_texts_by_others(&self, creator_id: &str, limit: i64) -> Result<Vec<CampaignText>>;
}
