use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Duration;

use crate::donations::donations_model::{Donation, DonationVelocity, DonationWithCampaign};
use crate::errors::Result;

/// Trait for donation store operations.
///
/// Like the campaign store, this is a read-only collaborator. Aggregations
/// fetch raw rows; all derived numbers are computed in application code.
#[async_trait]
pub trait DonationRepositoryTrait: Send + Sync {
    /// Full donation history for a donor, joined with campaign category and
    /// location, oldest first.
    async fn get_history_for_donor(&self, donor_id: &str) -> Result<Vec<DonationWithCampaign>>;

    /// Donations made by one donor inside the rolling window ending now,
    /// newest first (fraud signals).
    async fn recent_by_donor(&self, donor_id: &str, window: Duration) -> Result<Vec<Donation>>;

    /// Donation velocity per campaign over the rolling window ending now.
    /// Campaigns with no donations in the window are absent from the map.
    async fn velocity_for_campaigns(
        &self,
        campaign_ids: &[String],
        window: Duration,
    ) -> Result<HashMap<String, DonationVelocity>>;
}
