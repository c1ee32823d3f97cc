use std::time::Duration;

use async_trait::async_trait;

use crate::errors::Result;
use crate::personalization::personalization_model::DonorPreferenceProfile;

/// Trait for profile building operations.
#[async_trait]
pub trait ProfileServiceTrait: Send + Sync {
    /// Builds (or serves from cache) the donor's preference profile.
    ///
    /// A donor with no completed donations yields the empty profile. A fetch
    /// that exceeds `fetch_timeout` also degrades to the empty profile, so a
    /// slow store costs personalization, not the response. A failed fetch is
    /// surfaced as an error so the recommendation engine can apply its
    /// popular-campaigns fallback.
    async fn get_profile(
        &self,
        donor_id: &str,
        fetch_timeout: Duration,
    ) -> Result<DonorPreferenceProfile>;
}
