use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};

use crate::cache::TtlCache;
use crate::donations::DonationRepositoryTrait;
use crate::errors::Result;
use crate::personalization::personalization_model::DonorPreferenceProfile;
use crate::personalization::personalization_traits::ProfileServiceTrait;

/// Builds donor preference profiles from donation history.
///
/// Profiles are cached per donor id; the cache is invalidated through the
/// domain-event sink whenever a new donation is recorded, so a cached entry
/// is never stale beyond its TTL and never shared between donors.
pub struct ProfileService {
    donation_repository: Arc<dyn DonationRepositoryTrait>,
    cache: Arc<TtlCache<String, DonorPreferenceProfile>>,
}

impl ProfileService {
    pub fn new(
        donation_repository: Arc<dyn DonationRepositoryTrait>,
        cache: Arc<TtlCache<String, DonorPreferenceProfile>>,
    ) -> Self {
        Self {
            donation_repository,
            cache,
        }
    }
}

#[async_trait]
impl ProfileServiceTrait for ProfileService {
    async fn get_profile(
        &self,
        donor_id: &str,
        fetch_timeout: Duration,
    ) -> Result<DonorPreferenceProfile> {
        let cache_key = donor_id.to_string();
        if let Some(profile) = self.cache.get(&cache_key) {
            debug!("profile cache hit for donor {}", donor_id);
            return Ok(profile);
        }

        let fetch = self.donation_repository.get_history_for_donor(donor_id);
        let history = match tokio::time::timeout(fetch_timeout, fetch).await {
            Ok(Ok(history)) => history,
            Ok(Err(e)) => return Err(e),
            Err(_) => {
                warn!(
                    "history fetch for donor {} exceeded {:?}; serving neutral profile",
                    donor_id, fetch_timeout
                );
                return Ok(DonorPreferenceProfile::empty());
            }
        };

        debug!(
            "building profile for donor {} from {} donations",
            donor_id,
            history.len()
        );
        let profile = DonorPreferenceProfile::from_history(&history);
        self.cache.insert(cache_key, profile.clone());
        Ok(profile)
    }
}
