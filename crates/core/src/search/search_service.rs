use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, warn};

use crate::campaigns::CampaignRepositoryTrait;
use crate::constants::DEFAULT_PROFILE_FETCH_TIMEOUT_MS;
use crate::donors::{Donor, DonorRepositoryTrait};
use crate::errors::Result;
use crate::personalization::{DonorPreferenceProfile, ProfileServiceTrait};
use crate::ranking::{rank, score_campaign};
use crate::search::search_model::{
    Pagination, RankedCampaign, SearchMetadata, SearchRequest, SearchResponse,
};
use crate::search::search_traits::SearchServiceTrait;

/// Campaign search: storage does filtering and text matching, this service
/// does every piece of score arithmetic.
pub struct SearchService {
    campaign_repository: Arc<dyn CampaignRepositoryTrait>,
    donor_repository: Arc<dyn DonorRepositoryTrait>,
    profile_service: Arc<dyn ProfileServiceTrait>,
}

impl SearchService {
    pub fn new(
        campaign_repository: Arc<dyn CampaignRepositoryTrait>,
        donor_repository: Arc<dyn DonorRepositoryTrait>,
        profile_service: Arc<dyn ProfileServiceTrait>,
    ) -> Self {
        Self {
            campaign_repository,
            donor_repository,
            profile_service,
        }
    }

    /// Donor profile for personalization. Profile problems cost
    /// personalization, never the search itself.
    async fn profile_for(&self, donor_id: Option<&str>) -> Option<DonorPreferenceProfile> {
        let donor_id = donor_id?;
        let timeout = Duration::from_millis(DEFAULT_PROFILE_FETCH_TIMEOUT_MS);
        match self.profile_service.get_profile(donor_id, timeout).await {
            Ok(profile) if !profile.is_empty() => Some(profile),
            Ok(_) => None,
            Err(e) => {
                warn!(
                    "profile unavailable for donor {}; searching unpersonalized: {}",
                    donor_id, e
                );
                None
            }
        }
    }

    /// Batch-fetches the creators of the candidate set. A failed read
    /// degrades every creator to neutral trust.
    async fn creators_for(&self, creator_ids: Vec<String>) -> HashMap<String, Donor> {
        if creator_ids.is_empty() {
            return HashMap::new();
        }
        match self.donor_repository.get_by_ids(&creator_ids).await {
            Ok(creators) => creators,
            Err(e) => {
                warn!("creator batch read failed; using neutral trust: {}", e);
                HashMap::new()
            }
        }
    }
}

#[async_trait]
impl SearchServiceTrait for SearchService {
    async fn search(&self, request: SearchRequest) -> Result<SearchResponse> {
        let request = request.sanitized();
        let now = Utc::now();

        let (matches, profile) = futures::join!(
            self.campaign_repository.search(&request.query, &request.filters),
            self.profile_for(request.donor_id.as_deref())
        );
        let matches = matches?;

        debug!(
            "search query='{}' matched {} campaigns (personalized: {})",
            request.query,
            matches.len(),
            profile.is_some()
        );

        let mut creator_ids: Vec<String> = matches
            .iter()
            .map(|m| m.campaign.creator_id.clone())
            .collect();
        creator_ids.sort();
        creator_ids.dedup();
        let creators = self.creators_for(creator_ids).await;

        let mut scored: Vec<_> = matches
            .into_iter()
            .map(|m| {
                let creator = creators.get(&m.campaign.creator_id);
                score_campaign(m.campaign, creator, profile.as_ref(), m.text_score, now)
            })
            .collect();

        rank(&mut scored, request.sort);

        let total_results = scored.len() as u64;
        let limit = request.limit as usize;
        let total_pages = (total_results as usize).div_ceil(limit) as u32;
        let start = (request.page as usize - 1).saturating_mul(limit);

        let items: Vec<RankedCampaign> = scored
            .iter()
            .skip(start)
            .take(limit)
            .map(|item| RankedCampaign {
                campaign: (&item.campaign).into(),
                relevance_score: item.relevance,
            })
            .collect();

        Ok(SearchResponse {
            items,
            pagination: Pagination {
                page: request.page,
                total_pages,
                total_results,
            },
            metadata: SearchMetadata {
                applied_filters: request.filters,
                sort_strategy: request.sort,
            },
        })
    }
}
